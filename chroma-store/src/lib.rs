//! Reference [`VoteStore`] adapters.
//!
//! `LocalVoteStore` keeps records in memory for the lifetime of the process,
//! `FileVoteStore` appends them to a JSON-lines file. `StoreBackend` picks one
//! of the two from configuration.

pub mod file;
pub mod local;

use std::path::PathBuf;

use async_trait::async_trait;
use chroma_common::{StoreError, VoteRecord, VoteStore};
use tracing::info;

pub use file::FileVoteStore;
pub use local::LocalVoteStore;

#[derive(Debug, Clone)]
pub enum StoreBackend {
    Local(LocalVoteStore),
    File(FileVoteStore),
}

impl StoreBackend {
    /// A file-backed store when `path` is given, in-memory otherwise.
    pub fn new(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => {
                info!("📁 Using file vote store at {}", path.display());
                StoreBackend::File(FileVoteStore::new(path))
            }
            None => {
                info!("🧠 Using in-memory vote store");
                StoreBackend::Local(LocalVoteStore::new())
            }
        }
    }
}

#[async_trait]
impl VoteStore for StoreBackend {
    async fn list(&self) -> Result<Vec<VoteRecord>, StoreError> {
        match self {
            StoreBackend::Local(store) => store.list().await,
            StoreBackend::File(store) => store.list().await,
        }
    }

    async fn create(&self, record: VoteRecord) -> Result<VoteRecord, StoreError> {
        match self {
            StoreBackend::Local(store) => store.create(record).await,
            StoreBackend::File(store) => store.create(record).await,
        }
    }
}
