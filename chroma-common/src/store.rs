use async_trait::async_trait;

use crate::{error::StoreError, record::VoteRecord};

/// Append-only storage of vote records.
///
/// Implementations own the records; callers only see snapshots. Timeouts and
/// retries on the underlying medium are the implementation's business.
#[async_trait]
pub trait VoteStore: Send + Sync {
    /// Returns every stored record, in any order.
    async fn list(&self) -> Result<Vec<VoteRecord>, StoreError>;

    /// Appends a record. The returned record need not be an exact echo.
    async fn create(&self, record: VoteRecord) -> Result<VoteRecord, StoreError>;
}

#[async_trait]
impl<T: VoteStore + ?Sized> VoteStore for std::sync::Arc<T> {
    async fn list(&self) -> Result<Vec<VoteRecord>, StoreError> {
        (**self).list().await
    }

    async fn create(&self, record: VoteRecord) -> Result<VoteRecord, StoreError> {
        (**self).create(record).await
    }
}
