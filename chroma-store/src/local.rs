use std::sync::Arc;

use async_trait::async_trait;
use chroma_common::{StoreError, VoteRecord, VoteStore};
use tokio::sync::RwLock;

/// In-memory vote store. Clones share the same records.
#[derive(Debug, Default, Clone)]
pub struct LocalVoteStore {
    records: Arc<RwLock<Vec<VoteRecord>>>,
}

impl LocalVoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store, e.g. with records loaded elsewhere.
    pub fn with_records(records: Vec<VoteRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl VoteStore for LocalVoteStore {
    async fn list(&self) -> Result<Vec<VoteRecord>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn create(&self, record: VoteRecord) -> Result<VoteRecord, StoreError> {
        self.records.write().await.push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_records() {
        let store = LocalVoteStore::new();
        let other = store.clone();
        assert!(store.is_empty().await);

        store.create(VoteRecord::new("Red")).await.unwrap();
        other.create(VoteRecord::new("Blue")).await.unwrap();

        let names: Vec<String> = other
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.option_name)
            .collect();
        assert_eq!(names, ["Red", "Blue"]);
        assert_eq!(store.len().await, 2);
    }
}
