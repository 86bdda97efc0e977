use chroma_common::{VoteRecord, VoteStore};
use chroma_store::{FileVoteStore, StoreBackend};

#[tokio::test]
async fn test_local_backend() {
    let store = StoreBackend::new(None);
    assert!(matches!(store, StoreBackend::Local(_)));

    store.create(VoteRecord::new("Red")).await.unwrap();
    let records = store.list().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].option_name, "Red");
}

#[tokio::test]
async fn test_file_backend_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("votes").join("votes.jsonl");

    let store = StoreBackend::new(Some(path.clone()));
    assert!(store.list().await.unwrap().is_empty(), "missing file reads as empty");

    let red = VoteRecord::new("Red");
    store.create(red.clone()).await.unwrap();
    store.create(VoteRecord::new("Blue")).await.unwrap();

    // A fresh handle on the same file sees both records, in append order.
    let reopened = FileVoteStore::new(&path);
    let records = reopened.list().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], red);
    assert_eq!(records[1].option_name, "Blue");
}

#[tokio::test]
async fn test_file_backend_skips_unreadable_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("votes.jsonl");
    std::fs::write(
        &path,
        concat!(
            "{\"color\":\"Red\",\"timestamp\":\"2024-05-01T12:00:00Z\"}\n",
            "not json at all\n",
            "\n",
            "{\"color\":\"Green\",\"timestamp\":\"2024-05-01T12:01:00Z\"}\n",
        ),
    )
    .unwrap();

    let store = FileVoteStore::new(&path);
    let names: Vec<String> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.option_name)
        .collect();
    assert_eq!(names, ["Red", "Green"]);
}

#[tokio::test]
async fn test_file_backend_concurrent_appends() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileVoteStore::new(dir.path().join("votes.jsonl"));

    let mut handles = Vec::new();
    for i in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let name = if i % 2 == 0 { "Red" } else { "Teal" };
            store.create(VoteRecord::new(name)).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.list().await.unwrap().len(), 16);
}

#[tokio::test]
async fn test_append_after_interrupted_write_starts_a_new_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("votes.jsonl");
    let red = VoteRecord::new("Red");
    let partial = format!("{}\n{{\"color\":\"Blue\",\"time", red.to_json().unwrap());
    std::fs::write(&path, partial).unwrap();

    let store = FileVoteStore::new(&path);
    store.create(VoteRecord::new("Green")).await.unwrap();

    let names: Vec<String> = store.list().await.unwrap().into_iter().map(|r| r.option_name).collect();
    assert_eq!(names, ["Red", "Green"]);
}
