use chroma_common::{Palette, VoteRecord, VoteStore};
use chroma_node::driver::run_session;
use chroma_store::{FileVoteStore, LocalVoteStore};
use chroma_tally::VoteSession;
use tokio::io::BufReader;

async fn drive<S: VoteStore>(session: &VoteSession<S>, script: &str) -> String {
    let mut output = Vec::new();
    run_session(session, BufReader::new(script.as_bytes()), &mut output)
        .await
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[tokio::test]
async fn test_vote_then_reject_then_restart() {
    let store = LocalVoteStore::new();
    let session = VoteSession::open(store.clone(), Palette::standard()).await;

    let out = drive(
        &session,
        "vote red\nvote Blue\nrestart\nvote Blue\nquit\nvote Green\n",
    )
    .await;

    assert!(out.contains("No votes yet!"));
    assert!(out.contains("You voted for Red!"));
    assert!(out.contains("You have already voted!"));
    assert!(out.contains("New session started"));
    assert!(out.contains("You voted for Blue!"));
    // Nothing after quit is processed.
    assert!(!out.contains("Green!"));

    let names: Vec<String> = store.list().await.unwrap().into_iter().map(|r| r.option_name).collect();
    assert_eq!(names, ["Red", "Blue"]);
}

#[tokio::test]
async fn test_unknown_color_does_not_use_up_the_vote() {
    let session = VoteSession::open(LocalVoteStore::new(), Palette::standard()).await;

    let out = drive(&session, "vote Black\nvote Teal\n").await;
    assert!(out.contains("Unknown color option: Black"));
    assert!(out.contains("You voted for Teal!"));
    assert!(out.contains("🏆 Current winner: Teal (1 votes)"));
}

#[tokio::test]
async fn test_results_against_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("votes.jsonl");
    let seed = FileVoteStore::new(&path);
    for name in ["Red", "Blue", "Red"] {
        seed.create(VoteRecord::new(name)).await.unwrap();
    }

    let session = VoteSession::open(FileVoteStore::new(&path), Palette::standard()).await;
    let out = drive(&session, "results\n").await;
    assert!(out.contains("Results (3 total votes)"));
    assert!(out.contains("🏆 Current winner: Red (2 votes)"));
    assert!(out.contains("2 votes (67%)"));
}
