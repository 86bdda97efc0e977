/// Whether a session may submit a vote.
///
/// This is the whole enforcement mechanism, and it only knows about the
/// session it is asked about. A participant opening a second session, or
/// restarting this one, can vote again.
pub fn can_vote(has_voted: bool) -> bool {
    !has_voted
}
