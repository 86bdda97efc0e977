pub mod session;
pub mod tally;

pub use session::{SubmissionPhase, VoteSession, VOTE_TARGET};
pub use tally::engine::{compute, Leader, OptionTally, TallySnapshot};
pub use tally::guard::can_vote;
