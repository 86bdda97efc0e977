use thiserror::Error;

/// Failures reported by a vote store adapter.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The only two ways a vote submission can fail.
///
/// Presentation layers match on this to choose between "you already voted"
/// and "try again" messaging.
#[derive(Error, Debug)]
pub enum VoteError {
    /// The session already cast its vote. Only a session restart clears this.
    #[error("This session has already voted")]
    AlreadyVoted,

    /// The store could not list or append records. Nothing was changed, so the
    /// same vote may be retried.
    #[error("Vote store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
}

impl VoteError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, VoteError::StoreUnavailable(_))
    }
}

#[derive(Error, Debug)]
pub enum ChromaError {
    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Invalid palette: {0}")]
    InvalidPalette(String),

    #[error("Unknown color option: {0}")]
    UnknownOption(String),

    #[error(transparent)]
    Vote(#[from] VoteError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChromaError>;
