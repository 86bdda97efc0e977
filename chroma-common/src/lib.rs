pub mod error;
pub mod palette;
pub mod record;
pub mod store;
pub mod utils;

pub use error::{ChromaError, Result, StoreError, VoteError};
pub use palette::{ColorOption, Palette};
pub use record::VoteRecord;
pub use store::VoteStore;
