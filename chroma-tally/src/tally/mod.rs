//! tally.rs
//!
//! Vote aggregation and the single-vote guard.
//!
//! Everything here is synchronous and side-effect free. The engine is a total
//! function over whatever records the store hands back: records naming an
//! option outside the palette are dropped from the count rather than failing
//! the computation.

pub mod engine;
pub mod guard;
