//! utils.rs
//!
//! Small helpers shared across the chroma crates.

pub mod time;
