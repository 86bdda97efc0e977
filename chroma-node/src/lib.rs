pub mod cli;
pub mod config;
pub mod driver;
pub mod render;
pub mod setup;

pub use config::NodeConfig;
