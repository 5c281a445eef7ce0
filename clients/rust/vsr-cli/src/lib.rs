pub mod config;
pub mod deposits;
pub mod entrypoint;
pub mod processor;
pub mod profile;

pub use entrypoint::{entry, Opts};
