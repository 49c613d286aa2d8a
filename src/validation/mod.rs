pub mod client;
pub mod orchestrator;

pub use client::*;
pub use orchestrator::*;
