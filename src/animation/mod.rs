// src/animation/mod.rs

pub mod chain;
pub mod scale;
pub mod state;
pub mod ticker;

pub use chain::Chain;
pub use state::{NodeState, StepStatus};
pub use ticker::Ticker;
