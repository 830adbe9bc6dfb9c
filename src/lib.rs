// Domain layer - board state and generation stepping
pub mod domain;

// Application layer - interaction modes and per-frame coordination
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

pub mod error;

// Re-exports for convenience
pub use domain::{AutomatonEngine, Cell, Grid, Rule, RuleKind};
pub use application::{FrameLoop, InteractionController, Mode, Settings};
pub use error::{Error, Result};
