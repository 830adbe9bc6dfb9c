mod cell;
mod grid;
mod rules;
mod engine;

pub use cell::Cell;
pub use grid::{Grid, Neighborhood};
pub use rules::{Rule, RuleKind, ConwayRule, InvertedLifeRule};
pub use engine::AutomatonEngine;
