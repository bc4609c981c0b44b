pub mod phase;

pub use phase::PhaseDefinition;
