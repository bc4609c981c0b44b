pub mod models;
pub mod phases;
pub mod timeline;

pub use models::PhaseDefinition;
pub use phases::{next_phase, resolve, PhaseStatus, FASTING_PHASES};
pub use timeline::{elapsed_hours_between, format_elapsed};
