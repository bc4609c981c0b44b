use serde::Serialize;

/// A single metabolic phase of an intermittent fast.
///
/// `threshold_hours` is the minimum elapsed fasting time at which the phase
/// becomes active. The phase table holds exactly one definition with a zero
/// threshold (Anabolic), so every non-negative input resolves to something.
/// Serialize-only: the table is a process-wide constant, never read back in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhaseDefinition {
  pub name: &'static str,
  pub description: &'static str,
  pub threshold_hours: f64,
}
