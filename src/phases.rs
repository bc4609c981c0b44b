//! Deterministic phase lookup for intermittent fasting
//!
//! This module maps an elapsed fasting duration to a metabolic phase from a
//! fixed threshold table. Callers interpret the pre-computed phase record
//! rather than doing threshold math themselves.

use crate::models::PhaseDefinition;
use serde::Serialize;

/// ---------------------------------------------------------------------------
/// Phase Table
/// ---------------------------------------------------------------------------

/// The fixed metabolic phase table, ordered by ascending threshold.
///
/// Exactly one entry has `threshold_hours == 0.0`; that entry is the baseline
/// returned for any input below the lowest real threshold.
pub static FASTING_PHASES: [PhaseDefinition; 6] = [
  PhaseDefinition {
    name: "Anabolic",
    description: "Your body is still digesting and absorbing nutrients from your last meal. Insulin levels are elevated.",
    threshold_hours: 0.0,
  },
  PhaseDefinition {
    name: "Catabolic / Glycogen Depletion",
    description: "Your body starts to deplete its glycogen stores (stored glucose). Insulin levels begin to drop.",
    threshold_hours: 4.0,
  },
  PhaseDefinition {
    name: "Fat Burning / Ketosis",
    description: "Glycogen stores are significantly depleted. Your body switches to burning stored fat for energy, and ketone production begins.",
    threshold_hours: 12.0,
  },
  PhaseDefinition {
    name: "Autophagy / Growth Hormone Boost",
    description: "Cellular repair processes (autophagy) become more active. Growth hormone levels start to increase, aiding in fat loss and muscle preservation.",
    threshold_hours: 18.0,
  },
  PhaseDefinition {
    name: "Deep Autophagy / Immune Regeneration",
    description: "Autophagy is significantly enhanced. Your body may start regenerating immune cells (lymphocytes).",
    threshold_hours: 24.0,
  },
  PhaseDefinition {
    name: "Advanced Autophagy / Stem Cell Activation",
    description: "Autophagy continues at a high level. Potential for stem cell activation and deeper cellular rejuvenation.",
    threshold_hours: 48.0,
  },
];

/// Phase references sorted ascending by threshold.
///
/// The literal table is already ascending, but the lookup sorts rather than
/// relying on declaration order.
fn sorted_phases() -> Vec<&'static PhaseDefinition> {
  let mut phases: Vec<&'static PhaseDefinition> = FASTING_PHASES.iter().collect();
  phases.sort_by(|a, b| a.threshold_hours.total_cmp(&b.threshold_hours));
  phases
}

/// ---------------------------------------------------------------------------
/// Resolver
/// ---------------------------------------------------------------------------

/// Resolve the active phase for an elapsed fasting duration in hours.
///
/// Returns the phase with the largest threshold not exceeding `elapsed_hours`.
/// Total over all f64 inputs: negative and NaN values compare false against
/// every threshold, so the result stays at the baseline (zero-threshold)
/// phase.
pub fn resolve(elapsed_hours: f64) -> &'static PhaseDefinition {
  let phases = sorted_phases();
  let mut current = phases[0];

  for phase in phases {
    if elapsed_hours >= phase.threshold_hours {
      current = phase;
    } else {
      // Thresholds are ascending, nothing further can match.
      break;
    }
  }

  current
}

/// The next phase ahead of `elapsed_hours`, if any.
///
/// `None` once the highest threshold has been reached (and for NaN input,
/// where no comparison holds).
pub fn next_phase(elapsed_hours: f64) -> Option<&'static PhaseDefinition> {
  sorted_phases()
    .into_iter()
    .find(|p| p.threshold_hours > elapsed_hours)
}

/// ---------------------------------------------------------------------------
/// Phase Status
/// ---------------------------------------------------------------------------

/// Current phase plus a look-ahead at the upcoming one.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseStatus {
  pub elapsed_hours: f64,
  pub current: PhaseDefinition,
  pub next: Option<PhaseDefinition>,
  /// Hours remaining until the next threshold (None in the final phase)
  pub hours_until_next: Option<f64>,
}

impl PhaseStatus {
  /// Compute the full status for an elapsed duration
  pub fn compute(elapsed_hours: f64) -> Self {
    let current = *resolve(elapsed_hours);
    let next = next_phase(elapsed_hours).copied();
    let hours_until_next = next.map(|n| n.threshold_hours - elapsed_hours);

    Self {
      elapsed_hours,
      current,
      next,
      hours_until_next,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_table_invariants() {
    assert!(!FASTING_PHASES.is_empty());

    let baseline_count = FASTING_PHASES
      .iter()
      .filter(|p| p.threshold_hours == 0.0)
      .count();
    assert_eq!(baseline_count, 1);

    // Pairwise distinct thresholds
    for (i, a) in FASTING_PHASES.iter().enumerate() {
      for b in &FASTING_PHASES[i + 1..] {
        assert_ne!(a.threshold_hours, b.threshold_hours);
      }
    }
  }

  #[test]
  fn test_resolve_at_thresholds() {
    assert_eq!(resolve(0.0).name, "Anabolic");
    assert_eq!(resolve(4.0).name, "Catabolic / Glycogen Depletion");
    assert_eq!(resolve(12.0).name, "Fat Burning / Ketosis");
    assert_eq!(resolve(18.0).name, "Autophagy / Growth Hormone Boost");
    assert_eq!(resolve(24.0).name, "Deep Autophagy / Immune Regeneration");
    assert_eq!(resolve(48.0).name, "Advanced Autophagy / Stem Cell Activation");
  }

  #[test]
  fn test_resolve_just_below_thresholds() {
    assert_eq!(resolve(3.999).name, "Anabolic");
    assert_eq!(resolve(11.999).name, "Catabolic / Glycogen Depletion");
    assert_eq!(resolve(17.999).name, "Fat Burning / Ketosis");
    assert_eq!(resolve(23.999).name, "Autophagy / Growth Hormone Boost");
    assert_eq!(resolve(47.999).name, "Deep Autophagy / Immune Regeneration");
  }

  #[test]
  fn test_resolve_beyond_table() {
    assert_eq!(resolve(50.0).name, "Advanced Autophagy / Stem Cell Activation");
    assert_eq!(resolve(1000.0).name, "Advanced Autophagy / Stem Cell Activation");
  }

  #[test]
  fn test_resolve_negative_defaults_to_baseline() {
    assert_eq!(resolve(-5.0).name, "Anabolic");
    assert_eq!(resolve(-0.001).name, "Anabolic");
  }

  #[test]
  fn test_resolve_nan_defaults_to_baseline() {
    assert_eq!(resolve(f64::NAN).name, "Anabolic");
  }

  #[test]
  fn test_resolve_monotonic() {
    let samples = [-5.0, 0.0, 2.0, 4.0, 5.0, 11.9, 12.0, 17.0, 18.0, 23.0, 24.0, 47.0, 48.0, 100.0];
    for pair in samples.windows(2) {
      let lo = resolve(pair[0]).threshold_hours;
      let hi = resolve(pair[1]).threshold_hours;
      assert!(lo <= hi, "resolve not monotonic between {} and {}", pair[0], pair[1]);
    }
  }

  #[test]
  fn test_resolve_idempotent() {
    let first = resolve(15.5);
    for _ in 0..3 {
      assert_eq!(resolve(15.5), first);
    }
  }

  #[test]
  fn test_next_phase() {
    assert_eq!(next_phase(0.0).unwrap().name, "Catabolic / Glycogen Depletion");
    assert_eq!(next_phase(13.0).unwrap().name, "Autophagy / Growth Hormone Boost");
    assert_eq!(next_phase(47.999).unwrap().name, "Advanced Autophagy / Stem Cell Activation");
    assert!(next_phase(48.0).is_none());
    assert!(next_phase(1000.0).is_none());
    assert!(next_phase(f64::NAN).is_none());
  }

  #[test]
  fn test_next_phase_negative() {
    // Below zero, the baseline itself is still ahead
    assert_eq!(next_phase(-2.0).unwrap().name, "Anabolic");
  }

  #[test]
  fn test_phase_status() {
    let status = PhaseStatus::compute(13.0);
    assert_eq!(status.current.name, "Fat Burning / Ketosis");
    assert_eq!(status.next.unwrap().name, "Autophagy / Growth Hormone Boost");
    assert!((status.hours_until_next.unwrap() - 5.0).abs() < 1e-9);
  }

  #[test]
  fn test_phase_status_final_phase() {
    let status = PhaseStatus::compute(72.0);
    assert_eq!(status.current.name, "Advanced Autophagy / Stem Cell Activation");
    assert!(status.next.is_none());
    assert!(status.hours_until_next.is_none());
  }

  #[test]
  fn test_phase_status_serializes() {
    let status = PhaseStatus::compute(5.0);
    let json = serde_json::to_string(&status).unwrap();
    assert!(json.contains("Catabolic"));
    assert!(json.contains("hours_until_next"));
  }
}
