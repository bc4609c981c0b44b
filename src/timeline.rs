//! Elapsed-time helpers for the demonstration driver
//!
//! Converts chrono timestamps into the hour values the phase resolver
//! consumes, and formats elapsed durations for display.

use chrono::{DateTime, Utc};

/// Elapsed hours between two timestamps (signed seconds / 3600).
pub fn elapsed_hours_between(start: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
  (now - start).num_milliseconds() as f64 / 3_600_000.0
}

/// Format an elapsed duration as zero-padded `HH:MM:SS`.
///
/// Negative and NaN inputs format as `00:00:00`, matching how the resolver
/// treats them as a fast that has not started.
pub fn format_elapsed(elapsed_hours: f64) -> String {
  let total_seconds = if elapsed_hours.is_finite() && elapsed_hours > 0.0 {
    (elapsed_hours * 3600.0).floor() as u64
  } else {
    0
  };

  let hours = total_seconds / 3600;
  let minutes = (total_seconds % 3600) / 60;
  let seconds = total_seconds % 60;

  format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
