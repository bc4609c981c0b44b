//! Console demonstration for the fasting phase resolver
//!
//! With no arguments, prints the phase for a fixed list of sample hour
//! values, then walks a few simulated elapsed-time deltas from "now". With a
//! single numeric argument, resolves that hour value and prints the full
//! phase status as JSON.

use chrono::{Duration, Utc};
use fasting_phases::{elapsed_hours_between, format_elapsed, resolve, PhaseStatus};
use thiserror::Error;

#[derive(Error, Debug)]
enum CliError {
  #[error("invalid elapsed hours '{0}': expected a number")]
  InvalidHours(String),
  #[error("failed to encode phase status: {0}")]
  Encode(#[from] serde_json::Error),
}

fn run() -> Result<(), CliError> {
  let mut args = std::env::args().skip(1);

  match args.next() {
    Some(raw) => resolve_one(&raw),
    None => {
      print_samples();
      simulate_timer();
      Ok(())
    }
  }
}

/// Resolve a user-supplied hours value and emit the status as pretty JSON
fn resolve_one(raw: &str) -> Result<(), CliError> {
  let hours: f64 = raw
    .parse()
    .map_err(|_| CliError::InvalidHours(raw.to_string()))?;

  let status = PhaseStatus::compute(hours);
  println!("{}", serde_json::to_string_pretty(&status)?);
  Ok(())
}

/// Print the phase for each fixed sample hour value
fn print_samples() {
  println!("--- Intermittent Fasting Phase Calculator ---");

  let sample_hours = [0.0, 2.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 40.0, 50.0];

  for hours in sample_hours {
    let phase = resolve(hours);
    println!("\nElapsed Hours: {}", hours);
    println!("  Phase Name: {}", phase.name);
    println!("  Description: {}", phase.description);
  }
}

/// Walk a few simulated elapsed-time deltas from a fast started "now"
fn simulate_timer() {
  println!("\n--- Simulating a running timer (conceptual) ---");

  let start_time = Utc::now();
  println!("Fast started at: {}", start_time.format("%Y-%m-%d %H:%M:%S"));

  let simulation_points = [
    Duration::hours(3),
    Duration::hours(13),
    Duration::hours(22),
    Duration::hours(49),
  ];

  for delta in simulation_points {
    let current_time = start_time + delta;
    let elapsed_hours = elapsed_hours_between(start_time, current_time);
    let phase = resolve(elapsed_hours);

    println!(
      "\nAt {} (Elapsed: {:.2} hours, {}):",
      current_time.format("%H:%M:%S"),
      elapsed_hours,
      format_elapsed(elapsed_hours)
    );
    println!("  Current Phase: {}", phase.name);
    println!("  Description: {}", phase.description);
  }
}

fn main() {
  if let Err(e) = run() {
    eprintln!("Error: {}", e);
    std::process::exit(1);
  }
}
