//! Core domain: tests for the cooldown timer and the simulation clock.

use super::{CooldownTimer, SimulationClock};

// -----------------------------------------------------------------------------
// CooldownTimer tests
// -----------------------------------------------------------------------------

#[test]
fn test_cooldown_starts_ready() {
    let timer = CooldownTimer::default();
    assert!(timer.is_ready());
    assert_eq!(timer.remaining(), 0.0);
}

#[test]
fn test_cooldown_counts_down_and_clamps() {
    let mut timer = CooldownTimer::new(0.5);
    assert!(!timer.is_ready());

    timer.tick(0.2);
    assert!(!timer.is_ready());
    assert!((timer.remaining() - 0.3).abs() < 1e-6);

    // Oversized tick clamps at zero instead of going negative
    timer.tick(10.0);
    assert!(timer.is_ready());
    assert_eq!(timer.remaining(), 0.0);
}

#[test]
fn test_cooldown_restart() {
    let mut timer = CooldownTimer::new(0.1);
    timer.tick(1.0);
    assert!(timer.is_ready());

    timer.start(0.4);
    assert!(!timer.is_ready());
}

#[test]
fn test_cooldown_negative_duration_is_ready() {
    let timer = CooldownTimer::new(-3.0);
    assert!(timer.is_ready());
}

// -----------------------------------------------------------------------------
// SimulationClock tests
// -----------------------------------------------------------------------------

#[test]
fn test_clock_runs_at_full_speed_by_default() {
    let mut clock = SimulationClock::default();
    assert!(!clock.is_slowed());
    assert_eq!(clock.advance(0.016), 1.0);
}

#[test]
fn test_hitstop_slows_then_recovers() {
    let mut clock = SimulationClock::default();
    clock.request_hitstop(0.1, 0.05);
    assert!(clock.is_slowed());

    assert_eq!(clock.advance(0.04), 0.05);
    assert_eq!(clock.advance(0.04), 0.05);
    // Third frame crosses the end of the window
    assert_eq!(clock.advance(0.04), 1.0);
    assert!(!clock.is_slowed());
}

#[test]
fn test_overlapping_hitstops_take_max_duration() {
    let mut clock = SimulationClock::default();
    clock.request_hitstop(0.2, 0.1);
    clock.advance(0.05);

    // A shorter overlapping request must not cut the window short
    clock.request_hitstop(0.05, 0.1);
    clock.advance(0.1);
    assert!(clock.is_slowed());

    // A longer request extends it
    clock.request_hitstop(0.5, 0.1);
    clock.advance(0.4);
    assert!(clock.is_slowed());
    clock.advance(0.2);
    assert!(!clock.is_slowed());
}

#[test]
fn test_overlapping_hitstops_keep_slowest_rate() {
    let mut clock = SimulationClock::default();
    clock.request_hitstop(0.2, 0.5);
    clock.request_hitstop(0.2, 0.1);
    assert_eq!(clock.advance(0.05), 0.1);

    // Rate resets once the window closes
    clock.advance(1.0);
    clock.request_hitstop(0.1, 0.8);
    assert_eq!(clock.advance(0.01), 0.8);
}

#[test]
fn test_zero_duration_request_is_ignored() {
    let mut clock = SimulationClock::default();
    clock.request_hitstop(0.0, 0.0);
    assert!(!clock.is_slowed());
    assert_eq!(clock.advance(0.016), 1.0);
}
