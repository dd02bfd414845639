// Host-side tests for the ambient engine state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod ambient {
        include!("../src/core/ambient.rs");
    }
    pub mod pattern {
        include!("../src/core/pattern.rs");
    }
}

use crate::core::ambient::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn playing_engine() -> (AmbientState, CycleTicket) {
    let mut engine = AmbientState::default();
    let outcome = engine.start();
    let ticket = outcome.spawn_cycle.expect("first start arms a cycle");
    (engine, ticket)
}

#[test]
fn engine_starts_uninitialized_with_default_level() {
    let engine = AmbientState::default();
    assert_eq!(engine.state(), EngineState::Uninitialized);
    assert!(!engine.is_initialized());
    assert!((engine.master_volume() - 0.15).abs() < 1e-6);
    assert_eq!(engine.pattern_cursor(), 0);
}

#[test]
fn first_start_builds_graph_and_arms_cycle() {
    let mut engine = AmbientState::default();
    let outcome = engine.start();
    assert!(outcome.build_graph);
    assert!(outcome.spawn_cycle.is_some());
    assert_eq!(engine.state(), EngineState::Playing);
}

#[test]
fn restart_after_stop_reuses_graph() {
    let (mut engine, _) = playing_engine();
    engine.stop();
    assert_eq!(engine.state(), EngineState::Stopped);
    let outcome = engine.start();
    assert!(!outcome.build_graph);
    assert!(outcome.spawn_cycle.is_some());
    assert_eq!(engine.state(), EngineState::Playing);
}

#[test]
fn start_while_playing_does_not_arm_a_second_cycle() {
    let (mut engine, ticket) = playing_engine();
    let again = engine.start();
    assert!(again.spawn_cycle.is_none());
    assert!(engine.is_armed(ticket));
}

#[test]
fn rapid_toggle_leaves_a_single_live_cycle() {
    let (mut engine, first) = playing_engine();
    engine.stop();
    let second = engine.start().spawn_cycle.expect("new ticket after stop");
    assert_ne!(first, second);

    let mut rng = StdRng::seed_from_u64(3);
    // the old continuation wakes up and must die
    assert!(engine.next_cycle(first, 0.0, &mut rng).is_none());
    assert!(engine.next_cycle(second, 0.0, &mut rng).is_some());
}

#[test]
fn stop_disarms_pending_cycle() {
    let (mut engine, ticket) = playing_engine();
    engine.stop();
    let mut rng = StdRng::seed_from_u64(5);
    assert!(!engine.is_armed(ticket));
    assert!(engine.next_cycle(ticket, 1.0, &mut rng).is_none());
}

#[test]
fn toggle_twice_is_identity() {
    let (mut engine, _) = playing_engine();
    let (p1, _) = engine.toggle();
    assert!(!p1);
    let (p2, outcome) = engine.toggle();
    assert!(p2);
    assert_eq!(engine.state(), EngineState::Playing);
    assert!(outcome.and_then(|o| o.spawn_cycle).is_some());

    engine.stop();
    let before = engine.state();
    engine.toggle();
    engine.toggle();
    assert_eq!(engine.state(), before);
}

#[test]
fn toggle_from_uninitialized_behaves_like_start() {
    let mut engine = AmbientState::default();
    let (playing, outcome) = engine.toggle();
    assert!(playing);
    assert!(outcome.map(|o| o.build_graph).unwrap_or(false));
}

#[test]
fn set_volume_is_ignored_before_initialization() {
    let mut engine = AmbientState::default();
    assert_eq!(engine.set_volume(0.5), None);
    assert!((engine.master_volume() - 0.15).abs() < 1e-6);
}

#[test]
fn set_volume_applies_in_any_initialized_state() {
    let (mut engine, _) = playing_engine();
    assert_eq!(engine.set_volume(0.27), Some(0.27));
    assert_eq!(engine.master_volume(), 0.27);

    engine.stop();
    assert_eq!(engine.set_volume(0.05), Some(0.05));
    assert_eq!(engine.master_volume(), 0.05);
    assert_eq!(engine.state(), EngineState::Stopped);
}

#[test]
fn set_volume_clamps_out_of_range_values() {
    let (mut engine, _) = playing_engine();
    assert_eq!(engine.set_volume(1.7), Some(1.0));
    assert_eq!(engine.set_volume(-0.2), Some(0.0));
}

#[test]
fn each_cycle_advances_the_pattern_cursor() {
    let (mut engine, ticket) = playing_engine();
    let mut rng = StdRng::seed_from_u64(11);
    for expected in 1..=6 {
        let plan = engine.next_cycle(ticket, 0.0, &mut rng).expect("armed");
        assert_eq!(plan.notes.len(), 8);
        assert_eq!(engine.pattern_cursor(), expected % 5);
    }
}

#[test]
fn slider_maps_onto_quiet_gain_range() {
    assert_eq!(slider_to_gain(0.0), 0.0);
    assert!((slider_to_gain(100.0) - 0.3).abs() < 1e-6);
    assert!((slider_to_gain(50.0) - 0.15).abs() < 1e-6);
    // out-of-range slider input stays within the gain range
    assert!((slider_to_gain(250.0) - 0.3).abs() < 1e-6);
}
