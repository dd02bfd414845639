// Host-side tests for the pattern library, scale mapping and tone envelope.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod pattern {
        include!("../src/core/pattern.rs");
    }
    pub mod tone {
        include!("../src/core/tone.rs");
    }
}

use crate::core::pattern::*;
use crate::core::tone::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn next_pattern_cycles_with_period_five() {
    let mut seq = PatternSequencer::new();
    for expected in PATTERNS.iter() {
        assert_eq!(&seq.next_pattern(), expected);
    }
    assert_eq!(seq.cursor(), 0, "cursor should wrap after five calls");
    assert_eq!(seq.next_pattern(), PATTERNS[0]);

    // Two full periods revisit every pattern in the same order
    let mut seq = PatternSequencer::new();
    let first: Vec<Pattern> = (0..5).map(|_| seq.next_pattern()).collect();
    let second: Vec<Pattern> = (0..5).map(|_| seq.next_pattern()).collect();
    assert_eq!(first, second);
}

#[test]
fn get_note_anchors_at_220_and_octave() {
    assert!((get_note(0) - 220.0).abs() < 1e-3);
    // interval 12 sits at index 7
    assert!((get_note(7) - 440.0).abs() < 1e-3);
    assert!((get_note(12) - 440.0).abs() < 1e-3);
}

#[test]
fn get_note_is_monotonic_within_one_table_cycle() {
    for octave in 0..3 {
        let base = octave * 12;
        for i in base..base + 11 {
            assert!(
                get_note(i + 1) > get_note(i),
                "frequency not increasing at index {i}"
            );
        }
    }
}

#[test]
fn get_note_octave_doubling_property() {
    for i in 0..48 {
        let f1 = get_note(i);
        let f2 = get_note(i + 12);
        let ratio = f2 / f1;
        assert!(
            (ratio - 2.0).abs() < 1e-5,
            "octave doubling failed at index {i}: {f1} -> {f2} (ratio {ratio})"
        );
    }
}

#[test]
fn rest_value_is_an_ordinary_note_after_the_shift() {
    // -1 is not special-cased: shifted by +3 it lands on scale index 2
    assert_eq!(get_note(-1 + crate::constants::PATTERN_SHIFT), get_note(2));
    // and even unshifted it stays a finite, positive pitch
    let f = get_note(-1);
    assert!(f.is_finite() && f > 0.0);
}

#[test]
fn every_shifted_pattern_value_is_non_negative() {
    for pattern in PATTERNS.iter() {
        for &v in pattern.iter() {
            assert!(v + crate::constants::PATTERN_SHIFT >= 0);
        }
    }
}

#[test]
fn plan_cycle_lays_out_eight_notes_and_a_drone() {
    let mut seq = PatternSequencer::new();
    let params = AmbientParams::default();
    let mut rng = StdRng::seed_from_u64(7);
    let now = 12.5;
    let plan = plan_cycle(&mut seq, &params, now, &mut rng);

    assert_eq!(plan.notes.len(), 8);
    for (i, note) in plan.notes.iter().enumerate() {
        assert!(close(note.start_time_sec, now + i as f64 * 0.8));
        assert!(note.duration_sec >= 0.8 * 0.7 - 1e-9 && note.duration_sec <= 0.8 * 1.3 + 1e-9);
        assert!(note.volume >= 0.08 - 1e-6 && note.volume <= 0.14 + 1e-6);
        let expected = get_note(PATTERNS[0][i] + 3);
        assert!((note.frequency_hz - expected).abs() < 1e-3);
    }

    assert!((plan.drone.frequency_hz - 110.0).abs() < 1e-3);
    assert!((plan.drone.gain - 0.03).abs() < 1e-6);
    assert!(close(plan.drone.start_time_sec, now));
    assert!((plan.drone.stop_time_sec - (now + 6.4)).abs() < 1e-9);

    assert!((plan.pattern_duration_sec - 6.4).abs() < 1e-9);
    assert!(plan.next_cycle_in_sec >= 7.4 - 1e-9 && plan.next_cycle_in_sec <= 9.4 + 1e-9);
}

#[test]
fn plan_cycle_advances_through_the_library() {
    let mut seq = PatternSequencer::new();
    let params = AmbientParams::default();
    let mut rng = StdRng::seed_from_u64(99);
    for k in 0..7 {
        let plan = plan_cycle(&mut seq, &params, 0.0, &mut rng);
        let pattern = PATTERNS[k % PATTERNS.len()];
        let expected = get_note(pattern[0] + 3);
        assert!((plan.notes[0].frequency_hz - expected).abs() < 1e-3);
    }
}

#[test]
fn note_envelope_breakpoints() {
    let env = NoteEnvelope::new(1.0, 1.0, 0.1);
    let [(t0, v0), (t1, v1), (t2, v2), (t3, v3)] = env.points;
    assert!(close(t0, 1.0) && v0 == 0.0);
    assert!(close(t1, 1.05) && (v1 - 0.1).abs() < 1e-7);
    assert!(close(t2, 1.35) && (v2 - 0.04).abs() < 1e-7);
    assert!(close(t3, 2.0) && v3 == 0.0);
    assert!(close(env.stop_time_sec, 2.1));
    assert!((env.peak() - 0.1).abs() < 1e-7);
}

#[test]
fn note_envelope_times_are_ordered_for_tempo_notes() {
    // shortest jittered duration still leaves room for attack and decay
    let env = NoteEnvelope::new(0.0, 0.8 * 0.7, 0.12);
    for w in env.points.windows(2) {
        assert!(w[1].0 > w[0].0);
    }
    assert!(env.stop_time_sec > env.points[3].0);
}

#[test]
fn impulse_response_decays_within_envelope() {
    let len = 4096;
    let mut rng = StdRng::seed_from_u64(1);
    let ir = impulse_channel(len, &mut rng);
    assert_eq!(ir.len(), len);
    for (i, &x) in ir.iter().enumerate() {
        let bound = (1.0 - i as f32 / len as f32).powf(2.5);
        assert!(x.abs() <= bound + 1e-6, "sample {i} = {x} exceeds {bound}");
    }
    assert!(ir.iter().any(|x| x.abs() > 0.1), "impulse should not be silent");
}

#[test]
fn impulse_length_is_three_seconds() {
    assert_eq!(impulse_len(44100.0), 132_300);
    assert_eq!(impulse_len(48000.0), 144_000);
}
