use crate::constants::*;
use rand::Rng;

/// Linear gain breakpoints for a single note, plus when its oscillators stop.
///
/// The web layer replays `points` as `setValueAtTime` for the first entry
/// and `linearRampToValueAtTime` for the rest.
#[derive(Clone, Debug, PartialEq)]
pub struct NoteEnvelope {
    pub points: [(f64, f32); 4],
    pub stop_time_sec: f64,
}

impl NoteEnvelope {
    /// Attack to `volume`, decay to the sustain ratio over a fraction of the
    /// note, then release to silence at `start + duration`.
    pub fn new(start_sec: f64, duration_sec: f64, volume: f32) -> Self {
        let attack_end = start_sec + ATTACK_SEC;
        let decay_end = attack_end + duration_sec * DECAY_FRACTION;
        Self {
            points: [
                (start_sec, 0.0),
                (attack_end, volume),
                (decay_end, volume * SUSTAIN_RATIO),
                (start_sec + duration_sec, 0.0),
            ],
            stop_time_sec: start_sec + duration_sec + RELEASE_TAIL_SEC,
        }
    }

    pub fn peak(&self) -> f32 {
        self.points[1].1
    }
}

/// Exponentially decaying noise used as the reverb's impulse response.
pub fn impulse_channel<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<f32> {
    (0..len)
        .map(|i| {
            let noise = rng.gen::<f32>() * 2.0 - 1.0;
            let remaining = 1.0 - i as f32 / len as f32;
            noise * remaining.powf(REVERB_DECAY_EXPONENT)
        })
        .collect()
}

/// Number of frames in the impulse response at `sample_rate`.
#[inline]
pub fn impulse_len(sample_rate: f32) -> usize {
    (REVERB_SECONDS * sample_rate) as usize
}
