use crate::constants::*;
use rand::Rng;

/// Eight scale-degree offsets played one per tempo step.
///
/// `-1` was meant as a rest but is fed through [`get_note`] like any other
/// degree, which after the pattern shift makes it an ordinary low note.
pub type Pattern = [i32; 8];

/// The fixed melodic library, cycled in order.
pub const PATTERNS: [Pattern; 5] = [
    [0, 2, 4, 5, 4, 2, 0, -1],
    [2, 4, 5, 7, 5, 4, 2, 0],
    [5, 4, 2, 0, 2, 4, 5, 7],
    [7, 5, 4, 2, 4, 5, 7, 9],
    [0, 4, 7, 5, 4, 2, 0, 2],
];

/// Semitone offsets of the dorian-flavoured scale anchored at [`SCALE_BASE_HZ`].
pub const SCALE_INTERVALS: [i32; 12] = [0, 2, 3, 5, 7, 9, 10, 12, 14, 15, 17, 19];

/// Map a scale index to Hertz.
///
/// Every twelve steps the octave counter advances by one, so
/// `get_note(i + 12) == 2 * get_note(i)`.
pub fn get_note(index: i32) -> f32 {
    let len = SCALE_INTERVALS.len() as i32;
    let octave = index.div_euclid(len);
    let interval = SCALE_INTERVALS[index.rem_euclid(len) as usize];
    SCALE_BASE_HZ * 2.0_f32.powf((interval + octave * 12) as f32 / 12.0)
}

/// Rotating cursor into [`PATTERNS`].
#[derive(Clone, Debug, Default)]
pub struct PatternSequencer {
    cursor: usize,
}

impl PatternSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Return the pattern under the cursor and advance it.
    pub fn next_pattern(&mut self) -> Pattern {
        let pattern = PATTERNS[self.cursor];
        self.cursor = (self.cursor + 1) % PATTERNS.len();
        pattern
    }
}

/// Tunable parameters of one ambient cycle.
#[derive(Clone, Debug)]
pub struct AmbientParams {
    pub tempo_sec: f64,
    pub pattern_shift: i32,
    pub drone_gain: f32,
    pub pause_base_sec: f64,
    pub pause_span_sec: f64,
}

impl Default for AmbientParams {
    fn default() -> Self {
        Self {
            tempo_sec: TEMPO_SEC,
            pattern_shift: PATTERN_SHIFT,
            drone_gain: DRONE_GAIN,
            pause_base_sec: PAUSE_BASE_SEC,
            pause_span_sec: PAUSE_SPAN_SEC,
        }
    }
}

/// A melodic note to be rendered by the tone generator.
///
/// Times are absolute audio-clock seconds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoteEvent {
    pub frequency_hz: f32,
    pub start_time_sec: f64,
    pub duration_sec: f64,
    pub volume: f32,
}

/// The sustained low tone under a pattern.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DroneEvent {
    pub frequency_hz: f32,
    pub gain: f32,
    pub start_time_sec: f64,
    pub stop_time_sec: f64,
}

/// Everything one cycle schedules, plus how long to wait before the next.
#[derive(Clone, Debug)]
pub struct CyclePlan {
    pub notes: Vec<NoteEvent>,
    pub drone: DroneEvent,
    pub pattern_duration_sec: f64,
    pub next_cycle_in_sec: f64,
}

/// Pull the next pattern and lay out its notes starting at `now_sec`.
pub fn plan_cycle<R: Rng + ?Sized>(
    sequencer: &mut PatternSequencer,
    params: &AmbientParams,
    now_sec: f64,
    rng: &mut R,
) -> CyclePlan {
    let pattern = sequencer.next_pattern();
    let tempo = params.tempo_sec;

    let notes = pattern
        .iter()
        .enumerate()
        .map(|(i, &degree)| {
            let dur = tempo * (NOTE_DURATION_BASE + rng.gen::<f64>() * NOTE_DURATION_SPAN);
            let vol = NOTE_VOLUME_BASE + rng.gen::<f32>() * NOTE_VOLUME_SPAN;
            NoteEvent {
                frequency_hz: get_note(degree + params.pattern_shift),
                start_time_sec: now_sec + i as f64 * tempo,
                duration_sec: dur,
                volume: vol,
            }
        })
        .collect::<Vec<_>>();

    let pattern_duration_sec = pattern.len() as f64 * tempo;
    let drone = DroneEvent {
        frequency_hz: get_note(0) / DRONE_DIVISOR,
        gain: params.drone_gain,
        start_time_sec: now_sec,
        stop_time_sec: now_sec + pattern_duration_sec,
    };
    let pause = params.pause_base_sec + rng.gen::<f64>() * params.pause_span_sec;

    CyclePlan {
        notes,
        drone,
        pattern_duration_sec,
        next_cycle_in_sec: pattern_duration_sec + pause,
    }
}
