// Tuning constants for the ambient soundtrack and the scene choreography.
//
// These are aesthetic choices, not derived values. Keep them here so the
// sequencing code reads as intent rather than numbers.

// ---------------- Ambient audio ----------------

// Seconds between consecutive pattern steps
pub const TEMPO_SEC: f64 = 0.8;
// Note duration jitter: tempo * (BASE + rand * SPAN)
pub const NOTE_DURATION_BASE: f64 = 0.7;
pub const NOTE_DURATION_SPAN: f64 = 0.6;
// Note volume jitter: BASE + rand * SPAN
pub const NOTE_VOLUME_BASE: f32 = 0.08;
pub const NOTE_VOLUME_SPAN: f32 = 0.06;
pub const DEFAULT_NOTE_VOLUME: f32 = 0.12;

// Envelope shape
pub const ATTACK_SEC: f64 = 0.05;
pub const DECAY_FRACTION: f64 = 0.3; // of note duration
pub const SUSTAIN_RATIO: f32 = 0.4; // of peak volume
pub const RELEASE_TAIL_SEC: f64 = 0.1; // oscillators outlive the envelope by this much
pub const OVERTONE_RATIO: f32 = 2.0;
pub const OVERTONE_GAIN: f32 = 0.15;

// Pause after a pattern: PAUSE_BASE + rand * PAUSE_SPAN seconds
pub const PAUSE_BASE_SEC: f64 = 1.0;
pub const PAUSE_SPAN_SEC: f64 = 2.0;

// Scale
pub const SCALE_BASE_HZ: f32 = 220.0;
pub const PATTERN_SHIFT: i32 = 3;
pub const DRONE_GAIN: f32 = 0.03;
pub const DRONE_DIVISOR: f32 = 2.0;

// Master bus and reverb send
pub const MASTER_GAIN_DEFAULT: f32 = 0.15;
pub const REVERB_SECONDS: f32 = 3.0;
pub const REVERB_DECAY_EXPONENT: f32 = 2.5;
pub const REVERB_WET: f32 = 0.3;
pub const REVERB_CHANNELS: u32 = 2;

// Volume slider range 0..=100 maps to 0..=SLIDER_MAX_GAIN
pub const SLIDER_MAX: f32 = 100.0;
pub const SLIDER_MAX_GAIN: f32 = 0.3;

// ---------------- Scene choreography ----------------

// Overlay fade: switch after FADE_IN, hide after a further FADE_OUT
pub const TRANSITION_FADE_IN_MS: u32 = 1200;
pub const TRANSITION_FADE_OUT_MS: u32 = 500;
// Immediate cuts re-enable CSS transitions on a following tick
pub const ANIMATION_RESTORE_MS: u32 = 50;

// Clicking the video only skips it after this much playback
pub const VIDEO_SKIP_AFTER_SEC: f64 = 2.0;

// Typewriter
pub const TYPEWRITER_DEFAULT_MS: u32 = 60;
pub const QUOTE_TYPEWRITER_MS: u32 = 70;

// Arrival script delays
pub const ARRIVAL_ANNOTATION_DELAY_MS: u32 = 600;
pub const ARRIVAL_LABEL_DELAY_MS: u32 = 600;
pub const ARRIVAL_QUOTE_DELAY_MS: u32 = 1500;
pub const ARRIVAL_TRANSLATION_DELAY_MS: u32 = 800;
pub const ARRIVAL_AUTHOR_DELAY_MS: u32 = 600;
pub const ARRIVAL_NAV_DELAY_MS: u32 = 600;

// Slide timeline stagger
pub const TIMELINE_ITEM_FADE_SEC: f32 = 0.6;
pub const TIMELINE_ITEM_STAGGER_SEC: f32 = 0.15;

pub const DEFAULT_SLIDE: &str = "slide-vita";
