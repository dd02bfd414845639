use crate::constants::*;
use crate::core::pattern::{plan_cycle, AmbientParams, CyclePlan, PatternSequencer};
use rand::Rng;

/// Lifecycle of the ambient soundtrack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    Uninitialized,
    Stopped,
    Playing,
}

/// Identifies one armed run of the recurring cycle.
///
/// A continuation that wakes up holding a ticket other than the armed one
/// must not play or re-arm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleTicket(u64);

/// What the caller must do after `start()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StartOutcome {
    /// The audio graph has to be built before anything is scheduled.
    pub build_graph: bool,
    /// A new cycle task has to be spawned with this ticket.
    pub spawn_cycle: Option<CycleTicket>,
}

/// Platform-free half of the ambient engine: state, volume, cursor and the
/// cycle arming discipline. The web half owns the actual audio nodes.
#[derive(Clone, Debug)]
pub struct AmbientState {
    state: EngineState,
    master_volume: f32,
    sequencer: PatternSequencer,
    params: AmbientParams,
    armed: Option<CycleTicket>,
    generation: u64,
}

impl Default for AmbientState {
    fn default() -> Self {
        Self::new(AmbientParams::default())
    }
}

impl AmbientState {
    pub fn new(params: AmbientParams) -> Self {
        Self {
            state: EngineState::Uninitialized,
            master_volume: MASTER_GAIN_DEFAULT,
            sequencer: PatternSequencer::new(),
            params,
            armed: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == EngineState::Playing
    }

    pub fn is_initialized(&self) -> bool {
        self.state != EngineState::Uninitialized
    }

    pub fn master_volume(&self) -> f32 {
        self.master_volume
    }

    pub fn pattern_cursor(&self) -> usize {
        self.sequencer.cursor()
    }

    /// Enter `Playing`. A cycle is only armed if none is armed already, so a
    /// second `start()` while playing never doubles the soundtrack.
    pub fn start(&mut self) -> StartOutcome {
        let build_graph = self.state == EngineState::Uninitialized;
        self.state = EngineState::Playing;
        let spawn_cycle = if self.armed.is_none() {
            self.generation += 1;
            let ticket = CycleTicket(self.generation);
            self.armed = Some(ticket);
            Some(ticket)
        } else {
            None
        };
        StartOutcome {
            build_graph,
            spawn_cycle,
        }
    }

    /// Leave `Playing`. Already scheduled notes are not touched.
    pub fn stop(&mut self) {
        if self.state == EngineState::Playing {
            self.state = EngineState::Stopped;
        }
        self.armed = None;
    }

    /// Flip between playing and stopped; returns whether playing afterwards.
    pub fn toggle(&mut self) -> (bool, Option<StartOutcome>) {
        if self.is_playing() {
            self.stop();
            (false, None)
        } else {
            let outcome = self.start();
            (true, Some(outcome))
        }
    }

    /// Store a new master level. Returns the value to write to the gain node,
    /// or `None` while no graph exists.
    pub fn set_volume(&mut self, volume: f32) -> Option<f32> {
        if !self.is_initialized() {
            return None;
        }
        self.master_volume = volume.clamp(0.0, 1.0);
        Some(self.master_volume)
    }

    /// Whether a continuation holding `ticket` may run another cycle.
    pub fn is_armed(&self, ticket: CycleTicket) -> bool {
        self.is_playing() && self.armed == Some(ticket)
    }

    /// Plan the next cycle for `ticket`, or `None` if that run was disarmed.
    pub fn next_cycle<R: Rng + ?Sized>(
        &mut self,
        ticket: CycleTicket,
        now_sec: f64,
        rng: &mut R,
    ) -> Option<CyclePlan> {
        if !self.is_armed(ticket) {
            if self.armed == Some(ticket) {
                self.armed = None;
            }
            return None;
        }
        Some(plan_cycle(&mut self.sequencer, &self.params, now_sec, rng))
    }
}

/// Map the 0..=100 volume slider to master gain.
#[inline]
pub fn slider_to_gain(slider_value: f32) -> f32 {
    (slider_value / SLIDER_MAX).clamp(0.0, 1.0) * SLIDER_MAX_GAIN
}
