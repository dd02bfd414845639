use crate::constants::*;
use crate::core::cancel::CancelToken;
use crate::core::view::ViewCommand;

/// Mutually exclusive top-level UI modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Intro,
    Video,
    Arrival,
    Slides,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Intro, Phase::Video, Phase::Arrival, Phase::Slides];

    /// Id of the `.phase` element holding this phase's markup.
    pub fn element_id(self) -> &'static str {
        match self {
            Phase::Intro => "intro-screen",
            Phase::Video => "video-portal",
            Phase::Arrival => "arrival-scene",
            Phase::Slides => "slides-container",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Phase::Intro => "intro",
            Phase::Video => "video",
            Phase::Arrival => "arrival",
            Phase::Slides => "slides",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionMode {
    /// Fade the overlay in, swap phases behind it, fade it out.
    Faded,
    /// Swap synchronously with CSS transitions suppressed for one tick.
    Immediate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionStep {
    ShowOverlay,
    Switch,
    HideOverlay,
    RestoreAnimations,
}

/// A step to run `delay_ms` after the previous one finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledStep {
    pub delay_ms: u32,
    pub step: TransitionStep,
}

/// A planned move to `target`. Only the most recently begun transition is live.
#[derive(Clone, Debug)]
pub struct Transition {
    pub target: Phase,
    pub mode: TransitionMode,
    epoch: u64,
    steps: Vec<ScheduledStep>,
}

impl Transition {
    pub fn steps(&self) -> &[ScheduledStep] {
        &self.steps
    }

    /// Split into the leading zero-delay steps, which run synchronously, and
    /// the timed remainder.
    pub fn split_immediate(&self) -> (&[ScheduledStep], &[ScheduledStep]) {
        let split = self
            .steps
            .iter()
            .position(|s| s.delay_ms > 0)
            .unwrap_or(self.steps.len());
        self.steps.split_at(split)
    }

    /// Milliseconds from the first step until the last one has run.
    pub fn total_ms(&self) -> u32 {
        self.steps.iter().map(|s| s.delay_ms).sum()
    }
}

/// Reported by a `Switch` step; the caller runs the phase-specific setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arrived {
    pub phase: Phase,
    pub from: Phase,
}

/// The phase state machine.
///
/// Every phase change cancels the scene token handed out for the phase being
/// left, which stops any reveal sequence still running against it.
#[derive(Debug)]
pub struct PhaseController {
    current: Phase,
    overlay_visible: bool,
    epoch: u64,
    scene: CancelToken,
}

impl Default for PhaseController {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseController {
    pub fn new() -> Self {
        Self {
            current: Phase::Intro,
            overlay_visible: false,
            epoch: 0,
            scene: CancelToken::new(),
        }
    }

    pub fn current(&self) -> Phase {
        self.current
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    /// Token that is cancelled as soon as the current phase is left.
    pub fn scene_token(&self) -> CancelToken {
        self.scene.clone()
    }

    /// Plan a transition to `target`, superseding any transition in flight.
    pub fn begin(&mut self, target: Phase, mode: TransitionMode) -> Transition {
        self.epoch += 1;
        let steps = match mode {
            TransitionMode::Faded => vec![
                ScheduledStep {
                    delay_ms: 0,
                    step: TransitionStep::ShowOverlay,
                },
                ScheduledStep {
                    delay_ms: TRANSITION_FADE_IN_MS,
                    step: TransitionStep::Switch,
                },
                ScheduledStep {
                    delay_ms: TRANSITION_FADE_OUT_MS,
                    step: TransitionStep::HideOverlay,
                },
            ],
            TransitionMode::Immediate => vec![
                ScheduledStep {
                    delay_ms: 0,
                    step: TransitionStep::Switch,
                },
                ScheduledStep {
                    delay_ms: ANIMATION_RESTORE_MS,
                    step: TransitionStep::RestoreAnimations,
                },
            ],
        };
        log::info!(
            "[phase] {} -> {} ({:?})",
            self.current.name(),
            target.name(),
            mode
        );
        Transition {
            target,
            mode,
            epoch: self.epoch,
            steps,
        }
    }

    /// Whether `transition` is still the live one.
    pub fn is_live(&self, transition: &Transition) -> bool {
        transition.epoch == self.epoch
    }

    /// Run one step of `transition`, pushing view commands into `out`.
    ///
    /// Steps of a superseded transition are dropped, except
    /// `RestoreAnimations`: the suppression it undoes already reached the
    /// page and nothing else would lift it.
    pub fn apply(
        &mut self,
        transition: &Transition,
        step: TransitionStep,
        out: &mut Vec<ViewCommand>,
    ) -> Option<Arrived> {
        if !self.is_live(transition) {
            if step == TransitionStep::RestoreAnimations {
                out.push(ViewCommand::RestoreAnimations);
            }
            return None;
        }
        match step {
            TransitionStep::ShowOverlay => {
                self.overlay_visible = true;
                out.push(ViewCommand::ShowOverlay);
                None
            }
            TransitionStep::Switch => {
                let animate = transition.mode == TransitionMode::Faded;
                if !animate && self.overlay_visible {
                    self.overlay_visible = false;
                    out.push(ViewCommand::HideOverlay);
                }
                out.push(ViewCommand::DeactivatePhases { animate });
                out.push(ViewCommand::ActivatePhase {
                    phase: transition.target,
                    animate,
                });
                let from = self.current;
                if from != transition.target {
                    self.scene.cancel();
                    self.scene = CancelToken::new();
                }
                self.current = transition.target;
                Some(Arrived {
                    phase: transition.target,
                    from,
                })
            }
            TransitionStep::HideOverlay => {
                self.overlay_visible = false;
                out.push(ViewCommand::HideOverlay);
                None
            }
            TransitionStep::RestoreAnimations => {
                out.push(ViewCommand::RestoreAnimations);
                None
            }
        }
    }
}

/// Clicking the video skips it only once it has played for a moment.
#[inline]
pub fn can_skip_video(current_time_sec: f64) -> bool {
    current_time_sec > VIDEO_SKIP_AFTER_SEC
}
