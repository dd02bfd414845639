use crate::constants::*;
use crate::core::cancel::CancelToken;
use crate::core::typewriter::Typewriter;
use crate::core::view::{Target, ViewCommand};

pub const QUOTE_TEXT: &str = "Homo sum, humani nihil a me alienum puto.";
pub const QUOTE_TRANSLATION: &str =
    "« Sono un essere umano, nulla di ciò che è umano mi è estraneo. »";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrivalAction {
    Reveal(Target),
    /// Type `text` into the target at `interval_ms` per character.
    Type {
        target: Target,
        text: &'static str,
        interval_ms: u32,
    },
    /// Set the text and reveal the element in one go.
    Caption {
        target: Target,
        text: &'static str,
    },
}

/// One scripted beat. `delay_ms` counts from the previous step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrivalStep {
    pub delay_ms: u32,
    pub action: ArrivalAction,
}

/// The reveal script run each time the arrival scene follows the video.
///
/// The label hangs off the annotation, so the quote is still timed from the
/// annotation reveal.
pub const ARRIVAL_SCRIPT: [ArrivalStep; 6] = [
    ArrivalStep {
        delay_ms: ARRIVAL_ANNOTATION_DELAY_MS,
        action: ArrivalAction::Reveal(Target::FaceAnnotation),
    },
    ArrivalStep {
        delay_ms: ARRIVAL_LABEL_DELAY_MS,
        action: ArrivalAction::Reveal(Target::FaceLabel),
    },
    ArrivalStep {
        delay_ms: ARRIVAL_QUOTE_DELAY_MS - ARRIVAL_LABEL_DELAY_MS,
        action: ArrivalAction::Type {
            target: Target::TypewriterText,
            text: QUOTE_TEXT,
            interval_ms: QUOTE_TYPEWRITER_MS,
        },
    },
    ArrivalStep {
        delay_ms: ARRIVAL_TRANSLATION_DELAY_MS,
        action: ArrivalAction::Caption {
            target: Target::QuoteTranslation,
            text: QUOTE_TRANSLATION,
        },
    },
    ArrivalStep {
        delay_ms: ARRIVAL_AUTHOR_DELAY_MS,
        action: ArrivalAction::Reveal(Target::QuoteAuthor),
    },
    ArrivalStep {
        delay_ms: ARRIVAL_NAV_DELAY_MS,
        action: ArrivalAction::Reveal(Target::ArrivalNav),
    },
];

/// Commands that apply `action` in full, with typing collapsed to one write.
pub fn settled(action: ArrivalAction, out: &mut Vec<ViewCommand>) {
    match action {
        ArrivalAction::Reveal(target) => out.push(ViewCommand::reveal(target)),
        ArrivalAction::Type { target, text, .. } => out.push(ViewCommand::SetText {
            target,
            text: text.to_string(),
        }),
        ArrivalAction::Caption { target, text } => {
            out.push(ViewCommand::SetText {
                target,
                text: text.to_string(),
            });
            out.push(ViewCommand::reveal(target));
        }
    }
}

/// Commands that clear the scene before a fresh run.
pub fn reset_commands(out: &mut Vec<ViewCommand>) {
    for step in ARRIVAL_SCRIPT.iter() {
        match step.action {
            ArrivalAction::Reveal(target) => out.push(ViewCommand::conceal(target)),
            ArrivalAction::Type { target, .. } => out.push(ViewCommand::SetText {
                target,
                text: String::new(),
            }),
            ArrivalAction::Caption { target, .. } => out.push(ViewCommand::conceal(target)),
        }
    }
}

/// Progress of one pass over [`ARRIVAL_SCRIPT`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArrivalProgress {
    completed: usize,
}

impl ArrivalProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_done(&mut self) {
        self.completed = (self.completed + 1).min(ARRIVAL_SCRIPT.len());
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn is_finished(&self) -> bool {
        self.completed == ARRIVAL_SCRIPT.len()
    }

    /// Bring an interrupted run to its final state at once.
    pub fn settle(&mut self, out: &mut Vec<ViewCommand>) {
        for step in ARRIVAL_SCRIPT.iter().skip(self.completed) {
            settled(step.action, out);
        }
        self.completed = ARRIVAL_SCRIPT.len();
    }
}

/// What the runner has to do after [`ArrivalRun::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrivalTick {
    /// Sleep this long, then advance again.
    Wait(u32),
    Finished,
    Cancelled,
}

/// One pass over [`ARRIVAL_SCRIPT`], driven by whoever owns the clock.
///
/// The token is checked on every advance, so a run stops after the delay
/// it is sleeping through and between typed characters.
#[derive(Debug)]
pub struct ArrivalRun {
    token: CancelToken,
    next: usize,
    delay_elapsed: bool,
    typing: Option<(Target, Typewriter)>,
}

impl ArrivalRun {
    /// Reset `progress` and the scene, then return a run bound to `token`.
    pub fn start(
        token: CancelToken,
        progress: &mut ArrivalProgress,
        out: &mut Vec<ViewCommand>,
    ) -> Self {
        *progress = ArrivalProgress::new();
        reset_commands(out);
        Self {
            token,
            next: 0,
            delay_elapsed: false,
            typing: None,
        }
    }

    pub fn advance(
        &mut self,
        progress: &mut ArrivalProgress,
        out: &mut Vec<ViewCommand>,
    ) -> ArrivalTick {
        if self.token.is_cancelled() {
            return ArrivalTick::Cancelled;
        }
        if let Some((target, typewriter)) = self.typing.as_mut() {
            if let Some(c) = typewriter.tick() {
                out.push(ViewCommand::AppendText {
                    target: *target,
                    text: c.to_string(),
                });
                return ArrivalTick::Wait(typewriter.interval_ms());
            }
            self.typing = None;
            self.finish_step(progress);
        }
        loop {
            let Some(step) = ARRIVAL_SCRIPT.get(self.next).copied() else {
                return ArrivalTick::Finished;
            };
            if !self.delay_elapsed {
                self.delay_elapsed = true;
                return ArrivalTick::Wait(step.delay_ms);
            }
            match step.action {
                ArrivalAction::Type {
                    target,
                    text,
                    interval_ms,
                } => {
                    self.typing = Some((target, Typewriter::with_interval(text, interval_ms)));
                    return self.advance(progress, out);
                }
                action => {
                    settled(action, out);
                    self.finish_step(progress);
                }
            }
        }
    }

    fn finish_step(&mut self, progress: &mut ArrivalProgress) {
        progress.mark_done();
        self.next += 1;
        self.delay_elapsed = false;
    }
}
