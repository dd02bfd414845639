use crate::core::phase::Phase;

/// DOM elements the scene logic addresses by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    TransitionOverlay,
    FaceAnnotation,
    FaceLabel,
    TypewriterText,
    QuoteTranslation,
    QuoteAuthor,
    ArrivalNav,
    AudioControls,
    AudioToggle,
    MusicDropdown,
}

impl Target {
    pub fn selector(self) -> &'static str {
        match self {
            Target::TransitionOverlay => "#transition-overlay",
            Target::FaceAnnotation => "#face-annotation",
            Target::FaceLabel => "#face-label",
            Target::TypewriterText => "#typewriter-text",
            Target::QuoteTranslation => ".quote-translation",
            Target::QuoteAuthor => ".quote-author",
            Target::ArrivalNav => "#arrival-nav",
            Target::AudioControls => "#audio-controls",
            Target::AudioToggle => "#btn-audio-toggle",
            Target::MusicDropdown => "#music-dropdown",
        }
    }
}

/// CSS class names the view layer toggles.
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_MUTED: &str = "muted";
pub const CLASS_OPEN: &str = "open";
pub const CLASS_NO_TRANSITION: &str = "no-transition";

/// Instructions emitted by the core and carried out by the view layer.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewCommand {
    ShowOverlay,
    HideOverlay,
    /// Mark every phase inactive; `animate == false` suppresses CSS transitions.
    DeactivatePhases { animate: bool },
    ActivatePhase { phase: Phase, animate: bool },
    /// Re-enable CSS transitions suppressed by an immediate cut.
    RestoreAnimations,
    SetClass {
        target: Target,
        class: &'static str,
        on: bool,
    },
    SetText { target: Target, text: String },
    AppendText { target: Target, text: String },
    /// Activate one slide and its tab, deactivating the rest.
    ShowSlide { id: String },
}

impl ViewCommand {
    pub fn reveal(target: Target) -> Self {
        ViewCommand::SetClass {
            target,
            class: CLASS_VISIBLE,
            on: true,
        }
    }

    pub fn conceal(target: Target) -> Self {
        ViewCommand::SetClass {
            target,
            class: CLASS_VISIBLE,
            on: false,
        }
    }
}
