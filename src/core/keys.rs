use crate::core::phase::Phase;

/// What a key press asks for in the current phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Leave the slides for the arrival scene (also closes the dropdown).
    LeaveSlides,
    CloseDropdown,
    SkipVideo,
    PrevSlide,
    NextSlide,
    ToggleMute,
}

#[inline]
pub fn action_for_key(key: &str, phase: Phase) -> Option<KeyAction> {
    match (key, phase) {
        ("Escape", Phase::Slides) => Some(KeyAction::LeaveSlides),
        ("Escape", _) => Some(KeyAction::CloseDropdown),
        (" ", Phase::Video) => Some(KeyAction::SkipVideo),
        ("ArrowLeft", Phase::Slides) => Some(KeyAction::PrevSlide),
        ("ArrowRight", Phase::Slides) => Some(KeyAction::NextSlide),
        ("m" | "M", _) => Some(KeyAction::ToggleMute),
        _ => None,
    }
}

/// Keys whose browser default (page scroll) must be suppressed.
#[inline]
pub fn prevents_default(action: KeyAction) -> bool {
    matches!(action, KeyAction::SkipVideo)
}
