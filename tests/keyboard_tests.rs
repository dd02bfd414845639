// Host-side tests for keyboard routing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod cancel {
        include!("../src/core/cancel.rs");
    }
    pub mod keys {
        include!("../src/core/keys.rs");
    }
    pub mod phase {
        include!("../src/core/phase.rs");
    }
    pub mod view {
        include!("../src/core/view.rs");
    }
}

use crate::core::keys::*;
use crate::core::phase::Phase;

#[test]
fn escape_leaves_slides_and_otherwise_closes_dropdown() {
    assert_eq!(
        action_for_key("Escape", Phase::Slides),
        Some(KeyAction::LeaveSlides)
    );
    for phase in [Phase::Intro, Phase::Video, Phase::Arrival] {
        assert_eq!(
            action_for_key("Escape", phase),
            Some(KeyAction::CloseDropdown)
        );
    }
}

#[test]
fn space_skips_only_the_video() {
    assert_eq!(action_for_key(" ", Phase::Video), Some(KeyAction::SkipVideo));
    assert_eq!(action_for_key(" ", Phase::Intro), None);
    assert_eq!(action_for_key(" ", Phase::Arrival), None);
    assert_eq!(action_for_key(" ", Phase::Slides), None);
    assert!(prevents_default(KeyAction::SkipVideo));
}

#[test]
fn arrows_page_through_slides_only() {
    assert_eq!(
        action_for_key("ArrowLeft", Phase::Slides),
        Some(KeyAction::PrevSlide)
    );
    assert_eq!(
        action_for_key("ArrowRight", Phase::Slides),
        Some(KeyAction::NextSlide)
    );
    assert_eq!(action_for_key("ArrowLeft", Phase::Arrival), None);
    assert_eq!(action_for_key("ArrowRight", Phase::Video), None);
}

#[test]
fn m_toggles_mute_in_every_phase() {
    for phase in Phase::ALL {
        assert_eq!(action_for_key("m", phase), Some(KeyAction::ToggleMute));
        assert_eq!(action_for_key("M", phase), Some(KeyAction::ToggleMute));
    }
    assert!(!prevents_default(KeyAction::ToggleMute));
}

#[test]
fn unrelated_keys_are_ignored() {
    for key in ["", "a", "Enter", "ArrowUp", "Tab", "mm", "Space"] {
        for phase in Phase::ALL {
            assert_eq!(action_for_key(key, phase), None, "key {key:?}");
        }
    }
}
