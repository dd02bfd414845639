use crate::constants::{TIMELINE_ITEM_FADE_SEC, TIMELINE_ITEM_STAGGER_SEC};
use crate::core::view::{ViewCommand, CLASS_ACTIVE, CLASS_NO_TRANSITION};
use crate::dom;
use crate::overlay;
use wasm_bindgen::JsCast;
use web_sys as web;

const PHASE_SELECTOR: &str = ".phase";
const SLIDE_SELECTOR: &str = ".slide";
const TAB_SELECTOR: &str = ".nav-tab";
const TIMELINE_ITEM_SELECTOR: &str = ".timeline-item";

/// Carry out one core instruction against the document. Missing targets are
/// skipped.
pub fn apply(document: &web::Document, cmd: &ViewCommand) {
    match cmd {
        ViewCommand::ShowOverlay => overlay::show(document),
        ViewCommand::HideOverlay => overlay::hide(document),
        ViewCommand::DeactivatePhases { animate } => {
            for el in dom::query_all(document, PHASE_SELECTOR) {
                if !animate {
                    _ = el.class_list().add_1(CLASS_NO_TRANSITION);
                }
                _ = el.class_list().remove_1(CLASS_ACTIVE);
            }
        }
        ViewCommand::ActivatePhase { phase, animate } => {
            if let Some(el) = document.get_element_by_id(phase.element_id()) {
                if !animate {
                    _ = el.class_list().add_1(CLASS_NO_TRANSITION);
                }
                _ = el.class_list().add_1(CLASS_ACTIVE);
            }
        }
        ViewCommand::RestoreAnimations => {
            for el in dom::query_all(document, PHASE_SELECTOR) {
                _ = el.class_list().remove_1(CLASS_NO_TRANSITION);
            }
        }
        ViewCommand::SetClass { target, class, on } => {
            if let Some(el) = dom::query(document, target.selector()) {
                dom::set_class(&el, class, *on);
            }
        }
        ViewCommand::SetText { target, text } => {
            if let Some(el) = dom::query(document, target.selector()) {
                el.set_text_content(Some(text.as_str()));
            }
        }
        ViewCommand::AppendText { target, text } => {
            if let Some(el) = dom::query(document, target.selector()) {
                let mut cur = el.text_content().unwrap_or_default();
                cur.push_str(text);
                el.set_text_content(Some(cur.as_str()));
            }
        }
        ViewCommand::ShowSlide { id } => show_slide(document, id),
    }
}

pub fn apply_all(document: &web::Document, cmds: &[ViewCommand]) {
    for cmd in cmds {
        apply(document, cmd);
    }
}

fn show_slide(document: &web::Document, id: &str) {
    for el in dom::query_all(document, SLIDE_SELECTOR) {
        _ = el.class_list().remove_1(CLASS_ACTIVE);
    }
    for el in dom::query_all(document, TAB_SELECTOR) {
        _ = el.class_list().remove_1(CLASS_ACTIVE);
    }

    if let Some(slide) = document.get_element_by_id(id) {
        _ = slide.class_list().add_1(CLASS_ACTIVE);
        restart_timeline(&slide);
    }

    let tab_selector = format!("{}[data-slide=\"{}\"]", TAB_SELECTOR, id);
    if let Some(tab) = dom::query(document, &tab_selector) {
        _ = tab.class_list().add_1(CLASS_ACTIVE);
    }
}

// Replay the staggered entrance of each timeline item.
fn restart_timeline(slide: &web::Element) {
    let Ok(items) = slide.query_selector_all(TIMELINE_ITEM_SELECTOR) else {
        return;
    };
    for i in 0..items.length() {
        let Some(item) = items
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        let style = item.style();
        _ = style.set_property("animation", "none");
        // force reflow so the animation restarts
        _ = item.offset_height();
        let anim = format!(
            "fade-in-left {}s ease {}s forwards",
            TIMELINE_ITEM_FADE_SEC,
            i as f32 * TIMELINE_ITEM_STAGGER_SEC
        );
        _ = style.set_property("animation", &anim);
    }
}

/// Ids of every `.slide`, in document order.
pub fn slide_ids(document: &web::Document) -> Vec<String> {
    dom::query_all(document, SLIDE_SELECTOR)
        .iter()
        .map(|el| el.id())
        .filter(|id| !id.is_empty())
        .collect()
}
