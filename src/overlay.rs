use crate::core::view::{Target, CLASS_ACTIVE};
use crate::dom;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = dom::query(document, Target::TransitionOverlay.selector()) {
        _ = el.class_list().add_1(CLASS_ACTIVE);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = dom::query(document, Target::TransitionOverlay.selector()) {
        _ = el.class_list().remove_1(CLASS_ACTIVE);
    }
}
