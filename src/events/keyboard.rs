use crate::app::App;
use crate::core::keys::{action_for_key, prevents_default};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &Rc<App>) {
    let key = ev.key();
    let Some(action) = action_for_key(&key, app.phase()) else {
        return;
    };
    if prevents_default(action) {
        ev.prevent_default();
    }
    app.handle_key(action);
}

pub fn wire_global_keydown(document: &web::Document, app: Rc<App>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &app);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
