#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod overlay;
mod timer;
mod view;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("terenzio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let video = dom::query(&document, "#intro-video")
        .and_then(|el| el.dyn_into::<web::HtmlVideoElement>().ok());
    if video.is_none() {
        log::warn!("missing #intro-video");
    }

    // Audio graph is built lazily on the first start() to satisfy autoplay rules
    let audio = audio::AmbientAudio::new();
    let app = app::App::new(document.clone(), video.clone(), audio);

    events::wire_input_handlers(&document, video.as_ref(), &app);
    events::wire_global_keydown(&document, app.clone());

    log::info!("[app] initialized in phase {}", app.phase().name());
    Ok(())
}
