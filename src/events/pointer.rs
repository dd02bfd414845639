use crate::app::App;
use crate::core::view::CLASS_ACTIVE;
use crate::dom;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(
    document: &web::Document,
    video: Option<&web::HtmlVideoElement>,
    app: &Rc<App>,
) {
    wire_start(document, app);
    if let Some(video) = video {
        wire_video(video, app);
    }
    wire_navigation(document, app);
    wire_audio_controls(document, app);
    wire_music_dropdown(document, app);
}

fn wire_start(document: &web::Document, app: &Rc<App>) {
    let app = app.clone();
    dom::add_click_listener(document, "#btn-start", move |_| app.start());
}

fn wire_video(video: &web::HtmlVideoElement, app: &Rc<App>) {
    let app_end = app.clone();
    dom::add_listener(video, "ended", move |_| app_end.on_video_end());

    let app_click = app.clone();
    dom::add_listener(video, "click", move |_| app_click.skip_video_click());
}

fn wire_navigation(document: &web::Document, app: &Rc<App>) {
    for link in dom::query_all(document, ".face-info-link") {
        let app = app.clone();
        let target = link.get_attribute("data-target");
        dom::add_listener(&link, "click", move |_| app.go_to_slides(target.clone()));
    }

    for tab in dom::query_all(document, ".nav-tab[data-slide]") {
        let Some(slide_id) = tab.get_attribute("data-slide") else {
            continue;
        };
        let app = app.clone();
        dom::add_listener(&tab, "click", move |_| app.show_slide(&slide_id));
    }

    let app = app.clone();
    dom::add_click_listener(document, "#btn-back-arrival", move |_| {
        app.go_back_to_arrival()
    });
}

fn wire_audio_controls(document: &web::Document, app: &Rc<App>) {
    let app_toggle = app.clone();
    dom::add_click_listener(document, "#btn-audio-toggle", move |_| {
        app_toggle.toggle_audio()
    });

    if let Some(slider) = dom::query(document, "#volume-slider") {
        let app = app.clone();
        dom::add_listener(&slider, "input", move |ev: web::Event| {
            let value = ev
                .target()
                .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
                .and_then(|input| input.value().parse::<f32>().ok());
            if let Some(v) = value {
                app.set_volume_from_slider(v);
            }
        });
    }
}

fn wire_music_dropdown(document: &web::Document, app: &Rc<App>) {
    let app_select = app.clone();
    dom::add_click_listener(document, "#btn-music-select", move |ev| {
        ev.stop_propagation();
        app_select.toggle_dropdown();
    });

    for option in dom::query_all(document, ".music-option") {
        let app = app.clone();
        let doc = document.clone();
        let chosen = option.clone();
        dom::add_listener(&option, "click", move |ev| {
            ev.stop_propagation();
            select_track(&doc, &chosen);
            app.close_dropdown();
        });
    }

    let app_close = app.clone();
    dom::add_listener(document, "click", move |_| app_close.close_dropdown());
}

// Only the synthesized lyre is wired to audio; other tracks are cosmetic.
fn select_track(document: &web::Document, option: &web::Element) {
    for other in dom::query_all(document, ".music-option") {
        _ = other.class_list().remove_1(CLASS_ACTIVE);
    }
    _ = option.class_list().add_1(CLASS_ACTIVE);
    let track = option.get_attribute("data-track").unwrap_or_default();
    log::info!("[music] track selected: {}", track);
}
