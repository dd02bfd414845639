use crate::audio::AmbientAudio;
use crate::constants::DEFAULT_SLIDE;
use crate::core::arrival::{ArrivalProgress, ArrivalRun, ArrivalTick};
use crate::core::keys::KeyAction;
use crate::core::slides::SlideDeck;
use crate::core::view::{Target, ViewCommand, CLASS_HIDDEN, CLASS_MUTED, CLASS_OPEN};
use crate::core::{can_skip_video, slider_to_gain, Arrived, Phase, PhaseController};
use crate::core::{Transition, TransitionMode, TransitionStep};
use crate::timer;
use crate::view;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

type OnArrived = Box<dyn FnOnce(&Rc<App>, Arrived)>;

/// Owns the scene state for the page session and routes every user intent.
pub struct App {
    document: web::Document,
    video: Option<web::HtmlVideoElement>,
    audio: AmbientAudio,
    phases: RefCell<PhaseController>,
    deck: RefCell<SlideDeck>,
    arrival: RefCell<ArrivalProgress>,
}

impl App {
    pub fn new(
        document: web::Document,
        video: Option<web::HtmlVideoElement>,
        audio: AmbientAudio,
    ) -> Rc<Self> {
        let deck = SlideDeck::new(view::slide_ids(&document));
        log::info!("[app] {} slides", deck.ids().len());
        Rc::new(Self {
            document,
            video,
            audio,
            phases: RefCell::new(PhaseController::new()),
            deck: RefCell::new(deck),
            arrival: RefCell::new(ArrivalProgress::new()),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phases.borrow().current()
    }

    fn emit(&self, cmds: &[ViewCommand]) {
        view::apply_all(&self.document, cmds);
    }

    // ---------------- Phase transitions ----------------

    /// Move to `target`. Leading zero-delay steps run synchronously; the rest
    /// are awaited in order on the timer queue.
    fn go_to(self: &Rc<Self>, target: Phase, mode: TransitionMode, on_arrived: OnArrived) {
        let transition = self.phases.borrow_mut().begin(target, mode);
        let (now, later) = transition.split_immediate();
        let later = later.to_vec();
        let mut on_arrived = Some(on_arrived);

        for s in now {
            self.run_step(&transition, s.step, &mut on_arrived);
        }
        if later.is_empty() {
            return;
        }

        // Stale steps are filtered by the controller, not here.
        let app = self.clone();
        spawn_local(async move {
            for s in later {
                timer::sleep_ms(s.delay_ms).await;
                app.run_step(&transition, s.step, &mut on_arrived);
            }
        });
    }

    fn run_step(
        self: &Rc<Self>,
        transition: &Transition,
        step: TransitionStep,
        on_arrived: &mut Option<OnArrived>,
    ) {
        let mut out = Vec::new();
        let arrived = self.phases.borrow_mut().apply(transition, step, &mut out);
        self.emit(&out);
        if let Some(arrived) = arrived {
            if let Some(cb) = on_arrived.take() {
                cb(self, arrived);
            }
        }
    }

    /// Start button: audio on, controls shown, fade into the video.
    pub fn start(self: &Rc<Self>) {
        if self.phase() != Phase::Intro {
            return;
        }
        self.audio.start();
        self.emit(&[ViewCommand::SetClass {
            target: Target::AudioControls,
            class: CLASS_HIDDEN,
            on: false,
        }]);
        self.go_to(
            Phase::Video,
            TransitionMode::Faded,
            Box::new(|app: &Rc<App>, _| app.play_video()),
        );
    }

    fn play_video(self: &Rc<Self>) {
        let Some(video) = self.video.clone() else {
            self.on_video_end();
            return;
        };
        match video.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("Video autoplay blocked: {:?}", e);
                    video.set_controls(true);
                }
            }),
            Err(e) => {
                log::warn!("Video autoplay blocked: {:?}", e);
                video.set_controls(true);
            }
        }
    }

    /// Video finished or skipped: hard cut to the arrival scene.
    pub fn on_video_end(self: &Rc<Self>) {
        if self.phase() != Phase::Video {
            return;
        }
        if let Some(video) = &self.video {
            _ = video.pause();
        }
        self.go_to(
            Phase::Arrival,
            TransitionMode::Immediate,
            Box::new(|app: &Rc<App>, arrived: Arrived| {
                if arrived.from == Phase::Video {
                    app.run_arrival();
                }
            }),
        );
    }

    /// Pointer click on the video; ignored during the first seconds.
    pub fn skip_video_click(self: &Rc<Self>) {
        let played = self.video.as_ref().map(|v| v.current_time()).unwrap_or(0.0);
        if can_skip_video(played) {
            self.on_video_end();
        }
    }

    pub fn go_to_slides(self: &Rc<Self>, slide_id: Option<String>) {
        let id = slide_id
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SLIDE.to_string());
        if self.phase() == Phase::Slides {
            self.show_slide(&id);
            return;
        }
        self.go_to(
            Phase::Slides,
            TransitionMode::Faded,
            Box::new(move |app: &Rc<App>, _| app.show_slide(&id)),
        );
    }

    pub fn go_back_to_arrival(self: &Rc<Self>) {
        self.go_to(
            Phase::Arrival,
            TransitionMode::Faded,
            Box::new(|app: &Rc<App>, _| app.settle_arrival()),
        );
    }

    // ---------------- Arrival scene ----------------

    fn run_arrival(self: &Rc<Self>) {
        let token = self.phases.borrow().scene_token();
        let mut out = Vec::new();
        let mut run = ArrivalRun::start(token, &mut self.arrival.borrow_mut(), &mut out);
        self.emit(&out);

        let app = self.clone();
        spawn_local(async move {
            loop {
                let mut out = Vec::new();
                let tick = run.advance(&mut app.arrival.borrow_mut(), &mut out);
                app.emit(&out);
                match tick {
                    ArrivalTick::Wait(ms) => timer::sleep_ms(ms).await,
                    ArrivalTick::Finished => {
                        log::info!("[arrival] sequence complete");
                        return;
                    }
                    ArrivalTick::Cancelled => {
                        log::info!("[arrival] cancelled");
                        return;
                    }
                }
            }
        });
    }

    fn settle_arrival(&self) {
        let mut out = Vec::new();
        {
            let mut progress = self.arrival.borrow_mut();
            if progress.is_finished() {
                return;
            }
            progress.settle(&mut out);
        }
        self.emit(&out);
    }

    // ---------------- Slides ----------------

    pub fn show_slide(&self, id: &str) {
        let mut out = Vec::new();
        if !self.deck.borrow_mut().show(id, &mut out) {
            log::warn!("[slides] unknown slide {}", id);
        }
        self.emit(&out);
    }

    fn step_slide(&self, forward: bool) {
        let mut out = Vec::new();
        {
            let mut deck = self.deck.borrow_mut();
            if forward {
                deck.next(&mut out);
            } else {
                deck.prev(&mut out);
            }
        }
        self.emit(&out);
    }

    // ---------------- Audio ----------------

    pub fn toggle_audio(&self) {
        let playing = self.audio.toggle();
        self.emit(&[ViewCommand::SetClass {
            target: Target::AudioToggle,
            class: CLASS_MUTED,
            on: !playing,
        }]);
    }

    pub fn set_volume_from_slider(&self, slider_value: f32) {
        self.audio.set_volume(slider_to_gain(slider_value));
    }

    // ---------------- Music dropdown ----------------

    pub fn toggle_dropdown(&self) {
        if let Ok(Some(el)) = self.document.query_selector(Target::MusicDropdown.selector()) {
            _ = el.class_list().toggle(CLASS_OPEN);
        }
    }

    pub fn close_dropdown(&self) {
        self.emit(&[ViewCommand::SetClass {
            target: Target::MusicDropdown,
            class: CLASS_OPEN,
            on: false,
        }]);
    }

    // ---------------- Keyboard ----------------

    pub fn handle_key(self: &Rc<Self>, action: KeyAction) {
        log::info!("[keys] {:?}", action);
        match action {
            KeyAction::LeaveSlides => {
                self.go_back_to_arrival();
                self.close_dropdown();
            }
            KeyAction::CloseDropdown => self.close_dropdown(),
            KeyAction::SkipVideo => self.on_video_end(),
            KeyAction::PrevSlide => self.step_slide(false),
            KeyAction::NextSlide => self.step_slide(true),
            KeyAction::ToggleMute => self.toggle_audio(),
        }
    }
}
