use crate::constants::*;
use crate::core::tone::{impulse_channel, impulse_len, NoteEnvelope};
use crate::core::{AmbientState, CycleTicket, DroneEvent, NoteEvent, StartOutcome};
use crate::timer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// The persistent WebAudio graph: master gain to the destination directly
/// and through a convolution reverb send.
pub struct AudioGraph {
    pub ctx: web::AudioContext,
    pub master_gain: web::GainNode,
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

fn create_oscillator(
    audio_ctx: &web::AudioContext,
    kind: web::OscillatorType,
    frequency_hz: f32,
) -> Option<web::OscillatorNode> {
    let osc = web::OscillatorNode::new(audio_ctx)
        .map_err(|e| log::error!("OscillatorNode error: {:?}", e))
        .ok()?;
    osc.set_type(kind);
    osc.frequency().set_value(frequency_hz);
    Some(osc)
}

pub fn build_graph<R: Rng + ?Sized>(master_volume: f32, rng: &mut R) -> Result<AudioGraph, ()> {
    let ctx = web::AudioContext::new().map_err(|e| {
        log::error!("AudioContext error: {:?}", e);
    })?;
    let master_gain = create_gain(&ctx, master_volume, "Master")?;

    let reverb = web::ConvolverNode::new(&ctx).map_err(|e| {
        log::error!("ConvolverNode error: {:?}", e);
    })?;
    {
        let sr = ctx.sample_rate();
        let len = impulse_len(sr);
        match ctx.create_buffer(REVERB_CHANNELS, len as u32, sr) {
            Ok(ir) => {
                for ch in 0..REVERB_CHANNELS {
                    let mut buf = impulse_channel(len, rng);
                    _ = ir.copy_to_channel(&mut buf, ch as i32);
                }
                reverb.set_buffer(Some(&ir));
            }
            Err(e) => log::error!("impulse buffer error: {:?}", e),
        }
    }
    let reverb_wet = create_gain(&ctx, REVERB_WET, "Reverb wet")?;

    let destination = ctx.destination();
    _ = master_gain.connect_with_audio_node(&destination);
    _ = master_gain.connect_with_audio_node(&reverb);
    _ = reverb.connect_with_audio_node(&reverb_wet);
    _ = reverb_wet.connect_with_audio_node(&destination);

    Ok(AudioGraph { ctx, master_gain })
}

/// Triangle fundamental plus a faint sine overtone under one envelope.
pub fn play_note(graph: &AudioGraph, note: &NoteEvent) {
    let ctx = &graph.ctx;
    let Some(osc1) = create_oscillator(ctx, web::OscillatorType::Triangle, note.frequency_hz)
    else {
        return;
    };
    let Some(osc2) = create_oscillator(
        ctx,
        web::OscillatorType::Sine,
        note.frequency_hz * OVERTONE_RATIO,
    ) else {
        return;
    };
    let Ok(env_gain) = create_gain(ctx, 0.0, "Note") else {
        return;
    };
    let Ok(overtone_gain) = create_gain(ctx, OVERTONE_GAIN, "Overtone") else {
        return;
    };

    _ = osc1.connect_with_audio_node(&env_gain);
    _ = osc2.connect_with_audio_node(&overtone_gain);
    _ = overtone_gain.connect_with_audio_node(&env_gain);
    _ = env_gain.connect_with_audio_node(&graph.master_gain);

    let env = NoteEnvelope::new(note.start_time_sec, note.duration_sec, note.volume);
    let param = env_gain.gain();
    let [(t0, v0), rest @ ..] = env.points;
    _ = param.set_value_at_time(v0, t0);
    for (t, v) in rest {
        _ = param.linear_ramp_to_value_at_time(v, t);
    }

    for osc in [&osc1, &osc2] {
        _ = osc.start_with_when(note.start_time_sec);
        _ = osc.stop_with_when(env.stop_time_sec);
    }
}

pub fn play_drone(graph: &AudioGraph, drone: &DroneEvent) {
    let ctx = &graph.ctx;
    let Some(osc) = create_oscillator(ctx, web::OscillatorType::Sine, drone.frequency_hz) else {
        return;
    };
    let Ok(gain) = create_gain(ctx, drone.gain, "Drone") else {
        return;
    };
    _ = osc.connect_with_audio_node(&gain);
    _ = gain.connect_with_audio_node(&graph.master_gain);
    _ = osc.start_with_when(drone.start_time_sec);
    _ = osc.stop_with_when(drone.stop_time_sec);
}

struct Inner {
    state: AmbientState,
    graph: Option<AudioGraph>,
    rng: StdRng,
}

/// Handle to the ambient soundtrack. Clones share one engine.
#[derive(Clone)]
pub struct AmbientAudio {
    inner: Rc<RefCell<Inner>>,
}

impl AmbientAudio {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state: AmbientState::default(),
                graph: None,
                rng: StdRng::from_entropy(),
            })),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.inner.borrow().state.is_playing()
    }

    /// Build the graph on first use, resume a suspended clock and arm the
    /// pattern cycle. Returns whether the soundtrack is playing.
    pub fn start(&self) -> bool {
        let outcome = {
            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;
            if inner.graph.is_none() {
                let volume = inner.state.master_volume();
                match build_graph(volume, &mut inner.rng) {
                    Ok(g) => inner.graph = Some(g),
                    Err(()) => {
                        log::error!("[audio] graph unavailable; staying silent");
                        return false;
                    }
                }
            }
            inner.state.start()
        };
        self.after_start(outcome);
        true
    }

    pub fn stop(&self) {
        self.inner.borrow_mut().state.stop();
        log::info!("[audio] stopped");
    }

    pub fn toggle(&self) -> bool {
        if self.is_playing() {
            self.stop();
            false
        } else {
            self.start()
        }
    }

    pub fn set_volume(&self, volume: f32) {
        let mut inner = self.inner.borrow_mut();
        if inner.graph.is_none() {
            return;
        }
        if let Some(v) = inner.state.set_volume(volume) {
            if let Some(graph) = inner.graph.as_ref() {
                graph.master_gain.gain().set_value(v);
            }
        }
    }

    fn after_start(&self, outcome: StartOutcome) {
        if let Some(graph) = self.inner.borrow().graph.as_ref() {
            if graph.ctx.state() == web::AudioContextState::Suspended {
                _ = graph.ctx.resume();
            }
        }
        if outcome.build_graph {
            log::info!("[audio] graph built");
        }
        if let Some(ticket) = outcome.spawn_cycle {
            self.spawn_cycle(ticket);
        }
    }

    // One task per ticket; it ends as soon as its ticket is disarmed.
    fn spawn_cycle(&self, ticket: CycleTicket) {
        let this = self.clone();
        spawn_local(async move {
            log::info!("[audio] cycle {:?} armed", ticket);
            loop {
                let wait = {
                    let mut guard = this.inner.borrow_mut();
                    let inner = &mut *guard;
                    let Some(graph) = inner.graph.as_ref() else {
                        break;
                    };
                    let now = graph.ctx.current_time();
                    let Some(plan) = inner.state.next_cycle(ticket, now, &mut inner.rng) else {
                        break;
                    };
                    for note in &plan.notes {
                        play_note(graph, note);
                    }
                    play_drone(graph, &plan.drone);
                    plan.next_cycle_in_sec
                };
                timer::sleep_sec(wait).await;
            }
            log::info!("[audio] cycle {:?} released", ticket);
        });
    }
}
