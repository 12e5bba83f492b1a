#![cfg(target_arch = "wasm32")]
use crate::audio::{SharedAudio, WebAudioBackend};
use crate::constants::CANVAS_ID;
use crate::core::{Camera, EmitterPose, SpatialAudio, SpeakerDrag};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod controls;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod loader;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn build_audio() -> anyhow::Result<SharedAudio> {
    let backend = WebAudioBackend::new().map_err(|e| anyhow::anyhow!("{}", e))?;
    let audio = SpatialAudio::new(backend);
    let s = audio.settings();
    log::info!(
        "[audio] panner ref={} max={} rolloff={} gain={}",
        s.ref_distance,
        s.max_distance,
        s.rolloff_factor,
        s.gain
    );
    Ok(Rc::new(RefCell::new(audio)))
}

// Missing default audio is not an error for the app: the user can upload.
async fn load_default_audio(audio: SharedAudio) {
    // Taken before fetching, so an upload picked meanwhile wins.
    let ticket = audio.borrow_mut().begin_load();
    match loader::fetch_default_audio().await {
        Ok((name, bytes)) => {
            audio::ingest_source(&audio, ticket, name.clone(), bytes).await;
            if audio.borrow().source_name() == Some(name.as_str()) {
                log::info!("[assets] default audio file loaded successfully");
            }
        }
        Err(e) => {
            log::warn!("[assets] could not load default audio file: {}", e);
            log::info!("[assets] you can still upload your own audio file using the upload button");
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("speaker-stage starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let audio = build_audio()?;
    let drag = Rc::new(RefCell::new(SpeakerDrag::new(EmitterPose::default())));
    let camera = Camera::default();

    controls::wire_controls(&document, audio.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        camera,
        drag: drag.clone(),
        audio: audio.clone(),
        drag_subscription: Rc::new(RefCell::new(None)),
    });

    spawn_local(load_default_audio(audio.clone()));

    // Rendering is optional: without WebGPU the speaker still works, unseen.
    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        audio,
        drag,
        camera,
        canvas,
        document,
        controls: controls::ControlsView::default(),
        gpu,
        started_at: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
