use crate::audio::{self, SharedAudio};
use crate::constants::{FILE_INPUT_ID, INVALID_FILE_ALERT, STOP_BUTTON_ID, UPLOAD_BUTTON_ID};
use crate::core::{is_audio_mime, stop_label, upload_label};
use crate::{dom, loader};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[inline]
fn button(document: &web::Document, id: &str) -> Option<web::HtmlButtonElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
}

/// What the buttons last showed, so the DOM is only touched on change.
#[derive(Default)]
pub struct ControlsView {
    source_name: Option<String>,
    playing: bool,
    initialized: bool,
}

impl ControlsView {
    pub fn refresh(&mut self, document: &web::Document, source_name: Option<&str>, playing: bool) {
        if self.initialized && self.playing == playing && self.source_name.as_deref() == source_name
        {
            return;
        }
        self.initialized = true;
        self.playing = playing;
        self.source_name = source_name.map(str::to_string);

        if let Some(upload) = button(document, UPLOAD_BUTTON_ID) {
            upload.set_text_content(Some(&upload_label(source_name)));
            upload.set_disabled(playing);
        }
        if let Some(stop) = button(document, STOP_BUTTON_ID) {
            stop.set_text_content(Some(stop_label(playing)));
            stop.set_disabled(!playing);
            let style = if source_name.is_some() { "" } else { "display:none" };
            _ = stop.set_attribute("style", style);
        }
    }
}

pub fn wire_controls(document: &web::Document, audio: SharedAudio) {
    let doc = document.clone();
    dom::add_click_listener(document, UPLOAD_BUTTON_ID, move || {
        if let Some(input) = doc
            .get_element_by_id(FILE_INPUT_ID)
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        {
            input.click();
        }
    });

    let audio_stop = audio.clone();
    dom::add_click_listener(document, STOP_BUTTON_ID, move || {
        audio_stop.borrow_mut().stop_playback();
    });

    wire_file_input(document, audio);
}

fn wire_file_input(document: &web::Document, audio: SharedAudio) {
    let Some(input) = document
        .get_element_by_id(FILE_INPUT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        log::warn!("[upload] missing #{}", FILE_INPUT_ID);
        return;
    };
    let input_for_change = input.clone();
    let closure = Closure::wrap(Box::new(move || {
        let file = input_for_change.files().and_then(|list| list.get(0));
        let Some(file) = file.filter(|f| is_audio_mime(&f.type_())) else {
            if let Some(w) = web::window() {
                _ = w.alert_with_message(INVALID_FILE_ALERT);
            }
            return;
        };
        let audio = audio.clone();
        let ticket = audio.borrow_mut().begin_load();
        spawn_local(async move {
            let name = file.name();
            match loader::read_file(&file).await {
                Ok(bytes) => audio::ingest_source(&audio, ticket, name, bytes).await,
                Err(e) => log::error!("[upload] {:?}", e),
            }
        });
    }) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}
