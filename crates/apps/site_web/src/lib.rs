//! Browser entry point: dispatches on `<body data-page=…>` and binds the
//! region map when the page embeds one.

use console_error_panic_hook::set_once;
use pages::PageKind;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, Window};

pub mod config;
pub mod content;
pub mod dom;
pub mod log;
pub mod map;

fn window_and_document() -> Result<(Window, Document), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    Ok((window, document))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    set_once();
    let (window, document) = window_and_document()?;
    if document.ready_state() == "loading" {
        let target = document.clone();
        let on_ready = Closure::once_into_js(move |_: Event| boot(&window, &document));
        target.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        boot(&window, &document);
    }
    Ok(())
}

fn boot(window: &Window, document: &Document) {
    let cfg = config::load(document);
    let kind = document
        .body()
        .and_then(|b| b.get_attribute("data-page"))
        .and_then(|v| PageKind::from_data_page(&v));

    let result = match kind {
        Some(PageKind::Collection) => content::init_collection(window, document, cfg.site.clone()),
        Some(PageKind::Detail) => content::init_detail(window, document, cfg.site.clone()),
        Some(PageKind::Home) => content::init_home(document, cfg.site.clone()),
        None => Ok(()),
    };
    if let Err(e) = result {
        log::error(&e.to_string());
    }

    if let Err(e) = map::install(window, document, cfg.map) {
        log::error(&format!("map init failed: {e:?}"));
    }
}

/// Rebinds the map against the current configuration, e.g. after the page
/// swapped the object's `data` attribute.
#[wasm_bindgen]
pub fn reload_map() -> Result<(), JsValue> {
    let (window, document) = window_and_document()?;
    map::uninstall();
    map::install(&window, &document, config::load(&document).map)
}

/// Restores every region shape and removes the map listeners.
#[wasm_bindgen]
pub fn teardown_map() {
    map::uninstall();
}

/// Id of the highlighted region, if any.
#[wasm_bindgen]
pub fn active_region() -> Option<String> {
    map::active_region()
}
