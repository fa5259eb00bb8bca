//! Wires the highlight controller to the `#world-map` object.

use std::cell::RefCell;
use std::rc::Rc;

use regions::{BindReport, ClearTicket, HighlightController, MapConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, EventTarget, HtmlObjectElement, Window};

use crate::dom::{DomHoverLabel, WebDocument, WebElement, warn_on_err};
use crate::log;

pub const MAP_OBJECT_ID: &str = "world-map";
pub const HOVER_LABEL_ID: &str = "hover-label";

type Controller = HighlightController<WebElement, DomHoverLabel>;

/// An event listener removed again when dropped.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn add(target: &EventTarget, kind: &'static str, f: impl FnMut(Event) + 'static) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Event)>::new(f);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let kind = self.kind;
        warn_on_err(
            self.target
                .remove_event_listener_with_callback(kind, self.callback.as_ref().unchecked_ref()),
            || format!("removing {kind} listener"),
        );
    }
}

struct PendingTimer {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

/// setTimeout slot for the hover-clear debounce. At most one timer is live.
#[derive(Default)]
struct ClearTimer {
    pending: Option<PendingTimer>,
}

impl ClearTimer {
    fn cancel(&mut self, window: &Window) {
        if let Some(timer) = self.pending.take() {
            window.clear_timeout_with_handle(timer.handle);
        }
    }
}

/// One bound SVG document. Dropping the session removes its listeners and
/// restores every shape.
pub struct MapSession {
    controller: Rc<RefCell<Controller>>,
    timer: Rc<RefCell<ClearTimer>>,
    window: Window,
    _listeners: Vec<Listener>,
}

impl MapSession {
    pub fn bind(
        window: &Window,
        host: &Document,
        svg: &Document,
        config: &MapConfig,
    ) -> Result<(Self, BindReport), JsValue> {
        let hover_label = host
            .get_element_by_id(HOVER_LABEL_ID)
            .map(|el| DomHoverLabel::new(el, &config.highlight.visible_class));
        let host_doc = WebDocument(host.clone());
        let (controller, report) =
            Controller::bind(config, &WebDocument(svg.clone()), Some(&host_doc), hover_label);

        let controller = Rc::new(RefCell::new(controller));
        let timer = Rc::new(RefCell::new(ClearTimer::default()));
        let mut listeners = Vec::new();

        let targets: Vec<(usize, Vec<EventTarget>)> = controller
            .borrow()
            .bindings()
            .iter()
            .enumerate()
            .map(|(i, b)| {
                let mut els = vec![b.shape.0.clone().unchecked_into::<EventTarget>()];
                els.extend(b.labels.iter().map(|l| l.0.clone().unchecked_into::<EventTarget>()));
                (i, els)
            })
            .collect();

        for (index, els) in targets {
            for target in els {
                listeners.push(on_enter(&target, index, &controller, &timer, window)?);
                listeners.push(on_leave(&target, index, &controller, &timer, window)?);
                listeners.push(on_click(&target, index, &controller, window)?);
            }
        }

        {
            let controller = controller.clone();
            let timer = timer.clone();
            let window = window.clone();
            listeners.push(Listener::add(svg, "click", move |_| {
                timer.borrow_mut().cancel(&window);
                controller.borrow_mut().background_click();
            })?);
        }

        Ok((
            Self {
                controller,
                timer,
                window: window.clone(),
                _listeners: listeners,
            },
            report,
        ))
    }

    pub fn active_region(&self) -> Option<String> {
        self.controller.borrow().active_region().map(|r| r.to_string())
    }
}

impl Drop for MapSession {
    fn drop(&mut self) {
        self.timer.borrow_mut().cancel(&self.window);
        self.controller.borrow_mut().teardown();
    }
}

fn on_enter(
    target: &EventTarget,
    index: usize,
    controller: &Rc<RefCell<Controller>>,
    timer: &Rc<RefCell<ClearTimer>>,
    window: &Window,
) -> Result<Listener, JsValue> {
    let controller = controller.clone();
    let timer = timer.clone();
    let window = window.clone();
    Listener::add(target, "pointerenter", move |_| {
        timer.borrow_mut().cancel(&window);
        controller.borrow_mut().pointer_enter(index);
    })
}

fn on_leave(
    target: &EventTarget,
    index: usize,
    controller: &Rc<RefCell<Controller>>,
    timer: &Rc<RefCell<ClearTimer>>,
    window: &Window,
) -> Result<Listener, JsValue> {
    let controller = controller.clone();
    let timer = timer.clone();
    let window = window.clone();
    Listener::add(target, "pointerleave", move |_| {
        let Some(ticket) = controller.borrow_mut().pointer_leave(index) else {
            return;
        };
        let delay = controller.borrow().clear_delay_ms();
        if let Err(e) = schedule_clear(&window, &timer, &controller, ticket, delay) {
            log::warn(&format!("could not schedule hover clear: {e:?}"));
        }
    })
}

fn schedule_clear(
    window: &Window,
    timer: &Rc<RefCell<ClearTimer>>,
    controller: &Rc<RefCell<Controller>>,
    ticket: ClearTicket,
    delay_ms: u32,
) -> Result<(), JsValue> {
    let mut slot = timer.borrow_mut();
    slot.cancel(window);

    let controller = controller.clone();
    let callback = Closure::<dyn FnMut()>::new(move || {
        controller.borrow_mut().fire_clear(ticket);
    });
    let handle = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        i32::try_from(delay_ms).unwrap_or(i32::MAX),
    )?;
    slot.pending = Some(PendingTimer {
        handle,
        _callback: callback,
    });
    Ok(())
}

fn on_click(
    target: &EventTarget,
    index: usize,
    controller: &Rc<RefCell<Controller>>,
    window: &Window,
) -> Result<Listener, JsValue> {
    let controller = controller.clone();
    let window = window.clone();
    Listener::add(target, "click", move |event: Event| {
        event.prevent_default();
        event.stop_propagation();
        let Some(nav) = controller.borrow().click(index) else {
            return;
        };
        log::info(&format!("{} → {}", nav.region, nav.url));
        if let Err(e) = window.location().set_href(&nav.url) {
            log::error(&format!("navigation to {} failed: {e:?}", nav.url));
        }
    })
}

struct MapHost {
    _load: Listener,
    session: Option<MapSession>,
}

thread_local! {
    static MAP: RefCell<Option<MapHost>> = const { RefCell::new(None) };
}

/// Binds now if the SVG is already loaded, and again on every `load` of the
/// object. A rebind replaces the previous session.
pub fn install(window: &Window, host: &Document, config: MapConfig) -> Result<(), JsValue> {
    let Some(object) = host.get_element_by_id(MAP_OBJECT_ID) else {
        return Ok(());
    };
    let object: HtmlObjectElement = object
        .dyn_into()
        .map_err(|_| JsValue::from_str("#world-map is not an <object>"))?;

    let load = {
        let window = window.clone();
        let host = host.clone();
        let target = object.clone();
        let config = config.clone();
        Listener::add(&object, "load", move |_| {
            rebind(&window, &host, &target, &config);
        })?
    };
    MAP.with(|m| {
        *m.borrow_mut() = Some(MapHost {
            _load: load,
            session: None,
        })
    });

    if object.content_document().is_some() {
        rebind(window, host, &object, &config);
    }
    Ok(())
}

fn rebind(window: &Window, host: &Document, object: &HtmlObjectElement, config: &MapConfig) {
    let Some(svg) = object.content_document() else {
        log::warn("map object has no content document");
        return;
    };
    // Tear down first so the new session snapshots unmodified shapes.
    MAP.with(|m| {
        if let Some(h) = m.borrow_mut().as_mut() {
            h.session = None;
        }
    });
    match MapSession::bind(window, host, &svg, config) {
        Ok((session, report)) => {
            for warning in report.warnings() {
                log::warn(&warning);
            }
            log::info(&format!(
                "bound {} regions, {} labels in {} groups",
                report.regions_bound.len(),
                report.labels_bound,
                report.label_groups
            ));
            MAP.with(|m| {
                if let Some(h) = m.borrow_mut().as_mut() {
                    h.session = Some(session);
                }
            });
        }
        Err(e) => log::error(&format!("map binding failed: {e:?}")),
    }
}

/// Removes every map listener and restores the shapes.
pub fn uninstall() {
    let host = MAP.with(|m| m.borrow_mut().take());
    drop(host);
}

pub fn active_region() -> Option<String> {
    MAP.with(|m| {
        m.borrow()
            .as_ref()
            .and_then(|h| h.session.as_ref())
            .and_then(MapSession::active_region)
    })
}
