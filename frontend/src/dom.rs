//! Thin helpers over `web_sys` shared by every page effect.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::{Error, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(Error::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(Error::NoDocument)
}

/// All elements matching `selector`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = root.query_selector_all(selector)?;
    Ok(collect_elements(&nodes))
}

pub fn query_all_within(root: &Element, selector: &str) -> Result<Vec<Element>> {
    let nodes = root.query_selector_all(selector)?;
    Ok(collect_elements(&nodes))
}

fn collect_elements(nodes: &web_sys::NodeList) -> Vec<Element> {
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query(root: &Document, selector: &str) -> Result<Option<Element>> {
    Ok(root.query_selector(selector)?)
}

pub fn as_html(element: &Element) -> Option<&HtmlElement> {
    element.dyn_ref::<HtmlElement>()
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn inner_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn inner_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

pub fn has_loaded(document: &Document) -> bool {
    document.ready_state() == "complete"
}

/// Runs `callback` once the window has loaded: right away if the `load` event
/// has already fired, otherwise from a listener held by the returned handle.
pub fn on_load<F>(callback: F) -> Result<Cleanup>
where
    F: FnOnce() + 'static,
{
    let window = window()?;
    if has_loaded(&document()?) {
        callback();
        return Ok(Cleanup::none());
    }

    let mut callback = Some(callback);
    let listener = EventListener::new(&window, "load", move |_| {
        if let Some(callback) = callback.take() {
            callback();
        }
    })?;
    Ok(Cleanup::hold(listener))
}

/// An event listener that is removed from its target when dropped.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event: &'static str, callback: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(
            event,
            callback.as_ref().unchecked_ref(),
        )?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Like [`EventListener::new`] but registered as passive, for scroll handlers.
    pub fn passive<F>(target: &EventTarget, event: &'static str, callback: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Undoes whatever an initializer registered, once, when dropped.
#[must_use = "dropping a Cleanup immediately tears the effect down"]
pub struct Cleanup {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Cleanup {
    pub fn new<F: FnOnce() + 'static>(teardown: F) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// Handle for an effect whose target was absent.
    pub fn none() -> Self {
        Self { teardown: None }
    }

    /// Keeps `resource` alive until the handle is dropped.
    pub fn hold<T: 'static>(resource: T) -> Self {
        Self::new(move || drop(resource))
    }

    pub fn is_active(&self) -> bool {
        self.teardown.is_some()
    }
}

impl Drop for Cleanup {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}
