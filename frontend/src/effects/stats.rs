use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};

use crate::animation::{parse_seed, render, CountUp, Frame};
use crate::config::CounterConfig;
use crate::dom::{self, Cleanup};
use crate::error::Result;
use crate::visibility::observer::{TriggerOptions, VisibilityObserver};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Counts each stat number up from zero once it is half visible.
pub fn init(config: &CounterConfig) -> Result<Cleanup> {
    let document = dom::document()?;
    let counters = dom::query_all(&document, &config.selector)?;
    if counters.is_empty() {
        return Ok(Cleanup::none());
    }
    log::debug!("Watching {} stat counters", counters.len());

    let config = config.clone();
    let options = TriggerOptions::threshold(config.threshold);
    let observer = VisibilityObserver::observe(counters, options, move |element| {
        let text = element.text_content().unwrap_or_default();
        let Some(target) = parse_seed(&text) else {
            log::warn!("Counter text {:?} is not an integer, leaving it as is", text);
            return;
        };
        let count = CountUp::new(target, config.duration_ms);
        if let Err(e) = count_up(element.clone(), count, config.suffix.clone()) {
            log::warn!("Could not start counter: {}", e);
        }
    })?;

    Ok(Cleanup::hold(observer))
}

/// Drives `count` on animation frames until it renders its target.
pub fn count_up(element: Element, count: CountUp, suffix: String) -> Result<()> {
    let window = dom::window()?;
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = callback.clone();
    let frame_window = window.clone();
    let mut started_at = None;

    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        let start = *started_at.get_or_insert(timestamp);
        let Frame { value, done } = count.frame(timestamp - start);
        element.set_text_content(Some(&render(value, &suffix)));

        let scheduled = !done && request_frame(&frame_window, &next).is_ok();
        if !scheduled {
            // Drop our own closure to break the Rc cycle.
            let _ = next.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>));

    request_frame(&window, &callback)
}

fn request_frame(window: &Window, callback: &FrameCallback) -> Result<()> {
    if let Some(callback) = callback.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    Ok(())
}
