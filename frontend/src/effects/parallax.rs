use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::ParallaxConfig;
use crate::dom::{self, Cleanup, EventListener};
use crate::error::Result;

/// Vertical offset for the hero image, or `None` once the hero has scrolled
/// out of view and the last transform should be left alone.
pub fn hero_offset(scroll_y: f64, viewport_height: f64, rate: f64) -> Option<f64> {
    (scroll_y < viewport_height).then(|| scroll_y * rate)
}

pub fn transform(offset: f64) -> String {
    format!("translate3d(0, {}px, 0)", offset)
}

pub fn init(config: &ParallaxConfig) -> Result<Cleanup> {
    let window = dom::window()?;
    let document = dom::document()?;
    if dom::query(&document, &config.section_selector)?.is_none() {
        return Ok(Cleanup::none());
    }
    let Some(image) = dom::query(&document, &config.image_selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(Cleanup::none());
    };

    let rate = config.rate;
    let scroll_window = window.clone();
    let listener = EventListener::passive(&window, "scroll", move |_| {
        let scrolled = dom::scroll_y(&scroll_window);
        if let Some(offset) = hero_offset(scrolled, dom::inner_height(&scroll_window), rate) {
            let _ = image.style().set_property("transform", &transform(offset));
        }
    })?;

    Ok(Cleanup::hold(listener))
}
