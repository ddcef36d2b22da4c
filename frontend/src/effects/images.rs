use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

use crate::dom::{self, Cleanup, EventListener};
use crate::error::Result;

/// Starts fetching the hero image before the browser reaches it in layout.
pub fn preload(url: Option<&str>) -> Result<Cleanup> {
    let Some(url) = url else {
        return Ok(Cleanup::none());
    };
    let image = HtmlImageElement::new()?;
    image.set_src(url);
    log::debug!("Preloading {}", url);
    Ok(Cleanup::hold(image))
}

/// Hides images that are still downloading and fades them in once loaded.
pub fn prevent_layout_shift() -> Result<Cleanup> {
    let document = dom::document()?;
    let mut listeners = Vec::new();

    for element in dom::query_all(&document, "img")? {
        let Ok(image) = element.dyn_into::<HtmlImageElement>() else {
            continue;
        };
        if image.complete() {
            continue;
        }
        let loaded = image.clone();
        listeners.push(EventListener::new(&image, "load", move |_| {
            let _ = loaded.style().set_property("opacity", "1");
        })?);
        let style = image.style();
        style.set_property("opacity", "0")?;
        style.set_property("transition", "opacity 0.3s ease")?;
    }

    if listeners.is_empty() {
        return Ok(Cleanup::none());
    }
    log::debug!("Fading in {} pending images", listeners.len());
    Ok(Cleanup::hold(listeners))
}
