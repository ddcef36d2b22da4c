use web_sys::Element;

use crate::config::LazyImageConfig;
use crate::dom::{self, Cleanup};
use crate::error::Result;
use crate::visibility::observer::{TriggerOptions, VisibilityObserver};

pub fn init(config: &LazyImageConfig) -> Result<Cleanup> {
    let document = dom::document()?;
    let images = dom::query_all(&document, &config.selector)?;
    if images.is_empty() {
        return Ok(Cleanup::none());
    }
    log::debug!("Lazy loading {} images", images.len());

    let attribute = config.source_attribute.clone();
    let options = TriggerOptions::threshold(0.0);
    let observer = VisibilityObserver::observe(images, options, move |image| {
        if let Err(e) = load(image, &attribute) {
            log::warn!("Lazy image failed to load: {}", e);
        }
    })?;

    Ok(Cleanup::hold(observer))
}

/// Moves the deferred source into `src`.
pub fn load(image: &Element, attribute: &str) -> Result<()> {
    if let Some(src) = image.get_attribute(attribute) {
        image.set_attribute("src", &src)?;
        image.remove_attribute(attribute)?;
    }
    Ok(())
}
