use crate::config::RevealConfig;
use crate::dom::{self, Cleanup};
use crate::error::Result;
use crate::visibility::observer::{TriggerOptions, VisibilityObserver};

/// Adds the visible class to each scroll-animated element the first time it
/// comes into view.
pub fn init(config: &RevealConfig) -> Result<Cleanup> {
    let document = dom::document()?;
    let elements = dom::query_all(&document, &config.selector)?;
    if elements.is_empty() {
        return Ok(Cleanup::none());
    }
    log::debug!("Watching {} elements for reveal", elements.len());

    let options = TriggerOptions::threshold(config.threshold).with_root_margin(config.root_margin);
    let visible_class = config.visible_class.clone();
    let observer = VisibilityObserver::observe(elements, options, move |element| {
        if let Err(e) = element.class_list().add_1(&visible_class) {
            log::warn!("Could not reveal element: {:?}", e);
        }
    })?;

    Ok(Cleanup::hold(observer))
}
