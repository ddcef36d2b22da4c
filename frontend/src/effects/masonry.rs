use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

use crate::config::MasonryConfig;
use crate::dom::{self, Cleanup, EventListener};
use crate::error::Result;

pub fn should_adjust(viewport_width: f64, min_width: f64) -> bool {
    viewport_width > min_width
}

/// Lets gallery images size themselves so the grid can settle into columns.
/// Narrow viewports use the single-column CSS layout and are left alone.
pub fn adjust(config: &MasonryConfig) -> Result<()> {
    let window = dom::window()?;
    let document = dom::document()?;
    let Some(gallery) = dom::query(&document, &config.gallery_selector)? else {
        return Ok(());
    };
    if !should_adjust(dom::inner_width(&window), config.min_width) {
        return Ok(());
    }

    let items = dom::query_all_within(&gallery, &config.item_selector)?;
    for item in &items {
        let image = item.query_selector("img")?;
        if let Some(image) = image.as_ref().and_then(dom::as_html) {
            image.style().set_property("height", "auto")?;
        }
    }
    log::debug!("Adjusted {} gallery items", items.len());
    Ok(())
}

/// Re-runs [`adjust`] once resizing has been quiet for `debounce_ms`.
pub fn init_resize(config: &MasonryConfig, debounce_ms: u32) -> Result<Cleanup> {
    let window = dom::window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let config = config.clone();
    let timer = pending.clone();
    let listener = EventListener::passive(&window, "resize", move |_| {
        let config = config.clone();
        // Replacing the timeout drops, and so cancels, the previous one.
        *timer.borrow_mut() = Some(Timeout::new(debounce_ms, move || {
            if let Err(e) = adjust(&config) {
                log::warn!("Masonry re-layout failed: {}", e);
            }
        }));
    })?;

    Ok(Cleanup::new(move || {
        drop(listener);
        pending.borrow_mut().take();
    }))
}
