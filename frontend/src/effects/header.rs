use crate::config::HeaderConfig;
use crate::dom::{self, Cleanup, EventListener};
use crate::error::Result;

pub fn is_scrolled(scroll_y: f64, offset: f64) -> bool {
    scroll_y > offset
}

/// Toggles the scrolled class on the page header as the visitor scrolls.
pub fn init(config: &HeaderConfig) -> Result<Cleanup> {
    let window = dom::window()?;
    let document = dom::document()?;
    let Some(header) = dom::query(&document, &config.selector)? else {
        return Ok(Cleanup::none());
    };

    let offset = config.offset;
    let class = config.scrolled_class.clone();
    let scroll_window = window.clone();
    let listener = EventListener::passive(&window, "scroll", move |_| {
        let classes = header.class_list();
        let _ = if is_scrolled(dom::scroll_y(&scroll_window), offset) {
            classes.add_1(&class)
        } else {
            classes.remove_1(&class)
        };
    })?;

    Ok(Cleanup::hold(listener))
}
