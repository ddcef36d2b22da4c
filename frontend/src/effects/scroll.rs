use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

use crate::dom::{self, Cleanup};
use crate::error::Result;

/// Name under which inline `onclick` handlers reach [`scroll_to_section`].
pub const GLOBAL_NAME: &str = "scrollToSection";

/// Smoothly scrolls the element with `section_id` to the top of the viewport.
/// Does nothing when no such element exists.
pub fn scroll_to_section(section_id: &str) -> Result<()> {
    let document = dom::document()?;
    if let Some(element) = document.get_element_by_id(section_id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    } else {
        log::debug!("No section #{} to scroll to", section_id);
    }
    Ok(())
}

pub fn scroll_to_top() -> Result<()> {
    let window = dom::window()?;
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Installs `window.scrollToSection` for inline handlers in the markup. The
/// property is deleted again when the handle drops.
pub fn expose_global() -> Result<Cleanup> {
    let window = dom::window()?;
    let callback = Closure::<dyn Fn(String)>::new(|section_id: String| {
        if let Err(e) = scroll_to_section(&section_id) {
            log::warn!("{}({}) failed: {}", GLOBAL_NAME, section_id, e);
        }
    });
    let key = JsValue::from_str(GLOBAL_NAME);
    js_sys::Reflect::set(&window, &key, callback.as_ref())?;

    Ok(Cleanup::new(move || {
        let _ = js_sys::Reflect::delete_property(&window, &key);
        drop(callback);
    }))
}
