use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::dom::{self, Cleanup, EventListener};
use crate::error::Result;

pub const USING_MOUSE_CLASS: &str = "using-mouse";

/// Hides focus rings while the visitor uses a pointer and restores them on Tab.
pub fn init() -> Result<Cleanup> {
    let document = dom::document()?;
    let Some(body) = document.body() else {
        return Ok(Cleanup::none());
    };

    let mouse_body = body.clone();
    let mousedown = EventListener::new(&document, "mousedown", move |_| {
        let _ = mouse_body.class_list().add_1(USING_MOUSE_CLASS);
    })?;

    let keydown = EventListener::new(&document, "keydown", move |event| {
        let is_tab = event
            .dyn_ref::<KeyboardEvent>()
            .map(|event| event.key() == "Tab")
            .unwrap_or(false);
        if is_tab {
            let _ = body.class_list().remove_1(USING_MOUSE_CLASS);
        }
    })?;

    Ok(Cleanup::hold((mousedown, keydown)))
}
