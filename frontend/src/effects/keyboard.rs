use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use super::scroll;
use crate::config::KeyboardConfig;
use crate::dom::{self, Cleanup, EventListener};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Top,
    Contact,
}

impl Shortcut {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "h" | "H" => Some(Shortcut::Top),
            "c" | "C" => Some(Shortcut::Contact),
            _ => None,
        }
    }
}

pub fn init(config: &KeyboardConfig) -> Result<Cleanup> {
    let document = dom::document()?;
    let contact_section = config.contact_section.clone();

    let listener = EventListener::new(&document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let result = match Shortcut::from_key(&event.key()) {
            Some(Shortcut::Top) => scroll::scroll_to_top(),
            Some(Shortcut::Contact) => scroll::scroll_to_section(&contact_section),
            None => Ok(()),
        };
        if let Err(e) = result {
            log::warn!("Keyboard shortcut failed: {}", e);
        }
    })?;

    Ok(Cleanup::hold(listener))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_both_cases() {
        assert_eq!(Shortcut::from_key("h"), Some(Shortcut::Top));
        assert_eq!(Shortcut::from_key("H"), Some(Shortcut::Top));
        assert_eq!(Shortcut::from_key("c"), Some(Shortcut::Contact));
        assert_eq!(Shortcut::from_key("C"), Some(Shortcut::Contact));
    }

    #[test]
    fn ignores_other_keys() {
        for key in ["Tab", "Enter", "x", "home", ""] {
            assert_eq!(Shortcut::from_key(key), None);
        }
    }
}
