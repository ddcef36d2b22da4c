use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::config::ContactConfig;
use crate::dom::{self, Cleanup, EventListener};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    fn read(document: &Document, config: &ContactConfig) -> Self {
        Self {
            name: field_value(document, &config.name_id),
            email: field_value(document, &config.email_id),
            message: field_value(document, &config.message_id),
        }
    }
}

fn field_value(document: &Document, id: &str) -> String {
    let Some(element) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else {
        String::new()
    }
}

/// Intercepts contact form submissions. Nothing leaves the page: the message
/// is logged, the visitor is thanked and the form is cleared.
pub fn init(config: &ContactConfig) -> Result<Cleanup> {
    let document = dom::document()?;
    let Some(form) = document
        .get_element_by_id(&config.form_id)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(Cleanup::none());
    };

    let config = config.clone();
    let submitted_form = form.clone();
    let listener = EventListener::new(&form, "submit", move |event| {
        event.prevent_default();

        let message = ContactMessage::read(&document, &config);
        match serde_json::to_string(&message) {
            Ok(json) => log::debug!("Contact form submitted: {}", json),
            Err(e) => log::warn!("Could not serialize contact message: {}", e),
        }

        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(&config.confirmation) {
                log::warn!("Could not show contact confirmation: {:?}", e);
            }
        }
        submitted_form.reset();
    })?;

    Ok(Cleanup::hold(listener))
}
