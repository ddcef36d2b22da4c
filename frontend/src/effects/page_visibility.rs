use crate::dom::{self, Cleanup, EventListener};
use crate::error::Result;

pub fn init() -> Result<Cleanup> {
    let document = dom::document()?;
    let visibility_document = document.clone();
    let listener = EventListener::new(&document, "visibilitychange", move |_| {
        if visibility_document.hidden() {
            log::info!("Page is hidden - pausing animations");
        } else {
            log::info!("Page is visible - resuming animations");
        }
    })?;
    Ok(Cleanup::hold(listener))
}
