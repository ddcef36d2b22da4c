use log::info;
use wasm_bindgen::prelude::*;

pub mod animation;
pub mod config;
pub mod dom;
pub mod error;
pub mod page;

pub mod visibility {
    pub mod observer;
    pub mod trigger;
}

pub mod effects {
    pub mod accessibility;
    pub mod contact;
    pub mod header;
    pub mod images;
    pub mod keyboard;
    pub mod lazy_images;
    pub mod loader;
    pub mod masonry;
    pub mod page_visibility;
    pub mod parallax;
    pub mod performance;
    pub mod reveal;
    pub mod scroll;
    pub mod stats;
}

pub use config::Config;
pub use error::{Error, Result};

/// Loads the page configuration and schedules every page effect.
pub fn run() -> Result<()> {
    info!("Starting page effects");
    page::start(Config::load())
}

/// Module export of the same function `Page::init` installs on `window` for
/// inline `onclick` handlers.
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(section_id: &str) {
    if let Err(e) = effects::scroll::scroll_to_section(section_id) {
        log::warn!("scrollToSection({}) failed: {}", section_id, e);
    }
}

#[wasm_bindgen(js_name = disposePageEffects)]
pub fn dispose_page_effects() {
    page::stop();
}
