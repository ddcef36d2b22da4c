use std::cell::RefCell;


use crate::config::Config;
use crate::dom::{self, Cleanup, EventListener};
use crate::effects::{
    accessibility, contact, header, images, keyboard, lazy_images, loader, masonry, page_visibility,
    parallax, performance, reveal, scroll, stats,
};
use crate::error::Result;

thread_local! {
    static ACTIVE: RefCell<Option<Page>> = RefCell::new(None);
    static PENDING: RefCell<Option<EventListener>> = RefCell::new(None);
}

/// Every effect running on the page. Dropping it removes all listeners and
/// disconnects all observers.
pub struct Page {
    effects: Vec<(&'static str, Cleanup)>,
}

impl Page {
    pub fn init(config: &Config) -> Self {
        let mut page = Page {
            effects: Vec::new(),
        };

        page.attach("scrollToSection global", scroll::expose_global());
        page.attach("scroll animations", reveal::init(&config.reveal));
        page.attach("contact form", contact::init(&config.contact));
        page.attach("parallax", parallax::init(&config.parallax));
        page.attach("accessibility", accessibility::init());

        page.attach(
            "hero preload",
            images::preload(config.hero_image_url.as_deref()),
        );
        page.attach("layout shift", images::prevent_layout_shift());
        page.attach("lazy images", lazy_images::init(&config.lazy_images));

        page.attach("stats counter", stats::init(&config.counter));
        if let Err(e) = masonry::adjust(&config.masonry) {
            log::warn!("Masonry layout failed: {}", e);
        }
        page.attach(
            "resize",
            masonry::init_resize(&config.masonry, config.resize_debounce_ms),
        );
        page.attach("keyboard navigation", keyboard::init(&config.keyboard));
        page.attach("header", header::init(&config.header));
        page.attach("loader", loader::init(&config.loader));
        page.attach("visibility change", page_visibility::init());
        page.attach("performance", performance::init(config));

        log::info!("Page effects ready ({} active)", page.active());
        page
    }

    fn attach(&mut self, name: &'static str, result: Result<Cleanup>) {
        match result {
            Ok(cleanup) if cleanup.is_active() => {
                log::debug!("Initialized {}", name);
                self.effects.push((name, cleanup));
            }
            Ok(_) => log::debug!("Nothing left running for {}", name),
            Err(e) => log::warn!("Failed to initialize {}: {}", name, e),
        }
    }

    pub fn active(&self) -> usize {
        self.effects.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.effects.iter().map(|(name, _)| *name)
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        log::debug!("Tearing down {} page effects", self.effects.len());
        // Reverse order, so later effects go first.
        while let Some((_, cleanup)) = self.effects.pop() {
            drop(cleanup);
        }
    }
}

/// Starts all effects now if the document is parsed, or on DOMContentLoaded.
pub fn start(config: Config) -> Result<()> {
    let document = dom::document()?;
    if document.ready_state() != "loading" {
        install(Page::init(&config));
        return Ok(());
    }

    let listener = EventListener::new(&document, "DOMContentLoaded", move |_| {
        install(Page::init(&config));
        // Cannot drop the listener from inside its own callback; stop() or a
        // later start() clears it.
    })?;
    PENDING.with(|pending| *pending.borrow_mut() = Some(listener));
    Ok(())
}

fn install(page: Page) {
    let previous = ACTIVE.with(|active| active.borrow_mut().replace(page));
    drop(previous);
}

/// Tears down every running effect.
pub fn stop() {
    let pending = PENDING.with(|pending| pending.borrow_mut().take());
    drop(pending);
    let page = ACTIVE.with(|active| active.borrow_mut().take());
    if page.is_some() {
        log::info!("Page effects disposed");
    }
    drop(page);
}

pub fn is_running() -> bool {
    ACTIVE.with(|active| active.borrow().is_some())
}
