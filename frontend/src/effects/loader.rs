use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::config::LoaderConfig;
use crate::dom::{self, Cleanup};
use crate::error::Result;

/// Fades the loading overlay out and detaches it from the page.
pub fn remove(config: &LoaderConfig) -> Result<()> {
    let document = dom::document()?;
    let Some(loader) = dom::query(&document, &config.selector)? else {
        return Ok(());
    };
    if let Some(html) = dom::as_html(&loader) {
        html.style().set_property("opacity", "0")?;
    }

    let fade_ms = config.fade_ms;
    spawn_local(async move {
        TimeoutFuture::new(fade_ms).await;
        loader.remove();
    });
    Ok(())
}

/// Removes the loader once the window has finished loading, straight away if
/// that already happened before the module started.
pub fn init(config: &LoaderConfig) -> Result<Cleanup> {
    let document = dom::document()?;
    if dom::query(&document, &config.selector)?.is_none() {
        return Ok(Cleanup::none());
    }

    let config = config.clone();
    dom::on_load(move || {
        if let Err(e) = remove(&config) {
            log::warn!("Could not remove loader: {}", e);
        }
    })
}
