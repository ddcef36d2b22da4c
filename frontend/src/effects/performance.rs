use gloo_timers::callback::Timeout;
use web_sys::Window;

use crate::config::Config;
use crate::dom::{self, Cleanup};
use crate::error::Result;

/// Milliseconds from navigation start to the end of the load event, if the
/// load event has finished.
pub fn load_time(navigation_start: f64, load_event_end: f64) -> Option<f64> {
    (navigation_start > 0.0 && load_event_end >= navigation_start)
        .then(|| load_event_end - navigation_start)
}

/// Logs page load time, but only when served from a development host.
pub fn init(config: &Config) -> Result<Cleanup> {
    let window = dom::window()?;
    let hostname = window.location().hostname()?;
    if !config.is_dev_host(&hostname) || window.performance().is_none() {
        return Ok(Cleanup::none());
    }

    dom::on_load(move || {
        // loadEventEnd is only filled in after the load handlers return.
        Timeout::new(0, move || log_load_time(&window)).forget();
    })
}

fn log_load_time(window: &Window) {
    let Some(performance) = window.performance() else {
        return;
    };
    let timing = performance.timing();
    match load_time(timing.navigation_start(), timing.load_event_end()) {
        Some(ms) => log::info!("Page load time: {}ms", ms),
        None => log::debug!("Page load timing not available yet"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_from_navigation_start() {
        assert_eq!(load_time(1_000.0, 1_850.0), Some(850.0));
        assert_eq!(load_time(1_000.0, 1_000.0), Some(0.0));
    }

    #[test]
    fn unfinished_load_has_no_time() {
        assert_eq!(load_time(1_000.0, 0.0), None);
        assert_eq!(load_time(0.0, 0.0), None);
    }
}
