use log::{error, info};

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(showcase::config::log_level()).expect("error initializing log");

    info!("Starting application");
    if let Err(e) = showcase::run() {
        error!("Page effects could not start: {}", e);
    }
}
