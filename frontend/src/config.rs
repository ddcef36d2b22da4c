use std::fmt;

use log::Level;
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::Result;

/// Global the page can define before the wasm module loads to override defaults.
pub const CONFIG_GLOBAL: &str = "__SHOWCASE_CONFIG__";

/// Must match the hero `<img>` source exactly so the preload is reused.
pub const HERO_IMAGE_URL: &str = concat!(
    "https://images.unsplash.com/photo-1760890719879-9cbf3599d775",
    "?crop=entropy&cs=tinysrgb&fit=max&fm=jpg",
    "&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxmYXNoaW9uJTIwcnVud2F5JTIwYmFja3N0YWdlJTIwbHV4dXJ5fGVufDF8fHx8MTc3MDc0ODg2N3ww",
    "&ixlib=rb-4.1.0&q=80&w=1920",
);

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub reveal: RevealConfig,
    pub counter: CounterConfig,
    pub lazy_images: LazyImageConfig,
    pub parallax: ParallaxConfig,
    pub header: HeaderConfig,
    pub masonry: MasonryConfig,
    pub loader: LoaderConfig,
    pub contact: ContactConfig,
    pub keyboard: KeyboardConfig,
    pub resize_debounce_ms: u32,
    pub hero_image_url: Option<String>,
    pub dev_hosts: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reveal: RevealConfig::default(),
            counter: CounterConfig::default(),
            lazy_images: LazyImageConfig::default(),
            parallax: ParallaxConfig::default(),
            header: HeaderConfig::default(),
            masonry: MasonryConfig::default(),
            loader: LoaderConfig::default(),
            contact: ContactConfig::default(),
            keyboard: KeyboardConfig::default(),
            resize_debounce_ms: 250,
            hero_image_url: Some(HERO_IMAGE_URL.to_string()),
            dev_hosts: vec!["localhost".to_string(), "127.0.0.1".to_string()],
        }
    }
}

impl Config {
    /// Reads the page-provided override object, falling back to defaults when
    /// it is absent or malformed.
    pub fn load() -> Self {
        match Self::from_window() {
            Ok(Some(config)) => {
                log::info!("Loaded page configuration from window.{}", CONFIG_GLOBAL);
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("Ignoring window.{}: {}", CONFIG_GLOBAL, e);
                Self::default()
            }
        }
    }

    pub fn from_window() -> Result<Option<Self>> {
        let Some(window) = web_sys::window() else {
            return Ok(None);
        };
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))?;
        if value.is_undefined() || value.is_null() {
            return Ok(None);
        }
        Ok(Some(serde_wasm_bindgen::from_value(value)?))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_dev_host(&self, hostname: &str) -> bool {
        self.dev_hosts.iter().any(|host| host == hostname)
    }
}

/// Viewport margin in pixels, rendered in CSS shorthand order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RootMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl RootMargin {
    pub fn bottom(bottom: f64) -> Self {
        Self {
            bottom,
            ..Self::default()
        }
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    pub selector: String,
    pub visible_class: String,
    pub threshold: f64,
    pub root_margin: RootMargin,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".animate-on-scroll".to_string(),
            visible_class: "visible".to_string(),
            threshold: 0.1,
            root_margin: RootMargin::bottom(-50.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CounterConfig {
    pub selector: String,
    pub threshold: f64,
    pub duration_ms: f64,
    pub suffix: String,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            selector: ".stat-number".to_string(),
            threshold: 0.5,
            duration_ms: 2000.0,
            suffix: "+".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LazyImageConfig {
    pub selector: String,
    pub source_attribute: String,
}

impl Default for LazyImageConfig {
    fn default() -> Self {
        Self {
            selector: "img[data-src]".to_string(),
            source_attribute: "data-src".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParallaxConfig {
    pub section_selector: String,
    pub image_selector: String,
    pub rate: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            section_selector: ".hero".to_string(),
            image_selector: ".hero-image".to_string(),
            rate: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderConfig {
    pub selector: String,
    pub scrolled_class: String,
    pub offset: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            selector: "header".to_string(),
            scrolled_class: "scrolled".to_string(),
            offset: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MasonryConfig {
    pub gallery_selector: String,
    pub item_selector: String,
    pub min_width: f64,
}

impl Default for MasonryConfig {
    fn default() -> Self {
        Self {
            gallery_selector: ".gallery-grid".to_string(),
            item_selector: ".gallery-item".to_string(),
            min_width: 768.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoaderConfig {
    pub selector: String,
    pub fade_ms: u32,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            selector: ".loader".to_string(),
            fade_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactConfig {
    pub form_id: String,
    pub name_id: String,
    pub email_id: String,
    pub message_id: String,
    pub confirmation: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_id: "contactForm".to_string(),
            name_id: "name".to_string(),
            email_id: "email".to_string(),
            message_id: "message".to_string(),
            confirmation: "Thank you for your message! I will get back to you soon.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyboardConfig {
    pub contact_section: String,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            contact_section: "contact".to_string(),
        }
    }
}
