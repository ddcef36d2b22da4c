//! Browser tests, run with `wasm-pack test --headless --firefox frontend`.
#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use showcase::animation::CountUp;
use showcase::config::{
    Config, ContactConfig, CounterConfig, LazyImageConfig, LoaderConfig, MasonryConfig,
    RevealConfig,
};
use showcase::dom;
use showcase::effects::{contact, lazy_images, loader, masonry, reveal, scroll, stats};
use showcase::page::{self, Page};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn mount(tag: &str, class: &str, text: &str) -> Element {
    let document = dom::document().unwrap();
    let element = document.create_element(tag).unwrap();
    element.set_class_name(class);
    element.set_text_content(Some(text));
    element
        .set_attribute("style", "display: block; height: 40px; width: 200px;")
        .unwrap();
    document.body().unwrap().prepend_with_node_1(&element).unwrap();
    element
}

async fn wait_for_load() {
    let document = dom::document().unwrap();
    for _ in 0..200 {
        if dom::has_loaded(&document) {
            return;
        }
        TimeoutFuture::new(10).await;
    }
    panic!("document never finished loading");
}

fn inline_style(element: &Element, property: &str) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value(property)
        .unwrap()
}

#[wasm_bindgen_test]
fn scrolling_to_missing_section_is_a_no_op() {
    assert!(scroll::scroll_to_section("no-such-section").is_ok());
}

#[wasm_bindgen_test]
fn lazy_image_swaps_in_its_source() {
    let image = mount("img", "lazy-test", "");
    image.set_attribute("data-src", "/assets/photo.jpg").unwrap();

    lazy_images::load(&image, &LazyImageConfig::default().source_attribute).unwrap();

    assert!(image.get_attribute("src").unwrap().ends_with("/assets/photo.jpg"));
    assert!(image.get_attribute("data-src").is_none());
    image.remove();
}

#[wasm_bindgen_test]
async fn visible_element_is_revealed_once() {
    let element = mount("div", "reveal-test", "hello");
    let config = RevealConfig {
        selector: ".reveal-test".to_string(),
        ..RevealConfig::default()
    };

    let cleanup = reveal::init(&config).unwrap();
    assert!(cleanup.is_active());
    TimeoutFuture::new(200).await;

    let classes = element.class_list();
    assert!(classes.contains("visible"));
    assert_eq!(classes.length(), 2);
    drop(cleanup);
    element.remove();
}

#[wasm_bindgen_test]
async fn counter_renders_target_with_suffix() {
    let element = mount("span", "count-test", "500");
    stats::count_up(element.clone(), CountUp::new(500, 0.0), "+".to_string()).unwrap();
    TimeoutFuture::new(200).await;

    assert_eq!(element.text_content().unwrap(), "500+");
    element.remove();
}

#[wasm_bindgen_test]
async fn non_numeric_counter_is_left_alone() {
    let element = mount("span", "bad-count-test", "lots");
    let config = CounterConfig {
        selector: ".bad-count-test".to_string(),
        duration_ms: 0.0,
        ..CounterConfig::default()
    };

    let cleanup = stats::init(&config).unwrap();
    TimeoutFuture::new(200).await;

    assert_eq!(element.text_content().unwrap(), "lots");
    drop(cleanup);
    element.remove();
}

#[wasm_bindgen_test]
fn bare_page_only_runs_global_effects() {
    let page = Page::init(&Config::default());
    let names: Vec<_> = page.names().collect();

    assert!(names.contains(&"keyboard navigation"));
    assert!(names.contains(&"visibility change"));
    assert!(!names.contains(&"contact form"));
    assert!(!names.contains(&"parallax"));
}

#[wasm_bindgen_test]
fn stop_disposes_running_page() {
    page::start(Config::default()).unwrap();
    assert!(page::is_running());
    page::stop();
    assert!(!page::is_running());
}

#[wasm_bindgen_test]
async fn loader_is_removed_when_page_already_loaded() {
    wait_for_load().await;
    let overlay = mount("div", "loader-test", "Loading");
    let config = LoaderConfig {
        selector: ".loader-test".to_string(),
        fade_ms: 20,
    };

    // `load` fired long ago, so nothing is left waiting for it.
    let cleanup = loader::init(&config).unwrap();
    assert!(!cleanup.is_active());
    assert_eq!(inline_style(&overlay, "opacity"), "0");

    TimeoutFuture::new(200).await;
    assert!(!overlay.is_connected());
}

#[wasm_bindgen_test]
fn masonry_lets_gallery_images_size_themselves() {
    let document = dom::document().unwrap();
    let gallery = mount("div", "gallery-test", "");
    let item = document.create_element("div").unwrap();
    item.set_class_name("gallery-item");
    let image = document.create_element("img").unwrap();
    image.set_attribute("style", "height: 120px;").unwrap();
    item.append_child(&image).unwrap();
    gallery.append_child(&item).unwrap();

    let config = MasonryConfig {
        gallery_selector: ".gallery-test".to_string(),
        min_width: 0.0,
        ..MasonryConfig::default()
    };
    masonry::adjust(&config).unwrap();

    assert_eq!(inline_style(&image, "height"), "auto");
    gallery.remove();
}

#[wasm_bindgen_test]
async fn visible_stat_counts_up_to_its_seed() {
    let element = mount("span", "stat-test", "500");
    let config = CounterConfig {
        selector: ".stat-test".to_string(),
        duration_ms: 100.0,
        ..CounterConfig::default()
    };

    let cleanup = stats::init(&config).unwrap();
    assert!(cleanup.is_active());
    TimeoutFuture::new(600).await;

    assert_eq!(element.text_content().unwrap(), "500+");
    drop(cleanup);
    element.remove();
}

#[wasm_bindgen_test]
fn page_installs_and_removes_scroll_global() {
    let window = dom::window().unwrap();
    let key = JsValue::from_str(scroll::GLOBAL_NAME);

    let page = Page::init(&Config::default());
    let global = js_sys::Reflect::get(&window, &key).unwrap();
    assert!(global.is_function());
    let function: js_sys::Function = global.unchecked_into();
    assert!(function.call1(&JsValue::NULL, &JsValue::from_str("missing")).is_ok());

    drop(page);
    assert!(js_sys::Reflect::get(&window, &key).unwrap().is_undefined());
}

#[wasm_bindgen_test]
fn contact_form_resets_even_when_alert_fails() {
    let document = dom::document().unwrap();
    let window = dom::window().unwrap();
    let form: HtmlFormElement = document.create_element("form").unwrap().unchecked_into();
    form.set_id("contact-test");
    let input: HtmlInputElement = document.create_element("input").unwrap().unchecked_into();
    input.set_id("contact-test-name");
    form.append_child(&input).unwrap();
    document.body().unwrap().append_child(&form).unwrap();

    let alert_key = JsValue::from_str("alert");
    let failing_alert = js_sys::Function::new_no_args("throw new Error('blocked');");
    js_sys::Reflect::set(&window, &alert_key, &failing_alert).unwrap();

    let config = ContactConfig {
        form_id: "contact-test".to_string(),
        name_id: "contact-test-name".to_string(),
        ..ContactConfig::default()
    };
    let cleanup = contact::init(&config).unwrap();
    assert!(cleanup.is_active());

    input.set_value("Ada");
    let submit = Event::new("submit").unwrap();
    form.dispatch_event(&submit).unwrap();
    assert_eq!(input.value(), "");

    js_sys::Reflect::delete_property(&window, &alert_key).unwrap();
    drop(cleanup);
    form.remove();
}

#[wasm_bindgen_test]
async fn on_load_runs_at_once_after_load_fired() {
    wait_for_load().await;
    let ran = std::rc::Rc::new(std::cell::Cell::new(false));
    let flag = ran.clone();

    let cleanup = dom::on_load(move || flag.set(true)).unwrap();

    assert!(ran.get());
    assert!(!cleanup.is_active());
}
