use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::trigger::{Intersection, Threshold, Transition, TriggerRegistry};
use crate::config::RootMargin;
use crate::error::Result;

#[derive(Debug, Clone, Copy)]
pub struct TriggerOptions {
    pub threshold: Threshold,
    pub root_margin: Option<RootMargin>,
}

impl TriggerOptions {
    pub fn threshold(fraction: f64) -> Self {
        Self {
            threshold: Threshold::new(fraction),
            root_margin: None,
        }
    }

    pub fn with_root_margin(mut self, margin: RootMargin) -> Self {
        self.root_margin = Some(margin);
        self
    }
}

struct Watched {
    elements: Vec<Element>,
    registry: TriggerRegistry<usize>,
}

impl Watched {
    fn key_of(&self, target: &Element) -> Option<usize> {
        self.elements.iter().position(|element| element == target)
    }
}

/// Fires `on_reveal` once per element when it first becomes visible enough.
///
/// Dropping the observer disconnects it; elements that never revealed simply
/// stop being watched.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn observe<F>(
        elements: Vec<Element>,
        options: TriggerOptions,
        mut on_reveal: F,
    ) -> Result<Self>
    where
        F: FnMut(&Element) + 'static,
    {
        let mut registry = TriggerRegistry::new(options.threshold);
        for key in 0..elements.len() {
            registry.watch(key);
        }
        let watched = Rc::new(RefCell::new(Watched { elements, registry }));

        let callback = {
            let watched = watched.clone();
            Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        let target = entry.target();
                        let intersection = Intersection {
                            is_intersecting: entry.is_intersecting(),
                            ratio: entry.intersection_ratio(),
                        };

                        let transition = {
                            let mut watched = watched.borrow_mut();
                            match watched.key_of(&target) {
                                Some(key) => watched.registry.record(&key, intersection),
                                None => Transition::Unchanged,
                            }
                        };

                        if transition == Transition::Revealed {
                            observer.unobserve(&target);
                            on_reveal(&target);
                        }
                    }

                    if watched.borrow().registry.is_empty() {
                        log::debug!("All watched elements revealed, disconnecting observer");
                        observer.disconnect();
                    }
                },
            )
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold.fraction()));
        if let Some(margin) = options.root_margin {
            init.set_root_margin(&margin.to_string());
        }
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        for element in watched.borrow().elements.iter() {
            observer.observe(element);
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
