use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::reveal::{ANIMATE_CLASS, ROOT_MARGIN, STAGGER_STEPS_PER_SECOND, THRESHOLD, VISIBLE_CLASS};
use crate::error::{self, FeatureError};

/// Transition delay for the `index`-th animated element.
pub fn stagger_delay(index: usize) -> String {
    format!("{}s", index as f64 / STAGGER_STEPS_PER_SECOND)
}

/// One-shot reveal of every `.animate-text` element as it scrolls into view.
/// Disconnects when dropped.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn observe_page() -> Result<Self, FeatureError> {
        let document = error::document()?;

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Err(e) = target.class_list().add_1(VISIBLE_CLASS) {
                        error!("Failed to reveal element: {:?}", e);
                    }
                    observer.unobserve(&target);
                }
            },
        );

        let mut options = IntersectionObserverInit::new();
        options.threshold(&JsValue::from_f64(THRESHOLD));
        options.root_margin(ROOT_MARGIN);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let elements = document.get_elements_by_class_name(ANIMATE_CLASS);
        let count = elements.length();
        for index in 0..count {
            let Some(element) = elements.item(index) else {
                continue;
            };
            if let Some(element) = element.dyn_ref::<HtmlElement>() {
                element
                    .style()
                    .set_property("transition-delay", &stagger_delay(index as usize))?;
            }
            observer.observe(&element);
        }
        info!("Observing {} elements for scroll animations", count);

        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
