use log::error;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlCollection};
use yew::NodeRef;

use super::controller::Activatable;
use crate::config::slideshow::{ACTIVE_CLASS, INDICATOR_CLASS, SLIDE_CLASS};
use crate::error::FeatureError;

impl Activatable for Element {
    fn set_active(&self, active: bool) {
        if let Err(e) = self.class_list().toggle_with_force(ACTIVE_CLASS, active) {
            error!("Failed to toggle {} on slideshow element: {:?}", ACTIVE_CLASS, e);
        }
    }
}

fn collect(collection: HtmlCollection) -> Vec<Element> {
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}

/// Slides and indicators in document order, read once from the container.
pub struct Captured {
    pub slides: Vec<Element>,
    pub indicators: Vec<Element>,
}

pub fn capture(container: &NodeRef) -> Result<Captured, FeatureError> {
    let container = container
        .get()
        .and_then(|node| node.dyn_into::<Element>().ok())
        .ok_or(FeatureError::MissingElement(".slideshow"))?;

    Ok(Captured {
        slides: collect(container.get_elements_by_class_name(SLIDE_CLASS)),
        indicators: collect(container.get_elements_by_class_name(INDICATOR_CLASS)),
    })
}
