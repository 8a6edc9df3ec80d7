use log::{error, warn};
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures a homepage feature can hit while wiring itself to the page.
///
/// None of these abort the page: each feature initializes on its own and
/// reports through [`FeatureError::report`], the rest keep running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    #[error("required element `{0}` not found")]
    MissingElement(&'static str),
    #[error("collection has no entries")]
    EmptyCollection,
    #[error("found {slides} slides but {indicators} indicators")]
    CountMismatch { slides: usize, indicators: usize },
    #[error("browser call failed: {0}")]
    Host(String),
}

impl FeatureError {
    /// Missing or empty content only degrades the feature, anything else is
    /// an actual fault.
    pub fn is_degraded(&self) -> bool {
        matches!(self, FeatureError::MissingElement(_) | FeatureError::EmptyCollection)
    }

    pub fn report(&self, feature: &str) {
        if self.is_degraded() {
            warn!("{}: {} - skipping", feature, self);
        } else {
            error!("{}: {}", feature, self);
        }
    }
}

impl From<JsValue> for FeatureError {
    fn from(value: JsValue) -> Self {
        FeatureError::Host(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Looks up the window, which every browser-facing feature starts from.
pub fn window() -> Result<web_sys::Window, FeatureError> {
    web_sys::window().ok_or(FeatureError::MissingElement("window"))
}

pub fn document() -> Result<web_sys::Document, FeatureError> {
    window()?.document().ok_or(FeatureError::MissingElement("document"))
}

/// Runs one feature's setup and reports a failure without propagating it.
pub fn init_feature<T>(feature: &str, setup: impl FnOnce() -> Result<T, FeatureError>) -> Option<T> {
    match setup() {
        Ok(value) => Some(value),
        Err(e) => {
            e.report(feature);
            None
        }
    }
}
