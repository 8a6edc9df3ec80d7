use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::error::{self, FeatureError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageVisibility {
    Visible,
    Hidden,
}

impl PageVisibility {
    pub fn from_hidden(hidden: bool) -> Self {
        if hidden {
            PageVisibility::Hidden
        } else {
            PageVisibility::Visible
        }
    }

    pub fn log(self) {
        match self {
            PageVisibility::Hidden => info!("Page hidden - optimizing performance"),
            PageVisibility::Visible => info!("Page visible - resuming normal operation"),
        }
    }
}

/// `visibilitychange` subscription, detached again on drop.
pub struct VisibilityListener {
    document: Document,
    callback: Closure<dyn Fn()>,
}

impl VisibilityListener {
    pub fn attach(on_change: impl Fn(PageVisibility) + 'static) -> Result<Self, FeatureError> {
        let document = error::document()?;
        let doc = document.clone();
        let callback = Closure::<dyn Fn()>::new(move || {
            on_change(PageVisibility::from_hidden(doc.hidden()));
        });
        document.add_event_listener_with_callback("visibilitychange", callback.as_ref().unchecked_ref())?;
        Ok(Self { document, callback })
    }
}

impl Drop for VisibilityListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("visibilitychange", self.callback.as_ref().unchecked_ref());
    }
}
