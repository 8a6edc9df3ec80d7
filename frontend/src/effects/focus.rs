use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent};

use crate::error::{self, FeatureError};

pub const KEYBOARD_CLASS: &str = "keyboard-navigation";

pub const FOCUS_CSS: &str = r#"
.keyboard-navigation *:focus {
    outline: 2px solid #1e40af !important;
    outline-offset: 2px !important;
}
"#;

/// Whether focus rings should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusMode {
    Pointer,
    Keyboard,
}

impl FocusMode {
    pub fn on_key(self, key: &str) -> Self {
        if key == "Tab" {
            FocusMode::Keyboard
        } else {
            self
        }
    }

    pub fn on_mouse_down(self) -> Self {
        FocusMode::Pointer
    }
}

fn apply(document: &Document, mode: FocusMode) {
    if let Some(body) = document.body() {
        if let Err(e) = body
            .class_list()
            .toggle_with_force(KEYBOARD_CLASS, mode == FocusMode::Keyboard)
        {
            log::error!("Failed to toggle {} on body: {:?}", KEYBOARD_CLASS, e);
        }
    }
}

/// Shows focus rings while the user navigates with Tab and hides them again
/// on the next mouse press. Listeners are removed on drop.
pub struct FocusIndicators {
    document: Document,
    on_keydown: Closure<dyn Fn(KeyboardEvent)>,
    on_mousedown: Closure<dyn Fn()>,
}

impl FocusIndicators {
    pub fn install() -> Result<Self, FeatureError> {
        let document = error::document()?;

        let doc = document.clone();
        let on_keydown = Closure::<dyn Fn(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if FocusMode::Pointer.on_key(&event.key()) == FocusMode::Keyboard {
                apply(&doc, FocusMode::Keyboard);
            }
        });
        let doc = document.clone();
        let on_mousedown = Closure::<dyn Fn()>::new(move || {
            apply(&doc, FocusMode::Keyboard.on_mouse_down());
        });

        document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
        document.add_event_listener_with_callback("mousedown", on_mousedown.as_ref().unchecked_ref())?;

        Ok(Self { document, on_keydown, on_mousedown })
    }
}

impl Drop for FocusIndicators {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.on_keydown.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("mousedown", self.on_mousedown.as_ref().unchecked_ref());
    }
}
