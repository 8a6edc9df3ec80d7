use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose slideshow/navigation logs while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Announcement rotation.
pub mod slideshow {
    /// Time between automatic advances.
    pub const PERIOD_MS: u32 = 3_000;
    /// Class carried by the visible slide and its indicator.
    pub const ACTIVE_CLASS: &str = "active";
    pub const SLIDE_CLASS: &str = "slide";
    pub const INDICATOR_CLASS: &str = "indicator";
}

pub mod scroll {
    /// Height of the fixed header, subtracted from every anchor target.
    pub const HEADER_OFFSET: f64 = 80.0;
    /// Scroll depth after which the header switches to its raised style.
    pub const HEADER_RAISE_THRESHOLD: f64 = 100.0;
}

pub mod parallax {
    pub const CONTENT_RATE: f64 = 0.5;
    pub const BACKGROUND_RATE: f64 = 0.3;
}

pub mod typing {
    pub const START_DELAY_MS: u32 = 500;
    pub const CHAR_DELAY_MS: u32 = 80;
    /// How long the cursor stays after the last character.
    pub const CURSOR_HOLD_MS: u32 = 1_000;
}

pub mod reveal {
    pub const THRESHOLD: f64 = 0.1;
    /// Fire 50px before the element actually enters the viewport.
    pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";
    pub const ANIMATE_CLASS: &str = "animate-text";
    pub const VISIBLE_CLASS: &str = "visible";
    /// Each animated element starts 1/10 s after the previous one.
    pub const STAGGER_STEPS_PER_SECOND: f64 = 10.0;
}

pub mod contact {
    /// Simulated round trip of a submission.
    pub const SENDING_MS: u32 = 1_000;
    /// How long "Message Sent!" stays before the form resets.
    pub const RESET_MS: u32 = 2_000;
}

pub mod toast {
    pub const ENTER_DELAY_MS: u32 = 100;
    pub const VISIBLE_MS: u32 = 3_000;
    pub const EXIT_MS: u32 = 300;
}

pub mod hero {
    pub const PRESS_FEEDBACK_MS: u32 = 150;
}
