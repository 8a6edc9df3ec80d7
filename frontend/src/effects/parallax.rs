use crate::config::parallax::{BACKGROUND_RATE, CONTENT_RATE};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxOffsets {
    pub content: f64,
    pub background: f64,
}

impl ParallaxOffsets {
    /// `None` once the hero has scrolled out of view; callers keep the last
    /// offsets they applied.
    pub fn for_scroll(scrolled: f64, viewport_height: f64) -> Option<Self> {
        if scrolled >= viewport_height {
            return None;
        }
        Some(Self {
            content: scrolled * CONTENT_RATE,
            background: scrolled * BACKGROUND_RATE,
        })
    }

    pub fn content_transform(&self) -> String {
        format!("transform: translateY({}px);", self.content)
    }

    pub fn background_transform(&self) -> String {
        format!("transform: translateY({}px);", self.background)
    }
}
