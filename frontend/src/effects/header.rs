use crate::config::scroll::HEADER_RAISE_THRESHOLD;

/// Header look depending on how far the page is scrolled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderStyle {
    Resting,
    Raised,
}

impl HeaderStyle {
    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > HEADER_RAISE_THRESHOLD {
            HeaderStyle::Raised
        } else {
            HeaderStyle::Resting
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            HeaderStyle::Resting => "rgba(255, 255, 255, 0.95)",
            HeaderStyle::Raised => "rgba(255, 255, 255, 0.98)",
        }
    }

    pub fn box_shadow(self) -> &'static str {
        match self {
            HeaderStyle::Resting => "0 2px 20px rgba(0, 0, 0, 0.1)",
            HeaderStyle::Raised => "0 2px 30px rgba(0, 0, 0, 0.15)",
        }
    }

    pub fn css(self) -> String {
        format!("background: {}; box-shadow: {};", self.background(), self.box_shadow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raises_only_past_the_threshold() {
        assert_eq!(HeaderStyle::for_scroll(0.0), HeaderStyle::Resting);
        assert_eq!(HeaderStyle::for_scroll(100.0), HeaderStyle::Resting);
        assert_eq!(HeaderStyle::for_scroll(100.5), HeaderStyle::Raised);
        assert_eq!(HeaderStyle::for_scroll(2_400.0), HeaderStyle::Raised);
    }

    #[test]
    fn raised_header_is_more_opaque_with_a_deeper_shadow() {
        assert_eq!(
            HeaderStyle::Raised.css(),
            "background: rgba(255, 255, 255, 0.98); box-shadow: 0 2px 30px rgba(0, 0, 0, 0.15);"
        );
        assert_eq!(
            HeaderStyle::Resting.css(),
            "background: rgba(255, 255, 255, 0.95); box-shadow: 0 2px 20px rgba(0, 0, 0, 0.1);"
        );
    }
}
