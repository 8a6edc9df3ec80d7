use log::debug;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::config::scroll::HEADER_OFFSET;
use crate::error::{self, FeatureError};

/// Page offset that puts an element just below the fixed header.
pub fn target_offset(element_top: f64, page_y_offset: f64) -> f64 {
    element_top + page_y_offset - HEADER_OFFSET
}

/// Only same-page anchors are handled here; everything else navigates
/// normally.
pub fn is_in_page_anchor(href: &str) -> bool {
    href.len() > 1 && href.starts_with('#')
}

/// Smoothly scrolls to `selector` (e.g. `#programs`). Returns `Ok(false)`
/// when the page has no such section.
pub fn scroll_to_section(selector: &str) -> Result<bool, FeatureError> {
    let window = error::window()?;
    let document = error::document()?;
    let target = match document.query_selector(selector)? {
        Some(target) => target,
        None => {
            debug!("No scroll target for {}", selector);
            return Ok(false);
        }
    };

    let top = target_offset(target.get_bounding_client_rect().top(), window.page_y_offset()?);
    let mut options = ScrollToOptions::new();
    options.top(top);
    options.behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_accounts_for_the_fixed_header() {
        assert_eq!(target_offset(500.0, 0.0), 420.0);
        assert_eq!(target_offset(-120.0, 1_000.0), 800.0);
    }

    #[test]
    fn recognises_in_page_anchors() {
        assert!(is_in_page_anchor("#faculty"));
        assert!(!is_in_page_anchor("#"));
        assert!(!is_in_page_anchor("/programs"));
        assert!(!is_in_page_anchor("https://example.edu/#news"));
    }
}
