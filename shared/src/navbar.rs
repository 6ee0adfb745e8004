//! Navbar styling driven by the scroll offset.

use crate::dom::PageElement;

/// Marks the navbar as scrolled once the page leaves the top area.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollStyler {
    threshold: f64,
    class: String,
}

impl ScrollStyler {
    /// Styler adding `class` above `threshold` pixels of scroll.
    pub fn new(threshold: f64, class: impl Into<String>) -> Self {
        Self {
            threshold,
            class: class.into(),
        }
    }

    /// Whether `scroll_y` counts as scrolled. The threshold itself does not.
    pub fn is_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.threshold
    }

    /// Sync the navbar marker with `scroll_y` and return the new state.
    pub fn apply<E: PageElement>(&self, navbar: &E, scroll_y: f64) -> bool {
        let scrolled = self.is_scrolled(scroll_y);
        if scrolled == navbar.has_class(&self.class) {
            return scrolled;
        }
        if scrolled {
            navbar.add_class(&self.class);
        } else {
            navbar.remove_class(&self.class);
        }
        tracing::debug!(scroll_y, scrolled, "navbar style changed");
        scrolled
    }
}
