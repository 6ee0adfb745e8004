//! Hamburger button + slide-out menu pair.

use crate::dom::PageElement;

/// The mobile menu. Its open state lives only in the two elements' classes.
#[derive(Debug, Clone)]
pub struct MobileMenu<E> {
    button: E,
    panel: E,
    active_class: String,
    open_class: String,
}

impl<E: PageElement> MobileMenu<E> {
    /// Menu driven by `button`, showing and hiding `panel`.
    pub fn new(
        button: E,
        panel: E,
        active_class: impl Into<String>,
        open_class: impl Into<String>,
    ) -> Self {
        Self {
            button,
            panel,
            active_class: active_class.into(),
            open_class: open_class.into(),
        }
    }

    /// The hamburger button, for listener registration.
    pub fn button(&self) -> &E {
        &self.button
    }

    /// Whether the panel currently carries the open marker.
    pub fn is_open(&self) -> bool {
        self.panel.has_class(&self.open_class)
    }

    /// Flip both markers. The button follows the panel so a pair that was
    /// knocked out of sync by foreign code is realigned on the first toggle.
    pub fn toggle(&self) -> bool {
        let open = self.panel.toggle_class(&self.open_class);
        if open {
            self.button.add_class(&self.active_class);
        } else {
            self.button.remove_class(&self.active_class);
        }
        tracing::debug!(open, "mobile menu toggled");
        open
    }

    /// Close the menu whatever its state.
    pub fn close(&self) {
        self.button.remove_class(&self.active_class);
        self.panel.remove_class(&self.open_class);
    }
}
