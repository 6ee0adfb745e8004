//! The slice of the DOM the behaviors need.

/// An element of the page as seen by the behaviors.
///
/// Class writes take `&self`: like DOM handles, implementors are cheap
/// references to state owned by the host.
pub trait PageElement: Clone {
    /// The element's `id` attribute, if non-empty.
    fn element_id(&self) -> Option<String>;
    /// The raw `href` attribute, if any.
    fn href(&self) -> Option<String>;
    /// Whether the class list contains `class`.
    fn has_class(&self, class: &str) -> bool;
    /// Add `class` to the class list.
    fn add_class(&self, class: &str);
    /// Remove `class` from the class list.
    fn remove_class(&self, class: &str);
    /// Flip `class`, returning whether it is present afterwards.
    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }
    /// Distance (px) from the top of the document.
    fn offset_top(&self) -> f64;
    /// Rendered height (px).
    fn offset_height(&self) -> f64;
}

/// Resolves element ids against the current document.
pub trait ElementLookup<E> {
    /// The element with the given id, if any.
    fn find_by_id(&self, id: &str) -> Option<E>;
}

/// The id an in-page link points at.
///
/// Returns `None` for links that are not in-page (`/about`, `https://...`)
/// and for the bare `#` link, which targets nothing.
pub fn fragment_id(href: &str) -> Option<&str> {
    let fragment = href.trim().strip_prefix('#')?;
    if fragment.is_empty() {
        None
    } else {
        Some(fragment)
    }
}
