//! Smooth scrolling to in-page anchors.

use crate::{
    capability::SmoothScroll,
    dom::{fragment_id, ElementLookup, PageElement},
};

/// What an anchor activation ended up doing.
#[derive(Debug, Clone, PartialEq)]
pub enum AnchorOutcome {
    /// The viewport is scrolling to `top`.
    Scrolled {
        /// Id of the element scrolled to.
        target_id: String,
        /// Requested scroll offset.
        top: f64,
    },
    /// The fragment names no element on the page.
    NoTarget {
        /// The unresolved fragment.
        fragment: String,
    },
    /// The href is not an in-page fragment link.
    NotInPage,
}

/// Scroll offset that puts `target` right below a navbar `navbar_height`
/// pixels tall. May be negative for targets hidden under the navbar; the host
/// clamps it.
pub fn target_scroll_top<E: PageElement>(target: &E, navbar_height: f64) -> f64 {
    target.offset_top() - navbar_height
}

/// Resolves a link href and scrolls to it.
pub fn scroll_to_anchor<E, L, S>(
    href: &str,
    navbar: &E,
    lookup: &L,
    scroller: &S,
) -> AnchorOutcome
where
    E: PageElement,
    L: ElementLookup<E> + ?Sized,
    S: SmoothScroll + ?Sized,
{
    let Some(fragment) = fragment_id(href) else {
        return AnchorOutcome::NotInPage;
    };
    let Some(target) = lookup.find_by_id(fragment) else {
        tracing::debug!(fragment, "anchor target not found");
        return AnchorOutcome::NoTarget {
            fragment: fragment.to_string(),
        };
    };

    let top = target_scroll_top(&target, navbar.offset_height());
    scroller.smooth_scroll_to(top);
    tracing::debug!(fragment, top, "scrolling to anchor");
    AnchorOutcome::Scrolled {
        target_id: fragment.to_string(),
        top,
    }
}
