//! Host capabilities the behaviors depend on.
//!
//! Each has a native implementation backed by the browser and a fallback that
//! works without it; the frontend picks one per capability at startup.

use std::convert::Infallible;

use crate::{dom::PageElement, reveal::FadeInRevealer};

/// Smoothly moves the viewport to a vertical offset.
pub trait SmoothScroll {
    /// Start scrolling towards `top`. Returns immediately.
    fn smooth_scroll_to(&self, top: f64);
}

/// Starts revealing fade targets.
pub trait RevealCapability<E: PageElement> {
    /// Error raised when watching cannot start.
    type Error;

    /// Reveal `targets` through `revealer` as they come into view.
    fn watch(&self, targets: &[E], revealer: FadeInRevealer) -> Result<(), Self::Error>;
}

/// Fallback for hosts without intersection observation: everything is shown
/// right away.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateReveal;

impl<E: PageElement> RevealCapability<E> for ImmediateReveal {
    type Error = Infallible;

    fn watch(&self, targets: &[E], revealer: FadeInRevealer) -> Result<(), Self::Error> {
        let revealed = revealer.reveal_all(targets);
        tracing::debug!(revealed, "revealed fade targets without observer");
        Ok(())
    }
}
