//! Interaction logic for the showcase site, independent of the browser.
//!
//! The frontend crate implements [`PageElement`] for real DOM nodes and feeds
//! events into a [`SiteController`]; tests do the same with in-memory fakes.

pub mod anchor;
pub mod capability;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod highlight;
pub mod menu;
pub mod navbar;
pub mod reveal;
pub mod scroll;

pub use anchor::AnchorOutcome;
pub use capability::{ImmediateReveal, RevealCapability, SmoothScroll};
pub use config::{HighlightTieBreak, SiteConfig};
pub use controller::{PageElements, SiteController};
pub use dom::{ElementLookup, PageElement};
pub use error::SetupError;
pub use reveal::{FadeInRevealer, IntersectionSample};
pub use scroll::ScrollAnimation;
