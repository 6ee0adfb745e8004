//! Entrance animations for elements scrolled into view.

use crate::{config::SiteConfig, dom::PageElement};

/// One intersection report for a watched element.
#[derive(Debug, Clone)]
pub struct IntersectionSample<E> {
    /// The watched element.
    pub target: E,
    /// Whether the element crossed into the trigger region.
    pub is_intersecting: bool,
    /// Visible fraction reported by the host.
    pub ratio: f64,
}

/// Options for a native intersection observer.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    /// Visible fraction that fires the observer.
    pub threshold: f64,
    /// CSS margin around the root, shrinking the bottom edge.
    pub root_margin: String,
}

/// Marks fade targets visible, once.
#[derive(Debug, Clone, PartialEq)]
pub struct FadeInRevealer {
    visible_class: String,
    options: ObserverOptions,
}

impl FadeInRevealer {
    /// Revealer using the thresholds and marker class of `config`.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            visible_class: config.classes.visible.clone(),
            options: ObserverOptions {
                threshold: config.fade_threshold,
                root_margin: config.fade_root_margin(),
            },
        }
    }

    /// Options to create the observer with.
    pub fn observer_options(&self) -> &ObserverOptions {
        &self.options
    }

    /// Mark `target` visible. Returns `false` if it already was.
    pub fn reveal<E: PageElement>(&self, target: &E) -> bool {
        if target.has_class(&self.visible_class) {
            return false;
        }
        target.add_class(&self.visible_class);
        true
    }

    /// Mark every target visible, returning how many changed.
    pub fn reveal_all<E: PageElement>(&self, targets: &[E]) -> usize {
        targets.iter().filter(|target| self.reveal(*target)).count()
    }

    /// Handle one observer report. Returns `true` when the target is done and
    /// should no longer be observed.
    ///
    /// The host only reports crossings of the configured threshold, so
    /// `is_intersecting` is the trigger; the ratio is informational.
    pub fn handle<E: PageElement>(&self, sample: &IntersectionSample<E>) -> bool {
        if !sample.is_intersecting {
            return false;
        }
        if self.reveal(&sample.target) {
            tracing::trace!(
                id = ?sample.target.element_id(),
                ratio = sample.ratio,
                "fade target revealed"
            );
        }
        true
    }
}
