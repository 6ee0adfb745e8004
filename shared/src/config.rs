//! Tunables for the page interactions.
//!
//! Every field has a default matching the stock stylesheet and markup, so an
//! empty JSON object (or no config at all) yields a working setup.

use serde::Deserialize;

use crate::error::SetupError;

const DEFAULT_SCROLLED_THRESHOLD: f64 = 50.0;
const DEFAULT_FADE_THRESHOLD: f64 = 0.1;
const DEFAULT_FADE_BOTTOM_MARGIN: f64 = 50.0;
const DEFAULT_HIGHLIGHT_LOOKAHEAD: f64 = 100.0;
const DEFAULT_HIGHLIGHT_GAP: f64 = 20.0;
const DEFAULT_SMOOTH_SCROLL_DURATION_MS: f64 = 400.0;

/// Which section wins when several section ranges contain the effective
/// scroll position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightTieBreak {
    /// The earliest section in document order.
    First,
    /// The latest section in document order.
    #[default]
    Last,
}

/// CSS marker classes toggled by the behaviors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MarkerClasses {
    /// Added to the navbar once the page is scrolled past the threshold.
    pub scrolled: String,
    /// Added to the hamburger button while the menu is open.
    pub active: String,
    /// Added to the mobile menu panel while it is open.
    pub open: String,
    /// Added to fade targets once they entered the viewport.
    pub visible: String,
    /// Added to the nav link of the section currently in view.
    pub emphasis: String,
}

impl Default for MarkerClasses {
    fn default() -> Self {
        Self {
            scrolled: "scrolled".to_string(),
            active: "active".to_string(),
            open: "open".to_string(),
            visible: "visible".to_string(),
            emphasis: "font-bold".to_string(),
        }
    }
}

/// Ids and classes used to discover elements in the markup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MarkupHooks {
    /// Id of the navigation bar.
    pub navbar_id: String,
    /// Id of the hamburger button.
    pub hamburger_id: String,
    /// Id of the slide-out menu panel.
    pub mobile_menu_id: String,
    /// Class shared by all navigation links.
    pub nav_link_class: String,
    /// Classes marking elements with an entrance animation.
    pub fade_classes: Vec<String>,
}

impl Default for MarkupHooks {
    fn default() -> Self {
        Self {
            navbar_id: "navbar".to_string(),
            hamburger_id: "hamburger-btn".to_string(),
            mobile_menu_id: "mobile-menu".to_string(),
            nav_link_class: "nav-link".to_string(),
            fade_classes: vec![
                "fade-in".to_string(),
                "fade-in-left".to_string(),
                "fade-in-right".to_string(),
            ],
        }
    }
}

impl MarkupHooks {
    /// Selector matching every fade target, e.g. `.fade-in, .fade-in-left`.
    pub fn fade_selector(&self) -> String {
        self.fade_classes
            .iter()
            .map(|class| format!(".{class}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Selector matching every navigation link.
    pub fn nav_link_selector(&self) -> String {
        format!(".{}", self.nav_link_class)
    }
}

/// Full configuration of the page interactions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scroll offset (px) above which the navbar counts as scrolled.
    pub scrolled_threshold: f64,
    /// Visible fraction of a fade target needed to reveal it.
    pub fade_threshold: f64,
    /// Inset (px) of the reveal trigger region from the viewport bottom.
    pub fade_bottom_margin: f64,
    /// Added to the scroll offset before matching sections.
    pub highlight_lookahead: f64,
    /// Extra space (px) subtracted from a section top besides the navbar.
    pub highlight_gap: f64,
    /// Duration of the computed smooth scroll used without host support.
    pub smooth_scroll_duration_ms: f64,
    /// Winner among overlapping section ranges.
    pub tie_break: HighlightTieBreak,
    /// Marker classes toggled on elements.
    pub classes: MarkerClasses,
    /// Ids and classes used to find elements.
    pub markup: MarkupHooks,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: DEFAULT_SCROLLED_THRESHOLD,
            fade_threshold: DEFAULT_FADE_THRESHOLD,
            fade_bottom_margin: DEFAULT_FADE_BOTTOM_MARGIN,
            highlight_lookahead: DEFAULT_HIGHLIGHT_LOOKAHEAD,
            highlight_gap: DEFAULT_HIGHLIGHT_GAP,
            smooth_scroll_duration_ms: DEFAULT_SMOOTH_SCROLL_DURATION_MS,
            tie_break: HighlightTieBreak::default(),
            classes: MarkerClasses::default(),
            markup: MarkupHooks::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON document, filling missing fields with defaults.
    pub fn from_json(raw: &str) -> Result<Self, SetupError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no layout could make sense of.
    pub fn validate(&self) -> Result<(), SetupError> {
        let distances = [
            ("scrolled_threshold", self.scrolled_threshold),
            ("fade_bottom_margin", self.fade_bottom_margin),
            ("highlight_lookahead", self.highlight_lookahead),
            ("highlight_gap", self.highlight_gap),
            ("smooth_scroll_duration_ms", self.smooth_scroll_duration_ms),
        ];
        for (field, value) in distances {
            if !value.is_finite() || value < 0.0 {
                return Err(SetupError::OutOfRange {
                    field,
                    value,
                });
            }
        }
        if !(0.0..=1.0).contains(&self.fade_threshold) {
            return Err(SetupError::OutOfRange {
                field: "fade_threshold",
                value: self.fade_threshold,
            });
        }
        Ok(())
    }

    /// Root margin handed to the intersection observer.
    pub fn fade_root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.fade_bottom_margin)
    }
}

#[cfg(test)]
mod tests {
    use super::{HighlightTieBreak, SiteConfig};
    use crate::error::SetupError;

    #[test]
    fn empty_input_yields_defaults() {
        let config = SiteConfig::from_json("  ").expect("empty config");
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.scrolled_threshold, 50.0);
        assert_eq!(config.classes.emphasis, "font-bold");
        assert_eq!(config.tie_break, HighlightTieBreak::Last);
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let config = SiteConfig::from_json(
            r#"{"scrolled_threshold": 80, "tie_break": "first", "classes": {"open": "is-open"}}"#,
        )
        .expect("parse config");
        assert_eq!(config.scrolled_threshold, 80.0);
        assert_eq!(config.tie_break, HighlightTieBreak::First);
        assert_eq!(config.classes.open, "is-open");
        assert_eq!(config.classes.active, "active");
        assert_eq!(config.highlight_lookahead, 100.0);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = SiteConfig::from_json("{not json").expect_err("should fail");
        assert!(matches!(err, SetupError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_fade_threshold_above_one() {
        let err = SiteConfig::from_json(r#"{"fade_threshold": 1.5}"#).expect_err("should fail");
        assert!(matches!(err, SetupError::OutOfRange {
            field: "fade_threshold",
            ..
        }));
    }

    #[test]
    fn rejects_negative_distances() {
        let err = SiteConfig::from_json(r#"{"highlight_gap": -1}"#).expect_err("should fail");
        assert!(matches!(err, SetupError::OutOfRange {
            field: "highlight_gap",
            ..
        }));
    }

    #[test]
    fn builds_root_margin_and_selectors() {
        let config = SiteConfig::default();
        assert_eq!(config.fade_root_margin(), "0px 0px -50px 0px");
        assert_eq!(config.markup.fade_selector(), ".fade-in, .fade-in-left, .fade-in-right");
        assert_eq!(config.markup.nav_link_selector(), ".nav-link");
    }
}
