//! Emphasis of the nav link whose section is in view.

use crate::{
    config::{HighlightTieBreak, SiteConfig},
    dom::{fragment_id, PageElement},
};

/// Half-open vertical range `[start, end)` during which a section is current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRange {
    /// First matching position.
    pub start: f64,
    /// First position past the section.
    pub end: f64,
}

impl SectionRange {
    /// Whether `position` falls inside the range.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.start && position < self.end
    }
}

/// A navigation link together with the section id it points at.
#[derive(Debug, Clone)]
pub struct NavLink<E> {
    element: E,
    fragment: Option<String>,
}

impl<E: PageElement> NavLink<E> {
    /// Wrap `element`, reading its target fragment once.
    pub fn new(element: E) -> Self {
        let fragment = element
            .href()
            .as_deref()
            .and_then(fragment_id)
            .map(str::to_string);
        Self {
            element,
            fragment,
        }
    }

    /// The link element.
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Id of the section the link targets, if it is an in-page link.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

/// Pick the range containing `position`, resolving overlaps with `tie_break`.
pub fn select_section(
    ranges: &[SectionRange],
    position: f64,
    tie_break: HighlightTieBreak,
) -> Option<usize> {
    let mut matches = ranges
        .iter()
        .enumerate()
        .filter(|(_, range)| range.contains(position))
        .map(|(index, _)| index);
    match tie_break {
        HighlightTieBreak::First => matches.next(),
        HighlightTieBreak::Last => matches.last(),
    }
}

/// Decides which section is current and emphasizes its link.
#[derive(Debug, Clone, PartialEq)]
pub struct NavHighlighter {
    lookahead: f64,
    gap: f64,
    tie_break: HighlightTieBreak,
    class: String,
}

impl NavHighlighter {
    /// Highlighter using the offsets, tie-break and class of `config`.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            lookahead: config.highlight_lookahead,
            gap: config.highlight_gap,
            tie_break: config.tie_break,
            class: config.classes.emphasis.clone(),
        }
    }

    /// Scroll offset shifted by the lookahead.
    pub fn effective_position(&self, scroll_y: f64) -> f64 {
        scroll_y + self.lookahead
    }

    /// Live range of `section` below a navbar `navbar_height` pixels tall.
    pub fn section_range<E: PageElement>(&self, section: &E, navbar_height: f64) -> SectionRange {
        let start = section.offset_top() - navbar_height - self.gap;
        SectionRange {
            start,
            end: start + section.offset_height(),
        }
    }

    /// The id of the section current at `scroll_y`, if any.
    pub fn current_section<E: PageElement>(
        &self,
        sections: &[E],
        navbar_height: f64,
        scroll_y: f64,
    ) -> Option<String> {
        let ranges = sections
            .iter()
            .map(|section| self.section_range(section, navbar_height))
            .collect::<Vec<_>>();
        let index = select_section(&ranges, self.effective_position(scroll_y), self.tie_break)?;
        sections[index].element_id()
    }

    /// Clear every link's emphasis, then emphasize the first link pointing at
    /// the current section. Returns the current section id.
    pub fn apply<E: PageElement>(
        &self,
        links: &[NavLink<E>],
        sections: &[E],
        navbar_height: f64,
        scroll_y: f64,
    ) -> Option<String> {
        let current = self.current_section(sections, navbar_height, scroll_y);
        for link in links {
            link.element().remove_class(&self.class);
        }

        let id = current.as_deref()?;
        match links.iter().find(|link| link.fragment() == Some(id)) {
            Some(link) => link.element().add_class(&self.class),
            None => tracing::trace!(section = id, "no nav link for current section"),
        }
        current
    }
}
