//! Ties the behaviors to the elements of one page.

use crate::{
    anchor::{scroll_to_anchor, AnchorOutcome},
    capability::{RevealCapability, SmoothScroll},
    config::SiteConfig,
    dom::{ElementLookup, PageElement},
    error::SetupError,
    highlight::{NavHighlighter, NavLink},
    menu::MobileMenu,
    navbar::ScrollStyler,
    reveal::FadeInRevealer,
};

/// Elements found in the markup, handed to [`SiteController::new`].
#[derive(Debug, Clone)]
pub struct PageElements<E> {
    /// The navigation bar. Required.
    pub navbar: Option<E>,
    /// Navigation links, in document order.
    pub nav_links: Vec<E>,
    /// Sections with an id, in document order.
    pub sections: Vec<E>,
    /// The hamburger button, if the page has one.
    pub hamburger: Option<E>,
    /// The slide-out menu panel, if the page has one.
    pub mobile_menu: Option<E>,
    /// Elements with an entrance animation.
    pub fade_targets: Vec<E>,
}

impl<E> Default for PageElements<E> {
    fn default() -> Self {
        Self {
            navbar: None,
            nav_links: Vec::new(),
            sections: Vec::new(),
            hamburger: None,
            mobile_menu: None,
            fade_targets: Vec::new(),
        }
    }
}

/// Holds the page's elements and runs every behavior against them.
///
/// The controller keeps no state of its own; everything it decides is read
/// back from the elements' classes and layout.
#[derive(Debug)]
pub struct SiteController<E> {
    navbar: E,
    nav_links: Vec<NavLink<E>>,
    sections: Vec<E>,
    menu: Option<MobileMenu<E>>,
    fade_targets: Vec<E>,
    styler: ScrollStyler,
    highlighter: NavHighlighter,
    revealer: FadeInRevealer,
}

impl<E: PageElement> SiteController<E> {
    /// Build the controller, failing if the navbar is missing.
    pub fn new(config: &SiteConfig, elements: PageElements<E>) -> Result<Self, SetupError> {
        let PageElements {
            navbar,
            nav_links,
            sections,
            hamburger,
            mobile_menu,
            fade_targets,
        } = elements;

        let navbar =
            navbar.ok_or_else(|| SetupError::MissingElement(config.markup.navbar_id.clone()))?;

        let menu = match (hamburger, mobile_menu) {
            (Some(button), Some(panel)) => Some(MobileMenu::new(
                button,
                panel,
                config.classes.active.clone(),
                config.classes.open.clone(),
            )),
            (Some(_), None) => {
                tracing::warn!(
                    panel = %config.markup.mobile_menu_id,
                    "hamburger button present without menu panel, menu disabled"
                );
                None
            },
            (None, _) => None,
        };

        Ok(Self {
            navbar,
            nav_links: nav_links.into_iter().map(NavLink::new).collect(),
            sections,
            menu,
            fade_targets,
            styler: ScrollStyler::new(config.scrolled_threshold, config.classes.scrolled.clone()),
            highlighter: NavHighlighter::from_config(config),
            revealer: FadeInRevealer::from_config(config),
        })
    }

    /// The navbar element.
    pub fn navbar(&self) -> &E {
        &self.navbar
    }

    /// The mobile menu, when the page has both of its elements.
    pub fn menu(&self) -> Option<&MobileMenu<E>> {
        self.menu.as_ref()
    }

    /// Elements with an entrance animation.
    pub fn fade_targets(&self) -> &[E] {
        &self.fade_targets
    }

    /// Run the scroll-driven behaviors: navbar style, then link emphasis.
    pub fn on_scroll(&self, scroll_y: f64) {
        self.style_navbar(scroll_y);
        self.highlight_nav(scroll_y);
    }

    /// Sync the navbar's scrolled marker. Returns the new state.
    pub fn style_navbar(&self, scroll_y: f64) -> bool {
        self.styler.apply(&self.navbar, scroll_y)
    }

    /// Emphasize the link of the current section. Returns its id.
    pub fn highlight_nav(&self, scroll_y: f64) -> Option<String> {
        self.highlighter.apply(
            &self.nav_links,
            &self.sections,
            self.navbar.offset_height(),
            scroll_y,
        )
    }

    /// Handle activation of an in-page link: scroll to its target if there is
    /// one, then close the mobile menu.
    pub fn on_anchor_click<L, S>(&self, href: &str, lookup: &L, scroller: &S) -> AnchorOutcome
    where
        L: ElementLookup<E> + ?Sized,
        S: SmoothScroll + ?Sized,
    {
        let outcome = scroll_to_anchor(href, &self.navbar, lookup, scroller);
        self.close_menu();
        outcome
    }

    /// Flip the mobile menu. Returns whether it is now open; `None` without a
    /// menu.
    pub fn toggle_menu(&self) -> Option<bool> {
        self.menu.as_ref().map(MobileMenu::toggle)
    }

    /// Close the mobile menu, if any.
    pub fn close_menu(&self) {
        if let Some(menu) = &self.menu {
            menu.close();
        }
    }

    /// Hand the fade targets to `capability`.
    pub fn start_reveal<R>(&self, capability: &R) -> Result<(), R::Error>
    where
        R: RevealCapability<E> + ?Sized,
    {
        capability.watch(&self.fade_targets, self.revealer.clone())
    }

    /// The revealer, for native observers reporting back.
    pub fn revealer(&self) -> &FadeInRevealer {
        &self.revealer
    }
}
