//! Finds the page's elements and wires the listeners.

use std::rc::Rc;

use showcase_shared::{PageElements, SiteConfig, SiteController};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{MouseEvent, Window};

use crate::{
    capabilities::{RevealDriver, ScrollDriver},
    config,
    dom::{DomDocument, DomElement},
    error::FrontendError,
};

const STARTUP_MESSAGE: &str = "[showcase] 页面初始化完成";

/// Run `init` once the DOM is parsed.
pub fn on_dom_ready(init: impl FnOnce() + 'static) -> Result<(), FrontendError> {
    let window = web_sys::window().ok_or(FrontendError::NoWindow)?;
    let document = window.document().ok_or(FrontendError::NoDocument)?;

    let ready_state = js_sys::Reflect::get(&document, &"readyState".into())
        .ok()
        .and_then(|state| state.as_string());
    if ready_state.as_deref() != Some("loading") {
        init();
        return Ok(());
    }

    let listener = Closure::once_into_js(init);
    document
        .add_event_listener_with_callback("DOMContentLoaded", listener.unchecked_ref())
        .map_err(FrontendError::from_js)
}

fn collect_elements(document: &DomDocument, config: &SiteConfig) -> PageElements<DomElement> {
    let markup = &config.markup;
    PageElements {
        navbar: document.element_by_id(&markup.navbar_id),
        nav_links: document.select_all(&markup.nav_link_selector()),
        sections: document.select_all("section[id]"),
        hamburger: document.element_by_id(&markup.hamburger_id),
        mobile_menu: document.element_by_id(&markup.mobile_menu_id),
        fade_targets: document.select_all(&markup.fade_selector()),
    }
}

/// Wire every behavior to the current page.
pub fn start() -> Result<(), FrontendError> {
    let window = web_sys::window().ok_or(FrontendError::NoWindow)?;
    let document = DomDocument(window.document().ok_or(FrontendError::NoDocument)?);
    let config = config::load(&document.0);

    let controller = Rc::new(SiteController::new(&config, collect_elements(&document, &config))?);
    let scroller = Rc::new(ScrollDriver::detect(&window, config.smooth_scroll_duration_ms));

    bind_scroll(&window, &controller)?;
    bind_anchors(&document, &controller, &scroller)?;
    bind_hamburger(&controller)?;
    controller.start_reveal(&RevealDriver::detect(&window))?;

    let scroll_y = window.scroll_y().unwrap_or(0.0);
    controller.style_navbar(scroll_y);
    controller.highlight_nav(scroll_y);

    web_sys::console::log_1(&STARTUP_MESSAGE.into());
    Ok(())
}

fn bind_scroll(
    window: &Window,
    controller: &Rc<SiteController<DomElement>>,
) -> Result<(), FrontendError> {
    let closure = {
        let controller = controller.clone();
        let window = window.clone();
        Closure::<dyn Fn()>::new(move || {
            controller.on_scroll(window.scroll_y().unwrap_or(0.0));
        })
    };
    window
        .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
        .map_err(FrontendError::from_js)?;
    closure.forget();
    Ok(())
}

fn bind_anchors(
    document: &DomDocument,
    controller: &Rc<SiteController<DomElement>>,
    scroller: &Rc<ScrollDriver>,
) -> Result<(), FrontendError> {
    for anchor in document.select_all(r##"a[href^="#"]"##) {
        let closure = {
            let controller = controller.clone();
            let scroller = scroller.clone();
            let document = document.clone();
            let anchor = anchor.clone();
            Closure::<dyn Fn(MouseEvent)>::new(move |event: MouseEvent| {
                event.prevent_default();
                let href = anchor.0.get_attribute("href").unwrap_or_default();
                controller.on_anchor_click(&href, &document, scroller.as_ref());
            })
        };
        anchor
            .0
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(FrontendError::from_js)?;
        closure.forget();
    }
    Ok(())
}

fn bind_hamburger(controller: &Rc<SiteController<DomElement>>) -> Result<(), FrontendError> {
    let Some(button) = controller.menu().map(|menu| menu.button().clone()) else {
        return Ok(());
    };
    let closure = {
        let controller = controller.clone();
        Closure::<dyn Fn()>::new(move || {
            controller.toggle_menu();
        })
    };
    button
        .0
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(FrontendError::from_js)?;
    closure.forget();
    Ok(())
}
