//! Browser-backed smooth scrolling and reveal, with feature detection.

use std::{cell::RefCell, rc::Rc};

use gloo_timers::callback::Interval;
use showcase_shared::{
    FadeInRevealer, ImmediateReveal, IntersectionSample, RevealCapability, ScrollAnimation,
    SmoothScroll,
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollToOptions, Window,
};

use crate::{dom::DomElement, error::FrontendError};

// ~60 frames per second.
const FRAME_INTERVAL_MS: u32 = 16;

fn has_property(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

/// Whether the root element's style knows `scroll-behavior`.
pub fn supports_smooth_scroll(window: &Window) -> bool {
    window
        .document()
        .and_then(|doc| doc.document_element())
        .and_then(|root| js_sys::Reflect::get(&root, &JsValue::from_str("style")).ok())
        .map(|style| has_property(&style, "scrollBehavior"))
        .unwrap_or(false)
}

/// Whether `window.IntersectionObserver` exists.
pub fn supports_intersection_observer(window: &Window) -> bool {
    has_property(window, "IntersectionObserver")
}

/// Scrolls with the browser's own smooth behavior.
pub struct NativeSmoothScroll {
    window: Window,
}

impl SmoothScroll for NativeSmoothScroll {
    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Steps the scroll offset along a [`ScrollAnimation`] on a timer.
pub struct AnimatedScroll {
    window: Window,
    duration_ms: f64,
    running: Rc<RefCell<Option<Interval>>>,
}

impl SmoothScroll for AnimatedScroll {
    fn smooth_scroll_to(&self, top: f64) {
        let from = self.window.scroll_y().unwrap_or(0.0);
        let animation = ScrollAnimation::new(from, top, self.duration_ms);
        let started_at = js_sys::Date::now();

        // Dropping a previous interval cancels it.
        self.running.borrow_mut().take();

        let window = self.window.clone();
        let running = self.running.clone();
        let interval = Interval::new(FRAME_INTERVAL_MS, move || {
            let elapsed = js_sys::Date::now() - started_at;
            window.scroll_to_with_x_and_y(0.0, animation.position_at(elapsed));
            if animation.is_finished(elapsed) {
                // Clears the interval; the closure itself is freed once this tick returns.
                if let Ok(mut slot) = running.try_borrow_mut() {
                    slot.take();
                }
            }
        });
        *self.running.borrow_mut() = Some(interval);
    }
}

/// Smooth scrolling chosen once at startup.
pub enum ScrollDriver {
    /// Host `scrollTo({ behavior: "smooth" })`.
    Native(NativeSmoothScroll),
    /// Computed animation for hosts without smooth scrolling.
    Animated(AnimatedScroll),
}

impl ScrollDriver {
    pub fn detect(window: &Window, duration_ms: f64) -> Self {
        if supports_smooth_scroll(window) {
            Self::Native(NativeSmoothScroll {
                window: window.clone(),
            })
        } else {
            Self::Animated(AnimatedScroll {
                window: window.clone(),
                duration_ms,
                running: Rc::new(RefCell::new(None)),
            })
        }
    }
}

impl SmoothScroll for ScrollDriver {
    fn smooth_scroll_to(&self, top: f64) {
        match self {
            Self::Native(native) => native.smooth_scroll_to(top),
            Self::Animated(animated) => animated.smooth_scroll_to(top),
        }
    }
}

/// Reveals fade targets through a native `IntersectionObserver`.
pub struct ObserverReveal;

impl RevealCapability<DomElement> for ObserverReveal {
    type Error = FrontendError;

    fn watch(&self, targets: &[DomElement], revealer: FadeInRevealer) -> Result<(), FrontendError> {
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(revealer.observer_options().threshold));
        options.set_root_margin(&revealer.observer_options().root_margin);

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let element = entry.target();
                    let Some(target) = DomElement::from_element(element.clone()) else {
                        observer.unobserve(&element);
                        continue;
                    };
                    let sample = IntersectionSample {
                        target,
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    if revealer.handle(&sample) {
                        observer.unobserve(&element);
                    }
                }
            },
        );

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(FrontendError::from_js)?;
        for target in targets {
            observer.observe(target.as_element());
        }
        // The observer lives as long as the page.
        callback.forget();
        Ok(())
    }
}

/// Reveal strategy chosen once at startup.
pub enum RevealDriver {
    /// Native intersection observer.
    Observer(ObserverReveal),
    /// Everything visible immediately.
    Immediate(ImmediateReveal),
}

impl RevealDriver {
    pub fn detect(window: &Window) -> Self {
        if supports_intersection_observer(window) {
            Self::Observer(ObserverReveal)
        } else {
            Self::Immediate(ImmediateReveal)
        }
    }
}

impl RevealCapability<DomElement> for RevealDriver {
    type Error = FrontendError;

    fn watch(&self, targets: &[DomElement], revealer: FadeInRevealer) -> Result<(), FrontendError> {
        match self {
            Self::Observer(observer) => {
                if let Err(err) = observer.watch(targets, revealer.clone()) {
                    web_sys::console::warn_1(
                        &format!("IntersectionObserver unavailable, revealing all: {err}").into(),
                    );
                    revealer.reveal_all(targets);
                }
                Ok(())
            },
            Self::Immediate(immediate) => match immediate.watch(targets, revealer) {
                Ok(()) => Ok(()),
                Err(never) => match never {},
            },
        }
    }
}
