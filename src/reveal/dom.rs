use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use super::config::ScrollTrigger;
use super::controller::{RevealController, RevealHandle};
use super::engine::{Animator, Callback, Timers, Viewport, Visibility};
use super::visual::{Tween, VisualState};

pub type DomRevealController = RevealController<DomAnimator, DomTimers, DomViewport>;
pub type DomRevealHandle = RevealHandle<DomAnimator, DomTimers, DomViewport>;

pub fn controller() -> DomRevealController {
    RevealController::new(DomAnimator::default(), DomTimers, DomViewport)
}

struct TransitionListener {
    element: HtmlElement,
    closure: Closure<dyn FnMut(Event)>,
    done: Rc<Cell<bool>>,
}

impl TransitionListener {
    fn detach(self) {
        let _ = self
            .element
            .remove_event_listener_with_callback("transitionend", self.closure.as_ref().unchecked_ref());
    }
}

/// Drives reveals with inline CSS transitions.
#[derive(Default)]
pub struct DomAnimator {
    // Finished listeners are dropped on the next tween or kill.
    listeners: RefCell<Vec<TransitionListener>>,
}

impl DomAnimator {
    fn prune(&self, element: Option<&HtmlElement>) {
        let mut listeners = self.listeners.borrow_mut();
        let (stale, live): (Vec<_>, Vec<_>) = listeners
            .drain(..)
            .partition(|listener| listener.done.get() || Some(&listener.element) == element);
        *listeners = live;
        drop(listeners);
        stale.into_iter().for_each(TransitionListener::detach);
    }
}

fn apply(element: &HtmlElement, state: &VisualState) {
    let style = element.style();
    let _ = style.set_property("opacity", &state.opacity.to_string());
    let _ = style.set_property("transform", &state.to_css_transform());
}

impl Animator for DomAnimator {
    type Target = HtmlElement;

    fn is_attached(&self, target: &HtmlElement) -> bool {
        target.is_connected()
    }

    fn set(&self, target: &HtmlElement, state: &VisualState) {
        let _ = target.style().set_property("transition", "none");
        apply(target, state);
    }

    fn tween(&self, target: &HtmlElement, to: &VisualState, tween: Tween, on_complete: Callback) {
        self.prune(Some(target));

        if tween.duration_ms == 0 {
            self.set(target, to);
            on_complete();
            return;
        }

        // Flush the starting state so the browser has something to transition from.
        let _ = target.offset_width();
        let easing = tween.easing.css();
        let transition = format!(
            "opacity {d}ms {e} {delay}ms, transform {d}ms {e} {delay}ms",
            d = tween.duration_ms,
            e = easing,
            delay = tween.delay_ms,
        );
        let _ = target.style().set_property("transition", &transition);

        let done = Rc::new(Cell::new(false));
        let mut on_complete = Some(on_complete);
        let element = target.clone();
        let flag = done.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let own: &EventTarget = element.as_ref();
            if event.target().as_ref() != Some(own) {
                return;
            }
            if let Some(on_complete) = on_complete.take() {
                flag.set(true);
                // Outside the listener, so the callback may start another tween.
                Timeout::new(0, on_complete).forget();
            }
        }) as Box<dyn FnMut(Event)>);

        if target
            .add_event_listener_with_callback("transitionend", closure.as_ref().unchecked_ref())
            .is_err()
        {
            warn!("Could not listen for transitionend, completion left to the fallback");
        }
        self.listeners.borrow_mut().push(TransitionListener {
            element: target.clone(),
            closure,
            done,
        });

        apply(target, to);
    }

    fn kill(&self, target: &HtmlElement) {
        self.prune(Some(target));
        let _ = target.style().set_property("transition", "none");
    }
}

pub struct DomTimers;

impl Timers for DomTimers {
    type Timer = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Callback) -> Timeout {
        Timeout::new(delay_ms, callback)
    }

    fn clear(&self, timer: Timeout) {
        timer.cancel();
    }
}

pub struct ObserverRegistration {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

pub struct DomViewport;

/// Leaving counts only when the element drops back below the trigger line.
/// Scrolling past it off the top leaves it revealed.
fn visibility_change(intersecting: bool, top: f64, trigger_line: Option<f64>) -> Option<Visibility> {
    if intersecting {
        return Some(Visibility::Entered);
    }
    match trigger_line {
        Some(line) if top >= line => Some(Visibility::Exited),
        _ => None,
    }
}

impl Viewport<HtmlElement> for DomViewport {
    type Registration = ObserverRegistration;

    fn observe(
        &self,
        target: &HtmlElement,
        trigger: ScrollTrigger,
        mut on_change: Box<dyn FnMut(Visibility)>,
    ) -> Option<ObserverRegistration> {
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let trigger_line = entry.root_bounds().map(|bounds| bounds.bottom()).or_else(|| {
                    web_sys::window()
                        .and_then(|window| window.inner_height().ok())
                        .and_then(|height| height.as_f64())
                        .map(|height| height * trigger.start)
                });
                if let Some(visibility) = visibility_change(
                    entry.is_intersecting(),
                    entry.bounding_client_rect().top(),
                    trigger_line,
                ) {
                    on_change(visibility);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&trigger.root_margin());

        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => observer,
                Err(err) => {
                    warn!("IntersectionObserver unavailable: {:?}", err);
                    return None;
                }
            };
        observer.observe(target);

        Some(ObserverRegistration {
            observer,
            _callback: callback,
        })
    }

    fn unobserve(&self, registration: ObserverRegistration) {
        registration.observer.disconnect();
    }
}

pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}
