use std::rc::Rc;

use web_sys::HtmlElement;
use yew::prelude::*;

use crate::reveal::dom::DomAnimator;
use crate::reveal::engine::Animator;
use crate::reveal::{Easing, Tween, VisualState};

const HOVER_TWEEN: Tween = Tween {
    delay_ms: 0,
    duration_ms: 300,
    easing: Easing::Power2Out,
};

const PULSE_TWEEN: Tween = Tween {
    delay_ms: 0,
    duration_ms: 200,
    easing: Easing::Power2Out,
};

/// Grows the referenced element to `scale` while hovered. Does nothing unless
/// `enabled`, so an element still hidden or mid-reveal keeps its state.
#[hook]
pub fn use_hover_scale(node: NodeRef, scale: f64, enabled: bool) -> (Callback<MouseEvent>, Callback<MouseEvent>) {
    let animator = use_memo(|_| DomAnimator::default(), ());

    let onmouseenter = {
        let animator = animator.clone();
        let node = node.clone();
        Callback::from(move |_: MouseEvent| {
            if !enabled {
                return;
            }
            if let Some(element) = node.cast::<HtmlElement>() {
                animator.tween(&element, &VisualState::VISIBLE.scaled(scale), HOVER_TWEEN, Box::new(|| ()));
            }
        })
    };
    let onmouseleave = Callback::from(move |_: MouseEvent| {
        if !enabled {
            return;
        }
        if let Some(element) = node.cast::<HtmlElement>() {
            animator.tween(&element, &VisualState::VISIBLE, HOVER_TWEEN, Box::new(|| ()));
        }
    });

    (onmouseenter, onmouseleave)
}

/// Briefly swells `element` and returns it to rest.
pub fn pulse(animator: Rc<DomAnimator>, element: HtmlElement, scale: f64) {
    let back = animator.clone();
    let target = element.clone();
    animator.tween(
        &element,
        &VisualState::VISIBLE.scaled(scale),
        PULSE_TWEEN,
        Box::new(move || back.tween(&target, &VisualState::VISIBLE, PULSE_TWEEN, Box::new(|| ()))),
    );
}
