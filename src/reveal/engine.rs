//! Seams to the three things a reveal depends on but does not own: something
//! that moves pixels, something that keeps time and something that watches
//! the viewport.

use super::config::ScrollTrigger;
use super::visual::{Tween, VisualState};

pub type Callback = Box<dyn FnOnce()>;

pub trait Animator {
    /// Non-owning handle to a rendered element.
    type Target: Clone + 'static;

    fn is_attached(&self, target: &Self::Target) -> bool;

    /// Applies `state` instantly, interrupting any running transition.
    fn set(&self, target: &Self::Target, state: &VisualState);

    /// Transitions to `to`; `on_complete` runs once the transition has finished.
    fn tween(&self, target: &Self::Target, to: &VisualState, tween: Tween, on_complete: Callback);

    /// Stops a running transition without notifying its completion.
    fn kill(&self, target: &Self::Target);
}

pub trait Timers {
    type Timer: 'static;

    fn schedule(&self, delay_ms: u32, callback: Callback) -> Self::Timer;

    fn clear(&self, timer: Self::Timer);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Entered,
    Exited,
}

pub trait Viewport<Target> {
    type Registration: 'static;

    /// Returns `None` when the target cannot be observed.
    fn observe(
        &self,
        target: &Target,
        trigger: ScrollTrigger,
        on_change: Box<dyn FnMut(Visibility)>,
    ) -> Option<Self::Registration>;

    fn unobserve(&self, registration: Self::Registration);
}
