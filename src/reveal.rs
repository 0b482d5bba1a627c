//! Scroll- and mount-triggered entrance animations that always end with the
//! content visible, even if the browser never reports a finished transition.

pub mod config;
pub mod controller;
pub mod dom;
pub mod engine;
pub mod hook;
pub mod visual;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{RevealConfig, RevealError, ScrollTrigger, Trigger};
pub use controller::{RevealController, RevealGroup, RevealHandle, SettlePath, SettleStatus};
pub use hook::use_reveal;
pub use visual::{Easing, Tween, VisualState};
