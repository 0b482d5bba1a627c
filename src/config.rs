use log::Level;

use crate::reveal::{Easing, RevealConfig, ScrollTrigger, Trigger, VisualState};

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Controller traces are useful while tuning timings
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Whole page fading up on mount.
pub fn page_reveal() -> RevealConfig {
    RevealConfig {
        hidden: VisualState::hidden().offset(0.0, 50.0),
        duration_ms: 1000,
        fallback_deadline_ms: 2000,
        ..RevealConfig::default()
    }
}

pub fn nav_reveal() -> RevealConfig {
    RevealConfig {
        hidden: VisualState::hidden().offset(0.0, -20.0),
        start_delay_ms: 200,
        stagger_ms: 100,
        duration_ms: 600,
        fallback_deadline_ms: 2000,
        ..RevealConfig::default()
    }
}

/// Title, subtitle and buttons of the home hero.
pub fn hero_reveal() -> RevealConfig {
    RevealConfig {
        hidden: VisualState::hidden().offset(0.0, 100.0).scaled(0.8),
        start_delay_ms: 500,
        stagger_ms: 400,
        duration_ms: 1000,
        fallback_deadline_ms: 2000,
        ..RevealConfig::default()
    }
}

/// Heading block at the top of the inner pages.
pub fn page_hero_reveal() -> RevealConfig {
    RevealConfig {
        hidden: VisualState::hidden().offset(0.0, 100.0),
        start_delay_ms: 200,
        duration_ms: 1000,
        fallback_deadline_ms: 2000,
        ..RevealConfig::default()
    }
}

pub fn feature_cards_reveal() -> RevealConfig {
    RevealConfig {
        trigger: Trigger::OnScroll(ScrollTrigger::at(0.8)),
        hidden: VisualState::hidden().offset(0.0, 100.0).scaled(0.8),
        stagger_ms: 200,
        duration_ms: 800,
        fallback_deadline_ms: 3000,
        reverse_on_exit: true,
        ..RevealConfig::default()
    }
}

pub fn project_cards_reveal(start: f64) -> RevealConfig {
    RevealConfig {
        trigger: Trigger::OnScroll(ScrollTrigger::at(start)),
        hidden: VisualState::hidden().offset(0.0, 80.0).tilted(45.0),
        stagger_ms: 200,
        duration_ms: 1000,
        fallback_deadline_ms: 3000,
        reverse_on_exit: true,
        ..RevealConfig::default()
    }
}

pub fn skills_reveal() -> RevealConfig {
    RevealConfig {
        trigger: Trigger::OnScroll(ScrollTrigger::at(0.8)),
        hidden: VisualState::hidden().offset(-50.0, 0.0),
        stagger_ms: 100,
        duration_ms: 800,
        fallback_deadline_ms: 3000,
        reverse_on_exit: true,
        ..RevealConfig::default()
    }
}

pub fn stats_reveal() -> RevealConfig {
    RevealConfig {
        trigger: Trigger::OnScroll(ScrollTrigger::at(0.8)),
        hidden: VisualState::hidden().scaled(0.5),
        easing: Easing::BackOut,
        stagger_ms: 100,
        duration_ms: 600,
        fallback_deadline_ms: 2000,
        reverse_on_exit: true,
        ..RevealConfig::default()
    }
}

/// Contact page: form slides in from the left, details from the right.
pub fn side_reveal(from_x: f64, start_delay_ms: i32) -> RevealConfig {
    RevealConfig {
        hidden: VisualState::hidden().offset(from_x, 0.0),
        start_delay_ms,
        duration_ms: 800,
        fallback_deadline_ms: 2000,
        ..RevealConfig::default()
    }
}
