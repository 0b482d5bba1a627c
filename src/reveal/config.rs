use thiserror::Error;

use super::visual::{Easing, VisualState};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RevealError {
    #[error("stagger must not be negative (got {0}ms)")]
    NegativeStagger(i32),
    #[error("duration must not be negative (got {0}ms)")]
    NegativeDuration(i32),
    #[error("start delay must not be negative (got {0}ms)")]
    NegativeStartDelay(i32),
    #[error("fallback deadline of {deadline_ms}ms must exceed the last animation end at {last_end_ms}ms")]
    FallbackTooEarly { deadline_ms: i32, last_end_ms: i64 },
    #[error("group was armed without reverse-on-exit")]
    ReverseDisabled,
}

/// Point at which a scrolled-in group starts revealing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTrigger {
    /// Fraction of the viewport height, measured from the top, that the
    /// element's top edge has to reach.
    pub start: f64,
}

impl ScrollTrigger {
    pub fn at(start: f64) -> Self {
        ScrollTrigger {
            start: start.clamp(0.0, 1.0),
        }
    }

    /// Intersection-observer margin that shrinks the viewport bottom up to `start`.
    pub fn root_margin(&self) -> String {
        let cut = ((1.0 - self.start) * 100.0).round();
        format!("0px 0px -{}% 0px", cut)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    Immediate,
    OnScroll(ScrollTrigger),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    pub trigger: Trigger,
    /// State applied at arm time and on reverse.
    pub hidden: VisualState,
    pub easing: Easing,
    pub start_delay_ms: i32,
    pub stagger_ms: i32,
    pub duration_ms: i32,
    pub fallback_deadline_ms: i32,
    pub reverse_on_exit: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        RevealConfig {
            trigger: Trigger::Immediate,
            hidden: VisualState::hidden(),
            easing: Easing::default(),
            start_delay_ms: 0,
            stagger_ms: 0,
            duration_ms: 800,
            fallback_deadline_ms: 2000,
            reverse_on_exit: false,
        }
    }
}

/// Validated, unsigned view of the timing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub start_delay_ms: u32,
    pub stagger_ms: u32,
    pub duration_ms: u32,
    pub fallback_deadline_ms: u32,
}

impl RevealConfig {
    pub fn validate(&self, targets: usize) -> Result<Timing, RevealError> {
        let start_delay_ms = non_negative(self.start_delay_ms, RevealError::NegativeStartDelay)?;
        let stagger_ms = non_negative(self.stagger_ms, RevealError::NegativeStagger)?;
        let duration_ms = non_negative(self.duration_ms, RevealError::NegativeDuration)?;

        let last_end_ms =
            i64::from(self.duration_ms) + i64::from(self.stagger_ms) * targets.saturating_sub(1) as i64;
        if i64::from(self.fallback_deadline_ms) <= last_end_ms {
            return Err(RevealError::FallbackTooEarly {
                deadline_ms: self.fallback_deadline_ms,
                last_end_ms,
            });
        }

        Ok(Timing {
            start_delay_ms,
            stagger_ms,
            duration_ms,
            fallback_deadline_ms: self.fallback_deadline_ms as u32,
        })
    }
}

fn non_negative(value: i32, err: fn(i32) -> RevealError) -> Result<u32, RevealError> {
    u32::try_from(value).map_err(|_| err(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(stagger_ms: i32, duration_ms: i32, fallback_deadline_ms: i32) -> RevealConfig {
        RevealConfig {
            stagger_ms,
            duration_ms,
            fallback_deadline_ms,
            ..RevealConfig::default()
        }
    }

    #[test]
    fn accepts_deadline_after_last_stagger() {
        let timing = config(100, 500, 1000).validate(3).unwrap();
        assert_eq!(timing.stagger_ms, 100);
        assert_eq!(timing.fallback_deadline_ms, 1000);
    }

    #[test]
    fn deadline_must_strictly_exceed_last_end() {
        let err = config(100, 500, 700).validate(3).unwrap_err();
        assert_eq!(
            err,
            RevealError::FallbackTooEarly {
                deadline_ms: 700,
                last_end_ms: 700
            }
        );
    }

    #[test]
    fn deadline_shorter_than_duration_is_rejected() {
        assert!(matches!(
            config(0, 500, 400).validate(1),
            Err(RevealError::FallbackTooEarly { .. })
        ));
    }

    #[test]
    fn empty_group_only_needs_to_outlast_duration() {
        assert!(config(1000, 500, 600).validate(0).is_ok());
    }

    #[test]
    fn negative_values_are_reported_not_clamped() {
        assert_eq!(config(-10, 500, 2000).validate(2), Err(RevealError::NegativeStagger(-10)));
        assert_eq!(config(0, -1, 2000).validate(2), Err(RevealError::NegativeDuration(-1)));

        let delayed = RevealConfig {
            start_delay_ms: -5,
            ..RevealConfig::default()
        };
        assert_eq!(delayed.validate(1), Err(RevealError::NegativeStartDelay(-5)));
    }

    #[test]
    fn root_margin_matches_start_fraction() {
        assert_eq!(ScrollTrigger::at(0.8).root_margin(), "0px 0px -20% 0px");
        assert_eq!(ScrollTrigger::at(0.7).root_margin(), "0px 0px -30% 0px");
        assert_eq!(ScrollTrigger::at(1.5).root_margin(), "0px 0px -0% 0px");
    }
}
