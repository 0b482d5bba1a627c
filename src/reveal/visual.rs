/// Opacity and transform of one element at a point in an animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    /// Degrees around the horizontal axis.
    pub rotate_x: f64,
}

impl VisualState {
    /// Terminal state every reveal ends in.
    pub const VISIBLE: VisualState = VisualState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate_x: 0.0,
    };

    /// Fully transparent, otherwise untransformed.
    pub fn hidden() -> Self {
        VisualState {
            opacity: 0.0,
            ..Self::VISIBLE
        }
    }

    pub fn offset(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn scaled(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn tilted(mut self, degrees: f64) -> Self {
        self.rotate_x = degrees;
        self
    }

    pub fn to_css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}) rotateX({}deg)",
            self.x, self.y, self.scale, self.rotate_x
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    Power1InOut,
    Power2Out,
    #[default]
    Power3Out,
    /// Overshoots slightly before settling.
    BackOut,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Power1InOut => "cubic-bezier(0.445, 0.05, 0.55, 0.95)",
            Easing::Power2Out => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Easing::Power3Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Easing::BackOut => "cubic-bezier(0.175, 0.885, 0.32, 1.275)",
        }
    }
}

/// Timing of a single animated transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tween {
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Tween {
    pub fn ends_at(&self) -> u32 {
        self.delay_ms.saturating_add(self.duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_is_identity_transform() {
        assert_eq!(
            VisualState::VISIBLE.to_css_transform(),
            "translate(0px, 0px) scale(1) rotateX(0deg)"
        );
    }

    #[test]
    fn builders_only_touch_their_axis() {
        let state = VisualState::hidden().offset(0.0, 80.0).tilted(45.0);
        assert_eq!(state.opacity, 0.0);
        assert_eq!(state.scale, 1.0);
        assert_eq!(state.to_css_transform(), "translate(0px, 80px) scale(1) rotateX(45deg)");
    }

    #[test]
    fn tween_end_includes_delay() {
        let tween = Tween {
            delay_ms: 200,
            duration_ms: 500,
            easing: Easing::Linear,
        };
        assert_eq!(tween.ends_at(), 700);
    }
}
