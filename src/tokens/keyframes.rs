use std::time::Duration;

use serde::Serialize;

use crate::animation::ease::Ease;
use crate::animation::interpolate::interpolate_eased;

/// Length of one keyframe preview run.
pub const ANIMATION: Duration = Duration::from_millis(800);

/// Transform and opacity of the preview swatch.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Pose {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Horizontal offset in px.
    pub dx: f64,
    /// Vertical offset in px.
    pub dy: f64,
    /// Uniform scale.
    pub scale: f64,
    /// Rotation in degrees.
    pub rotate_deg: f64,
}

impl Pose {
    /// Untransformed, fully opaque.
    pub const REST: Pose = Pose {
        opacity: 1.0,
        dx: 0.0,
        dy: 0.0,
        scale: 1.0,
        rotate_deg: 0.0,
    };

    fn lerp(from: Pose, to: Pose, k: f64) -> Pose {
        let l = |a: f64, b: f64| a + (b - a) * k;
        Pose {
            opacity: l(from.opacity, to.opacity),
            dx: l(from.dx, to.dx),
            dy: l(from.dy, to.dy),
            scale: l(from.scale, to.scale),
            rotate_deg: l(from.rotate_deg, to.rotate_deg),
        }
    }
}

/// Entry keyframes offered in the preview library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Keyframe {
    /// Rise 30 px while fading in.
    FadeInUp,
    /// Drop 20 px while fading in.
    FadeInDown,
    /// Slide 40 px from the right while fading in.
    SlideInRight,
    /// Slide 40 px from the left while fading in.
    SlideInLeft,
    /// Grow from 95% while fading in.
    ScaleIn,
    /// Bob up 10 px with a 2 degree tilt and back.
    Float,
}

impl Keyframe {
    /// Every keyframe in library order.
    pub const ALL: [Keyframe; 6] = [
        Self::FadeInUp,
        Self::FadeInDown,
        Self::SlideInRight,
        Self::SlideInLeft,
        Self::ScaleIn,
        Self::Float,
    ];

    /// CSS animation name.
    pub fn name(self) -> &'static str {
        match self {
            Self::FadeInUp => "fadeInUp",
            Self::FadeInDown => "fadeInDown",
            Self::SlideInRight => "slideInRight",
            Self::SlideInLeft => "slideInLeft",
            Self::ScaleIn => "scaleIn",
            Self::Float => "float",
        }
    }

    /// Keyframe by CSS name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    fn start_pose(self) -> Pose {
        let hidden = Pose {
            opacity: 0.0,
            ..Pose::REST
        };
        match self {
            Self::FadeInUp => Pose { dy: 30.0, ..hidden },
            Self::FadeInDown => Pose { dy: -20.0, ..hidden },
            Self::SlideInRight => Pose { dx: 40.0, ..hidden },
            Self::SlideInLeft => Pose { dx: -40.0, ..hidden },
            Self::ScaleIn => Pose {
                scale: 0.95,
                ..hidden
            },
            Self::Float => Pose::REST,
        }
    }

    /// Pose `elapsed` into a run; the easing applies per keyframe segment and the end pose holds.
    pub fn pose(self, elapsed: Duration) -> Pose {
        let u = (elapsed.as_secs_f64() / ANIMATION.as_secs_f64()).clamp(0.0, 1.0);
        let ease = Ease::STANDARD_OUT;
        match self {
            Self::Float => {
                let peak = Pose {
                    dy: -10.0,
                    rotate_deg: 2.0,
                    ..Pose::REST
                };
                if u <= 0.5 {
                    Pose::lerp(Pose::REST, peak, interpolate_eased(u, [0.0, 0.5], [0.0, 1.0], ease))
                } else {
                    Pose::lerp(peak, Pose::REST, interpolate_eased(u, [0.5, 1.0], [0.0, 1.0], ease))
                }
            }
            _ => Pose::lerp(self.start_pose(), Pose::REST, ease.apply(u)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tokens/keyframes.rs"]
mod tests;
