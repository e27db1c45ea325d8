use crate::animation::ease::Ease;

/// Behavior of [`interpolate`] outside the input domain, per edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum Extrapolate {
    /// Continue the line through the domain.
    #[default]
    Extend,
    /// Hold the range endpoint.
    Clamp,
}

/// Edge policy pair for [`interpolate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Extrapolation {
    /// Policy for inputs below `domain[0]`.
    pub left: Extrapolate,
    /// Policy for inputs above `domain[1]`.
    pub right: Extrapolate,
}

impl Extrapolation {
    /// Extend on both edges.
    pub const EXTEND: Self = Self {
        left: Extrapolate::Extend,
        right: Extrapolate::Extend,
    };

    /// Clamp on both edges.
    pub const CLAMP: Self = Self {
        left: Extrapolate::Clamp,
        right: Extrapolate::Clamp,
    };

    /// Clamp only above the domain.
    pub const CLAMP_RIGHT: Self = Self {
        left: Extrapolate::Extend,
        right: Extrapolate::Clamp,
    };
}

/// Map `input` from `domain` to `range` linearly.
///
/// With [`Extrapolate::Clamp`] on an edge, inputs beyond that edge return the matching range
/// endpoint exactly. A zero-width domain behaves as a step at `domain[0]`.
pub fn interpolate(input: f64, domain: [f64; 2], range: [f64; 2], edges: Extrapolation) -> f64 {
    let [d0, d1] = domain;
    let [r0, r1] = range;

    if d0 == d1 {
        return if input < d0 { r0 } else { r1 };
    }

    let (lo, hi) = if d0 < d1 { (d0, d1) } else { (d1, d0) };
    // Edge policies refer to the low/high end of the input axis.
    let (r_lo, r_hi) = if d0 < d1 { (r0, r1) } else { (r1, r0) };

    if input < lo && edges.left == Extrapolate::Clamp {
        return r_lo;
    }
    if input > hi && edges.right == Extrapolate::Clamp {
        return r_hi;
    }

    let t = (input - d0) / (d1 - d0);
    r0 + (r1 - r0) * t
}

/// [`interpolate`] with both edges clamped.
pub fn interpolate_clamped(input: f64, domain: [f64; 2], range: [f64; 2]) -> f64 {
    interpolate(input, domain, range, Extrapolation::CLAMP)
}

/// Clamped interpolation with `ease` applied to the normalized progress.
pub fn interpolate_eased(input: f64, domain: [f64; 2], range: [f64; 2], ease: Ease) -> f64 {
    let t = interpolate_clamped(input, domain, [0.0, 1.0]);
    let k = ease.apply(t);
    range[0] + (range[1] - range[0]) * k
}

/// Map a sine-like signal in `[-1, 1]` to `[lo, hi]`.
pub fn remap_unit_wave(s: f64, lo: f64, hi: f64) -> f64 {
    interpolate(s, [-1.0, 1.0], [lo, hi], Extrapolation::EXTEND)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
