use crate::foundation::math::fract;

/// Deterministic value in `[0, 1)` for an integer seed.
///
/// `fract(sin(seed * 127.1 + 311.7) * 43758.5453)`. Not a statistical PRNG: the only property
/// that matters is that a seed maps to the same value on every render and every worker.
pub fn seeded(seed: u64) -> f64 {
    let x = ((seed as f64) * 127.1 + 311.7).sin() * 43758.5453;
    fract(x)
}

/// A seed namespace: `SeedChannel(500).at(i)` is `seeded(i + 500)`.
///
/// Particle attributes read from disjoint channels so that, for example, x and y of the same
/// particle are decorrelated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedChannel(pub u64);

impl SeedChannel {
    /// Value for `index` in this channel.
    pub fn at(self, index: u64) -> f64 {
        seeded(index + self.0)
    }

    /// Value for `index` mapped linearly into `[lo, lo + span)`.
    pub fn span(self, index: u64, lo: f64, span: f64) -> f64 {
        lo + self.at(index) * span
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/seeded.rs"]
mod tests;
