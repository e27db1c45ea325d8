//! Frame-driven animation primitives.
//!
//! Everything here is a pure function of the frame number. Compositions build on these rather
//! than re-deriving their own ramps.

pub(crate) mod ease;
pub(crate) mod interpolate;
pub(crate) mod reveal;
pub(crate) mod seeded;
