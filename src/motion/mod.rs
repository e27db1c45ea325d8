//! Motion engines shared by compositions: particle fields, orbits, typed text, entity
//! highlighting and waveforms.

pub(crate) mod field;
pub(crate) mod highlight;
pub(crate) mod orbit;
pub(crate) mod typing;
pub(crate) mod waveform;
