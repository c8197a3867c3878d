//! Single bounded counters.
//!
//! A [`CountingUnit`] is the leaf of a cascade: it counts `0..limit`, wraps,
//! and reports the wrap so a parent can carry into the next unit.

mod counting_unit;

pub use counting_unit::CountingUnit;
