//! Cascade engine crate.
//!
//! Dependent modular counters: each [`CountingUnit`] wraps at its own limit
//! and carries into the next, and a [`CascadeClock`] renders the chain as a
//! zero-padded read-out.
//!
//! ```rust
//! use cascade_engine::CascadeClock;
//!
//! let mut clock = CascadeClock::hms();
//! for _ in 0..61 {
//!     clock.tick();
//! }
//! assert_eq!(clock.render(), "00:01.01");
//! ```

pub mod clock;
pub mod error;
pub mod logging;
pub mod render;
pub mod unit;

pub use clock::{CascadeClock, ClockBuilder};
pub use error::InvalidConfiguration;
pub use unit::CountingUnit;
