//! Cascading clock.
//!
//! Intended usage:
//! - build one `CascadeClock` from `(limit, label)` pairs, least-significant first
//! - call `tick()` once per discrete step supplied by the driver
//! - call `render()` to obtain the read-out

mod builder;
mod cascade_clock;

pub use builder::ClockBuilder;
pub use cascade_clock::CascadeClock;
