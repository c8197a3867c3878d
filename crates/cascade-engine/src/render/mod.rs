//! Read-out formatting.
//!
//! Turns unit values into the zero-padded text a [`CascadeClock`] renders.
//! Nothing here holds state; every function is a pure transform.
//!
//! [`CascadeClock`]: crate::clock::CascadeClock

mod readout;

pub use readout::{join_readout, zero_pad};
