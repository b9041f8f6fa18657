//! Scroll- and time-driven presentation effects.
//!
//! The pure parts (`curve`, `scroll`, `counter`) know nothing about the
//! browser; `tick`, `listener` and `hooks` connect them to animation frames,
//! window events and yew state.

pub mod counter;
pub mod curve;
pub mod globe;
pub mod hooks;
pub mod listener;
pub mod scroll;
pub mod tick;
