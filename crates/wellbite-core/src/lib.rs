//! Core runtime for the WellBite pickers.
//!
//! The runtime owns a queue of frame callbacks. Animations register a
//! callback for the next frame through a [`FrameClock`], and the host drives
//! time forward by calling [`RuntimeHandle::drain_frame_callbacks`] once per
//! display frame.

pub mod frame_clock;
pub mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use runtime::{FrameCallbackId, Runtime, RuntimeHandle};

/// Nanoseconds per millisecond.
pub const NANOS_PER_MILLI: u64 = 1_000_000;
