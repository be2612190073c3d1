//! Test harness for snapping lists.
//!
//! [`TestLazyList`] behaves like a measured lazy list with fixed item sizes:
//! it keeps whole-pixel offsets, carries sub-pixel scroll between calls and
//! clamps at its edges. [`FrameDriver`] owns a runtime and steps its frame
//! clock at a fixed interval.

mod frame_driver;
mod lazy_list;

pub use frame_driver::FrameDriver;
pub use lazy_list::TestLazyList;

/// Routes `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
