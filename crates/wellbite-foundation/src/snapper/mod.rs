//! Snapping fling behavior.
//!
//! [`SnapperFlingBehavior`] drives a fling in two phases. An optional decay
//! coasts the list using the release velocity. A settle spring then pulls
//! the chosen target item onto its snap position. Target selection lives in
//! [`SnapTargetResolver`], and the list geometry it reads comes from a
//! [`SnapperLayoutInfo`].

mod fling_behavior;
mod layout_info;
mod lazy_list;
mod snap_index;
mod snap_offset;

pub use fling_behavior::{
    FlingOutcome, FlingPhase, FlingSession, FlingStart, FlingStep, SessionToken,
    SnapperFlingBehavior, SnapperFlingBehaviorDefaults,
};
pub use layout_info::{SnapperLayoutInfo, SnapperLayoutItemInfo};
pub use lazy_list::LazyListSnapperLayoutInfo;
pub use snap_index::{SnapIndex, SnapTargetResolver};
pub use snap_offset::SnapOffset;
