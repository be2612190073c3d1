//! Foundation for snapping lists.
//!
//! A host list exposes its layout through [`lazy::LazyListLayoutInfo`] and
//! accepts scroll deltas through [`ScrollScope`]. The [`snapper`] module
//! turns a release velocity into a decay followed by a settle spring that
//! ends with one item exactly at the snap position.

pub mod error;
pub mod gesture_constants;
pub mod lazy;
pub mod scroll_scope;
pub mod snapper;

pub use error::SnapError;
pub use lazy::{LazyListItemInfo, LazyListLayoutInfo, LazyListLayoutSource, LazyListScrollScope};
pub use scroll_scope::ScrollScope;
pub use snapper::{
    FlingOutcome, FlingPhase, FlingSession, FlingStart, FlingStep, LazyListSnapperLayoutInfo,
    SessionToken, SnapIndex, SnapOffset, SnapTargetResolver, SnapperFlingBehavior,
    SnapperFlingBehaviorDefaults, SnapperLayoutInfo, SnapperLayoutItemInfo,
};
