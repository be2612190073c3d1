use thiserror::Error;

/// Reasons a fling stops short of the normal decay-then-settle path.
///
/// None of these escape the controller. Each degrades the fling to a
/// pass-through or ends the active phase early.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SnapError {
    #[error("snap target {index} is outside 0..{count}")]
    OutOfRangeTarget { index: usize, count: usize },

    #[error("no item is visible to snap to")]
    NoCurrentItem,

    #[error("list consumed {consumed}px of a {requested}px scroll")]
    EdgeOverscrollMismatch { requested: f32, consumed: f32 },
}
