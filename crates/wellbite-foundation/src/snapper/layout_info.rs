/// Position of one visible item along the main axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnapperLayoutItemInfo {
    pub index: usize,
    pub offset: i32,
    pub size: i32,
}

/// Geometry a snapping fling needs from its list.
///
/// All distances are whole pixels. A positive distance means the list must
/// scroll forward to bring the item onto its snap position.
pub trait SnapperLayoutInfo {
    /// Start of the scrollable area, in item offset coordinates.
    fn start_scroll_offset(&self) -> i32;

    /// End of the scrollable area, after trailing padding is removed.
    fn end_scroll_offset(&self) -> i32;

    fn total_items_count(&self) -> usize;

    /// Visible items in ascending index order.
    fn visible_items(&self) -> Box<dyn Iterator<Item = SnapperLayoutItemInfo> + '_>;

    /// The item considered snapped, or about to be.
    ///
    /// This is the last visible item whose leading edge is at or before its
    /// snap offset. When no item qualifies, the first visible item is used.
    /// `None` only when nothing is visible.
    fn current_item(&self) -> Option<SnapperLayoutItemInfo>;

    /// Pixels to scroll to snap `index`. Off-screen items are estimated from
    /// the average item extent. `None` when no estimate is possible.
    fn distance_to_index_snap(&self, index: usize) -> Option<i32>;

    /// Average extent of one item including spacing.
    fn estimate_distance_per_item(&self) -> Option<f32>;

    fn can_scroll_towards_start(&self) -> bool;

    fn can_scroll_towards_end(&self) -> bool;
}
