use super::layout_info::{SnapperLayoutInfo, SnapperLayoutItemInfo};

/// Where inside the scrollable area an item rests once snapped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SnapOffset {
    /// Leading edge on the start of the area.
    Start,
    /// Item centred in the area.
    #[default]
    Center,
    /// Trailing edge on the end of the area.
    End,
}

impl SnapOffset {
    /// Offset `item` has when snapped under this policy.
    pub fn snap_offset(self, layout: &dyn SnapperLayoutInfo, item: &SnapperLayoutItemInfo) -> i32 {
        self.offset_within(layout.start_scroll_offset(), layout.end_scroll_offset(), item)
    }

    pub fn offset_within(self, start: i32, end: i32, item: &SnapperLayoutItemInfo) -> i32 {
        match self {
            SnapOffset::Start => start,
            SnapOffset::Center => start + (end - start - item.size) / 2,
            SnapOffset::End => end - item.size,
        }
    }
}
