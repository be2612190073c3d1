use smallvec::SmallVec;

use crate::scroll_scope::ScrollScope;

/// Information about the currently visible items in a lazy list.
///
/// Offsets are in pixels along the main axis, measured from the start of the
/// content area (after the leading content padding). Items inside the padding
/// have negative offsets.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct LazyListLayoutInfo {
    /// Visible items in ascending index order.
    pub visible_items_info: SmallVec<[LazyListItemInfo; 8]>,

    pub total_items_count: usize,

    /// Size of the viewport in the main axis.
    pub viewport_size: i32,

    /// Start of the viewport relative to the content area. This is the
    /// negated leading padding.
    pub viewport_start_offset: i32,

    /// End of the viewport relative to the content area.
    pub viewport_end_offset: i32,

    pub before_content_padding: i32,

    pub after_content_padding: i32,
}

impl LazyListLayoutInfo {
    pub fn item(&self, index: usize) -> Option<&LazyListItemInfo> {
        self.visible_items_info.iter().find(|item| item.index == index)
    }

    /// Item whose centre is nearest the centre of the viewport.
    pub fn item_nearest_viewport_center(&self) -> Option<&LazyListItemInfo> {
        let center = self.viewport_start_offset + self.viewport_size / 2;
        self.visible_items_info
            .iter()
            .min_by_key(|item| (item.offset + item.size / 2 - center).abs())
    }
}

/// A single visible item of a lazy list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LazyListItemInfo {
    pub index: usize,
    /// Offset of the item's leading edge.
    pub offset: i32,
    pub size: i32,
}

/// Anything that can report the current layout of a lazy list.
pub trait LazyListLayoutSource {
    fn layout_info(&self) -> &LazyListLayoutInfo;
}

impl LazyListLayoutSource for LazyListLayoutInfo {
    fn layout_info(&self) -> &LazyListLayoutInfo {
        self
    }
}

impl<T: LazyListLayoutSource + ?Sized> LazyListLayoutSource for &T {
    fn layout_info(&self) -> &LazyListLayoutInfo {
        (**self).layout_info()
    }
}

impl<T: LazyListLayoutSource + ?Sized> LazyListLayoutSource for &mut T {
    fn layout_info(&self) -> &LazyListLayoutInfo {
        (**self).layout_info()
    }
}

/// A lazy list that can be scrolled by delta or jumped to an item.
pub trait LazyListScrollScope: LazyListLayoutSource + ScrollScope {
    /// Places `index` at the leading edge of the content area.
    fn scroll_to_item(&mut self, index: usize);
}

impl<T: LazyListScrollScope + ?Sized> LazyListScrollScope for &mut T {
    fn scroll_to_item(&mut self, index: usize) {
        (**self).scroll_to_item(index)
    }
}
