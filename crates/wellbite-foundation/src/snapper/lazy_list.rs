use crate::lazy::{LazyListItemInfo, LazyListLayoutInfo, LazyListLayoutSource, LazyListScrollScope};
use crate::scroll_scope::ScrollScope;

use super::layout_info::{SnapperLayoutInfo, SnapperLayoutItemInfo};
use super::snap_offset::SnapOffset;

/// [`SnapperLayoutInfo`] over a lazy list.
///
/// Wraps anything that reports a [`LazyListLayoutInfo`]. When the wrapped
/// source can also scroll, so can the adapter, which makes it a complete
/// fling target.
#[derive(Debug, Clone)]
pub struct LazyListSnapperLayoutInfo<S> {
    source: S,
    snap_offset: SnapOffset,
}

impl<S: LazyListLayoutSource> LazyListSnapperLayoutInfo<S> {
    pub fn new(source: S, snap_offset: SnapOffset) -> Self {
        Self {
            source,
            snap_offset,
        }
    }

    pub fn snap_offset_policy(&self) -> SnapOffset {
        self.snap_offset
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    fn info(&self) -> &LazyListLayoutInfo {
        self.source.layout_info()
    }

    fn snap_offset_for(&self, item: &SnapperLayoutItemInfo) -> i32 {
        self.snap_offset
            .offset_within(self.start_scroll_offset(), self.end_scroll_offset(), item)
    }
}

fn to_snapper_item(item: &LazyListItemInfo) -> SnapperLayoutItemInfo {
    SnapperLayoutItemInfo {
        index: item.index,
        offset: item.offset,
        size: item.size,
    }
}

impl<S: LazyListLayoutSource> SnapperLayoutInfo for LazyListSnapperLayoutInfo<S> {
    fn start_scroll_offset(&self) -> i32 {
        0
    }

    fn end_scroll_offset(&self) -> i32 {
        let info = self.info();
        info.viewport_end_offset - info.after_content_padding
    }

    fn total_items_count(&self) -> usize {
        self.info().total_items_count
    }

    fn visible_items(&self) -> Box<dyn Iterator<Item = SnapperLayoutItemInfo> + '_> {
        Box::new(self.info().visible_items_info.iter().map(to_snapper_item))
    }

    fn current_item(&self) -> Option<SnapperLayoutItemInfo> {
        self.visible_items()
            .filter(|item| item.offset <= self.snap_offset_for(item))
            .last()
            .or_else(|| self.visible_items().next())
    }

    fn distance_to_index_snap(&self, index: usize) -> Option<i32> {
        if let Some(item) = self.info().item(index).map(to_snapper_item) {
            return Some(item.offset - self.snap_offset_for(&item));
        }

        let current = self.current_item()?;
        let per_item = self.estimate_distance_per_item()?;
        let items_away = index as f32 - current.index as f32;
        let estimated = (items_away * per_item).round() as i32;
        Some(estimated + current.offset - self.snap_offset_for(&current))
    }

    fn estimate_distance_per_item(&self) -> Option<f32> {
        let items = &self.info().visible_items_info;
        let first = items.first()?;
        let lowest = items.iter().min_by_key(|item| item.offset)?;
        let highest = items.iter().max_by_key(|item| item.offset + item.size)?;

        let span = (highest.offset + highest.size).max(lowest.offset + lowest.size)
            - lowest.offset.min(highest.offset);
        if span <= 0 {
            return None;
        }

        let spacing = items
            .get(1)
            .map(|second| second.offset - (first.offset + first.size))
            .unwrap_or(0);
        Some((span + spacing) as f32 / items.len() as f32)
    }

    fn can_scroll_towards_start(&self) -> bool {
        self.info()
            .visible_items_info
            .first()
            .map(|item| item.index > 0 || item.offset < self.start_scroll_offset())
            .unwrap_or(false)
    }

    fn can_scroll_towards_end(&self) -> bool {
        let info = self.info();
        info.visible_items_info
            .last()
            .map(|item| {
                item.index + 1 < info.total_items_count
                    || item.offset + item.size > self.end_scroll_offset()
            })
            .unwrap_or(false)
    }
}

impl<S: LazyListLayoutSource + ScrollScope> ScrollScope for LazyListSnapperLayoutInfo<S> {
    fn scroll_by(&mut self, delta: f32) -> f32 {
        self.source.scroll_by(delta)
    }
}

impl<S: LazyListScrollScope> LazyListSnapperLayoutInfo<S> {
    pub fn scroll_to_item(&mut self, index: usize) {
        self.source.scroll_to_item(index);
    }
}

#[cfg(test)]
#[path = "tests/lazy_list_tests.rs"]
mod tests;
