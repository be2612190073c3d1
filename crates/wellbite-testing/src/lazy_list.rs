use wellbite_foundation::lazy::{
    LazyListItemInfo, LazyListLayoutInfo, LazyListLayoutSource, LazyListScrollScope,
};
use wellbite_foundation::ScrollScope;

/// A lazy list of equally sized items.
#[derive(Debug, Clone)]
pub struct TestLazyList {
    item_count: usize,
    item_size: i32,
    spacing: i32,
    viewport_size: i32,
    before_padding: i32,
    after_padding: i32,
    scroll_position: i32,
    scroll_to_be_consumed: f32,
    info: LazyListLayoutInfo,
    scroll_log: Vec<f32>,
}

impl TestLazyList {
    pub fn new(item_count: usize, item_size: i32, viewport_size: i32) -> Self {
        let mut list = Self {
            item_count,
            item_size,
            spacing: 0,
            viewport_size,
            before_padding: 0,
            after_padding: 0,
            scroll_position: 0,
            scroll_to_be_consumed: 0.0,
            info: LazyListLayoutInfo::default(),
            scroll_log: Vec::new(),
        };
        list.remeasure();
        list
    }

    /// A wheel with `row_count` visible rows and enough padding that the
    /// first and last rows can reach the middle.
    pub fn wheel(item_count: usize, row_height: i32, row_count: usize) -> Self {
        let padding = row_height * ((row_count as i32 - 1) / 2);
        Self::new(item_count, row_height, row_height * row_count as i32)
            .with_content_padding(padding, padding)
    }

    pub fn with_spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing;
        self.remeasure();
        self
    }

    pub fn with_content_padding(mut self, before: i32, after: i32) -> Self {
        self.before_padding = before;
        self.after_padding = after;
        self.remeasure();
        self
    }

    /// Starts the list scrolled so `index` sits at the content start.
    pub fn starting_at(mut self, index: usize) -> Self {
        self.scroll_to_item(index);
        self
    }

    pub fn scroll_position(&self) -> i32 {
        self.scroll_position
    }

    pub fn max_scroll_position(&self) -> i32 {
        let count = self.item_count as i32;
        if count == 0 {
            return 0;
        }
        let content = count * self.item_size + (count - 1) * self.spacing;
        let available = self.viewport_size - self.before_padding - self.after_padding;
        (content - available).max(0)
    }

    /// Every value `scroll_by` returned, oldest first.
    pub fn scroll_log(&self) -> &[f32] {
        &self.scroll_log
    }

    pub fn clear_scroll_log(&mut self) {
        self.scroll_log.clear();
    }

    /// Index of the item whose leading edge is at the content start, if any.
    pub fn item_at_content_start(&self) -> Option<usize> {
        self.info
            .visible_items_info
            .iter()
            .find(|item| item.offset == 0)
            .map(|item| item.index)
    }

    fn stride(&self) -> i32 {
        self.item_size + self.spacing
    }

    fn remeasure(&mut self) {
        let stride = self.stride();
        let viewport_start = -self.before_padding;
        let viewport_end = self.viewport_size - self.before_padding;

        let visible = (0..self.item_count)
            .map(|index| LazyListItemInfo {
                index,
                offset: index as i32 * stride - self.scroll_position,
                size: self.item_size,
            })
            .skip_while(|item| item.offset + item.size <= viewport_start)
            .take_while(|item| item.offset < viewport_end)
            .collect();

        self.info = LazyListLayoutInfo {
            visible_items_info: visible,
            total_items_count: self.item_count,
            viewport_size: self.viewport_size,
            viewport_start_offset: viewport_start,
            viewport_end_offset: viewport_end,
            before_content_padding: self.before_padding,
            after_content_padding: self.after_padding,
        };
    }
}

impl LazyListLayoutSource for TestLazyList {
    fn layout_info(&self) -> &LazyListLayoutInfo {
        &self.info
    }
}

impl ScrollScope for TestLazyList {
    fn scroll_by(&mut self, delta: f32) -> f32 {
        self.scroll_to_be_consumed += delta;
        if self.scroll_to_be_consumed.abs() > 0.5 {
            let requested = self.scroll_to_be_consumed.round() as i32;
            let position = (self.scroll_position + requested).clamp(0, self.max_scroll_position());
            let moved = position - self.scroll_position;
            self.scroll_position = position;
            self.scroll_to_be_consumed -= moved as f32;
            self.remeasure();
        }

        let consumed = if self.scroll_to_be_consumed.abs() <= 0.5 {
            delta
        } else {
            let consumed = delta - self.scroll_to_be_consumed;
            self.scroll_to_be_consumed = 0.0;
            consumed
        };
        log::trace!("scroll_by({}) consumed {} at {}", delta, consumed, self.scroll_position);
        self.scroll_log.push(consumed);
        consumed
    }
}

impl LazyListScrollScope for TestLazyList {
    fn scroll_to_item(&mut self, index: usize) {
        let index = index.min(self.item_count.saturating_sub(1));
        self.scroll_position = (index as i32 * self.stride()).clamp(0, self.max_scroll_position());
        self.scroll_to_be_consumed = 0.0;
        self.remeasure();
    }
}
