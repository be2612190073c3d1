//! The wheel every picker is built from.
//!
//! A wheel shows `row_count` rows of `row_height` pixels with the selected
//! row in the middle. Leading and trailing padding of half the remaining rows
//! lets the first and last items reach the middle.

use std::fmt;

use wellbite_foundation::gesture_constants::{DEFAULT_FRAME_INTERVAL_NANOS, MAX_FLING_VELOCITY};
use wellbite_foundation::{
    FlingOutcome, LazyListLayoutSource, LazyListScrollScope, LazyListSnapperLayoutInfo, ScrollScope,
    SnapOffset, SnapperFlingBehavior, SnapperLayoutInfo,
};

/// Text size of the selected row, in sp.
pub const SELECTED_TEXT_SIZE: f32 = 18.0;
/// Text size of the other rows, in sp.
pub const TEXT_SIZE: f32 = 16.0;

const NEAR_ALPHA: f32 = 1.2;
const FAR_ALPHA: f32 = 0.2;

type ScrollFinished = Box<dyn FnMut(usize) -> Option<usize>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelPickerConfig {
    /// Row shown in the middle before any scrolling.
    pub start_index: usize,
    /// Visible rows. Odd counts keep a single row in the middle.
    pub row_count: usize,
    pub row_height: i32,
    pub snap_offset: SnapOffset,
}

impl WheelPickerConfig {
    pub fn new(start_index: usize, row_count: usize, row_height: i32) -> Self {
        Self {
            start_index,
            row_count: row_count.max(1),
            row_height,
            snap_offset: SnapOffset::Center,
        }
    }
}

impl Default for WheelPickerConfig {
    fn default() -> Self {
        Self::new(0, 3, 48)
    }
}

pub struct WheelPickerState {
    texts: Vec<String>,
    config: WheelPickerConfig,
    behavior: SnapperFlingBehavior,
    on_scroll_finished: Option<ScrollFinished>,
    settled_index: Option<usize>,
}

impl WheelPickerState {
    pub fn new(texts: Vec<String>, config: WheelPickerConfig) -> Self {
        Self {
            texts,
            config,
            behavior: SnapperFlingBehavior::default(),
            on_scroll_finished: None,
            settled_index: None,
        }
    }

    pub fn with_behavior(mut self, behavior: SnapperFlingBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Called with the settled row after each fling. A returned index is
    /// scrolled to in place of the settled one.
    pub fn on_scroll_finished(
        mut self,
        callback: impl FnMut(usize) -> Option<usize> + 'static,
    ) -> Self {
        self.on_scroll_finished = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &WheelPickerConfig {
        &self.config
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn set_texts(&mut self, texts: Vec<String>) {
        self.texts = texts;
    }

    pub fn text(&self, index: usize) -> Option<&str> {
        self.texts.get(index).map(String::as_str)
    }

    pub fn count(&self) -> usize {
        self.texts.len()
    }

    pub fn viewport_size(&self) -> i32 {
        self.config.row_height * self.config.row_count as i32
    }

    /// Padding on each end of the list.
    pub fn content_padding(&self) -> i32 {
        self.config.row_height * ((self.config.row_count as i32 - 1) / 2)
    }

    /// Last row reported to the scroll-finished callback.
    pub fn settled_index(&self) -> Option<usize> {
        self.settled_index
    }

    pub fn is_flinging(&self) -> bool {
        self.behavior.is_running()
    }

    fn layout<'a, S: LazyListLayoutSource>(
        &self,
        source: &'a S,
    ) -> LazyListSnapperLayoutInfo<&'a S> {
        LazyListSnapperLayoutInfo::new(source, self.config.snap_offset)
    }

    /// Row in the middle of the wheel. A row partway past the middle counts
    /// as the next one.
    pub fn snapped_item_index<S: LazyListLayoutSource>(&self, source: &S) -> Option<usize> {
        let layout = self.layout(source);
        let current = layout.current_item()?;
        let index = if layout.distance_to_index_snap(current.index) == Some(0) {
            current.index
        } else {
            current.index + 1
        };
        Some(index.min(layout.total_items_count().saturating_sub(1)))
    }

    /// Opacity of `index`: fades across one row from the middle, then stays
    /// faint.
    pub fn item_alpha<S: LazyListLayoutSource>(&self, source: &S, index: usize) -> f32 {
        let row = self.config.row_height as f32;
        if row <= 0.0 {
            return FAR_ALPHA;
        }
        match self.layout(source).distance_to_index_snap(index) {
            Some(distance) if distance.abs() as f32 <= row => {
                (NEAR_ALPHA - distance.abs() as f32 / row).min(1.0)
            }
            _ => FAR_ALPHA,
        }
    }

    pub fn is_item_selected<S: LazyListLayoutSource>(&self, source: &S, index: usize) -> bool {
        self.snapped_item_index(source) == Some(index)
    }

    pub fn item_text_size<S: LazyListLayoutSource>(&self, source: &S, index: usize) -> f32 {
        if self.is_item_selected(source, index) {
            SELECTED_TEXT_SIZE
        } else {
            TEXT_SIZE
        }
    }

    /// Flings `host` to rest and reports the settled row.
    pub fn fling<H: LazyListScrollScope>(&mut self, host: &mut H, velocity: f32) -> FlingOutcome {
        self.behavior.cancel();
        let velocity = velocity.clamp(-MAX_FLING_VELOCITY, MAX_FLING_VELOCITY);
        let outcome = {
            let mut scope = LazyListSnapperLayoutInfo::new(&mut *host, self.config.snap_offset);
            self.behavior
                .perform_fling(&mut scope, velocity, DEFAULT_FRAME_INTERVAL_NANOS)
        };
        self.on_fling_finished(host, outcome);
        outcome
    }

    /// Moves the wheel under a finger. Stops any fling in progress.
    pub fn drag_by<H: LazyListScrollScope>(&mut self, host: &mut H, delta: f32) -> f32 {
        self.behavior.cancel();
        host.scroll_by(delta)
    }

    /// Reports the settled row of a finished fling. Flings that passed
    /// through without snapping report nothing.
    pub fn on_fling_finished<H: LazyListScrollScope>(
        &mut self,
        host: &mut H,
        outcome: FlingOutcome,
    ) -> Option<usize> {
        if !outcome.is_settled() {
            return None;
        }
        self.scroll_finished(host)
    }

    /// Reports the row now in the middle. Returns the row the wheel ends on.
    /// Redirects past the last row are ignored.
    pub fn scroll_finished<H: LazyListScrollScope>(&mut self, host: &mut H) -> Option<usize> {
        let count = host.layout_info().total_items_count;
        if count == 0 {
            return None;
        }
        let index = self
            .snapped_item_index(&*host)
            .unwrap_or(self.config.start_index);
        let mut resting = index;
        if let Some(callback) = self.on_scroll_finished.as_mut() {
            match callback(index) {
                Some(redirect) if redirect < count => {
                    log::debug!("wheel settled on {}, redirected to {}", index, redirect);
                    host.scroll_to_item(redirect);
                    resting = redirect;
                }
                Some(redirect) => {
                    log::warn!(
                        "ignoring redirect to row {} of {}, staying on {}",
                        redirect,
                        count,
                        index
                    );
                }
                None => {}
            }
        }
        self.settled_index = Some(resting);
        Some(resting)
    }
}

impl fmt::Debug for WheelPickerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WheelPickerState")
            .field("count", &self.texts.len())
            .field("config", &self.config)
            .field("settled_index", &self.settled_index)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/wheel_picker_tests.rs"]
mod tests;
