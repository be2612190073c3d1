//! Horizontal ruler for picking a body weight.
//!
//! One tick per `step` between `min_weight` and `max_weight`. The tick under
//! the centre of the ruler is the selection.

use std::fmt;

use wellbite_foundation::gesture_constants::{DEFAULT_FRAME_INTERVAL_NANOS, MAX_FLING_VELOCITY};
use wellbite_foundation::{
    FlingOutcome, LazyListLayoutSource, LazyListScrollScope, LazyListSnapperLayoutInfo, SnapOffset,
    SnapperFlingBehavior,
};

const WHOLE_EPSILON: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightPickerConfig {
    pub initial_weight: f32,
    pub min_weight: f32,
    pub max_weight: f32,
    pub step: f32,
    /// Width of one tick, in pixels.
    pub tick_width: i32,
}

impl Default for WeightPickerConfig {
    fn default() -> Self {
        Self {
            initial_weight: 110.5,
            min_weight: 80.0,
            max_weight: 300.0,
            step: 0.5,
            tick_width: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickKind {
    /// Multiples of ten.
    Major,
    /// Whole numbers.
    Minor,
    Fine,
}

impl TickKind {
    /// Tick length, in dp.
    pub fn height(self) -> f32 {
        match self {
            TickKind::Major => 40.0,
            TickKind::Minor => 30.0,
            TickKind::Fine => 20.0,
        }
    }
}

fn is_multiple_of(value: f32, unit: f32) -> bool {
    let rest = value.rem_euclid(unit);
    rest < WHOLE_EPSILON || unit - rest < WHOLE_EPSILON
}

type WeightSelected = Box<dyn FnMut(f32)>;

pub struct WeightPickerState {
    config: WeightPickerConfig,
    selected_weight: f32,
    behavior: SnapperFlingBehavior,
    on_weight_selected: Option<WeightSelected>,
}

impl WeightPickerState {
    pub fn new(config: WeightPickerConfig) -> Self {
        Self {
            selected_weight: config
                .initial_weight
                .clamp(config.min_weight, config.max_weight.max(config.min_weight)),
            config,
            behavior: SnapperFlingBehavior::default(),
            on_weight_selected: None,
        }
    }

    pub fn with_behavior(mut self, behavior: SnapperFlingBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn on_weight_selected(mut self, callback: impl FnMut(f32) + 'static) -> Self {
        self.on_weight_selected = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &WeightPickerConfig {
        &self.config
    }

    pub fn selected_weight(&self) -> f32 {
        self.selected_weight
    }

    /// Number of steps between the bounds. Zero for a degenerate range.
    pub fn total_steps(&self) -> usize {
        let WeightPickerConfig {
            min_weight,
            max_weight,
            step,
            ..
        } = self.config;
        if step <= 0.0 || max_weight <= min_weight {
            return 0;
        }
        ((max_weight - min_weight) / step) as usize
    }

    pub fn item_count(&self) -> usize {
        self.total_steps() + 1
    }

    /// Tick of the initial weight. Truncates between ticks.
    pub fn initial_index(&self) -> usize {
        self.index_for_weight(self.config.initial_weight)
    }

    pub fn index_for_weight(&self, weight: f32) -> usize {
        if self.config.step <= 0.0 {
            return 0;
        }
        let steps = (weight - self.config.min_weight) / self.config.step;
        (steps.max(0.0) as usize).min(self.total_steps())
    }

    pub fn weight_for_index(&self, index: usize) -> f32 {
        self.config.min_weight + index as f32 * self.config.step
    }

    pub fn tick_kind(&self, index: usize) -> TickKind {
        let weight = self.weight_for_index(index);
        if is_multiple_of(weight, 10.0) {
            TickKind::Major
        } else if is_multiple_of(weight, 1.0) {
            TickKind::Minor
        } else {
            TickKind::Fine
        }
    }

    /// Padding on each end so a tick can sit exactly under the centre.
    pub fn content_padding(&self, viewport_width: i32) -> i32 {
        ((viewport_width - self.config.tick_width) / 2).max(0)
    }

    pub fn label(&self) -> String {
        weight_label(self.selected_weight)
    }

    /// Selects the tick nearest the centre of `source`.
    pub fn scroll_finished<S: LazyListLayoutSource>(&mut self, source: &S) -> Option<f32> {
        let index = source.layout_info().item_nearest_viewport_center()?.index;
        let weight = self
            .weight_for_index(index)
            .clamp(self.config.min_weight, self.config.max_weight.max(self.config.min_weight));
        log::debug!("weight ruler stopped on tick {} ({})", index, weight);

        self.selected_weight = weight;
        if let Some(callback) = self.on_weight_selected.as_mut() {
            callback(weight);
        }
        Some(weight)
    }

    /// Flings the ruler to rest on a tick, then selects it.
    pub fn fling<H: LazyListScrollScope>(
        &mut self,
        host: &mut H,
        velocity: f32,
    ) -> (FlingOutcome, Option<f32>) {
        self.behavior.cancel();
        let velocity = velocity.clamp(-MAX_FLING_VELOCITY, MAX_FLING_VELOCITY);
        let outcome = {
            let mut scope = LazyListSnapperLayoutInfo::new(&mut *host, SnapOffset::Center);
            self.behavior
                .perform_fling(&mut scope, velocity, DEFAULT_FRAME_INTERVAL_NANOS)
        };
        (outcome, self.scroll_finished(&*host))
    }
}

/// Formats `weight` with one truncated decimal, e.g. `110.5 lbs`.
pub fn weight_label(weight: f32) -> String {
    let tenths = (weight * 10.0) as i64;
    format!("{}.{} lbs", weight as i64, tenths % 10)
}

impl fmt::Debug for WeightPickerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightPickerState")
            .field("config", &self.config)
            .field("selected_weight", &self.selected_weight)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/weight_picker_tests.rs"]
mod tests;
