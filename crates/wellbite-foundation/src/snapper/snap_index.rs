use std::fmt;
use std::rc::Rc;

use wellbite_animation::FloatDecayAnimationSpec;

use crate::error::SnapError;
use crate::gesture_constants::MIN_DECAY_VELOCITY;

use super::layout_info::{SnapperLayoutInfo, SnapperLayoutItemInfo};

type SnapIndexFn = dyn Fn(&dyn SnapperLayoutInfo, usize, usize) -> usize;

/// Final say over which index a fling settles on.
///
/// Called with the layout, the index the fling started from and the index
/// the velocity projects to. Returns the index to settle on.
#[derive(Clone)]
pub struct SnapIndex(Rc<SnapIndexFn>);

impl SnapIndex {
    /// Accepts the projected index unchanged.
    pub fn identity() -> Self {
        Self::from_fn(|_, _, target| target)
    }

    /// Limits a fling to at most `items` items away from its start.
    pub fn within(items: usize) -> Self {
        Self::from_fn(move |_, start, target| {
            target.clamp(start.saturating_sub(items), start.saturating_add(items))
        })
    }

    pub fn from_fn(
        resolve: impl Fn(&dyn SnapperLayoutInfo, usize, usize) -> usize + 'static,
    ) -> Self {
        Self(Rc::new(resolve))
    }

    pub fn resolve(
        &self,
        layout: &dyn SnapperLayoutInfo,
        start_index: usize,
        target_index: usize,
    ) -> usize {
        (self.0)(layout, start_index, target_index)
    }
}

impl Default for SnapIndex {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for SnapIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SnapIndex(..)")
    }
}

/// Picks the item a fling will settle on.
pub struct SnapTargetResolver<'a> {
    decay_spec: &'a dyn FloatDecayAnimationSpec,
    snap_index: &'a SnapIndex,
    maximum_fling_distance: f32,
}

impl<'a> SnapTargetResolver<'a> {
    pub fn new(
        decay_spec: &'a dyn FloatDecayAnimationSpec,
        snap_index: &'a SnapIndex,
        maximum_fling_distance: f32,
    ) -> Self {
        Self {
            decay_spec,
            snap_index,
            maximum_fling_distance,
        }
    }

    /// Target index for a release at `velocity`, after the [`SnapIndex`]
    /// has had its say.
    pub fn resolve(
        &self,
        layout: &dyn SnapperLayoutInfo,
        velocity: f32,
    ) -> Result<usize, SnapError> {
        let current = layout.current_item().ok_or(SnapError::NoCurrentItem)?;
        let start_index = if velocity < 0.0 {
            current.index + 1
        } else {
            current.index
        };
        let projected = self.determine_target_index(layout, &current, velocity);
        let index = self.snap_index.resolve(layout, start_index, projected);

        let count = layout.total_items_count();
        if index >= count {
            return Err(SnapError::OutOfRangeTarget { index, count });
        }
        Ok(index)
    }

    /// Index the decay would carry the list to, clamped to the item range.
    ///
    /// Without velocity this is whichever of the current and next item is
    /// nearer its snap position.
    pub fn determine_target_index(
        &self,
        layout: &dyn SnapperLayoutInfo,
        current: &SnapperLayoutItemInfo,
        velocity: f32,
    ) -> usize {
        let last_index = layout.total_items_count().saturating_sub(1);
        let per_item = match layout.estimate_distance_per_item() {
            Some(distance) if distance > 0.0 => distance,
            _ => return current.index,
        };
        let to_current = layout.distance_to_index_snap(current.index).unwrap_or(0) as f32;
        let to_next = layout.distance_to_index_snap(current.index + 1).unwrap_or(0) as f32;

        if velocity.abs() < MIN_DECAY_VELOCITY {
            let nearest = if to_current.abs() < to_next.abs() {
                current.index
            } else {
                current.index + 1
            };
            return nearest.min(last_index);
        }

        let fling_distance = self
            .decay_spec
            .target_value(0.0, velocity)
            .clamp(-self.maximum_fling_distance, self.maximum_fling_distance);
        let distance_to_target = if velocity < 0.0 {
            (fling_distance + to_next).min(0.0)
        } else {
            (fling_distance + to_current).max(0.0)
        };
        let index_delta = (distance_to_target / per_item).round() as i64;

        (current.index as i64 + index_delta).clamp(0, last_index as i64) as usize
    }

    /// Whether a decay at `velocity` crosses the snap boundary of the
    /// neighbouring item in the direction of travel.
    pub fn can_decay_beyond_current_item(
        &self,
        layout: &dyn SnapperLayoutInfo,
        current: &SnapperLayoutItemInfo,
        velocity: f32,
    ) -> bool {
        if velocity.abs() < MIN_DECAY_VELOCITY {
            return false;
        }
        let fling_distance = self.decay_spec.target_value(0.0, velocity);
        if velocity < 0.0 {
            layout
                .distance_to_index_snap(current.index)
                .is_some_and(|distance| fling_distance <= distance as f32)
        } else {
            layout
                .distance_to_index_snap(current.index + 1)
                .is_some_and(|distance| fling_distance >= distance as f32)
        }
    }
}

#[cfg(test)]
#[path = "tests/snap_index_tests.rs"]
mod tests;
