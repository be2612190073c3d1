use super::*;

use smallvec::SmallVec;
use wellbite_animation::ExponentialDecaySpec;

use crate::lazy::{LazyListItemInfo, LazyListLayoutInfo};
use crate::snapper::{LazyListSnapperLayoutInfo, SnapOffset};

/// Five-row wheel of 50px rows with `snapped` on the snap position.
fn wheel(count: usize, snapped: usize) -> LazyListSnapperLayoutInfo<LazyListLayoutInfo> {
    let scroll = snapped as i32 * 50;
    let visible: SmallVec<[LazyListItemInfo; 8]> = (0..count)
        .map(|index| LazyListItemInfo {
            index,
            offset: index as i32 * 50 - scroll,
            size: 50,
        })
        .filter(|item| item.offset + item.size > -100 && item.offset < 150)
        .collect();
    let info = LazyListLayoutInfo {
        visible_items_info: visible,
        total_items_count: count,
        viewport_size: 250,
        viewport_start_offset: -100,
        viewport_end_offset: 150,
        before_content_padding: 100,
        after_content_padding: 100,
    };
    LazyListSnapperLayoutInfo::new(info, SnapOffset::Center)
}

fn current(layout: &dyn SnapperLayoutInfo) -> SnapperLayoutItemInfo {
    layout.current_item().expect("current item")
}

#[test]
fn within_limits_distance_from_start() {
    let layout = wheel(100, 10);
    let snap_index = SnapIndex::within(2);
    assert_eq!(snap_index.resolve(&layout, 10, 15), 12);
    assert_eq!(snap_index.resolve(&layout, 10, 5), 8);
    assert_eq!(snap_index.resolve(&layout, 1, 0), 0);
    assert_eq!(SnapIndex::identity().resolve(&layout, 10, 42), 42);
}

#[test]
fn velocity_projects_whole_items() {
    let decay = ExponentialDecaySpec::default();
    let snap_index = SnapIndex::identity();
    let resolver = SnapTargetResolver::new(&decay, &snap_index, f32::MAX);
    let layout = wheel(100, 10);

    // 630.1px/s coasts 150px, three rows.
    assert_eq!(resolver.determine_target_index(&layout, &current(&layout), 630.1), 13);
    assert_eq!(resolver.resolve(&layout, 630.1), Ok(13));
}

#[test]
fn backward_projection_is_measured_from_next_item() {
    let decay = ExponentialDecaySpec::default();
    let snap_index = SnapIndex::identity();
    let resolver = SnapTargetResolver::new(&decay, &snap_index, f32::MAX);
    let layout = wheel(100, 10);

    assert_eq!(resolver.resolve(&layout, -630.1), Ok(8));
}

#[test]
fn slow_release_targets_nearest_item() {
    let decay = ExponentialDecaySpec::default();
    let snap_index = SnapIndex::identity();
    let resolver = SnapTargetResolver::new(&decay, &snap_index, f32::MAX);
    let layout = wheel(100, 10);

    assert_eq!(resolver.resolve(&layout, 0.0), Ok(10));
    assert_eq!(resolver.resolve(&layout, 0.3), Ok(10));
}

#[test]
fn projection_respects_maximum_fling_distance() {
    let decay = ExponentialDecaySpec::default();
    let snap_index = SnapIndex::identity();
    let resolver = SnapTargetResolver::new(&decay, &snap_index, 50.0);
    let layout = wheel(100, 10);

    assert_eq!(resolver.resolve(&layout, 5000.0), Ok(11));
}

#[test]
fn projection_is_clamped_to_item_range() {
    let decay = ExponentialDecaySpec::default();
    let snap_index = SnapIndex::identity();
    let resolver = SnapTargetResolver::new(&decay, &snap_index, f32::MAX);
    let layout = wheel(12, 10);

    assert_eq!(resolver.resolve(&layout, 5000.0), Ok(11));
}

#[test]
fn out_of_range_snap_index_is_rejected() {
    let decay = ExponentialDecaySpec::default();
    let snap_index = SnapIndex::from_fn(|_, _, _| 500);
    let resolver = SnapTargetResolver::new(&decay, &snap_index, f32::MAX);
    let layout = wheel(100, 10);

    assert_eq!(
        resolver.resolve(&layout, 630.1),
        Err(SnapError::OutOfRangeTarget {
            index: 500,
            count: 100
        })
    );
}

#[test]
fn decay_gate_requires_reaching_next_boundary() {
    let decay = ExponentialDecaySpec::default();
    let snap_index = SnapIndex::identity();
    let resolver = SnapTargetResolver::new(&decay, &snap_index, f32::MAX);
    let layout = wheel(100, 10);
    let item = current(&layout);

    assert!(resolver.can_decay_beyond_current_item(&layout, &item, 630.1));
    assert!(!resolver.can_decay_beyond_current_item(&layout, &item, 100.0));
    assert!(!resolver.can_decay_beyond_current_item(&layout, &item, 0.3));
    assert!(resolver.can_decay_beyond_current_item(&layout, &item, -630.1));
}
