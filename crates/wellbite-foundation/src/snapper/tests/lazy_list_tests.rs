use super::*;

use smallvec::SmallVec;

/// A three-row wheel with 50px rows scrolled by `scroll` pixels.
fn wheel(count: usize, scroll: i32) -> LazyListLayoutInfo {
    rows(count, 50, 0, 150, 50, scroll)
}

fn rows(
    count: usize,
    size: i32,
    spacing: i32,
    viewport: i32,
    padding: i32,
    scroll: i32,
) -> LazyListLayoutInfo {
    let start = -padding;
    let end = viewport - padding;
    let visible: SmallVec<[LazyListItemInfo; 8]> = (0..count)
        .map(|index| LazyListItemInfo {
            index,
            offset: index as i32 * (size + spacing) - scroll,
            size,
        })
        .filter(|item| item.offset + item.size > start && item.offset < end)
        .collect();
    LazyListLayoutInfo {
        visible_items_info: visible,
        total_items_count: count,
        viewport_size: viewport,
        viewport_start_offset: start,
        viewport_end_offset: end,
        before_content_padding: padding,
        after_content_padding: padding,
    }
}

#[test]
fn snapped_wheel_reports_exact_distances() {
    let layout = LazyListSnapperLayoutInfo::new(wheel(100, 500), SnapOffset::Center);

    assert_eq!(layout.end_scroll_offset(), 50);
    assert_eq!(layout.current_item().map(|item| item.index), Some(10));
    assert_eq!(layout.distance_to_index_snap(10), Some(0));
    assert_eq!(layout.distance_to_index_snap(11), Some(50));
    assert_eq!(layout.distance_to_index_snap(9), Some(-50));
    assert_eq!(layout.estimate_distance_per_item(), Some(50.0));
}

#[test]
fn off_screen_distances_are_extrapolated() {
    let layout = LazyListSnapperLayoutInfo::new(wheel(100, 500), SnapOffset::Center);
    assert_eq!(layout.distance_to_index_snap(20), Some(500));
    assert_eq!(layout.distance_to_index_snap(0), Some(-500));
}

#[test]
fn current_item_is_last_item_before_snap_point() {
    let layout = LazyListSnapperLayoutInfo::new(wheel(100, 520), SnapOffset::Center);

    let current = layout.current_item().expect("current item");
    assert_eq!(current.index, 10);
    assert_eq!(current.offset, -20);
    assert_eq!(layout.distance_to_index_snap(11), Some(30));
    assert_eq!(layout.estimate_distance_per_item(), Some(50.0));
}

#[test]
fn spacing_counts_towards_item_extent() {
    let layout = LazyListSnapperLayoutInfo::new(rows(20, 40, 10, 150, 0, 0), SnapOffset::Start);
    assert_eq!(layout.estimate_distance_per_item(), Some(50.0));
}

#[test]
fn snap_offset_policies() {
    let item = SnapperLayoutItemInfo {
        index: 0,
        offset: 0,
        size: 50,
    };
    let layout = LazyListSnapperLayoutInfo::new(rows(20, 50, 0, 200, 0, 0), SnapOffset::Center);

    assert_eq!(SnapOffset::Start.snap_offset(&layout, &item), 0);
    assert_eq!(SnapOffset::Center.snap_offset(&layout, &item), 75);
    assert_eq!(SnapOffset::End.snap_offset(&layout, &item), 150);
}

#[test]
fn current_item_falls_back_to_first_visible() {
    let mut info = rows(5, 50, 0, 300, 0, 0);
    for item in info.visible_items_info.iter_mut() {
        item.offset += 10;
    }
    let layout = LazyListSnapperLayoutInfo::new(info, SnapOffset::Start);
    assert_eq!(layout.current_item().map(|item| item.index), Some(0));
}

#[test]
fn scroll_bounds_follow_visible_items() {
    let at_start = LazyListSnapperLayoutInfo::new(wheel(10, 0), SnapOffset::Center);
    assert!(!at_start.can_scroll_towards_start());
    assert!(at_start.can_scroll_towards_end());

    let at_end = LazyListSnapperLayoutInfo::new(wheel(10, 450), SnapOffset::Center);
    assert!(at_end.can_scroll_towards_start());
    assert!(!at_end.can_scroll_towards_end());

    let fully_visible =
        LazyListSnapperLayoutInfo::new(rows(5, 50, 0, 400, 0, 0), SnapOffset::Center);
    assert!(!fully_visible.can_scroll_towards_start());
    assert!(!fully_visible.can_scroll_towards_end());
}

#[test]
fn empty_list_has_nothing_to_snap() {
    let layout = LazyListSnapperLayoutInfo::new(LazyListLayoutInfo::default(), SnapOffset::Center);
    assert_eq!(layout.current_item(), None);
    assert_eq!(layout.distance_to_index_snap(0), None);
    assert_eq!(layout.estimate_distance_per_item(), None);
    assert!(!layout.can_scroll_towards_start());
    assert!(!layout.can_scroll_towards_end());
}
