use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Datelike, NaiveDate};
use wellbite_animation::ExponentialDecaySpec;
use wellbite_foundation::{FlingOutcome, LazyListScrollScope, SnapOffset, SnapperFlingBehavior};
use wellbite_testing::{init_logging, FrameDriver, TestLazyList};
use wellbite_ui::{
    DatePicker, DatePickerConfig, DatePickerState, DateWheel, SnapFlingAnimation,
    WeightPickerConfig, WeightPickerState, WheelPickerConfig, WheelPickerState,
};

const ROW: i32 = 50;

fn exponential() -> SnapperFlingBehavior {
    SnapperFlingBehavior::new(ExponentialDecaySpec::default())
}

fn outcomes() -> (Rc<RefCell<Vec<FlingOutcome>>>, impl FnOnce(FlingOutcome) + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    (seen, move |outcome| sink.borrow_mut().push(outcome))
}

#[test]
fn wheel_fling_settles_three_rows_on() {
    init_logging();
    let settled = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&settled);
    let texts = (0..100).map(|index| index.to_string()).collect();
    let mut wheel = WheelPickerState::new(texts, WheelPickerConfig::new(10, 5, ROW))
        .with_behavior(exponential())
        .on_scroll_finished(move |index| {
            sink.borrow_mut().push(index);
            None
        });
    let mut list = TestLazyList::wheel(100, ROW, 5).starting_at(10);

    let outcome = wheel.fling(&mut list, 630.1);

    assert_eq!(outcome.settled_index, Some(13));
    assert_eq!(list.scroll_position(), 13 * ROW);
    assert_eq!(*settled.borrow(), vec![13]);
    assert_eq!(wheel.text(13), Some("13"));
}

#[test]
fn weight_ruler_selects_centred_tick() {
    let mut state = WeightPickerState::new(WeightPickerConfig::default());
    let padding = state.content_padding(360);
    let mut ruler = TestLazyList::new(state.item_count(), state.config().tick_width, 360)
        .with_content_padding(padding, padding);

    ruler.scroll_to_item(50);

    assert_eq!(state.scroll_finished(&ruler), Some(105.0));
    assert_eq!(state.label(), "105.0 lbs");
}

#[test]
fn month_fling_keeps_date_and_days_in_step() {
    let start = NaiveDate::from_ymd_opt(2023, 1, 31).expect("valid date");
    let mut picker = DatePicker::new(DatePickerState::new(DatePickerConfig::new(start)));
    let mut months = TestLazyList::wheel(12, 48, 3).starting_at(3);

    let outcome = picker
        .fling(DateWheel::Month, &mut months, 900.0)
        .expect("month wheel exists");

    let row = outcome.settled_index.expect("fling should settle");
    let date = picker.snapped_date();
    assert_eq!(months.item_at_content_start(), Some(row));
    assert_eq!(date.month0() as usize, row);
    assert!(date.day() <= 31);
    let days = picker.wheel_state(DateWheel::Day).map(|day| day.count());
    let expected = DatePickerState::new(DatePickerConfig::new(date)).days().len();
    assert_eq!(days, Some(expected));
}

#[test]
fn frame_driven_fling_matches_synchronous_result() {
    init_logging();
    let mut driver = FrameDriver::default();
    let animation = SnapFlingAnimation::new(driver.handle(), exponential());
    let host = Rc::new(RefCell::new(TestLazyList::wheel(100, ROW, 5).starting_at(10)));
    let (seen, on_end) = outcomes();

    animation.start_fling(Rc::clone(&host), SnapOffset::Center, 630.1, on_end);
    assert!(animation.is_running());
    assert_eq!(animation.animation_target(), Some(13));

    let frames = driver.run_until_idle(10_000).expect("fling should finish");

    assert!(frames > 1);
    assert!(!animation.is_running());
    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].settled_index, Some(13));
    assert_eq!(host.borrow().scroll_position(), 13 * ROW);
}

#[test]
fn new_fling_cancels_the_running_one() {
    let mut driver = FrameDriver::default();
    let animation = SnapFlingAnimation::new(driver.handle(), exponential());
    let host = Rc::new(RefCell::new(TestLazyList::wheel(100, ROW, 5).starting_at(50)));
    let (first, first_end) = outcomes();
    let (second, second_end) = outcomes();

    animation.start_fling(Rc::clone(&host), SnapOffset::Center, 2000.0, first_end);
    for _ in 0..3 {
        driver.advance_frame();
    }
    animation.start_fling(Rc::clone(&host), SnapOffset::Center, -630.1, second_end);
    driver.run_until_idle(10_000).expect("fling should finish");

    assert!(first.borrow().is_empty());
    let second = second.borrow();
    assert_eq!(second.len(), 1);
    let settled = second[0].settled_index.expect("second fling should settle");
    assert_eq!(host.borrow().item_at_content_start(), Some(settled));
}

#[test]
fn blocked_fling_ends_without_frames() {
    let mut driver = FrameDriver::default();
    let animation = SnapFlingAnimation::new(driver.handle(), exponential());
    let host = Rc::new(RefCell::new(TestLazyList::wheel(1, ROW, 5)));
    let (seen, on_end) = outcomes();

    animation.start_fling(host, SnapOffset::Center, 1200.0, on_end);

    assert!(!animation.is_running());
    assert_eq!(driver.run_until_idle(10), Some(0));
    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].settled_index, None);
    assert_eq!(seen[0].remaining_velocity, 1200.0);
}

#[test]
fn dropping_the_animation_stops_frames() {
    let mut driver = FrameDriver::default();
    let animation = SnapFlingAnimation::new(driver.handle(), exponential());
    let host = Rc::new(RefCell::new(TestLazyList::wheel(100, ROW, 5).starting_at(10)));
    let (seen, on_end) = outcomes();

    animation.start_fling(Rc::clone(&host), SnapOffset::Center, 630.1, on_end);
    driver.advance_frame();
    drop(animation);

    assert_eq!(driver.run_until_idle(10), Some(0));
    assert!(seen.borrow().is_empty());
}
