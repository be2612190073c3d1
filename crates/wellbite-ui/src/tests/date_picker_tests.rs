use super::*;
use std::cell::RefCell;
use std::rc::Rc;

use wellbite_testing::TestLazyList;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

fn state_at(start: NaiveDate) -> DatePickerState {
    DatePickerState::new(DatePickerConfig::new(start))
}

#[test]
fn month_rows_use_short_names() {
    let state = state_at(date(2024, 3, 15));
    let months = state.months();

    assert_eq!(months.len(), 12);
    assert_eq!(months[0].text, "Jan");
    assert_eq!(months[11].text, "Dec");
    assert_eq!(months[8].value, 9);
}

#[test]
fn start_rows_point_at_start_date() {
    let state = state_at(date(2024, 3, 15));

    assert_eq!(state.index_of(DateWheel::Month), Some(2));
    assert_eq!(state.index_of(DateWheel::Day), Some(14));
    assert_eq!(state.index_of(DateWheel::Year), Some(102));
}

#[test]
fn day_rows_follow_month_length() {
    assert_eq!(state_at(date(2024, 2, 1)).days().len(), 29);
    assert_eq!(state_at(date(2023, 2, 1)).days().len(), 28);
    assert_eq!(state_at(date(2023, 4, 1)).days().len(), 30);
    assert_eq!(state_at(date(2023, 12, 1)).days().len(), 31);
}

#[test]
fn month_change_clamps_day() {
    let mut state = state_at(date(2024, 1, 31));

    assert_eq!(state.select(DateWheel::Month, 1), Some(1));
    assert_eq!(state.snapped_date(), date(2024, 2, 29));
}

#[test]
fn year_change_clamps_leap_day() {
    let mut state = state_at(date(2024, 2, 29));

    assert_eq!(state.select(DateWheel::Year, 101), Some(101));
    assert_eq!(state.snapped_date(), date(2023, 2, 28));
}

#[test]
fn day_change_keeps_month_and_year() {
    let mut state = state_at(date(2024, 2, 1));

    assert_eq!(state.select(DateWheel::Day, 9), Some(9));
    assert_eq!(state.snapped_date(), date(2024, 2, 10));
}

#[test]
fn missing_day_is_ignored() {
    let mut state = state_at(date(2024, 2, 10));

    assert_eq!(state.select(DateWheel::Day, 30), Some(9));
    assert_eq!(state.snapped_date(), date(2024, 2, 10));
}

#[test]
fn out_of_bounds_change_is_rejected() {
    let config = DatePickerConfig::new(date(2024, 3, 15))
        .with_bounds(date(2024, 1, 1), date(2024, 6, 30));
    let mut state = DatePickerState::new(config);

    assert_eq!(state.select(DateWheel::Month, 8), Some(2));
    assert_eq!(state.snapped_date(), date(2024, 3, 15));
}

#[test]
fn callback_sees_snapped_date_and_can_override_row() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut state = state_at(date(2024, 3, 15)).on_snapped_date(move |snapped| {
        sink.borrow_mut().push(snapped);
        matches!(snapped, SnappedDate::Year { .. }).then_some(0)
    });

    assert_eq!(state.select(DateWheel::Month, 4), Some(4));
    assert_eq!(state.select(DateWheel::Year, 100), Some(0));

    let seen = seen.borrow();
    assert_eq!(
        seen[0],
        SnappedDate::Month {
            date: date(2024, 5, 15),
            index: 4
        }
    );
    assert_eq!(seen[1].date(), date(2022, 5, 15));
    assert_eq!(seen[1].index(), 100);
}

#[test]
fn hidden_year_wheel_selects_nothing() {
    let config = DatePickerConfig::new(date(2024, 3, 15)).with_years_range(None);
    let mut state = DatePickerState::new(config);

    assert_eq!(state.years(), None);
    assert_eq!(state.select(DateWheel::Year, 0), None);
    assert!(DatePicker::new(state).wheel_state(DateWheel::Year).is_none());
}

#[test]
fn formats_with_default_pattern() {
    assert_eq!(date_to_string(date(2024, 3, 5), DEFAULT_DATE_FORMAT), "Mar 05, 2024");
    assert_eq!(date_to_string(date(2024, 3, 5), "%Y-%m-%d"), "2024-03-05");
}

#[test]
fn invalid_format_falls_back_to_default() {
    assert_eq!(date_to_string(date(2024, 3, 5), "%Q"), "Mar 05, 2024");
}

#[test]
fn time_fields_fall_back_to_default() {
    assert_eq!(date_to_string(date(2024, 3, 5), "%H:%M"), "Mar 05, 2024");
    assert_eq!(date_to_string(date(2024, 3, 5), "%H:%M %b"), "Mar 05, 2024");
    assert_eq!(date_to_string(date(2024, 3, 5), "%z"), "Mar 05, 2024");
}

#[test]
fn picker_wheels_start_on_start_date() {
    let picker = DatePicker::new(state_at(date(2024, 3, 15)));

    let month = picker.wheel_state(DateWheel::Month).expect("month wheel");
    assert_eq!(month.count(), 12);
    assert_eq!(month.config().start_index, 2);
    let day = picker.wheel_state(DateWheel::Day).expect("day wheel");
    assert_eq!(day.count(), 31);
    assert_eq!(day.config().start_index, 14);
}

#[test]
fn settling_month_wheel_updates_days() {
    let mut picker = DatePicker::new(state_at(date(2024, 1, 31)));
    let mut months = TestLazyList::wheel(12, 48, 3);
    months.scroll_to_item(1);

    let month = picker.wheel_state_mut(DateWheel::Month).expect("month wheel");
    assert_eq!(month.scroll_finished(&mut months), Some(1));
    picker.refresh_days();

    assert_eq!(picker.snapped_date(), date(2024, 2, 29));
    assert_eq!(picker.wheel_state(DateWheel::Day).map(|day| day.count()), Some(29));
}

#[test]
fn rejected_month_sends_wheel_back() {
    let config = DatePickerConfig::new(date(2024, 3, 15))
        .with_bounds(date(2024, 1, 1), date(2024, 3, 31));
    let mut picker = DatePicker::new(DatePickerState::new(config));
    let mut months = TestLazyList::wheel(12, 48, 3);
    months.scroll_to_item(5);

    let month = picker.wheel_state_mut(DateWheel::Month).expect("month wheel");
    assert_eq!(month.scroll_finished(&mut months), Some(2));
    assert_eq!(months.item_at_content_start(), Some(2));
    assert_eq!(picker.snapped_date(), date(2024, 3, 15));
}
