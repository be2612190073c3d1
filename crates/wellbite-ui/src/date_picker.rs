//! Month, day and year wheels over a calendar date.
//!
//! [`DatePickerState`] is the date model. Each wheel settling on a row asks
//! the model to change one field. The model accepts the change only if the
//! result lies within `min_date..=max_date`, and answers with the row the
//! wheel should rest on. A rejected change sends the wheel back to the row
//! of the date that was kept.

use std::cell::RefCell;
use std::fmt::{self, Write};
use std::ops::RangeInclusive;
use std::rc::Rc;

use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, Local, NaiveDate};
use wellbite_foundation::{FlingOutcome, LazyListScrollScope};

use crate::wheel_picker::{WheelPickerConfig, WheelPickerState};

pub const DEFAULT_DATE_FORMAT: &str = "%b %d, %Y";

/// Formats `date` with a strftime pattern. Patterns a date cannot render,
/// such as time-of-day fields, fall back to [`DEFAULT_DATE_FORMAT`].
pub fn date_to_string(date: NaiveDate, format: &str) -> String {
    let mut text = String::new();
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
        || write!(text, "{}", date.format(format)).is_err()
    {
        log::warn!("cannot format a date with {:?}, using {:?}", format, DEFAULT_DATE_FORMAT);
        return date.format(DEFAULT_DATE_FORMAT).to_string();
    }
    text
}

fn days_in_month(year: i32, month: u32) -> u32 {
    (28..=31)
        .rev()
        .find(|day| NaiveDate::from_ymd_opt(year, month, *day).is_some())
        .unwrap_or(28)
}

/// `date` moved to `year`/`month`, with the day clamped to the month length.
fn with_year_month_clamped(date: NaiveDate, year: i32, month: u32) -> Option<NaiveDate> {
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePickerConfig {
    pub start_date: NaiveDate,
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
    /// Years offered by the year wheel. `None` hides the wheel.
    pub years_range: Option<RangeInclusive<i32>>,
    pub row_count: usize,
    pub row_height: i32,
}

impl DatePickerConfig {
    pub const DEFAULT_YEARS: RangeInclusive<i32> = 1922..=2122;

    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            min_date: NaiveDate::MIN,
            max_date: NaiveDate::MAX,
            years_range: Some(Self::DEFAULT_YEARS),
            row_count: 3,
            row_height: 48,
        }
    }

    pub fn with_bounds(mut self, min_date: NaiveDate, max_date: NaiveDate) -> Self {
        self.min_date = min_date;
        self.max_date = max_date;
        self
    }

    pub fn with_years_range(mut self, years_range: Option<RangeInclusive<i32>>) -> Self {
        self.years_range = years_range;
        self
    }
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

/// One row of a date wheel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWheelItem {
    pub text: String,
    /// Month number, day of month or year.
    pub value: i32,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateWheel {
    Month,
    Day,
    Year,
}

/// The date after a wheel settled, tagged with the wheel and its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnappedDate {
    Month { date: NaiveDate, index: usize },
    DayOfMonth { date: NaiveDate, index: usize },
    Year { date: NaiveDate, index: usize },
}

impl SnappedDate {
    pub fn date(&self) -> NaiveDate {
        match *self {
            SnappedDate::Month { date, .. }
            | SnappedDate::DayOfMonth { date, .. }
            | SnappedDate::Year { date, .. } => date,
        }
    }

    pub fn index(&self) -> usize {
        match *self {
            SnappedDate::Month { index, .. }
            | SnappedDate::DayOfMonth { index, .. }
            | SnappedDate::Year { index, .. } => index,
        }
    }
}

type DateSnapped = Box<dyn FnMut(SnappedDate) -> Option<usize>>;

pub struct DatePickerState {
    config: DatePickerConfig,
    snapped_date: NaiveDate,
    on_snapped_date: Option<DateSnapped>,
}

impl DatePickerState {
    pub fn new(config: DatePickerConfig) -> Self {
        Self {
            snapped_date: config.start_date,
            config,
            on_snapped_date: None,
        }
    }

    /// Called after every settle with the resulting date. A returned row
    /// overrides where the wheel comes to rest.
    pub fn on_snapped_date(
        mut self,
        callback: impl FnMut(SnappedDate) -> Option<usize> + 'static,
    ) -> Self {
        self.on_snapped_date = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &DatePickerConfig {
        &self.config
    }

    pub fn snapped_date(&self) -> NaiveDate {
        self.snapped_date
    }

    pub fn months(&self) -> Vec<DateWheelItem> {
        (1..=12u32)
            .filter_map(|month| NaiveDate::from_ymd_opt(2000, month, 1))
            .enumerate()
            .map(|(index, first)| DateWheelItem {
                text: first.format("%b").to_string(),
                value: first.month() as i32,
                index,
            })
            .collect()
    }

    /// Days of the snapped month.
    pub fn days(&self) -> Vec<DateWheelItem> {
        let length = days_in_month(self.snapped_date.year(), self.snapped_date.month());
        (1..=length)
            .enumerate()
            .map(|(index, day)| DateWheelItem {
                text: day.to_string(),
                value: day as i32,
                index,
            })
            .collect()
    }

    pub fn years(&self) -> Option<Vec<DateWheelItem>> {
        let range = self.config.years_range.clone()?;
        Some(
            range
                .enumerate()
                .map(|(index, year)| DateWheelItem {
                    text: year.to_string(),
                    value: year,
                    index,
                })
                .collect(),
        )
    }

    pub fn items(&self, wheel: DateWheel) -> Vec<DateWheelItem> {
        match wheel {
            DateWheel::Month => self.months(),
            DateWheel::Day => self.days(),
            DateWheel::Year => self.years().unwrap_or_default(),
        }
    }

    /// Row of `wheel` that shows the snapped date.
    pub fn index_of(&self, wheel: DateWheel) -> Option<usize> {
        match wheel {
            DateWheel::Month => Some(self.snapped_date.month0() as usize),
            DateWheel::Day => Some(self.snapped_date.day0() as usize),
            DateWheel::Year => {
                let range = self.config.years_range.as_ref()?;
                range
                    .contains(&self.snapped_date.year())
                    .then(|| (self.snapped_date.year() - range.start()) as usize)
            }
        }
    }

    fn in_bounds(&self, date: NaiveDate) -> bool {
        (self.config.min_date..=self.config.max_date).contains(&date)
    }

    fn candidate(&self, wheel: DateWheel, index: usize) -> Option<NaiveDate> {
        let date = self.snapped_date;
        match wheel {
            DateWheel::Month => {
                let month = u32::try_from(index).ok()?.checked_add(1)?;
                with_year_month_clamped(date, date.year(), month)
            }
            DateWheel::Day => date.with_day(u32::try_from(index).ok()?.checked_add(1)?),
            DateWheel::Year => {
                let range = self.config.years_range.as_ref()?;
                let year = range.clone().nth(index)?;
                with_year_month_clamped(date, year, date.month())
            }
        }
    }

    /// Applies `wheel` settling on `index`. Returns the row the wheel
    /// should rest on.
    pub fn select(&mut self, wheel: DateWheel, index: usize) -> Option<usize> {
        match self.candidate(wheel, index) {
            Some(date) if self.in_bounds(date) => self.snapped_date = date,
            Some(date) => log::debug!(
                "{} is outside {}..={}, keeping {}",
                date,
                self.config.min_date,
                self.config.max_date,
                self.snapped_date
            ),
            None => log::debug!("{:?} row {} is not a valid date", wheel, index),
        }

        let resting = self.index_of(wheel)?;
        let date = self.snapped_date;
        let snapped = match wheel {
            DateWheel::Month => SnappedDate::Month { date, index: resting },
            DateWheel::Day => SnappedDate::DayOfMonth { date, index: resting },
            DateWheel::Year => SnappedDate::Year { date, index: resting },
        };
        let redirect = self.on_snapped_date.as_mut().and_then(|callback| callback(snapped));
        Some(redirect.unwrap_or(resting))
    }

    pub fn formatted(&self, format: &str) -> String {
        date_to_string(self.snapped_date, format)
    }
}

impl fmt::Debug for DatePickerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePickerState")
            .field("config", &self.config)
            .field("snapped_date", &self.snapped_date)
            .finish()
    }
}

/// A date model wired to its three wheels.
pub struct DatePicker {
    state: Rc<RefCell<DatePickerState>>,
    month: WheelPickerState,
    day: WheelPickerState,
    year: Option<WheelPickerState>,
}

impl DatePicker {
    pub fn new(state: DatePickerState) -> Self {
        let state = Rc::new(RefCell::new(state));
        let month = Self::wheel(&state, DateWheel::Month);
        let day = Self::wheel(&state, DateWheel::Day);
        let has_years = state.borrow().config.years_range.is_some();
        let year = has_years.then(|| Self::wheel(&state, DateWheel::Year));
        Self {
            state,
            month,
            day,
            year,
        }
    }

    fn wheel(state: &Rc<RefCell<DatePickerState>>, kind: DateWheel) -> WheelPickerState {
        let (texts, config) = {
            let model = state.borrow();
            let texts = model.items(kind).into_iter().map(|item| item.text).collect();
            let start = model.index_of(kind).unwrap_or(0);
            let config =
                WheelPickerConfig::new(start, model.config.row_count, model.config.row_height);
            (texts, config)
        };
        let model = Rc::clone(state);
        WheelPickerState::new(texts, config)
            .on_scroll_finished(move |index| model.borrow_mut().select(kind, index))
    }

    pub fn snapped_date(&self) -> NaiveDate {
        self.state.borrow().snapped_date()
    }

    pub fn state(&self) -> Rc<RefCell<DatePickerState>> {
        Rc::clone(&self.state)
    }

    pub fn wheel_state(&self, kind: DateWheel) -> Option<&WheelPickerState> {
        match kind {
            DateWheel::Month => Some(&self.month),
            DateWheel::Day => Some(&self.day),
            DateWheel::Year => self.year.as_ref(),
        }
    }

    pub fn wheel_state_mut(&mut self, kind: DateWheel) -> Option<&mut WheelPickerState> {
        match kind {
            DateWheel::Month => Some(&mut self.month),
            DateWheel::Day => Some(&mut self.day),
            DateWheel::Year => self.year.as_mut(),
        }
    }

    /// Flings one wheel and refreshes the day rows for the resulting month.
    pub fn fling<H: LazyListScrollScope>(
        &mut self,
        kind: DateWheel,
        host: &mut H,
        velocity: f32,
    ) -> Option<FlingOutcome> {
        let outcome = self.wheel_state_mut(kind)?.fling(host, velocity);
        self.refresh_days();
        Some(outcome)
    }

    /// Rebuilds the day wheel rows from the snapped month.
    pub fn refresh_days(&mut self) {
        let texts = self.state.borrow().days().into_iter().map(|item| item.text).collect();
        self.day.set_texts(texts);
    }
}

#[cfg(test)]
#[path = "tests/date_picker_tests.rs"]
mod tests;
