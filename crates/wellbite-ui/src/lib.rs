//! Picker state for WellBite.
//!
//! [`WheelPickerState`] is the shared wheel: it flings through a
//! [`SnapperFlingBehavior`](wellbite_foundation::SnapperFlingBehavior),
//! reports the settled row and styles rows by their distance from the centre.
//! The date, weight, age and selection pickers are models layered on top.
//! [`SnapFlingAnimation`] runs a fling on a frame clock instead of
//! synchronously.

pub mod age_picker;
pub mod date_picker;
pub mod fling_animation;
pub mod selection_picker;
pub mod weight_picker;
pub mod wheel_picker;

pub use age_picker::{AgePicker, AgePickerConfig};
pub use date_picker::{
    date_to_string, DatePicker, DatePickerConfig, DatePickerState, DateWheel, DateWheelItem,
    SnappedDate, DEFAULT_DATE_FORMAT,
};
pub use fling_animation::SnapFlingAnimation;
pub use selection_picker::{SelectionPickerConfig, SelectionPickerState};
pub use weight_picker::{weight_label, TickKind, WeightPickerConfig, WeightPickerState};
pub use wheel_picker::{WheelPickerConfig, WheelPickerState, SELECTED_TEXT_SIZE, TEXT_SIZE};
