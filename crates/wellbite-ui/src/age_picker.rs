//! A wheel of age strings.

use std::cell::RefCell;
use std::rc::Rc;

use wellbite_foundation::{FlingOutcome, LazyListScrollScope};

use crate::wheel_picker::{WheelPickerConfig, WheelPickerState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgePickerConfig {
    pub items: Vec<String>,
    /// Item shown first. Unknown items start at the top.
    pub selected_item: Option<String>,
    pub visible_items_count: usize,
    pub row_height: i32,
}

impl Default for AgePickerConfig {
    fn default() -> Self {
        Self {
            items: (1..=120).map(|age: u32| age.to_string()).collect(),
            selected_item: None,
            visible_items_count: 5,
            row_height: 48,
        }
    }
}

impl AgePickerConfig {
    pub fn start_index(&self) -> usize {
        self.selected_item
            .as_ref()
            .and_then(|selected| self.items.iter().position(|item| item == selected))
            .unwrap_or(0)
    }
}

pub struct AgePicker {
    wheel: WheelPickerState,
    selected: Rc<RefCell<Option<String>>>,
}

impl AgePicker {
    /// `on_item_selected` receives the item each time the wheel settles.
    pub fn new(config: AgePickerConfig, mut on_item_selected: impl FnMut(&str) + 'static) -> Self {
        let wheel_config = WheelPickerConfig::new(
            config.start_index(),
            config.visible_items_count,
            config.row_height,
        );
        let selected = Rc::new(RefCell::new(config.selected_item.clone()));
        let items = config.items.clone();
        let sink = Rc::clone(&selected);
        let wheel =
            WheelPickerState::new(config.items, wheel_config).on_scroll_finished(move |index| {
                match items.get(index) {
                    Some(item) => {
                        *sink.borrow_mut() = Some(item.clone());
                        on_item_selected(item);
                    }
                    None => log::warn!("age wheel settled on missing row {}", index),
                }
                None
            });
        Self { wheel, selected }
    }

    pub fn selected_item(&self) -> Option<String> {
        self.selected.borrow().clone()
    }

    pub fn wheel(&self) -> &WheelPickerState {
        &self.wheel
    }

    pub fn wheel_mut(&mut self) -> &mut WheelPickerState {
        &mut self.wheel
    }

    pub fn fling<H: LazyListScrollScope>(&mut self, host: &mut H, velocity: f32) -> FlingOutcome {
        self.wheel.fling(host, velocity)
    }
}
