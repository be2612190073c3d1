//! A row of choices, one of which is selected.
//!
//! Starts from a default set. Callers may append custom choices up to
//! `max_custom_selection`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPickerConfig {
    pub default_selection: Vec<String>,
    /// Cap on custom choices. `None` allows any number.
    pub max_custom_selection: Option<usize>,
}

impl Default for SelectionPickerConfig {
    fn default() -> Self {
        Self {
            default_selection: ["Male", "Female", "Other"].map(String::from).to_vec(),
            max_custom_selection: None,
        }
    }
}

type Selected = Box<dyn FnMut(&str)>;

pub struct SelectionPickerState {
    config: SelectionPickerConfig,
    items: Vec<String>,
    selected: Option<String>,
    on_selected: Option<Selected>,
}

impl SelectionPickerState {
    pub fn new(config: SelectionPickerConfig) -> Self {
        Self {
            items: config.default_selection.clone(),
            config,
            selected: None,
            on_selected: None,
        }
    }

    /// Marks `item` as selected without notifying.
    pub fn with_selected(mut self, item: impl Into<String>) -> Self {
        let item = item.into();
        if self.items.contains(&item) {
            self.selected = Some(item);
        }
        self
    }

    pub fn on_selected(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_selected = Some(Box::new(callback));
        self
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, item: &str) -> bool {
        self.selected.as_deref() == Some(item)
    }

    pub fn custom_count(&self) -> usize {
        self.items.len().saturating_sub(self.config.default_selection.len())
    }

    /// Selects `item` and notifies. Unknown items are ignored.
    pub fn select(&mut self, item: &str) -> bool {
        if !self.items.iter().any(|known| known == item) {
            log::debug!("ignoring unknown selection {:?}", item);
            return false;
        }
        self.selected = Some(item.to_string());
        if let Some(callback) = self.on_selected.as_mut() {
            callback(item);
        }
        true
    }

    /// Appends a custom choice. Fails on duplicates or when the cap is reached.
    pub fn add_custom_selection(&mut self, item: impl Into<String>) -> bool {
        let item = item.into();
        if item.trim().is_empty() || self.items.contains(&item) {
            return false;
        }
        if let Some(max) = self.config.max_custom_selection {
            if self.custom_count() >= max {
                log::debug!("custom selection limit {} reached", max);
                return false;
            }
        }
        self.items.push(item);
        true
    }
}

impl fmt::Debug for SelectionPickerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionPickerState")
            .field("items", &self.items)
            .field("selected", &self.selected)
            .finish()
    }
}
