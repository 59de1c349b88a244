//! Selection state management.
//!
//! Selection tracks row keys, never positions, so a selected row stays
//! selected when the table is re-sorted or paged. The mode is configuration
//! and is passed in by the caller on every transition.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::identity::RowKey;

/// Selection mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// No selection allowed.
    #[default]
    Disabled,
    /// Single row selection (radio-button style).
    Single,
    /// Multiple rows can be selected (checkbox style).
    Multiple,
}

impl SelectionMode {
    /// Whether rows can be selected at all.
    pub fn is_enabled(self) -> bool {
        self != SelectionMode::Disabled
    }
}

impl From<bool> for SelectionMode {
    fn from(selectable: bool) -> Self {
        if selectable {
            SelectionMode::Multiple
        } else {
            SelectionMode::Disabled
        }
    }
}

/// Aggregate selection state of a set of rows, for a select-all checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllSelectedState {
    /// Every row is selected (and there is at least one row).
    All,
    /// No row is selected.
    None,
    /// Some but not all rows are selected.
    Partial,
}

impl AllSelectedState {
    pub fn is_all(self) -> bool {
        self == AllSelectedState::All
    }

    pub fn is_indeterminate(self) -> bool {
        self == AllSelectedState::Partial
    }
}

/// Key-based selection set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    selected: HashSet<RowKey>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all selected keys (sorted for deterministic ordering).
    pub fn selected(&self) -> Vec<RowKey> {
        let mut keys: Vec<_> = self.selected.iter().cloned().collect();
        keys.sort();
        keys
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &RowKey) -> bool {
        self.selected.contains(key)
    }

    /// Get the number of selected rows.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clear all selection.
    /// Returns the keys that were deselected.
    pub fn clear(&mut self) -> Vec<RowKey> {
        self.selected.drain().collect()
    }

    /// Check or uncheck a single row.
    ///
    /// - `Single`: checking replaces the selection with `key`, unchecking
    ///   clears it.
    /// - `Multiple`: checking adds `key`, unchecking removes it.
    /// - `Disabled`: ignored.
    ///
    /// Returns `true` if the call was accepted by the mode.
    pub fn toggle(&mut self, mode: SelectionMode, key: RowKey, checked: bool) -> bool {
        match (mode, checked) {
            (SelectionMode::Disabled, _) => false,
            (SelectionMode::Single, true) => {
                self.selected.clear();
                self.selected.insert(key);
                true
            }
            (SelectionMode::Single, false) => {
                self.selected.clear();
                true
            }
            (SelectionMode::Multiple, true) => {
                self.selected.insert(key);
                true
            }
            (SelectionMode::Multiple, false) => {
                self.selected.remove(&key);
                true
            }
        }
    }

    /// Replace the selection with `visible`, or clear it.
    ///
    /// Only accepted in `Multiple` mode. Returns `true` if accepted.
    pub fn select_all<I>(&mut self, mode: SelectionMode, checked: bool, visible: I) -> bool
    where
        I: IntoIterator<Item = RowKey>,
    {
        if mode != SelectionMode::Multiple {
            return false;
        }
        self.selected.clear();
        if checked {
            self.selected.extend(visible);
        }
        true
    }

    /// Aggregate state of `visible` against this selection.
    pub fn all_selected_state<'k, I>(&self, visible: I) -> AllSelectedState
    where
        I: IntoIterator<Item = &'k RowKey>,
    {
        let mut total = 0;
        let mut hits = 0;
        for key in visible {
            total += 1;
            if self.selected.contains(key) {
                hits += 1;
            }
        }

        if hits == 0 {
            AllSelectedState::None
        } else if hits == total {
            AllSelectedState::All
        } else {
            AllSelectedState::Partial
        }
    }
}
