//! Variable store
//!
//! Nine string-valued slots make up the whole state of a running program.
//! Slots start out empty and are only ever overwritten, never added or
//! removed.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Number of variable slots
pub const SLOT_COUNT: usize = 9;

/// Fixed set of string slots owned by one interpreter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableStore {
    slots: [String; SLOT_COUNT],
}

impl VariableStore {
    /// Create a store with every slot set to the empty string
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value of a slot, or `None` if `index` is out of range
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    /// Overwrite a slot.
    ///
    /// Indices come from decoded vowels and are always in range; an
    /// out-of-range index is ignored.
    pub fn set(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = value.into();
        }
    }

    /// Iterate over slot values in index order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(String::as_str)
    }

    /// Clear every slot back to the empty string
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }

    /// Borrow all slots
    pub fn as_slice(&self) -> &[String] {
        &self.slots
    }
}

impl Index<usize> for VariableStore {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.slots[index]
    }
}
