//! Disarm code storage and matching.
//!
//! The panel only ever cares about the most recent [`CODE_LENGTH`] key
//! presses, so input is kept in a fixed-size shift register: each accepted
//! press drops the oldest entry and appends the new one. Matching is a full,
//! order-sensitive comparison of all slots - there is no partial-match
//! feedback.

use crate::CODE_LENGTH;
use crate::types::CodeKey;

/// An immutable, ordered disarm code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccessCode([CodeKey; CODE_LENGTH]);

impl AccessCode {
    /// The stock code: green, green, red.
    pub const DEFAULT: Self = Self([CodeKey::Green, CodeKey::Green, CodeKey::Red]);

    /// Creates a code from an ordered key sequence.
    pub const fn new(keys: [CodeKey; CODE_LENGTH]) -> Self {
        Self(keys)
    }

    /// Returns the key sequence.
    pub const fn keys(&self) -> &[CodeKey; CODE_LENGTH] {
        &self.0
    }
}

impl Default for AccessCode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Shift register holding the last [`CODE_LENGTH`] accepted key presses.
///
/// Slots hold `None` until a real key has shifted in; an empty slot can never
/// equal a code key, so a partially filled buffer never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CodeBuffer {
    slots: [Option<CodeKey>; CODE_LENGTH],
}

impl CodeBuffer {
    /// Creates an empty buffer.
    pub const fn new() -> Self {
        Self {
            slots: [None; CODE_LENGTH],
        }
    }

    /// Shifts the buffer left and appends `key` as the most recent press.
    ///
    /// The oldest press falls out; the buffer length is always exactly
    /// [`CODE_LENGTH`].
    pub fn push(&mut self, key: CodeKey) {
        self.slots.copy_within(1.., 0);
        self.slots[CODE_LENGTH - 1] = Some(key);
    }

    /// Returns `true` when every slot equals the corresponding code key.
    pub fn matches(&self, code: &AccessCode) -> bool {
        self.slots
            .iter()
            .zip(code.keys())
            .all(|(slot, key)| *slot == Some(*key))
    }

    /// Empties all slots.
    pub fn reset(&mut self) {
        self.slots = [None; CODE_LENGTH];
    }
}
