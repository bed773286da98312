//! Rollover diffing: recover press/release transitions from two
//! consecutive boot-protocol key sets.
//!
//! Boot reports carry absolute state (the set of keys currently down),
//! so edges have to be reconstructed by comparing against the previous
//! report. Releases are emitted before presses: a key can never appear
//! both pressed and released in the same batch, and chord logic
//! downstream sees a clean held-set before new presses land.

use crate::config::ROLLOVER_SLOTS;
use crate::hid::keyboard::KeySet;

/// A single key edge: one key went down or came up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyTransition {
    /// HID usage code (Keyboard/Keypad page).
    pub keycode: u8,
    /// `true` = key went down, `false` = key came up.
    pub pressed: bool,
}

impl KeyTransition {
    pub const fn press(keycode: u8) -> Self {
        Self {
            keycode,
            pressed: true,
        }
    }

    pub const fn release(keycode: u8) -> Self {
        Self {
            keycode,
            pressed: false,
        }
    }
}

/// Worst case: all 6 previous keys released and 6 new keys pressed.
pub type TransitionBatch = heapless::Vec<KeyTransition, { ROLLOVER_SLOTS * 2 }>;

/// Diff two key sets into an ordered transition batch.
///
/// - keys in `previous` but not `current` become releases,
/// - keys in `current` but not `previous` become presses,
/// - all releases precede all presses,
/// - the 0x00 "no key" sentinel is never emitted.
///
/// Keycodes above the supported keyspace are still emitted here; the
/// engine is the gate that drops them, so one malformed slot cannot
/// disturb the rest of the batch.
pub fn diff(previous: &KeySet, current: &KeySet) -> TransitionBatch {
    let mut batch = TransitionBatch::new();

    for &old in previous {
        if old != 0 && !current.contains(&old) {
            // Capacity covers the worst case by construction.
            let _ = batch.push(KeyTransition::release(old));
        }
    }

    for &new in current {
        if new != 0 && !previous.contains(&new) {
            let _ = batch.push(KeyTransition::press(new));
        }
    }

    batch
}
