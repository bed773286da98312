//! USB HID keyboard report (boot protocol).
//!
//! Layout (8 bytes):
//! ```text
//! Byte 0: Modifier keys (bitfield)
//!         Bit 0 = Left Ctrl,  Bit 1 = Left Shift,
//!         Bit 2 = Left Alt,   Bit 3 = Left GUI,
//!         Bit 4 = Right Ctrl, Bit 5 = Right Shift,
//!         Bit 6 = Right Alt,  Bit 7 = Right GUI
//! Byte 1: Reserved (0x00)
//! Byte 2-7: Up to 6 simultaneous key codes (USB HID usage codes)
//! ```
//!
//! The command layer does not read the modifier bitfield: the chord
//! keys it cares about arrive as usage codes in the keycode slots, and
//! latching those keeps one source of truth for held state.

use crate::config::{BOOT_REPORT_SIZE, ROLLOVER_SLOTS};
use crate::error::Error;

/// Up to 6 simultaneously pressed usage codes; 0 = empty slot.
pub type KeySet = [u8; ROLLOVER_SLOTS];

/// Standard USB HID boot-protocol keyboard report.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    /// Modifier key bitfield.
    pub modifier: u8,
    /// Reserved byte (always 0x00 per HID spec).
    pub reserved: u8,
    /// Up to 6 simultaneously pressed key codes.
    pub keycodes: KeySet,
}

impl KeyboardReport {
    /// Decode from a raw interrupt-transfer buffer.
    ///
    /// The buffer may be longer than 8 bytes (devices report their
    /// max-packet-size); extra bytes are ignored. Shorter buffers are
    /// rejected without touching any state. No other validation is
    /// performed - out-of-range keycodes pass through and are gated
    /// downstream.
    pub fn decode(data: &[u8]) -> Result<Self, Error> {
        if data.len() < BOOT_REPORT_SIZE {
            return Err(Error::ReportTooShort { len: data.len() });
        }
        Ok(Self {
            modifier: data[0],
            reserved: data[1],
            keycodes: [data[2], data[3], data[4], data[5], data[6], data[7]],
        })
    }

    /// Create an empty (all-keys-released) report.
    pub const fn empty() -> Self {
        Self {
            modifier: 0,
            reserved: 0,
            keycodes: [0; ROLLOVER_SLOTS],
        }
    }

    /// Returns `true` if no keys are pressed.
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.modifier == 0 && self.keycodes.iter().all(|&k| k == 0)
    }
}
