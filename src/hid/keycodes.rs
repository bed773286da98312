//! HID usage IDs (Keyboard/Keypad page 0x07) used by the filter.
//!
//! Boot-protocol keycode slots carry these usage IDs directly. Only the
//! usages the command layer binds or latches are named here; everything
//! else flows through the filter as an opaque `u8`.
//!
//! Reference: USB HID Usage Tables 1.3, section 10.

/// Letter `B` (open-terminal binding).
pub const KEY_B: u8 = 0x05;
/// Letter `Q` (exit-command-mode binding).
pub const KEY_Q: u8 = 0x14;
/// Letter `T` (terminal-shortcut chord member).
pub const KEY_T: u8 = 0x17;
/// Spacebar (chord member).
pub const KEY_SPACE: u8 = 0x2C;

/// Left Control (chord member, terminal-shortcut chord member).
pub const KEY_LEFT_CTRL: u8 = 0xE0;
/// Left Alt (terminal-shortcut chord member).
pub const KEY_LEFT_ALT: u8 = 0xE2;
/// Right Control (chord member).
pub const KEY_RIGHT_CTRL: u8 = 0xE4;

/// Either Control key.
pub const fn is_ctrl(keycode: u8) -> bool {
    keycode == KEY_LEFT_CTRL || keycode == KEY_RIGHT_CTRL
}
