//! Compile-time configuration: report layout, keyspace bound, and the
//! command-mode key bindings.
//!
//! All protocol constants and bindings live here so they can be tuned
//! in one place.

use crate::hid::keycodes::{KEY_B, KEY_LEFT_ALT, KEY_LEFT_CTRL, KEY_Q, KEY_T};

// Boot-protocol report layout

/// Boot-protocol keyboard report size in bytes (1 modifier byte,
/// 1 reserved byte, 6 keycode slots). Interrupt transfers may deliver
/// more (device max-packet-size); anything past byte 7 is ignored.
pub const BOOT_REPORT_SIZE: usize = 8;

/// Number of simultaneous keycode slots in a boot report (6-key rollover).
pub const ROLLOVER_SLOTS: usize = 6;

// Keyspace

/// Exclusive upper bound of the supported keyspace, one past Right GUI
/// (0xE7), the last usage a boot report can carry. Transitions with a
/// keycode at or above this are dropped by the engine; the virtual
/// input sink must accept every usage below it, including the synthetic
/// chord keys it may never see from real hardware.
pub const KEYSPACE: u8 = 0xE8;

// Command-mode bindings

/// Pressing this key in Command mode emits [`TERMINAL_SHORTCUT`].
pub const CMD_OPEN_TERMINAL: u8 = KEY_B;

/// Pressing this key in Command mode returns to Normal mode.
pub const CMD_EXIT: u8 = KEY_Q;

/// Synthetic chord emitted for the open-terminal command, in exact
/// emission order: Ctrl down, Alt down, T down, T up, Alt up, Ctrl up.
pub const TERMINAL_SHORTCUT: &[(u8, bool)] = &[
    (KEY_LEFT_CTRL, true),
    (KEY_LEFT_ALT, true),
    (KEY_T, true),
    (KEY_T, false),
    (KEY_LEFT_ALT, false),
    (KEY_LEFT_CTRL, false),
];
