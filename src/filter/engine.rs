//! Command-mode state machine.
//!
//! Consumes key transitions one at a time, in differ order, and decides
//! what reaches the sink: pass-through in Normal mode, command dispatch
//! in Command mode, with Ctrl+Space toggling between the two.

#[cfg(feature = "defmt")]
use defmt::info;
#[cfg(not(feature = "defmt"))]
use log::info;

use crate::config::{CMD_EXIT, CMD_OPEN_TERMINAL, KEYSPACE, TERMINAL_SHORTCUT};
use crate::filter::diff::KeyTransition;
use crate::hid::keycodes::{is_ctrl, KEY_SPACE};
use crate::sink::KeySink;

/// Input mode. Starts in [`Mode::Normal`]; toggles indefinitely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Every key passes through to the sink unchanged.
    #[default]
    Normal,
    /// Keys are swallowed except the command bindings.
    Command,
}

/// Per-device command-mode engine.
///
/// Owns the device's pressed-key table, the latched chord state, and
/// the current [`Mode`]. One instance per attached device, created on
/// attach and dropped on detach; mode does not persist across
/// reconnects.
///
/// A release arriving while Command mode is active is swallowed, so a
/// key already held when the mode was entered never delivers its
/// release to the sink even after the mode is left again - unless the
/// key is pressed a second time. Command presses compensate with an
/// explicit synthesized release, so no key the sink ever saw pressed
/// stays visibly stuck.
pub struct CommandEngine {
    mode: Mode,
    ctrl_held: bool,
    space_held: bool,
    /// Pressed-state table, bounded to the supported keyspace.
    key_state: [bool; KEYSPACE as usize],
}

impl CommandEngine {
    pub const fn new() -> Self {
        Self {
            mode: Mode::Normal,
            ctrl_held: false,
            space_held: false,
            key_state: [false; KEYSPACE as usize],
        }
    }

    /// Current input mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether the engine has latched `keycode` as currently pressed.
    pub fn is_pressed(&self, keycode: u8) -> bool {
        (keycode as usize) < self.key_state.len() && self.key_state[keycode as usize]
    }

    /// Process one key transition.
    ///
    /// Transitions must arrive in differ order (releases first). A
    /// keycode outside the supported keyspace is dropped without any
    /// state change; the rest of the batch is unaffected.
    pub fn handle<S: KeySink>(&mut self, t: KeyTransition, sink: &mut S) {
        let KeyTransition { keycode, pressed } = t;

        if keycode >= KEYSPACE {
            return;
        }

        self.key_state[keycode as usize] = pressed;

        if is_ctrl(keycode) {
            self.ctrl_held = pressed;
        }
        if keycode == KEY_SPACE {
            self.space_held = pressed;
        }

        // Ctrl+Space toggle, edge-triggered on the completing press.
        // The chord transition itself is consumed, never forwarded.
        if self.ctrl_held && self.space_held && pressed {
            self.mode = match self.mode {
                Mode::Normal => Mode::Command,
                Mode::Command => Mode::Normal,
            };
            info!(
                "command mode {}",
                if self.mode == Mode::Command {
                    "enabled"
                } else {
                    "disabled"
                }
            );
            return;
        }

        if self.mode == Mode::Normal {
            // Pass-through: the default, low-latency path.
            sink.report_key(keycode, pressed);
            return;
        }

        // Command mode swallows releases entirely.
        if !pressed {
            return;
        }

        match keycode {
            k if k == CMD_OPEN_TERMINAL => {
                for &(code, down) in TERMINAL_SHORTCUT {
                    sink.report_key(code, down);
                }
                // Release the originating key so it never appears stuck.
                sink.report_key(keycode, false);
            }
            k if k == CMD_EXIT => {
                self.mode = Mode::Normal;
                info!("command mode disabled");
                sink.report_key(keycode, false);
            }
            _ => {
                // Unbound command: swallow, but release the real key.
                sink.report_key(keycode, false);
            }
        }
    }
}

impl Default for CommandEngine {
    fn default() -> Self {
        Self::new()
    }
}
