//! Per-device session: ties decode, diff, and the command engine to the
//! transport boundary.
//!
//! The transport calls [`DeviceSession::handle_transfer`] once per
//! completed interrupt transfer and resubmits only after it returns, so
//! the session needs no internal locking. All failure modes degrade to
//! "drop this frame": an error never tears down device state.

#[cfg(feature = "defmt")]
use defmt::error;
#[cfg(not(feature = "defmt"))]
use log::error;

use crate::config::ROLLOVER_SLOTS;
use crate::error::Error;
use crate::filter::diff;
use crate::filter::engine::{CommandEngine, Mode};
use crate::hid::keyboard::{KeySet, KeyboardReport};
use crate::sink::KeySink;

/// State for one attached keyboard.
///
/// Owns the previous key set the differ compares against - per device,
/// so two keyboards attached at once can never leak key state into
/// each other. Created on attach, dropped on detach; a fresh session
/// starts in [`Mode::Normal`] with nothing held.
#[derive(Default)]
pub struct DeviceSession {
    previous: KeySet,
    engine: CommandEngine,
}

impl DeviceSession {
    pub const fn new() -> Self {
        Self {
            previous: [0; ROLLOVER_SLOTS],
            engine: CommandEngine::new(),
        }
    }

    /// Current input mode.
    pub fn mode(&self) -> Mode {
        self.engine.mode()
    }

    /// Process one completed interrupt transfer.
    ///
    /// `status` is the transport's raw completion code (0 = success).
    /// On any error the report is dropped whole: no decode, no diff, no
    /// state change. On success the report is diffed against the stored
    /// previous set, each transition runs through the command engine,
    /// and the sink gets one `sync` for the batch.
    pub fn handle_transfer<S: KeySink>(
        &mut self,
        status: i32,
        data: &[u8],
        sink: &mut S,
    ) -> Result<(), Error> {
        if status != 0 {
            error!("transfer failed with status {}", status);
            return Err(Error::Transport(status));
        }

        let report = match KeyboardReport::decode(data) {
            Ok(report) => report,
            Err(e) => {
                error!("malformed report: {} bytes", data.len());
                return Err(e);
            }
        };

        for t in diff::diff(&self.previous, &report.keycodes) {
            self.engine.handle(t, sink);
        }
        self.previous = report.keycodes;
        sink.sync();

        Ok(())
    }
}
