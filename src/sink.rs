//! Output boundary: the virtual input sink the filter emits into.
//!
//! Mirrors virtual-input-device submission semantics: one
//! `report_key` call per key edge, then one `sync` per logical batch
//! (one incoming raw report) to mark the batch complete.
//!
//! The sink must declare at registration time that it accepts every
//! usage code below [`crate::config::KEYSPACE`] - the open-terminal
//! macro emits Ctrl, Alt and T even if the originating hardware never
//! produces them.

/// Virtual input sink accepting synthesized key events.
///
/// Implementations must not block: `report_key` and `sync` are called
/// from the transport's completion callback context.
pub trait KeySink {
    /// Report one key edge (`pressed` = true for down, false for up).
    fn report_key(&mut self, keycode: u8, pressed: bool);

    /// Mark the end of a logical batch of key events.
    fn sync(&mut self);
}
