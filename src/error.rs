//! Unified error type for keymode.
//!
//! All variants carry only fixed-size data - no `alloc`. Nothing here
//! is fatal to a device session: every error means "this report was
//! dropped", never "tear the device down".

/// Top-level error type returned from the session entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The upstream interrupt transfer completed with a failure status.
    /// Carries the raw status code as reported by the transport; the
    /// transport owns the retry/resubmit decision.
    Transport(i32),

    /// The delivered buffer is shorter than the fixed boot-protocol
    /// layout. The report is dropped with no partial state update.
    ReportTooShort { len: usize },
}
