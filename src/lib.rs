//! Command-mode filter core for USB HID boot-protocol keyboards.
//!
//! Sits between a USB transport (interrupt transfers delivering raw
//! 8-byte boot-protocol reports) and a virtual input sink. Normal mode
//! passes every key through unchanged; Ctrl+Space toggles Command mode,
//! where keys are swallowed except a small command set:
//!
//! - `B` — emit a Ctrl+Alt+T synthetic chord (open terminal)
//! - `Q` — leave Command mode
//!
//! The crate is pure logic: no I/O, no blocking, no allocation. The
//! transport and the input sink are external collaborators — the
//! transport calls [`session::DeviceSession::handle_transfer`] once per
//! completed transfer, and events come out through the [`sink::KeySink`]
//! trait. One `DeviceSession` per attached device; the transport must
//! not deliver reports for a device concurrently (interrupt transfers
//! are resubmitted only after the callback returns, so this holds by
//! construction).
//!
//! Host tests: `cargo test`. Enable the `defmt` feature to route
//! diagnostics through defmt instead of the `log` facade.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod filter;
pub mod hid;
pub mod session;
pub mod sink;

pub use error::Error;
pub use filter::diff::KeyTransition;
pub use filter::engine::{CommandEngine, Mode};
pub use hid::keyboard::KeyboardReport;
pub use session::DeviceSession;
pub use sink::KeySink;
