//! HID boot-protocol report decoding.
//!
//! Only the fixed 8-byte boot-protocol keyboard layout is handled;
//! there is exactly one report variant in scope, so decoding is a
//! single bounds-checked function rather than any descriptor-driven
//! dispatch.

pub mod keyboard;
pub mod keycodes;


pub use keyboard::KeyboardReport;
