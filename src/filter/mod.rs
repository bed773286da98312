//! Key-event filter pipeline: report differencing and the command-mode
//! state machine.
//!
//! A decoded report is diffed against the previous one to recover
//! per-key press/release transitions ([`diff`]), and each transition is
//! fed through the command-mode engine ([`engine`]) which decides what
//! reaches the virtual input sink.

pub mod diff;
pub mod engine;


pub use diff::{diff, KeyTransition, TransitionBatch};
pub use engine::{CommandEngine, Mode};
