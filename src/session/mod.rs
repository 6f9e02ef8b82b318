//! Session module
//!
//! Runs the prompt/response sequence over any buffered reader and writer,
//! so stdin/stdout in the binary and in-memory buffers in tests share one path.

mod controller;
mod menu;

pub use controller::{Outcome, Session, SessionError, Stage, Step};
pub use menu::{Menu, CHARACTER_MENU, ENHANCER_MENU, STRATEGY_MENU};
