//! Combat system module
//!
//! Implements composable attacks:
//! - Attack styles (melee, magic)
//! - Stackable enhancements (fire, poison)
//! - Composed attacks that describe and execute layer by layer

mod attack;

pub use attack::{AttackStyle, ComposedAttack, Enhancement, BASE_LABEL};
