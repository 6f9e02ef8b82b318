//! loadout - character loadout demo
//!
//! Pick a character class and an attack style, stack enhancements on the
//! attack, then prepare for combat and strike once.

pub mod character;
pub mod combat;
pub mod config;
pub mod logging;
pub mod session;

pub use character::{create_character, Character, CharacterKind, FactoryError};
pub use combat::{AttackStyle, ComposedAttack, Enhancement};
pub use config::{Config, ConfigOverrides, LogFormat};
pub use session::{Outcome, Session, SessionError};
