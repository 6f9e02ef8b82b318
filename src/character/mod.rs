//! Character system - classes, preparation, and creation

mod class;
mod factory;
mod instance;

pub use class::{CharacterKind, PreparationProfile};
pub use factory::{create_character, FactoryError};
pub use instance::Character;
