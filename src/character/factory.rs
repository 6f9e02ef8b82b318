//! Character creation from menu selections

use thiserror::Error;
use tracing::debug;

use super::class::CharacterKind;
use super::instance::Character;

/// Character creation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    #[error("Invalid input: {0}")]
    InvalidSelection(String),
}

/// Create a character from a menu code ("1" = Knight, "2" = Sorcerer)
pub fn create_character(code: &str) -> Result<Character, FactoryError> {
    let kind = match code.to_lowercase().as_str() {
        "1" => CharacterKind::Knight,
        "2" => CharacterKind::Sorcerer,
        _ => return Err(FactoryError::InvalidSelection(code.to_string())),
    };
    debug!(%kind, "character created");
    Ok(Character::new(kind))
}
