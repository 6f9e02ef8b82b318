//! Character classes and their static preparation profiles

use serde::{Deserialize, Serialize};

use crate::combat::AttackStyle;

/// Playable character classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterKind {
    Knight,
    Sorcerer,
}

/// Everything that distinguishes one class's preparation from another's
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreparationProfile {
    /// Log entry for the equip step
    pub equip: &'static str,
    /// Log entry for the train step
    pub train: &'static str,
    /// Log entry for the weapon selection step
    pub weapon: &'static str,
    /// Attack style installed by the final step
    pub default_attack: AttackStyle,
}

const KNIGHT: PreparationProfile = PreparationProfile {
    equip: "Knight equips plate armor.",
    train: "Knight trains in swordsmanship.",
    weapon: "Knight selects a broadsword.",
    default_attack: AttackStyle::Melee,
};

const SORCERER: PreparationProfile = PreparationProfile {
    equip: "Sorcerer equips enchanted robes.",
    train: "Sorcerer studies arcane spells.",
    weapon: "Sorcerer selects a magic staff.",
    default_attack: AttackStyle::Magic,
};

impl CharacterKind {
    /// Static preparation data for this class
    pub fn profile(&self) -> &'static PreparationProfile {
        match self {
            CharacterKind::Knight => &KNIGHT,
            CharacterKind::Sorcerer => &SORCERER,
        }
    }

    /// Display name used in headers and menus
    pub fn name(&self) -> &'static str {
        match self {
            CharacterKind::Knight => "Knight",
            CharacterKind::Sorcerer => "Sorcerer",
        }
    }
}

impl std::fmt::Display for CharacterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
