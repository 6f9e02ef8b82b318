//! Attack styles, enhancements, and composed attacks
//!
//! A composed attack is one base style plus an ordered list of
//! enhancements. Descriptions and effects are produced by walking that
//! list from the base outward:
//! - `describe()` joins the base label and every enhancement label
//! - `execute()` emits the base effect, then each enhancement's effect

use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::str::FromStr;

/// How an attack is carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackStyle {
    /// Weapon-based strike
    Melee,
    /// Spell cast
    Magic,
}

impl AttackStyle {
    /// Message emitted when this style executes
    pub fn effect(&self) -> &'static str {
        match self {
            AttackStyle::Melee => "Performing melee attack with weapon!",
            AttackStyle::Magic => "Casting a powerful magic spell!",
        }
    }
}

impl std::fmt::Display for AttackStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AttackStyle::Melee => "melee",
            AttackStyle::Magic => "magic",
        };
        write!(f, "{}", s)
    }
}

/// Stackable modifier layered on top of an attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Enhancement {
    /// Fire damage
    Fire,
    /// Poison damage
    Poison,
}

impl Enhancement {
    /// Label appended to the attack description
    pub fn label(&self) -> &'static str {
        match self {
            Enhancement::Fire => "Fire Damage",
            Enhancement::Poison => "Poison Damage",
        }
    }

    /// Message emitted after the inner layers have executed
    pub fn effect(&self) -> &'static str {
        match self {
            Enhancement::Fire => "Adding fire damage to the attack!",
            Enhancement::Poison => "Adding poison damage to the attack!",
        }
    }
}

impl FromStr for Enhancement {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fire" => Ok(Enhancement::Fire),
            "poison" => Ok(Enhancement::Poison),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Enhancement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Enhancement::Fire => "fire",
            Enhancement::Poison => "poison",
        };
        write!(f, "{}", s)
    }
}

/// Label of the base layer of every composed attack
pub const BASE_LABEL: &str = "Basic Attack";

/// A base attack style wrapped by zero or more enhancements.
///
/// Enhancements are stored innermost first, so the last element is the
/// most recently added layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedAttack {
    base: AttackStyle,
    enhancements: Vec<Enhancement>,
}

impl ComposedAttack {
    /// Create a bare attack with no enhancements
    pub fn new(base: AttackStyle) -> Self {
        Self {
            base,
            enhancements: Vec::new(),
        }
    }

    /// Wrap this attack in one more enhancement layer
    pub fn with(mut self, enhancement: Enhancement) -> Self {
        self.push(enhancement);
        self
    }

    /// Add an outermost enhancement layer in place
    pub fn push(&mut self, enhancement: Enhancement) {
        self.enhancements.push(enhancement);
    }

    /// The base attack style
    pub fn base(&self) -> AttackStyle {
        self.base
    }

    /// Enhancements in the order they were added
    pub fn enhancements(&self) -> &[Enhancement] {
        &self.enhancements
    }

    /// Total number of layers, base included
    pub fn depth(&self) -> usize {
        1 + self.enhancements.len()
    }

    /// Human-readable description, e.g. "Basic Attack, Fire Damage"
    pub fn describe(&self) -> String {
        self.enhancements
            .iter()
            .fold(BASE_LABEL.to_string(), |mut desc, e| {
                desc.push_str(", ");
                desc.push_str(e.label());
                desc
            })
    }

    /// Effect messages in execution order (base first)
    pub fn effects(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.base.effect()).chain(self.enhancements.iter().map(|e| e.effect()))
    }

    /// Execute the attack, writing one line per layer
    pub fn execute<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for effect in self.effects() {
            writeln!(out, "{}", effect)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for ComposedAttack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}
