//! Character instances: preparation log and the attack they carry

use std::io::{self, Write};

use tracing::debug;

use super::class::CharacterKind;
use crate::combat::{AttackStyle, ComposedAttack, Enhancement};

/// A character ready to be configured, prepared, and sent into combat
#[derive(Debug, Clone)]
pub struct Character {
    kind: CharacterKind,
    /// Preparation actions, append-only
    actions: Vec<String>,
    attack: ComposedAttack,
    /// Whether a strategy was picked explicitly rather than defaulted
    strategy_chosen: bool,
}

impl Character {
    /// Create a character holding a bare attack of its class default style
    pub fn new(kind: CharacterKind) -> Self {
        Self {
            kind,
            actions: Vec::new(),
            attack: ComposedAttack::new(kind.profile().default_attack),
            strategy_chosen: false,
        }
    }

    pub fn kind(&self) -> CharacterKind {
        self.kind
    }

    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    pub fn attack(&self) -> &ComposedAttack {
        &self.attack
    }

    /// Replace the current attack with a bare one of `style`.
    ///
    /// Any stacked enhancements are discarded.
    pub fn set_attack_strategy(&mut self, style: AttackStyle) {
        debug!(kind = %self.kind, %style, "attack strategy set");
        self.attack = ComposedAttack::new(style);
        self.strategy_chosen = true;
    }

    /// Wrap the current attack with the named enhancement.
    ///
    /// Unknown names leave the attack untouched.
    pub fn add_attack_enhancer(&mut self, name: &str) {
        match name.parse::<Enhancement>() {
            Ok(enhancement) => self.add_enhancement(enhancement),
            Err(()) => debug!(kind = %self.kind, enhancer = name, "ignoring unknown enhancer"),
        }
    }

    /// Wrap the current attack with `enhancement`
    pub fn add_enhancement(&mut self, enhancement: Enhancement) {
        self.attack.push(enhancement);
        debug!(kind = %self.kind, %enhancement, depth = self.attack.depth(), "enhancement added");
    }

    /// Run the four preparation steps, then print the action log.
    ///
    /// The final step installs the class default attack only when no
    /// strategy has been chosen explicitly.
    pub fn prepare_for_combat<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let profile = self.kind.profile();

        for action in [profile.equip, profile.train, profile.weapon] {
            debug!(kind = %self.kind, action, "preparation step");
            self.actions.push(action.to_string());
        }

        if !self.strategy_chosen {
            self.attack = ComposedAttack::new(profile.default_attack);
        }

        writeln!(out, "Preparation complete for {}:", self.kind)?;
        for action in &self.actions {
            writeln!(out, "{}", action)?;
        }
        Ok(())
    }

    /// Print the attack description, then execute it
    pub fn perform_attack<W: Write>(&self, out: &mut W) -> io::Result<()> {
        debug!(kind = %self.kind, attack = %self.attack, "performing attack");
        writeln!(out, "Attack: {}", self.attack.describe())?;
        self.attack.execute(out)
    }
}
