//! Menus shown at each prompt stage

use std::io::{self, Write};

/// A numbered menu followed by an inline prompt
#[derive(Debug, Clone, Copy)]
pub struct Menu {
    /// Heading line
    pub title: &'static str,
    /// (code, label) pairs, printed as "code. label"
    pub options: &'static [(&'static str, &'static str)],
    /// Prompt printed without a trailing newline
    pub prompt: &'static str,
    /// Whether a blank line separates this menu from earlier output
    pub spaced: bool,
}

pub const CHARACTER_MENU: Menu = Menu {
    title: "Choose your character:",
    options: &[("1", "Knight"), ("2", "Sorcerer")],
    prompt: "Enter choice (1 or 2): ",
    spaced: false,
};

pub const STRATEGY_MENU: Menu = Menu {
    title: "Choose your attack strategy:",
    options: &[("1", "Melee Attack"), ("2", "Magic Attack")],
    prompt: "Enter choice (1 or 2): ",
    spaced: true,
};

pub const ENHANCER_MENU: Menu = Menu {
    title: "Add an attack enhancer:",
    options: &[
        ("1", "Fire Damage"),
        ("2", "Poison Damage"),
        ("0", "None (proceed to combat)"),
    ],
    prompt: "Enter choice (0, 1, or 2): ",
    spaced: true,
};

impl Menu {
    /// Write the menu and its prompt, then flush so the prompt is visible
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.spaced {
            writeln!(out)?;
        }
        writeln!(out, "{}", self.title)?;
        for (code, label) in self.options {
            writeln!(out, "{}. {}", code, label)?;
        }
        write!(out, "{}", self.prompt)?;
        out.flush()
    }
}
