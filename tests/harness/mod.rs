//! Integration Test Harness
//!
//! Runs a full session against scripted input and captures the transcript:
//! - `play` feeds one line per choice and returns a `Transcript`
//! - `Transcript` exposes the outcome and helpers over the captured output
//!
//! # Example
//!
//! ```rust,ignore
//! let t = play(&["1", "1", "0"]);
//! assert!(t.completed());
//! assert!(t.contains("Attack: Basic Attack"));
//! ```

#![allow(dead_code)]

use std::io::Cursor;

use loadout::{Outcome, Session};

/// Output and outcome of one scripted session
pub struct Transcript {
    pub output: String,
    pub outcome: Outcome,
}

impl Transcript {
    pub fn completed(&self) -> bool {
        matches!(self.outcome, Outcome::Completed(_))
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.output.contains(needle)
    }

    /// Output lines with prompts stripped from the front of each line
    pub fn lines(&self) -> Vec<&str> {
        self.output
            .lines()
            .map(|line| strip_prompts(line))
            .collect()
    }

    /// Lines printed after the given marker line
    pub fn lines_after(&self, marker: &str) -> Vec<&str> {
        let lines = self.lines();
        match lines.iter().position(|l| *l == marker) {
            Some(idx) => lines[idx + 1..].to_vec(),
            None => Vec::new(),
        }
    }

    /// Number of times `needle` occurs in the output
    pub fn count(&self, needle: &str) -> usize {
        self.output.matches(needle).count()
    }
}

/// Prompts are written without a newline, so any output that follows
/// a prompt shares its line.
fn strip_prompts(mut line: &str) -> &str {
    const PROMPTS: [&str; 2] = ["Enter choice (1 or 2): ", "Enter choice (0, 1, or 2): "];
    while let Some(rest) = PROMPTS.iter().find_map(|p| line.strip_prefix(p)) {
        line = rest;
    }
    line
}

/// Play a session with one input line per choice
pub fn play(choices: &[&str]) -> Transcript {
    let mut input = String::new();
    for choice in choices {
        input.push_str(choice);
        input.push('\n');
    }
    play_raw(&input)
}

/// Play a session over raw input text
pub fn play_raw(input: &str) -> Transcript {
    play_bytes(input.as_bytes())
}

/// Play a session over raw input bytes, which need not be valid UTF-8
pub fn play_bytes(input: &[u8]) -> Transcript {
    let mut session = Session::new(Cursor::new(input.to_vec()), Vec::new());
    let outcome = session.run().expect("in-memory session I/O failed");
    let output = String::from_utf8(session.into_output()).expect("output was not UTF-8");
    Transcript { output, outcome }
}
