//! Interactive session controller
//!
//! Drives a session through its stages:
//! - Character selection (invalid input ends the session)
//! - Attack strategy selection (invalid input ends the session)
//! - Enhancer loop (invalid input re-prompts, "0" proceeds)
//! - Preparation and attack
//!
//! Each stage consumes the session state and yields either the next
//! stage or a terminal outcome.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, info};

use super::menu::{Menu, CHARACTER_MENU, ENHANCER_MENU, STRATEGY_MENU};
use crate::character::{create_character, Character, FactoryError};
use crate::combat::AttackStyle;

/// Errors reported to the user during a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    InvalidCharacter(#[from] FactoryError),

    #[error("Invalid attack strategy choice: {0}")]
    InvalidStrategy(String),

    #[error("Invalid enhancer choice: {0}")]
    InvalidEnhancer(String),

    #[error("input closed before the session finished")]
    InputClosed,
}

impl SessionError {
    /// Whether this error ends the session
    pub fn is_fatal(&self) -> bool {
        !matches!(self, SessionError::InvalidEnhancer(_))
    }
}

/// Where the session currently is
#[derive(Debug)]
pub enum Stage {
    ChooseCharacter,
    ChooseStrategy(Character),
    AddEnhancers(Character),
    Combat(Character),
}

/// How a session ended
#[derive(Debug)]
pub enum Outcome {
    /// Combat ran; holds the character as it fought
    Completed(Character),
    /// A fatal error ended the session early
    Aborted(SessionError),
}

impl Outcome {
    /// Process exit status: 0 when combat ran, 1 when the session aborted
    pub fn exit_status(&self) -> u8 {
        match self {
            Outcome::Completed(_) => 0,
            Outcome::Aborted(_) => 1,
        }
    }
}

/// Result of advancing one stage
#[derive(Debug)]
pub enum Step {
    Next(Stage),
    Done(Outcome),
}

/// One interactive run over an input and an output stream
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a new session
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run every stage until the session completes or aborts
    pub fn run(&mut self) -> io::Result<Outcome> {
        info!("session started");
        let mut stage = Stage::ChooseCharacter;

        loop {
            match self.advance(stage)? {
                Step::Next(next) => stage = next,
                Step::Done(outcome) => {
                    match &outcome {
                        Outcome::Completed(character) => {
                            info!(kind = %character.kind(), attack = %character.attack(), "session completed")
                        }
                        Outcome::Aborted(err) => info!(error = %err, "session aborted"),
                    }
                    return Ok(outcome);
                }
            }
        }
    }

    /// Run a single stage
    pub fn advance(&mut self, stage: Stage) -> io::Result<Step> {
        match stage {
            Stage::ChooseCharacter => {
                let Some(choice) = self.prompt(&CHARACTER_MENU)? else {
                    return self.abort(SessionError::InputClosed);
                };
                match create_character(&choice) {
                    Ok(character) => Ok(Step::Next(Stage::ChooseStrategy(character))),
                    Err(err) => self.abort(err.into()),
                }
            }

            Stage::ChooseStrategy(mut character) => {
                let Some(choice) = self.prompt(&STRATEGY_MENU)? else {
                    return self.abort(SessionError::InputClosed);
                };
                let style = match choice.as_str() {
                    "1" => AttackStyle::Melee,
                    "2" => AttackStyle::Magic,
                    _ => return self.abort(SessionError::InvalidStrategy(choice)),
                };
                character.set_attack_strategy(style);
                Ok(Step::Next(Stage::AddEnhancers(character)))
            }

            Stage::AddEnhancers(mut character) => {
                let Some(choice) = self.prompt(&ENHANCER_MENU)? else {
                    return self.abort(SessionError::InputClosed);
                };
                match choice.as_str() {
                    "0" => return Ok(Step::Next(Stage::Combat(character))),
                    "1" => character.add_attack_enhancer("fire"),
                    "2" => character.add_attack_enhancer("poison"),
                    _ => self.report(&SessionError::InvalidEnhancer(choice))?,
                }
                Ok(Step::Next(Stage::AddEnhancers(character)))
            }

            Stage::Combat(mut character) => {
                writeln!(self.output)?;
                writeln!(self.output, "=== Preparing for Combat ===")?;
                character.prepare_for_combat(&mut self.output)?;

                writeln!(self.output)?;
                writeln!(self.output, "=== Performing Attack ===")?;
                character.perform_attack(&mut self.output)?;
                self.output.flush()?;

                Ok(Step::Done(Outcome::Completed(character)))
            }
        }
    }

    /// Consume the session, returning the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Show a menu and read one line. Returns `None` at end of input.
    fn prompt(&mut self, menu: &Menu) -> io::Result<Option<String>> {
        menu.render(&mut self.output)?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        // Undecodable bytes become U+FFFD and fall through to the
        // invalid-selection path like any other bad choice.
        let line = String::from_utf8_lossy(&buf).into_owned();

        debug!(menu = menu.title, choice = %line, "input received");
        Ok(Some(line))
    }

    fn report(&mut self, err: &SessionError) -> io::Result<()> {
        debug!(error = %err, fatal = err.is_fatal(), "rejected input");
        writeln!(self.output, "Error: {}", err)?;
        self.output.flush()
    }

    fn abort(&mut self, err: SessionError) -> io::Result<Step> {
        self.report(&err)?;
        Ok(Step::Done(Outcome::Aborted(err)))
    }
}
