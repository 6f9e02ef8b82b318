//! Error scenario tests
//!
//! Tests fatal selection errors and the recoverable enhancer error

use crate::harness::{play, play_bytes, play_raw};
use loadout::{FactoryError, Outcome, SessionError};

/// Test: Invalid character ends the session immediately
#[test]
fn test_invalid_character() {
    let t = play(&["3", "1", "0"]);
    assert!(!t.completed());

    assert!(t.output.ends_with("Error: Invalid input: 3\n"));
    assert!(!t.contains("Choose your attack strategy:"));
    assert!(!t.contains("==="));

    match &t.outcome {
        Outcome::Aborted(SessionError::InvalidCharacter(FactoryError::InvalidSelection(s))) => {
            assert_eq!(s, "3")
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

/// Test: Invalid strategy ends the session after the character is created
#[test]
fn test_invalid_strategy() {
    let t = play(&["2", "5", "0"]);
    assert!(!t.completed());

    assert!(t.contains("Choose your attack strategy:"));
    assert!(t.output.ends_with("Error: Invalid attack strategy choice: 5\n"));
    assert!(!t.contains("Add an attack enhancer:"));
    assert!(!t.contains("Preparing for Combat"));
    assert!(matches!(
        t.outcome,
        Outcome::Aborted(SessionError::InvalidStrategy(ref s)) if s == "5"
    ));
}

/// Test: Invalid enhancer re-prompts and the session carries on
#[test]
fn test_invalid_enhancer_reprompts() {
    let t = play(&["1", "1", "9", "fire", "1", "0"]);
    assert!(t.completed());

    assert!(t.contains("Error: Invalid enhancer choice: 9\n"));
    assert!(t.contains("Error: Invalid enhancer choice: fire\n"));
    assert_eq!(t.count("Add an attack enhancer:"), 4);
    assert!(t.contains("Attack: Basic Attack, Fire Damage\n"));
}

/// Test: Character codes are exact; padded input is rejected
#[test]
fn test_padded_character_code() {
    let t = play(&["1 "]);
    assert!(t.output.ends_with("Error: Invalid input: 1 \n"));
}

/// Test: Running out of input at any prompt aborts without combat
#[test]
fn test_input_closed() {
    for input in ["", "1\n", "1\n2\n", "1\n2\n1\n"] {
        let t = play_raw(input);
        assert!(!t.completed(), "input {:?} should abort", input);
        assert!(matches!(t.outcome, Outcome::Aborted(SessionError::InputClosed)));
        assert!(t
            .output
            .ends_with("Error: input closed before the session finished\n"));
        assert!(!t.contains("Preparing for Combat"));
    }
}

/// Test: Undecodable input at the enhancer prompt is just another bad choice
#[test]
fn test_invalid_utf8_enhancer_reprompts() {
    let t = play_bytes(b"1\n1\n\xff\n1\n0\n");
    assert!(t.completed(), "session should complete:\n{}", t.output);

    assert!(t.contains("Error: Invalid enhancer choice: \u{FFFD}\n"));
    assert!(t.contains("Attack: Basic Attack, Fire Damage\n"));
}

/// Test: Undecodable input at the character prompt ends the session cleanly
#[test]
fn test_invalid_utf8_character() {
    let t = play_bytes(b"\xfe\xff\n");
    assert!(!t.completed());
    assert!(t.output.ends_with("Error: Invalid input: \u{FFFD}\u{FFFD}\n"));
}
