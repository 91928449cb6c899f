//! Tokenizer tests.
//!
//! Tests for converting raw input to words.

use handbasket_parser::tokenizer::InputTokenizer;

#[test]
fn tokenize_simple_command() {
    assert_eq!(InputTokenizer::tokenize("examine rock"), ["examine", "rock"]);
}

#[test]
fn tokenize_lowercases() {
    assert_eq!(InputTokenizer::tokenize("TALK TO Guard"), ["talk", "to", "guard"]);
}

#[test]
fn tokenize_strips_trailing_punctuation() {
    assert_eq!(InputTokenizer::tokenize("look, north!"), ["look", "north"]);
}

#[test]
fn tokenize_keeps_lone_question_mark() {
    assert_eq!(InputTokenizer::tokenize("?"), ["?"]);
}

#[test]
fn tokenize_blank_input() {
    assert!(InputTokenizer::tokenize("").is_empty());
    assert!(InputTokenizer::tokenize(" \t ").is_empty());
}
