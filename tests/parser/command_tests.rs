//! Command parsing tests.

use handbasket_foundation::ErrorKind;
use handbasket_parser::{Action, CommandParser};
use handbasket_world::{Direction, DirectionRegistry};
use proptest::prelude::*;

fn parse(input: &str) -> Action {
    CommandParser::new().parse(input).unwrap()
}

#[test]
fn parse_control_words() {
    assert_eq!(parse("quit"), Action::Quit);
    assert_eq!(parse("q"), Action::Quit);
    assert_eq!(parse("look"), Action::Look);
    assert_eq!(parse("l"), Action::Look);
    assert_eq!(parse("help"), Action::Help);
    assert_eq!(parse("?"), Action::Help);
    assert_eq!(parse("exits"), Action::Exits);
}

#[test]
fn parse_directions() {
    assert_eq!(parse("in"), Action::Move(Direction::In));
    assert_eq!(parse("NE"), Action::Move(Direction::Northeast));
    assert_eq!(parse("  down  "), Action::Move(Direction::Down));
    assert_eq!(parse("go west"), Action::Move(Direction::West));
    assert_eq!(parse("go s"), Action::Move(Direction::South));
}

#[test]
fn go_needs_a_direction() {
    for input in ["go", "go nowhere", "go north east"] {
        let err = CommandParser::new().parse(input).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::UnknownCommand(_)), "{input:?}");
    }
}

#[test]
fn parse_verb_noun_commands() {
    assert_eq!(parse("examine rock"), Action::Examine("rock".into()));
    assert_eq!(parse("x Guard 1"), Action::Examine("guard 1".into()));
    assert_eq!(parse("talk to guard 1"), Action::Talk("guard 1".into()));
    assert_eq!(parse("speak guard"), Action::Talk("guard".into()));
}

#[test]
fn unknown_command_carries_trimmed_input() {
    let err = CommandParser::new().parse("  -invalid-  ").unwrap_err();
    assert!(err.is_recoverable());
    match err.kind {
        ErrorKind::UnknownCommand(text) => assert_eq!(text, "-invalid-"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn custom_registry_adds_direction_words() {
    let registry = DirectionRegistry::standard()
        .with_alias(Direction::In, "enter")
        .unwrap();
    let parser = CommandParser::with_registry(&registry);

    assert_eq!(parser.parse("enter").unwrap(), Action::Move(Direction::In));
    assert_eq!(parser.parse("go enter").unwrap(), Action::Move(Direction::In));
    assert!(CommandParser::new().parse("enter").is_err());
}

#[test]
fn command_words_cover_every_alias() {
    let parser = CommandParser::new();
    let words = parser.command_words();
    for alias in parser.registry().all_aliases() {
        assert!(words.iter().any(|w| w == alias), "missing {alias}");
    }
    assert!(words.iter().any(|w| w == "quit"));
    assert!(words.iter().any(|w| w == "examine"));
}

proptest! {
    #[test]
    fn parse_never_panics(input in ".{0,40}") {
        let _ = CommandParser::new().parse(&input);
    }

    #[test]
    fn unknown_words_are_recoverable(word in "[b-z]{6,12}") {
        let parser = CommandParser::new();
        prop_assume!(!parser.command_words().contains(&word));
        let err = parser.parse(&word).unwrap_err();
        prop_assert!(err.is_recoverable());
    }
}
