//! Direction registry tests.
//!
//! Tests for resolving typed words to canonical directions.

use handbasket_world::{Direction, DirectionRegistry};
use proptest::prelude::*;

#[test]
fn every_standard_alias_resolves() {
    let registry = DirectionRegistry::standard();
    let table = [
        ("north", Direction::North),
        ("n", Direction::North),
        ("northeast", Direction::Northeast),
        ("ne", Direction::Northeast),
        ("northwest", Direction::Northwest),
        ("nw", Direction::Northwest),
        ("south", Direction::South),
        ("s", Direction::South),
        ("southeast", Direction::Southeast),
        ("se", Direction::Southeast),
        ("southwest", Direction::Southwest),
        ("sw", Direction::Southwest),
        ("east", Direction::East),
        ("e", Direction::East),
        ("west", Direction::West),
        ("w", Direction::West),
        ("up", Direction::Up),
        ("u", Direction::Up),
        ("down", Direction::Down),
        ("d", Direction::Down),
        ("in", Direction::In),
        ("out", Direction::Out),
    ];

    for (alias, expected) in table {
        assert_eq!(registry.normalize(alias), Some(expected), "alias {alias}");
    }
    assert_eq!(registry.all_aliases().count(), table.len());
}

#[test]
fn mixed_case_resolves_to_same_direction() {
    let registry = DirectionRegistry::standard();
    for text in ["NE", "ne", "Ne", "nE", "NorthEast"] {
        assert_eq!(registry.normalize(text), Some(Direction::Northeast));
    }
}

#[test]
fn global_registry_defaults_to_standard() {
    let global = DirectionRegistry::global();
    assert_eq!(global.normalize("sw"), Some(Direction::Southwest));
    assert_eq!(global.normalize("inside"), None);
}

#[test]
fn install_after_global_read_fails() {
    let _ = DirectionRegistry::global();
    let err = DirectionRegistry::install(DirectionRegistry::standard()).unwrap_err();
    assert!(matches!(
        err.kind,
        handbasket_foundation::ErrorKind::RegistryAlreadyInstalled
    ));
}

#[test]
fn extension_does_not_disturb_existing_aliases() {
    let registry = DirectionRegistry::standard()
        .with_alias(Direction::In, "inside")
        .unwrap()
        .with_alias(Direction::Out, "outside")
        .unwrap();

    assert_eq!(registry.normalize("in"), Some(Direction::In));
    assert_eq!(registry.normalize("Inside"), Some(Direction::In));
    assert_eq!(registry.normalize("outside"), Some(Direction::Out));
    assert_eq!(registry.normalize("n"), Some(Direction::North));
}

#[test]
fn unreachable_aliases_are_rejected() {
    for alias in ["", "   ", "exit!", "go out."] {
        let err = DirectionRegistry::standard()
            .with_alias(Direction::North, alias)
            .unwrap_err();
        assert!(
            matches!(err.kind, handbasket_foundation::ErrorKind::InvalidDirection(_)),
            "{alias:?}"
        );
    }
}

#[test]
fn blank_text_never_resolves() {
    let registry = DirectionRegistry::standard();
    assert_eq!(registry.normalize(""), None);
    assert_eq!(registry.normalize(" \t "), None);
    assert_eq!(registry.aliases(Direction::North), ["north", "n"]);
}

proptest! {
    #[test]
    fn unknown_words_do_not_resolve(text in "[a-z]{3,8}") {
        let registry = DirectionRegistry::standard();
        let is_alias = registry.all_aliases().any(|alias| alias == text);
        prop_assert_eq!(registry.normalize(&text).is_some(), is_alias);
    }

    #[test]
    fn uppercase_alias_resolves(index in 0usize..12) {
        let registry = DirectionRegistry::standard();
        let direction = Direction::ALL[index];
        for alias in registry.aliases(direction) {
            prop_assert_eq!(registry.normalize(&alias.to_uppercase()), Some(direction));
        }
    }
}
