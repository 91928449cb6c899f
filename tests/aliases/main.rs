//! Tests for an extended direction registry.
//!
//! Installs a registry with extra aliases before anything reads the global
//! one, then checks rooms, the parser, and the game all honor it.

use handbasket_foundation::ErrorKind;
use handbasket_parser::{Action, CommandParser};
use handbasket_runtime::{Game, GameState, ScriptedEditor, demo};
use handbasket_world::{Direction, DirectionRegistry, Room, World};

#[test]
fn installed_aliases_reach_every_layer() {
    let registry = DirectionRegistry::standard()
        .with_alias(Direction::In, "inside")
        .unwrap()
        .with_alias(Direction::Out, "outside")
        .unwrap();
    DirectionRegistry::install(registry).unwrap();

    // A second install is refused
    let err = DirectionRegistry::install(DirectionRegistry::standard()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::RegistryAlreadyInstalled));

    // Rooms
    let mut world = World::new();
    let porch = world.add_room(Room::new("Porch", "A creaky porch.")).unwrap();
    let parlor = world.add_room(Room::new("Parlor", "A dusty parlor.")).unwrap();
    assert_eq!(world.connect(porch, "inside", parlor).unwrap(), Direction::In);
    assert_eq!(world.get(porch).unwrap().exit("in"), Some(parlor));

    // Parser
    let parser = CommandParser::new();
    assert_eq!(parser.parse("outside").unwrap(), Action::Move(Direction::Out));
    assert_eq!(parser.parse("go inside").unwrap(), Action::Move(Direction::In));
    assert!(parser.command_words().iter().any(|w| w == "inside"));

    // Game
    let mut game = Game::with_editor(
        ScriptedEditor::new(["inside", "outside", "inside", "quit"]),
        Vec::new(),
        demo::museum().unwrap(),
        demo::adventurer(),
    );
    game.run().unwrap();
    assert_eq!(game.state(), GameState::Terminated);
    assert_eq!(game.player().location(), game.world().find_room("Hallway"));
}
