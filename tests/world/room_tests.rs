//! Room and world graph tests.

use handbasket_foundation::ErrorKind;
use handbasket_world::{Direction, Item, Room, World};

const OUTSIDE_ABOUT: &str = "You are standing outside the museum.";
const HALLWAY_ABOUT: &str = "You have landed in a hallway with beautiful art.";

fn museum() -> (World, handbasket_foundation::RoomId, handbasket_foundation::RoomId) {
    let mut world = World::new();
    let outside = world.add_room(Room::new("Outside", OUTSIDE_ABOUT)).unwrap();
    let hallway = world.add_room(Room::new("Hallway", HALLWAY_ABOUT)).unwrap();
    (world, outside, hallway)
}

#[test]
fn room_traversal() {
    let (mut world, start, end) = museum();
    world.connect(start, "north", end).unwrap();
    world.get_mut(end).unwrap().add_item(Item::new("feather"));

    let first = world.get_mut(start).unwrap().describe(false);
    assert!(first.starts_with("Outside"));
    assert!(first.contains(OUTSIDE_ABOUT));

    let exits = world.get(start).unwrap().possible_exits();
    let next = world.get(start).unwrap().exit_to(exits[0]).unwrap();
    assert_eq!(next, end);

    let text = world.get_mut(next).unwrap().describe(false);
    assert!(text.contains(HALLWAY_ABOUT));
    assert!(text.contains("feather"));

    assert!(world.get(next).unwrap().possible_exits().is_empty());
}

#[test]
fn add_exit_twice_via_aliases_is_listed_once() {
    let (mut world, outside, hallway) = museum();
    let room = world.get_mut(outside).unwrap();
    room.add_exit("northeast", hallway).unwrap();
    room.add_exit("NE", hallway).unwrap();

    let exits = room.possible_exits();
    assert_eq!(exits.iter().filter(|d| **d == Direction::Northeast).count(), 1);
}

#[test]
fn add_exit_rejects_typos() {
    let (mut world, outside, hallway) = museum();
    for bad in ["-invalid-", "nroth", "", "north east"] {
        let err = world.get_mut(outside).unwrap().add_exit(bad, hallway).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidDirection(_)), "{bad:?}");
    }
}

#[test]
fn describe_latch_survives_leaving() {
    let (mut world, outside, hallway) = museum();
    world.connect_both(outside, "in", hallway).unwrap();

    let room = world.get_mut(hallway).unwrap();
    assert!(room.describe(false).contains(HALLWAY_ABOUT));
    assert!(!room.describe(false).contains(HALLWAY_ABOUT));
    assert!(room.describe(true).contains(HALLWAY_ABOUT));
    assert!(!room.describe(false).contains(HALLWAY_ABOUT));
}

#[test]
fn exit_lookup_never_mutates() {
    let (mut world, outside, hallway) = museum();
    world.connect(outside, "in", hallway).unwrap();

    let room = world.get(outside).unwrap();
    assert_eq!(room.exit("in"), Some(hallway));
    assert_eq!(room.exit("out"), None);
    assert_eq!(room.exit("bogus"), None);
    assert!(room.is_first_visit());
    assert_eq!(room.possible_exits(), [Direction::In]);
}

#[test]
fn cycles_and_self_loops() {
    let (mut world, outside, hallway) = museum();
    world.connect_both(outside, "in", hallway).unwrap();
    world.connect(hallway, "up", hallway).unwrap();

    let mut here = outside;
    for step in ["in", "up", "up", "out", "in"] {
        here = world.get(here).unwrap().exit(step).unwrap();
    }
    assert_eq!(here, hallway);
}

#[test]
fn show_items() {
    let mut room = Room::new("Closet", "Cramped.");
    room.add_item(Item::new("rock"));
    room.add_item(Item::new("egg"));
    room.add_item(Item::new("gun"));

    let listing = room.list_items();
    for name in ["rock", "egg", "gun"] {
        assert!(listing.contains(name));
    }
    assert!(listing.find("rock").unwrap() < listing.find("egg").unwrap());
}

#[test]
fn show_no_items() {
    assert_eq!(Room::new("Closet", "Cramped.").list_items(), "");
}

#[test]
fn add_guard_to_hallway() {
    let mut hallway = Room::new("Hallway", HALLWAY_ABOUT);
    let before = hallway.items().len();
    hallway.add_item(Item::guard("Guard 1"));
    assert_eq!(hallway.items().len(), before + 1);
    assert_eq!(hallway.find_item("Guard 1").unwrap().speak(), "Stop");
}
