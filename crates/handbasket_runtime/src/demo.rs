//! The demo world: a museum heist in two rooms.

use handbasket_foundation::Result;
use handbasket_world::{Item, Player, Room, World};

/// Narrative for the starting room.
pub const OUTSIDE_ABOUT: &str =
    "You are standing outside the museum with only a rock, a grappling hook, and a gun.";

/// Narrative for the room behind the door.
pub const HALLWAY_ABOUT: &str = "You have landed in a hallway with beautiful art hanging on \
     the walls. But you have your eyes on a bigger prize.";

/// Builds the museum: Outside leads in to a guarded Hallway, which leads
/// back out. Outside is the first room, so players start there.
///
/// # Errors
///
/// Returns an error if an exit direction does not resolve, which only
/// happens when the installed direction registry lacks `in` or `out`.
pub fn museum() -> Result<World> {
    let mut world = World::new();

    let outside = world.add_room(Room::new("Outside", OUTSIDE_ABOUT))?;
    let hallway = world.add_room(Room::new("Hallway", HALLWAY_ABOUT))?;

    world.get_mut(hallway)?.add_item(Item::guard("Guard 1"));

    world.connect(outside, "in", hallway)?;
    world.connect(hallway, "out", outside)?;

    Ok(world)
}

/// The demo's player character.
#[must_use]
pub fn adventurer() -> Player {
    Player::new("female", 74, "red")
}
