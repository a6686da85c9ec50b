//! Looking around.

use townsquare_foundation::{Direction, Error, ErrorKind, ItemId, NpcId, Result, RoomId};

use crate::game::Game;

/// What a `look` resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sighting {
    /// The current room.
    Room(RoomId),
    /// Every exit of the current room.
    Exits(Vec<(Direction, RoomId)>),
    /// One direction; `None` when there is no exit that way.
    Toward(Direction, Option<RoomId>),
    /// An item on the ground or in the inventory.
    Item(ItemId),
    /// An NPC in the room.
    Npc(NpcId),
}

impl Game {
    /// Resolves a look target.
    ///
    /// An empty target is the room. `exits` lists every exit. A direction
    /// word or letter names the room that way. Otherwise ground items are
    /// searched, then the inventory, then NPCs present.
    ///
    /// # Errors
    ///
    /// Returns `NotVisible` if nothing nearby matches.
    pub fn look(&self, target: &str) -> Result<Sighting> {
        let target = target.trim().to_lowercase();
        let room = self.world.current_room()?;

        if target.is_empty() {
            return Ok(Sighting::Room(room.id.clone()));
        }
        if target == "exits" {
            let exits = room
                .exits
                .iter()
                .map(|(direction, to)| (*direction, to.clone()))
                .collect();
            return Ok(Sighting::Exits(exits));
        }
        if let Some(direction) = Direction::parse(&target) {
            return Ok(Sighting::Toward(direction, room.exit_to(direction).cloned()));
        }

        let lexicon = self.world.lexicon();
        if let Some(item) = lexicon
            .first_match(&target, &room.ground)
            .or_else(|| lexicon.first_match(&target, self.world.inventory()))
        {
            return Ok(Sighting::Item(item.id.clone()));
        }

        if let Some(npc) = self.world.find_npc_here(&target) {
            return Ok(Sighting::Npc(npc.id.clone()));
        }

        Err(Error::new(ErrorKind::NotVisible(target)))
    }
}
