//! Room records.

use std::collections::BTreeMap;

use townsquare_foundation::{Direction, ItemId, NpcId, RoomId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A location node in the world graph.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Room {
    /// Room identifier.
    pub id: RoomId,
    /// Description text.
    pub description: String,
    /// Exits keyed by direction.
    pub exits: BTreeMap<Direction, RoomId>,
    /// Item instances lying on the ground, in drop order.
    pub ground: Vec<ItemId>,
    /// NPCs present, alive or dead.
    pub npcs: Vec<NpcId>,
    /// Items for sale, if this room is a shop.
    pub shop: Option<Vec<ItemId>>,
    /// Whether visitors can sign a guestbook here.
    pub guestbook: bool,
}

impl Room {
    /// Creates a room with no exits, items, or occupants.
    #[must_use]
    pub fn new(id: impl Into<RoomId>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            exits: BTreeMap::new(),
            ground: Vec::new(),
            npcs: Vec::new(),
            shop: None,
            guestbook: false,
        }
    }

    /// Adds an exit.
    #[must_use]
    pub fn exit(mut self, direction: Direction, target: impl Into<RoomId>) -> Self {
        self.exits.insert(direction, target.into());
        self
    }

    /// Places items on the ground.
    #[must_use]
    pub fn ground(mut self, items: &[&str]) -> Self {
        self.ground.extend(items.iter().map(|i| ItemId::new(i)));
        self
    }

    /// Turns the room into a shop selling the given items.
    #[must_use]
    pub fn shop(mut self, items: &[&str]) -> Self {
        self.shop = Some(items.iter().map(|i| ItemId::new(i)).collect());
        self
    }

    /// Puts a guestbook in the room.
    #[must_use]
    pub fn with_guestbook(mut self) -> Self {
        self.guestbook = true;
        self
    }

    /// Returns the room an exit leads to.
    #[must_use]
    pub fn exit_to(&self, direction: Direction) -> Option<&RoomId> {
        self.exits.get(&direction)
    }

    /// Returns true if the room sells anything.
    #[must_use]
    pub fn is_shop(&self) -> bool {
        self.shop.is_some()
    }

    /// Removes one instance of an item from the ground.
    ///
    /// Returns false if the item was not there.
    pub fn remove_ground_item(&mut self, id: &ItemId) -> bool {
        if let Some(pos) = self.ground.iter().position(|i| i == id) {
            self.ground.remove(pos);
            true
        } else {
            false
        }
    }

    /// Returns true if the NPC is listed in this room.
    #[must_use]
    pub fn has_npc(&self, id: &NpcId) -> bool {
        self.npcs.contains(id)
    }
}
