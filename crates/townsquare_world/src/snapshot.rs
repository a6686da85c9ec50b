//! Whole-world mutable state, as saved and restored.

use im::OrdMap;
use townsquare_foundation::{NpcId, RoomId};

use crate::npc::Npc;
use crate::player::{Inventory, Player};
use crate::room::Room;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The four parts of a saved game. Item templates are not included; they
/// are fixed for a given build.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    /// Player record.
    pub player: Player,
    /// Player inventory.
    pub inventory: Inventory,
    /// Every room.
    pub rooms: OrdMap<RoomId, Room>,
    /// Every NPC.
    pub npcs: OrdMap<NpcId, Npc>,
}
