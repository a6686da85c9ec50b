//! The world registry.
//!
//! A `World` owns the immutable item catalog and the mutable room, NPC, and
//! player records. Referential integrity (every exit, item, and NPC named
//! anywhere exists in its registry) is checked when a world is built or
//! restored, so lookups during play only fail on programming errors.

use std::collections::BTreeMap;

use im::OrdMap;
use townsquare_foundation::{Error, ErrorKind, NpcId, Result, RoomId};

use crate::census::NpcCensus;
use crate::item::ItemCatalog;
use crate::lexicon::Lexicon;
use crate::npc::Npc;
use crate::player::{Inventory, Player};
use crate::room::Room;
use crate::snapshot::Snapshot;

/// Rooms, items, NPCs, and the player.
#[derive(Clone, Debug)]
pub struct World {
    items: ItemCatalog,
    rooms: OrdMap<RoomId, Room>,
    npcs: OrdMap<NpcId, Npc>,
    player: Player,
    inventory: Inventory,
}

impl World {
    /// Builds and validates a world.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWorld` if any record references something that does
    /// not exist, a room or NPC is defined twice, or shop pricing is broken.
    pub fn new(
        items: ItemCatalog,
        rooms: impl IntoIterator<Item = Room>,
        npcs: impl IntoIterator<Item = Npc>,
        player: Player,
        inventory: Inventory,
    ) -> Result<Self> {
        let mut room_table = OrdMap::new();
        for room in rooms {
            if room_table.contains_key(&room.id) {
                return Err(Error::invalid_world(format!("duplicate room '{}'", room.id)));
            }
            room_table.insert(room.id.clone(), room);
        }

        let mut npc_table = OrdMap::new();
        for npc in npcs {
            if npc_table.contains_key(&npc.id) {
                return Err(Error::invalid_world(format!("duplicate npc '{}'", npc.id)));
            }
            npc_table.insert(npc.id.clone(), npc);
        }

        let world = Self {
            items,
            rooms: room_table,
            npcs: npc_table,
            player,
            inventory,
        };
        world.validate()?;
        Ok(world)
    }

    /// Checks referential integrity and pricing.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWorld` describing the first violation found.
    pub fn validate(&self) -> Result<()> {
        let mut npc_homes: BTreeMap<&NpcId, &RoomId> = BTreeMap::new();

        for (key, room) in &self.rooms {
            if *key != room.id {
                return Err(Error::invalid_world(format!(
                    "room keyed '{key}' has id '{}'",
                    room.id
                )));
            }
            for (direction, target) in &room.exits {
                if !self.rooms.contains_key(target) {
                    return Err(Error::invalid_world(format!(
                        "room '{key}' exit {direction} leads to unknown room '{target}'"
                    )));
                }
            }
            for item in &room.ground {
                if !self.items.contains(item.as_str()) {
                    return Err(Error::invalid_world(format!(
                        "room '{key}' has unknown ground item '{item}'"
                    )));
                }
            }
            for item in room.shop.iter().flatten() {
                let template = self.items.get(item.as_str()).ok_or_else(|| {
                    Error::invalid_world(format!("shop '{key}' sells unknown item '{item}'"))
                })?;
                let Some(cost) = template.cost else {
                    return Err(Error::invalid_world(format!(
                        "shop '{key}' sells '{item}' which has no cost"
                    )));
                };
                if template.sellable && template.sell.unwrap_or(0) >= cost {
                    return Err(Error::invalid_world(format!(
                        "item '{item}' resells for at least its cost"
                    )));
                }
            }
            for npc in &room.npcs {
                if !self.npcs.contains_key(npc) {
                    return Err(Error::invalid_world(format!(
                        "room '{key}' lists unknown npc '{npc}'"
                    )));
                }
                if let Some(other) = npc_homes.insert(npc, key) {
                    return Err(Error::invalid_world(format!(
                        "npc '{npc}' is in both '{other}' and '{key}'"
                    )));
                }
            }
        }

        for (key, npc) in &self.npcs {
            if *key != npc.id {
                return Err(Error::invalid_world(format!(
                    "npc keyed '{key}' has id '{}'",
                    npc.id
                )));
            }
            if let Some(item) = npc.inventory.iter().find(|i| !self.items.contains(i.as_str())) {
                return Err(Error::invalid_world(format!(
                    "npc '{key}' carries unknown item '{item}'"
                )));
            }
        }

        if !self.rooms.contains_key(&self.player.location) {
            return Err(Error::invalid_world(format!(
                "player is in unknown room '{}'",
                self.player.location
            )));
        }
        if let Some(item) = self.inventory.iter().find(|i| !self.items.contains(i.as_str())) {
            return Err(Error::invalid_world(format!(
                "player carries unknown item '{item}'"
            )));
        }

        Ok(())
    }

    /// The item catalog.
    #[must_use]
    pub fn items(&self) -> &ItemCatalog {
        &self.items
    }

    /// A lexicon over the item catalog.
    #[must_use]
    pub fn lexicon(&self) -> Lexicon<'_> {
        Lexicon::new(&self.items)
    }

    /// Iterates rooms in identifier order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Iterates NPCs in identifier order.
    pub fn npcs(&self) -> impl Iterator<Item = &Npc> {
        self.npcs.values()
    }

    /// Looks up a room.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRoom` if there is no such room.
    pub fn room(&self, id: &RoomId) -> Result<&Room> {
        self.rooms
            .get(id)
            .ok_or_else(|| Error::new(ErrorKind::UnknownRoom(id.clone())))
    }

    /// Looks up a room mutably.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRoom` if there is no such room.
    pub fn room_mut(&mut self, id: &RoomId) -> Result<&mut Room> {
        self.rooms
            .get_mut(id)
            .ok_or_else(|| Error::new(ErrorKind::UnknownRoom(id.clone())))
    }

    /// The room the player is in.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRoom` if the player's location is dangling.
    pub fn current_room(&self) -> Result<&Room> {
        self.room(&self.player.location)
    }

    /// The room the player is in, mutably.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRoom` if the player's location is dangling.
    pub fn current_room_mut(&mut self) -> Result<&mut Room> {
        let location = self.player.location.clone();
        self.room_mut(&location)
    }

    /// Looks up an NPC.
    ///
    /// # Errors
    ///
    /// Returns `UnknownNpc` if there is no such NPC.
    pub fn npc(&self, id: &NpcId) -> Result<&Npc> {
        self.npcs
            .get(id)
            .ok_or_else(|| Error::new(ErrorKind::UnknownNpc(id.clone())))
    }

    /// Looks up an NPC mutably.
    ///
    /// # Errors
    ///
    /// Returns `UnknownNpc` if there is no such NPC.
    pub fn npc_mut(&mut self, id: &NpcId) -> Result<&mut Npc> {
        self.npcs
            .get_mut(id)
            .ok_or_else(|| Error::new(ErrorKind::UnknownNpc(id.clone())))
    }

    /// Finds the first NPC anywhere in the world that `fragment` names.
    #[must_use]
    pub fn find_npc(&self, fragment: &str) -> Option<&Npc> {
        self.npcs.values().find(|npc| npc.matches(fragment))
    }

    /// Finds an NPC in the player's room that `fragment` names.
    #[must_use]
    pub fn find_npc_here(&self, fragment: &str) -> Option<&Npc> {
        let room = self.current_room().ok()?;
        room.npcs
            .iter()
            .filter_map(|id| self.npcs.get(id))
            .find(|npc| npc.matches(fragment))
    }

    /// The player record.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The player record, mutably.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// The player's inventory.
    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// The player's inventory, mutably.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Moves the player. The target must exist.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRoom` if the target is not a room.
    pub fn relocate_player(&mut self, target: RoomId) -> Result<()> {
        if !self.rooms.contains_key(&target) {
            return Err(Error::new(ErrorKind::UnknownRoom(target)));
        }
        self.player.location = target;
        Ok(())
    }

    /// Counts living and dead NPCs placed in rooms.
    #[must_use]
    pub fn census(&self) -> NpcCensus {
        let mut census = NpcCensus::default();
        for npc in self
            .rooms
            .values()
            .flat_map(|room| room.npcs.iter())
            .filter_map(|id| self.npcs.get(id))
        {
            census.record(npc);
        }
        census
    }

    /// Captures the mutable state. The room and NPC tables share structure
    /// with the live world, so this is cheap.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: self.player.clone(),
            inventory: self.inventory.clone(),
            rooms: self.rooms.clone(),
            npcs: self.npcs.clone(),
        }
    }

    /// Replaces the mutable state with a snapshot, keeping the item catalog.
    ///
    /// The current state is untouched if the snapshot fails validation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWorld` if the snapshot references anything unknown.
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<()> {
        let candidate = Self {
            items: self.items.clone(),
            rooms: snapshot.rooms,
            npcs: snapshot.npcs,
            player: snapshot.player,
            inventory: snapshot.inventory,
        };
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }
}
