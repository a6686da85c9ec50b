//! One-time random placement of items and NPCs.
//!
//! Run once when a session starts. A batch size between [`MIN_PLACEMENTS`]
//! and the room count is drawn; that many rooms (with repeats) each receive
//! one random catalog item, sometimes with a bonus moneybag, and a second
//! draw of rooms receives the distinct NPCs picked for this game. Rooms,
//! items, and NPCs are drawn from identifier-ordered lists, so a seeded RNG
//! always produces the same town.

use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::SliceRandom;
use townsquare_foundation::{ItemId, NpcId, Result, RoomId};
use tracing::debug;

use crate::content::MONEYBAG;
use crate::world::World;

/// Lower bound on the batch size.
pub const MIN_PLACEMENTS: usize = 10;

/// What a scatter pass placed, in placement order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Placement {
    /// Items dropped on room grounds, bonus moneybags included.
    pub items: Vec<(RoomId, ItemId)>,
    /// NPCs added to rooms.
    pub npcs: Vec<(RoomId, NpcId)>,
}

/// Scatters items and NPCs across the world.
///
/// NPCs already standing in a room are left where they are and never placed
/// a second time.
///
/// # Errors
///
/// Only fails if the world's own room table is inconsistent.
pub fn scatter<R: Rng + ?Sized>(world: &mut World, rng: &mut R) -> Result<Placement> {
    let rooms: Vec<RoomId> = world.rooms().map(|room| room.id.clone()).collect();
    let items: Vec<ItemId> = world.items().ids().cloned().collect();
    let moneybag = world.items().contains(MONEYBAG).then(|| ItemId::new(MONEYBAG));

    let count = batch_size(rooms.len(), rng);
    let mut placement = Placement::default();
    if count == 0 {
        return Ok(placement);
    }

    let targets = draw(&rooms, count, rng);
    let mut pool = draw(&items, count, rng);
    for room_id in targets {
        if pool.is_empty() {
            break;
        }
        let item = pool.swap_remove(rng.gen_range(0..pool.len()));
        let room = world.room_mut(&room_id)?;
        room.ground.push(item.clone());
        debug!(room = %room_id, item = %item, "scattered item");
        placement.items.push((room_id.clone(), item));

        if pool.len() % 3 > 1 {
            if let Some(bag) = &moneybag {
                room.ground.push(bag.clone());
                debug!(room = %room_id, "scattered moneybag");
                placement.items.push((room_id, bag.clone()));
            }
        }
    }

    let placed: BTreeSet<NpcId> = world
        .rooms()
        .flat_map(|room| room.npcs.iter().cloned())
        .collect();
    let unplaced: Vec<NpcId> = world
        .npcs()
        .map(|npc| npc.id.clone())
        .filter(|id| !placed.contains(id))
        .collect();

    let targets = draw(&rooms, count, rng);
    let mut cast: Vec<NpcId> = draw(&unplaced, count, rng)
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    for room_id in targets {
        if cast.is_empty() {
            break;
        }
        let npc = cast.remove(rng.gen_range(0..cast.len()));
        world.room_mut(&room_id)?.npcs.push(npc.clone());
        debug!(room = %room_id, npc = %npc, "scattered npc");
        placement.npcs.push((room_id, npc));
    }

    Ok(placement)
}

fn batch_size<R: Rng + ?Sized>(rooms: usize, rng: &mut R) -> usize {
    if rooms <= MIN_PLACEMENTS {
        rooms
    } else {
        rng.gen_range(MIN_PLACEMENTS..=rooms)
    }
}

/// `count` independent uniform picks, with replacement.
fn draw<T: Clone, R: Rng + ?Sized>(from: &[T], count: usize, rng: &mut R) -> Vec<T> {
    (0..count)
        .filter_map(|_| from.choose(rng).cloned())
        .collect()
}
