//! Take, drop, and loot.

use townsquare_foundation::{Error, ErrorKind, Result};
use townsquare_world::{ItemKind, PlayerStat};
use tracing::debug;

use crate::game::Game;
use crate::report::{Dropped, Looted, Taken};

impl Game {
    /// Picks up the first takeable ground item matching `fragment`.
    ///
    /// Counter items raise the matching player statistic instead of entering
    /// the inventory.
    ///
    /// # Errors
    ///
    /// - `MissingArgument` for an empty fragment.
    /// - `NotTakeable` if every match is fixed in place.
    /// - `NotOnGround` if nothing on the ground matches.
    pub fn take(&mut self, fragment: &str) -> Result<Taken> {
        let fragment = fragment.trim().to_lowercase();
        if fragment.is_empty() {
            return Err(Error::missing_argument(
                "Take",
                "Type \"look\" to see the items on the ground here.",
            ));
        }

        let room = self.world.current_room()?;
        let matches = self.world.lexicon().all_matches(&fragment, &room.ground);
        let Some(item) = matches.iter().find(|item| item.takeable) else {
            return Err(if matches.is_empty() {
                Error::new(ErrorKind::NotOnGround(fragment))
            } else {
                Error::new(ErrorKind::NotTakeable(fragment))
            });
        };
        let id = item.id.clone();
        let short_desc = item.short_desc.clone();
        let kind = item.kind;

        self.world.current_room_mut()?.remove_ground_item(&id);
        let counted = match kind {
            ItemKind::Counter(PlayerStat::Money) => {
                self.world.player_mut().money += 1;
                Some(PlayerStat::Money)
            }
            ItemKind::Ordinary => {
                self.world.inventory_mut().add(id.clone());
                None
            }
        };
        debug!(item = %id, ?counted, "item taken");

        Ok(Taken {
            item: id,
            short_desc,
            counted,
        })
    }

    /// Puts one carried item matching `fragment` on the ground.
    ///
    /// # Errors
    ///
    /// - `MissingArgument` for an empty fragment.
    /// - `NotCarried` if nothing carried matches.
    pub fn drop_item(&mut self, fragment: &str) -> Result<Dropped> {
        let fragment = fragment.trim().to_lowercase();
        if fragment.is_empty() {
            return Err(Error::missing_argument(
                "Drop",
                "Type \"inventory\" or \"inv\" to see your inventory.",
            ));
        }

        let item = self
            .world
            .lexicon()
            .first_match(&fragment, self.world.inventory())
            .ok_or_else(|| Error::not_carried(&fragment))?;
        let id = item.id.clone();
        let short_desc = item.short_desc.clone();

        self.world.inventory_mut().remove_one(&id);
        self.world.current_room_mut()?.ground.push(id.clone());
        debug!(item = %id, "item dropped");

        Ok(Dropped {
            item: id,
            short_desc,
        })
    }

    /// Empties a corpse in the current room into the player's purse and
    /// inventory.
    ///
    /// # Errors
    ///
    /// - `MissingArgument` for an empty name.
    /// - `TargetNotPresent` if no NPC here answers to `target`.
    /// - `TargetNotDead` if it is still alive; nothing changes.
    pub fn loot(&mut self, target: &str) -> Result<Looted> {
        let target = target.trim();
        if target.is_empty() {
            return Err(Error::missing_argument("Loot", "Type \"look\" to see who is nearby."));
        }

        let npc = self
            .world
            .find_npc_here(target)
            .ok_or_else(|| Error::not_present(target))?;
        let npc_id = npc.id.clone();
        if npc.is_alive() {
            return Err(Error::new(ErrorKind::TargetNotDead(npc_id.to_string())));
        }

        let (money, items) = self.world.npc_mut(&npc_id)?.strip();
        self.world.player_mut().money += money;
        self.world.inventory_mut().extend(items.iter().cloned());
        debug!(npc = %npc_id, money, items = items.len(), "corpse looted");

        Ok(Looted {
            npc: npc_id,
            money,
            items,
        })
    }
}
