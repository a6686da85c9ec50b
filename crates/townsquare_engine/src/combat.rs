//! One exchange of blows between the player and an NPC.
//!
//! The player swings with the best weapon carried; damage is uniform in
//! `[0, weapon damage]` and never exceeds the target's remaining health. A
//! target brought to exactly zero hands over its unclaimed rewards. A
//! survivor swings back with its own best weapon; the player only loses the
//! part of that blow exceeding their hit points.

use rand::Rng;
use townsquare_foundation::{Error, ErrorKind, ItemId, NpcId, Result};
use townsquare_world::{Item, ItemCatalog, NpcCensus};
use tracing::debug;

use crate::game::Game;
use crate::report::{Retaliation, Strike};

/// The highest-damage weapon among `ids`. Equal damage resolves to the
/// lexically smallest identifier.
#[must_use]
pub fn best_weapon<'a, 'i>(
    catalog: &'a ItemCatalog,
    ids: impl IntoIterator<Item = &'i ItemId>,
) -> Option<&'a Item> {
    ids.into_iter()
        .filter_map(|id| catalog.get(id.as_str()))
        .filter_map(|item| item.damage.map(|damage| (damage, item)))
        .min_by(|(da, a), (db, b)| db.cmp(da).then_with(|| a.id.cmp(&b.id)))
        .map(|(_, item)| item)
}

impl Game {
    /// Attacks an NPC in the current room.
    ///
    /// # Errors
    ///
    /// - `Incapacitated` if the player's health is below 1.
    /// - `TargetAlreadyDead` if the named NPC is a corpse.
    /// - `TargetNotPresent` if no NPC here answers to `target`.
    /// - `Unarmed` if the player carries no weapon; the action cost is paid.
    ///
    /// Only `Unarmed` changes state.
    pub fn hit(&mut self, target: &str) -> Result<Strike> {
        if self.world.player().is_incapacitated() {
            return Err(Error::new(ErrorKind::Incapacitated));
        }
        let target = target.trim();
        if target.is_empty() {
            return Err(Error::missing_argument("Hit", "Type \"look\" to see who is nearby."));
        }

        let npc = self
            .world
            .find_npc_here(target)
            .or_else(|| self.world.find_npc(target))
            .ok_or_else(|| Error::not_present(target))?;
        let npc_id = npc.id.clone();
        if !npc.is_alive() {
            return Err(Error::new(ErrorKind::TargetAlreadyDead(npc_id.to_string())));
        }
        if !self.world.current_room()?.has_npc(&npc_id) {
            return Err(Error::not_present(npc_id.as_str()));
        }

        let Some(weapon) = best_weapon(self.world.items(), self.world.inventory()) else {
            self.charge_action();
            return Err(Error::new(ErrorKind::Unarmed(npc_id.to_string())));
        };
        let weapon_id = weapon.id.clone();
        let max_damage = weapon.damage.unwrap_or(0);

        let strike = self.exchange(npc_id, weapon_id, max_damage)?;
        self.charge_action();
        Ok(strike)
    }

    fn exchange(&mut self, npc_id: NpcId, weapon: ItemId, max_damage: u64) -> Result<Strike> {
        let roll = self.rng.gen_range(0..=max_damage);
        let npc = self.world.npc_mut(&npc_id)?;
        let damage = roll.min(u64::try_from(npc.health).unwrap_or(0));
        npc.health -= as_health(damage);
        let remaining = npc.health;
        let reward = (remaining == 0).then(|| npc.claim_rewards());
        debug!(npc = %npc_id, roll, damage, remaining, "player strikes");

        if let Some(reward) = reward {
            let player = self.world.player_mut();
            player.experience += reward.experience;
            player.hit_points += reward.hit_points;
            debug!(npc = %npc_id, ?reward, "rewards claimed");
        }

        let retaliation = if remaining > 0 {
            Some(self.retaliate(&npc_id)?)
        } else {
            None
        };

        Ok(Strike {
            all_defeated: self.census().all_defeated(),
            target: npc_id,
            weapon,
            max_damage,
            damage,
            remaining,
            reward,
            retaliation,
        })
    }

    fn retaliate(&mut self, npc_id: &NpcId) -> Result<Retaliation> {
        let npc = self.world.npc(npc_id)?;
        let weapon = best_weapon(self.world.items(), &npc.inventory);
        let ceiling = weapon.and_then(|w| w.damage).unwrap_or(0);
        let weapon = weapon.map(|w| w.id.clone());

        let roll = if self.invulnerable {
            0
        } else {
            self.rng.gen_range(0..=ceiling)
        };
        let player = self.world.player_mut();
        let damage = roll.min(u64::try_from(player.health).unwrap_or(0));
        let overflow = as_health(damage) - player.hit_points;
        let health_lost = overflow.max(0);
        player.health -= health_lost;
        debug!(npc = %npc_id, roll, damage, health_lost, "npc retaliates");

        Ok(Retaliation {
            attacker: npc_id.clone(),
            weapon,
            damage,
            health_lost,
        })
    }

    /// Tallies living and dead NPCs across every room.
    #[must_use]
    pub fn census(&self) -> NpcCensus {
        self.world.census()
    }
}

fn as_health(points: u64) -> i64 {
    i64::try_from(points).unwrap_or(i64::MAX)
}
