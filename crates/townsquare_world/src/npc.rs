//! Non-player characters.

use townsquare_foundation::{ItemId, NpcId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rewards granted to the player for a kill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reward {
    /// Experience points.
    pub experience: u64,
    /// Hit points added to the player's damage buffer.
    pub hit_points: i64,
}

/// Mutable combat and economic state of an NPC.
///
/// A dead NPC keeps its identity and stays in its room as a lootable corpse.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Npc {
    /// NPC identifier (its display name).
    pub id: NpcId,
    /// Remaining health; at or below zero means dead.
    pub health: i64,
    /// Experience granted on kill. Zeroed once claimed.
    pub experience: u64,
    /// Hit points granted on kill. Zeroed once claimed.
    pub hit_points: i64,
    /// Coins carried.
    pub money: u64,
    /// Items carried.
    pub inventory: Vec<ItemId>,
    /// Lowercase match keywords.
    pub keywords: Vec<String>,
}

impl Npc {
    /// Creates an NPC with the given health and no possessions.
    #[must_use]
    pub fn new(id: impl Into<NpcId>, health: i64, keywords: &[&str]) -> Self {
        Self {
            id: id.into(),
            health,
            experience: 0,
            hit_points: 0,
            money: 0,
            inventory: Vec::new(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Sets the kill rewards.
    #[must_use]
    pub fn rewards(mut self, experience: u64, hit_points: i64) -> Self {
        self.experience = experience;
        self.hit_points = hit_points;
        self
    }

    /// Sets the coin balance.
    #[must_use]
    pub fn money(mut self, money: u64) -> Self {
        self.money = money;
        self
    }

    /// Sets the carried items.
    #[must_use]
    pub fn carrying(mut self, items: &[&str]) -> Self {
        self.inventory = items.iter().map(|i| ItemId::new(i)).collect();
        self
    }

    /// Returns true while health is positive.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Returns true if `fragment` names this NPC, by keyword or full name.
    #[must_use]
    pub fn matches(&self, fragment: &str) -> bool {
        let fragment = fragment.trim().to_lowercase();
        self.keywords.iter().any(|k| *k == fragment) || self.id.as_str().to_lowercase() == fragment
    }

    /// Takes the kill rewards, leaving zero behind.
    pub fn claim_rewards(&mut self) -> Reward {
        Reward {
            experience: std::mem::take(&mut self.experience),
            hit_points: std::mem::take(&mut self.hit_points),
        }
    }

    /// Takes all coins and items.
    pub fn strip(&mut self) -> (u64, Vec<ItemId>) {
        (
            std::mem::take(&mut self.money),
            std::mem::take(&mut self.inventory),
        )
    }
}
