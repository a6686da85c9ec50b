//! Player state and inventory.

use std::collections::BTreeMap;

use townsquare_foundation::{ItemId, RoomId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Starting health.
pub const STARTING_HEALTH: i64 = 100;

/// Starting coin balance.
pub const STARTING_MONEY: u64 = 10;

/// The single player record.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Session or node identifier.
    pub node: String,
    /// Originating address.
    pub address: String,
    /// Current room; always a key of the world's room table.
    pub location: RoomId,
    /// Health. Below 1 the player is too weak to move or fight.
    pub health: i64,
    /// Experience points.
    pub experience: u64,
    /// Damage buffer: retaliation at or below this is absorbed.
    pub hit_points: i64,
    /// Coin balance.
    pub money: u64,
}

impl Player {
    /// Creates a player at `location` with starting statistics.
    #[must_use]
    pub fn new(name: impl Into<String>, location: impl Into<RoomId>) -> Self {
        Self {
            name: name.into(),
            node: "0".to_string(),
            address: "127.0.0.1".to_string(),
            location: location.into(),
            health: STARTING_HEALTH,
            experience: 1,
            hit_points: 10,
            money: STARTING_MONEY,
        }
    }

    /// Returns true when health has dropped below 1.
    #[must_use]
    pub fn is_incapacitated(&self) -> bool {
        self.health < 1
    }
}

/// An unordered multiset of carried items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Inventory {
    items: Vec<ItemId>,
}

impl Inventory {
    /// Creates an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an inventory holding the given items.
    #[must_use]
    pub fn with_items(items: &[&str]) -> Self {
        Self {
            items: items.iter().map(|i| ItemId::new(i)).collect(),
        }
    }

    /// Adds one instance.
    pub fn add(&mut self, id: ItemId) {
        self.items.push(id);
    }

    /// Adds every item from an iterator.
    pub fn extend(&mut self, ids: impl IntoIterator<Item = ItemId>) {
        self.items.extend(ids);
    }

    /// Removes one instance. Returns false if none was carried.
    pub fn remove_one(&mut self, id: &ItemId) -> bool {
        if let Some(pos) = self.items.iter().position(|i| i == id) {
            self.items.remove(pos);
            true
        } else {
            false
        }
    }

    /// Number of instances of an item.
    #[must_use]
    pub fn count(&self, id: &str) -> usize {
        self.items.iter().filter(|i| i.as_str() == id).count()
    }

    /// Returns true if at least one instance is carried.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|i| i.as_str() == id)
    }

    /// Iterates all instances.
    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.items.iter()
    }

    /// Distinct items with their counts, in identifier order.
    #[must_use]
    pub fn grouped(&self) -> BTreeMap<&ItemId, usize> {
        let mut counts = BTreeMap::new();
        for id in &self.items {
            *counts.entry(id).or_insert(0) += 1;
        }
        counts
    }

    /// Total number of instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is carried.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a ItemId;
    type IntoIter = std::slice::Iter<'a, ItemId>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
