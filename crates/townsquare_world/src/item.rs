//! Item templates and the item catalog.
//!
//! Items are immutable once the world is built. Quantities are represented by
//! repeated identifiers in a room's ground list or the player's inventory.

use im::OrdMap;
use townsquare_foundation::{Error, ErrorKind, ItemId, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A player statistic that a counter item increments when taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlayerStat {
    /// The player's coin balance.
    Money,
}

/// Distinguishes ordinary inventory items from counter pseudo-items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ItemKind {
    /// Goes into the inventory when taken.
    #[default]
    Ordinary,
    /// Increments a player statistic instead of entering the inventory.
    Counter(PlayerStat),
}

/// An item template.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Catalog identifier.
    pub id: ItemId,
    /// Line shown when the item lies in a room.
    pub ground_desc: String,
    /// Short noun phrase ("a meat pie").
    pub short_desc: String,
    /// Text shown by `look`.
    pub long_desc: String,
    /// Lowercase match keywords; the first is the primary keyword.
    pub keywords: Vec<String>,
    /// Shop price.
    pub cost: Option<u64>,
    /// Resale value.
    pub sell: Option<u64>,
    /// Whether shops will buy the item.
    pub sellable: bool,
    /// Whether the item can be picked up from the ground.
    pub takeable: bool,
    /// Whether the item can be eaten.
    pub edible: bool,
    /// Health restored by eating.
    pub gain: Option<i64>,
    /// Maximum damage when used as a weapon.
    pub damage: Option<u64>,
    /// Ordinary or counter item.
    pub kind: ItemKind,
}

impl Item {
    /// Creates an ordinary, takeable, unsellable, inedible item.
    #[must_use]
    pub fn new(id: impl Into<ItemId>, keywords: &[&str]) -> Self {
        Self {
            id: id.into(),
            ground_desc: String::new(),
            short_desc: String::new(),
            long_desc: String::new(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            cost: None,
            sell: None,
            sellable: false,
            takeable: true,
            edible: false,
            gain: None,
            damage: None,
            kind: ItemKind::Ordinary,
        }
    }

    /// Sets the three descriptions.
    #[must_use]
    pub fn describe(
        mut self,
        ground: impl Into<String>,
        short: impl Into<String>,
        long: impl Into<String>,
    ) -> Self {
        self.ground_desc = ground.into();
        self.short_desc = short.into();
        self.long_desc = long.into();
        self
    }

    /// Sets the shop price.
    #[must_use]
    pub fn cost(mut self, cost: u64) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Sets the resale value and marks the item sellable.
    #[must_use]
    pub fn sells_for(mut self, value: u64) -> Self {
        self.sell = Some(value);
        self.sellable = true;
        self
    }

    /// Marks the item as fixed in place.
    #[must_use]
    pub fn fixed(mut self) -> Self {
        self.takeable = false;
        self
    }

    /// Marks the item edible with the given health gain.
    #[must_use]
    pub fn edible(mut self, gain: i64) -> Self {
        self.edible = true;
        self.gain = Some(gain);
        self
    }

    /// Sets the weapon damage.
    #[must_use]
    pub fn damage(mut self, damage: u64) -> Self {
        self.damage = Some(damage);
        self
    }

    /// Makes this a counter item for the given statistic.
    #[must_use]
    pub fn counter(mut self, stat: PlayerStat) -> Self {
        self.kind = ItemKind::Counter(stat);
        self
    }

    /// Returns the primary keyword.
    #[must_use]
    pub fn primary_keyword(&self) -> &str {
        self.keywords.first().map_or("", String::as_str)
    }

    /// Returns true if any keyword equals `word` (already lowercased).
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        self.keywords.iter().any(|k| k == word)
    }

    /// Returns true if the item can be wielded.
    #[must_use]
    pub fn is_weapon(&self) -> bool {
        self.damage.is_some()
    }

    /// Checks the template's own invariants.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWorld` when the item has no keywords, a keyword is not
    /// lowercase, or a sellable item has no resale value.
    pub fn validate(&self) -> Result<()> {
        if self.keywords.is_empty() {
            return Err(Error::invalid_world(format!(
                "item '{}' has no keywords",
                self.id
            )));
        }
        if let Some(bad) = self.keywords.iter().find(|k| k.to_lowercase() != **k) {
            return Err(Error::invalid_world(format!(
                "item '{}' keyword '{bad}' is not lowercase",
                self.id
            )));
        }
        if self.sellable && self.sell.is_none() {
            return Err(Error::invalid_world(format!(
                "item '{}' is sellable without a sell value",
                self.id
            )));
        }
        Ok(())
    }
}

/// The immutable table of item templates.
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    items: OrdMap<ItemId, Item>,
}

impl ItemCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from templates, validating each.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWorld` for an invalid template or a duplicate identifier.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Result<Self> {
        let mut catalog = Self::new();
        for item in items {
            item.validate()?;
            if catalog.items.contains_key(&item.id) {
                return Err(Error::invalid_world(format!(
                    "duplicate item '{}'",
                    item.id
                )));
            }
            catalog.items.insert(item.id.clone(), item);
        }
        Ok(catalog)
    }

    /// Looks up an item by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    /// Looks up an item, failing with `UnknownItem`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownItem` if the identifier is not in the catalog.
    pub fn require(&self, id: &ItemId) -> Result<&Item> {
        self.items
            .get(id)
            .ok_or_else(|| Error::new(ErrorKind::UnknownItem(id.clone())))
    }

    /// Returns true if the identifier is in the catalog.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Iterates templates in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Iterates identifiers in order.
    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.items.keys()
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
