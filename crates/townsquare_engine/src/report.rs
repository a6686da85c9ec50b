//! Outcomes of successful actions.
//!
//! Each report carries the text it needs so that its `Display` output is
//! the line printed to the player.

use std::fmt;

use townsquare_foundation::{Direction, ItemId, NpcId, RoomId};
use townsquare_world::{PlayerStat, Reward};

// =============================================================================
// Navigation
// =============================================================================

/// The player walked through an exit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Moved {
    /// Exit taken.
    pub direction: Direction,
    /// Room left.
    pub from: RoomId,
    /// Room entered.
    pub to: RoomId,
}

impl fmt::Display for Moved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You move to the {}.", self.direction)
    }
}

// =============================================================================
// Combat
// =============================================================================

/// One exchange of blows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Strike {
    /// The NPC attacked.
    pub target: NpcId,
    /// The player's weapon.
    pub weapon: ItemId,
    /// The weapon's damage ceiling.
    pub max_damage: u64,
    /// Damage dealt after clamping to the target's health.
    pub damage: u64,
    /// Target health afterwards.
    pub remaining: i64,
    /// Rewards claimed, if this blow killed the target.
    pub reward: Option<Reward>,
    /// The counter-attack, if the target survived.
    pub retaliation: Option<Retaliation>,
    /// Whether every placed NPC is now dead.
    pub all_defeated: bool,
}

impl Strike {
    /// Returns true if the target died from this blow.
    #[must_use]
    pub fn killed(&self) -> bool {
        self.remaining <= 0
    }
}

impl fmt::Display for Strike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.killed() {
            write!(f, "You killed {}!", self.target)?;
            if let Some(reward) = self.reward.filter(|r| *r != Reward::default()) {
                write!(
                    f,
                    "\nYou gain {} XP and {} HP.",
                    reward.experience, reward.hit_points
                )?;
            }
        } else {
            write!(
                f,
                "You hit {} with a {} (MAX damage: {}), causing {} damage.\n{} now has {} health.",
                self.target, self.weapon, self.max_damage, self.damage, self.target, self.remaining
            )?;
        }
        if let Some(retaliation) = &self.retaliation {
            write!(f, "\n{retaliation}")?;
        }
        if self.all_defeated {
            write!(
                f,
                "\nCongratulations, you have defeated all the\nenemies and have won the game!"
            )?;
        }
        Ok(())
    }
}

/// An NPC's counter-attack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Retaliation {
    /// The attacker.
    pub attacker: NpcId,
    /// The attacker's weapon, if it has one.
    pub weapon: Option<ItemId>,
    /// Damage rolled, clamped to the player's health.
    pub damage: u64,
    /// Health actually lost after the hit-point buffer.
    pub health_lost: i64,
}

impl fmt::Display for Retaliation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.weapon {
            Some(weapon) => write!(
                f,
                "{} hit you with a {weapon} causing {} damage.",
                self.attacker, self.damage
            )?,
            None => write!(f, "{} swings at you bare-handed.", self.attacker)?,
        }
        if self.damage > 0 && self.health_lost == 0 {
            write!(f, " Your hit points absorb the blow.")?;
        }
        Ok(())
    }
}

// =============================================================================
// Take / Drop / Loot
// =============================================================================

/// An item was picked up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Taken {
    /// The item.
    pub item: ItemId,
    /// Its short description.
    pub short_desc: String,
    /// The statistic it incremented, for counter items.
    pub counted: Option<PlayerStat>,
}

impl fmt::Display for Taken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You take {}.", self.short_desc)
    }
}

/// An item was dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dropped {
    /// The item.
    pub item: ItemId,
    /// Its short description.
    pub short_desc: String,
}

impl fmt::Display for Dropped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You drop {}.", self.short_desc)
    }
}

/// A corpse was emptied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Looted {
    /// The corpse.
    pub npc: NpcId,
    /// Coins taken.
    pub money: u64,
    /// Items taken.
    pub items: Vec<ItemId>,
}

impl fmt::Display for Looted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.money > 0 {
            writeln!(f, "Looted {} coins from {}", self.money, self.npc)?;
        } else {
            writeln!(f, "No money to loot from {}", self.npc)?;
        }
        for item in &self.items {
            writeln!(f, "Looted {item} from {}", self.npc)?;
        }
        write!(
            f,
            "Nothing else in {}'s inventory is worth looting.",
            self.npc
        )
    }
}

// =============================================================================
// Commerce
// =============================================================================

/// A shop's wares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopListing {
    /// Items in shop order, with long descriptions when a full listing was
    /// asked for.
    pub entries: Vec<(ItemId, Option<String>)>,
}

/// An item was bought.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Purchase {
    /// The item.
    pub item: ItemId,
    /// Its short description.
    pub short_desc: String,
    /// Price paid.
    pub cost: u64,
    /// Coins before paying.
    pub before: u64,
    /// Coins left.
    pub remaining: u64,
}

impl fmt::Display for Purchase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} costs {} coins\nYou have {} coins\nYou have purchased {}\nYou now have {} coins left",
            capitalize(&self.short_desc),
            self.cost,
            self.before,
            self.short_desc,
            self.remaining
        )
    }
}

/// An item was sold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sale {
    /// The item.
    pub item: ItemId,
    /// Its short description.
    pub short_desc: String,
    /// Coins received.
    pub price: u64,
}

impl fmt::Display for Sale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You have sold {} for {} coin{}",
            self.short_desc,
            self.price,
            plural(self.price)
        )
    }
}

/// What a shop would pay for an item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Valuation {
    /// The item.
    pub item: ItemId,
    /// Coins offered.
    pub value: u64,
}

impl fmt::Display for Valuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The shopkeeper will give you {} coin{}",
            self.value,
            plural(self.value)
        )
    }
}

// =============================================================================
// Consumption
// =============================================================================

/// An item was eaten.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Meal {
    /// The item.
    pub item: ItemId,
    /// Its short description.
    pub short_desc: String,
    /// Health gained.
    pub gain: i64,
    /// Health afterwards.
    pub health: i64,
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You eat {}", self.short_desc)
    }
}

fn plural(n: u64) -> &'static str {
    if n == 1 { "" } else { "s" }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
