//! Rooms, items, NPCs, and player state for Townsquare.
//!
//! This crate provides:
//! - [`Item`] and [`ItemCatalog`] - Immutable item templates
//! - [`Room`], [`Npc`], [`Player`], [`Inventory`] - Mutable world records
//! - [`World`] - The validated registry tying them together
//! - [`Lexicon`] - Keyword resolution of typed fragments to items
//! - [`content`] - The built-in town
//! - [`scatter`] - One-time random placement of items and NPCs
//! - [`Snapshot`] - Whole-world state for persistence

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod census;
pub mod content;
pub mod item;
pub mod lexicon;
pub mod npc;
pub mod player;
pub mod room;
pub mod scatter;
pub mod snapshot;
pub mod world;

pub use census::NpcCensus;
pub use item::{Item, ItemCatalog, ItemKind, PlayerStat};
pub use lexicon::Lexicon;
pub use npc::{Npc, Reward};
pub use player::{Inventory, Player};
pub use room::Room;
pub use scatter::{Placement, scatter};
pub use snapshot::Snapshot;
pub use world::World;
