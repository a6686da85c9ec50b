//! Game context, action handlers, and text rendering for Townsquare.
//!
//! This crate provides:
//! - [`Game`] - The world plus a seeded RNG and the invulnerability toggle
//! - Action handlers as methods on [`Game`], one module per concern
//! - [`report`] - Structured outcomes of successful actions
//! - [`render`] - Room, inventory, stats, and shop text

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod combat;
pub mod commerce;
pub mod consumption;
pub mod game;
pub mod inventory;
pub mod look;
pub mod navigation;
pub mod render;
pub mod report;

pub use game::Game;
pub use look::Sighting;
pub use render::ExitStyle;
pub use report::{
    Dropped, Looted, Meal, Moved, Purchase, Retaliation, Sale, ShopListing, Strike, Taken,
    Valuation,
};
