//! Townsquare - a small text adventure
//!
//! This crate re-exports all layers of the Townsquare system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: townsquare_runtime    - REPL, CLI, saves, guestbook, status clock
//! Layer 2: townsquare_engine     - Game context, action handlers, rendering
//!          townsquare_parser     - Command parsing
//! Layer 1: townsquare_world      - Rooms, items, NPCs, player, town content
//! Layer 0: townsquare_foundation - Identifiers, directions, errors
//! ```

pub use townsquare_engine as engine;
pub use townsquare_foundation as foundation;
pub use townsquare_parser as parser;
pub use townsquare_runtime as runtime;
pub use townsquare_world as world;
