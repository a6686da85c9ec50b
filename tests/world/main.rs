//! Integration tests for Layer 1: World
//!
//! Tests for the built-in town, the randomizer, and snapshot restore.

mod integrity;
mod scatter;
mod snapshot;
