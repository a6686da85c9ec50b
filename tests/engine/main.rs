//! Integration tests for Layer 2: Engine
//!
//! Tests for command handlers against the built-in town.

mod properties;
mod scenarios;
