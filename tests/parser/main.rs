//! Integration tests for Layer 2: Parser
//!
//! Tests for turning typed lines into commands.

mod commands;
