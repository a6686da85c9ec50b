//! Command-line parsing for Townsquare.
//!
//! ```text
//! "Buy Great Sword"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → [Word("buy"), Word("great"), Word("sword")]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VOCABULARY      │  → Verb::Buy, argument "great sword"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMMAND         │  → Command::Buy("great sword")
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw input to a token stream
//! - [`vocabulary`] - Verbs and their aliases
//! - [`command`] - The parsed command type
//! - [`parser`] - Turns a line into a [`Command`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod parser;
pub mod tokenizer;
pub mod vocabulary;

pub use command::{Command, GodModeSwitch};
pub use parser::parse;
pub use tokenizer::{InputToken, InputTokenizer};
pub use vocabulary::Verb;
