//! REPL, CLI, persistence, and the status clock for Townsquare.
//!
//! This crate provides:
//! - [`Repl`] - Interactive command loop over a swappable [`LineEditor`]
//! - [`Session`] - One player's game plus its save store and guestbook
//! - [`SaveStore`] - Whole-snapshot save and load in `MessagePack`
//! - [`Guestbook`] - Per-room visitor log
//! - [`Clock`] - Background play-time counter feeding the prompt

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod clock;
pub mod config;
pub mod editor;
pub mod guestbook;
pub mod persistence;
pub mod repl;
pub mod session;

pub use clock::{Clock, PlayTime, SharedStatus, StatusBoard};
pub use config::{GameConfig, Identity};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use guestbook::{FileGuestbook, Guestbook, GuestbookEntry, MemoryGuestbook};
pub use persistence::{FileSaveStore, MemorySaveStore, SaveStore};
pub use repl::Repl;
pub use session::{Reply, Session};
