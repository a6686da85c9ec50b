//! Core identifiers, directions, and error types for Townsquare.
//!
//! This crate provides:
//! - [`RoomId`], [`ItemId`], [`NpcId`] - Typed registry identifiers
//! - [`Direction`] - The six symbolic exit directions
//! - [`Error`] - The error taxonomy shared by every layer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod direction;
pub mod error;
pub mod id;

pub use direction::Direction;
pub use error::{Error, ErrorKind, Result};
pub use id::{ItemId, NpcId, RoomId};
