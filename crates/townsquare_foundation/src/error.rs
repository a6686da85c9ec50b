//! Error types for the Townsquare system.
//!
//! Uses `thiserror` for ergonomic error definition. The `Display` text of a
//! gameplay error is the line shown to the player; system errors carry a
//! technical description instead.

use thiserror::Error;

use crate::direction::Direction;
use crate::id::{ItemId, NpcId, RoomId};

/// Result type alias using the Townsquare [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Townsquare operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a "target not present" error.
    #[must_use]
    pub fn not_present(target: impl Into<String>) -> Self {
        Self::new(ErrorKind::TargetNotPresent(target.into()))
    }

    /// Creates a "not carried" error.
    #[must_use]
    pub fn not_carried(fragment: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotCarried(fragment.into()))
    }

    /// Creates an error for a command that needs an argument.
    #[must_use]
    pub fn missing_argument(verb: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingArgument {
            verb: verb.into(),
            hint: hint.into(),
        })
    }

    /// Creates an invalid world error.
    #[must_use]
    pub fn invalid_world(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidWorld(reason.into()))
    }

    /// Returns true for gameplay refusals that are reported to the player
    /// and leave the session running normally.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        self.kind.is_user_facing()
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The player's health is at or below zero.
    #[error("You don't have enough health to do that. You should probably eat something.")]
    Incapacitated,

    /// The current room has no exit that way.
    #[error("You cannot move {0}.")]
    NoSuchExit(Direction),

    /// The named NPC is not in the current room.
    #[error("{0} isn't nearby.")]
    TargetNotPresent(String),

    /// The NPC has already been killed.
    #[error("You can't fight a dead person. {0} is already dead.")]
    TargetAlreadyDead(String),

    /// Looting was attempted on a living NPC.
    #[error("Cannot loot as {0} is not dead!")]
    TargetNotDead(String),

    /// The player carries no weapon.
    #[error("You have nothing to hit {0} with.")]
    Unarmed(String),

    /// Nothing in the inventory matches.
    #[error("You do not have \"{0}\" in your inventory.")]
    NotCarried(String),

    /// The current room is not a shop.
    #[error("This is not a shop.")]
    NotAShop,

    /// The shop does not sell anything matching.
    #[error("\"{0}\" is not sold here. Type \"list\" or \"list full\" to see the items for sale.")]
    NotSold(String),

    /// The player cannot afford the item.
    #[error("You do not have enough money to buy {item} ({cost} coins, you have {available}).")]
    InsufficientFunds {
        /// Short description of the item.
        item: String,
        /// Price of the item.
        cost: u64,
        /// Money the player holds.
        available: u64,
    },

    /// The item cannot be sold.
    #[error("{0} is not sellable.")]
    NotSellable(String),

    /// Every matching item is inedible.
    #[error("You cannot eat \"{0}\".")]
    NotEdible(String),

    /// The input did not parse as a command.
    #[error("I do not understand \"{0}\". Type \"help\" for a list of commands.")]
    UnknownCommand(String),

    /// Every matching ground item is fixed in place.
    #[error("You cannot take \"{0}\".")]
    NotTakeable(String),

    /// Nothing on the ground matches.
    #[error("\"{0}\" is not on the ground.")]
    NotOnGround(String),

    /// Nothing nearby matches a look target.
    #[error("You do not see \"{0}\" nearby.")]
    NotVisible(String),

    /// A command was given without its required argument.
    #[error("{verb} what? {hint}")]
    MissingArgument {
        /// The verb, capitalised for display.
        verb: String,
        /// A pointer to the command that lists candidates.
        hint: String,
    },

    /// The current room has no guestbook.
    #[error("You can't do that here.")]
    NoGuestbook,

    /// A room identifier is not in the registry.
    #[error("unknown room: {0}")]
    UnknownRoom(RoomId),

    /// An item identifier is not in the catalog.
    #[error("unknown item: {0}")]
    UnknownItem(ItemId),

    /// An NPC identifier is not in the registry.
    #[error("unknown npc: {0}")]
    UnknownNpc(NpcId),

    /// World data failed validation.
    #[error("invalid world: {0}")]
    InvalidWorld(String),

    /// Snapshot encoding or decoding failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// A file operation failed.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ErrorKind {
    /// Returns true for gameplay refusals.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        !matches!(
            self,
            Self::UnknownRoom(_)
                | Self::UnknownItem(_)
                | Self::UnknownNpc(_)
                | Self::InvalidWorld(_)
                | Self::SerializationError(_)
                | Self::IoError(_)
                | Self::Internal(_)
        )
    }
}
