//! Session configuration and player identity.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use townsquare_engine::{ExitStyle, Game};
use townsquare_foundation::{ItemId, Result, RoomId};
use townsquare_world::{Inventory, Player, World, content};

/// Environment variable naming the save directory.
pub const SAVE_DIR_ENV: &str = "TOWNSQUARE_SAVE_DIR";

/// Save directory used when nothing else is configured.
pub const DEFAULT_SAVE_DIR: &str = "saves";

/// Who is playing, as handed over by the host system at startup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Display name. Also keys the player's saves.
    pub name: String,
    /// Session or node identifier.
    pub node: String,
    /// Originating address.
    pub address: String,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            name: "Unknown User".to_string(),
            node: "0".to_string(),
            address: "127.0.0.1".to_string(),
        }
    }
}

impl Identity {
    /// Creates an identity.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        node: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            node: node.into(),
            address: address.into(),
        }
    }

    /// Builds an identity from positional arguments: name, node, address.
    ///
    /// Anything other than exactly three arguments yields the default
    /// identity; partial triples are not mixed with defaults.
    #[must_use]
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        match args {
            [name, node, address] => Self::new(name.as_ref(), node.as_ref(), address.as_ref()),
            _ => Self::default(),
        }
    }
}

/// Settings for a new session.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Whether invulnerability is on from the first command.
    pub invulnerable: bool,
    /// Initial exit listing style.
    pub exit_style: ExitStyle,
    /// RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Directory holding saves and the guestbook.
    pub save_dir: PathBuf,
    /// How often the status clock ticks.
    pub tick_interval: Duration,
    /// Where the player starts.
    pub start_room: RoomId,
    /// What the player starts with.
    pub starting_inventory: Vec<ItemId>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            invulnerable: false,
            exit_style: ExitStyle::Full,
            seed: None,
            save_dir: PathBuf::from(DEFAULT_SAVE_DIR),
            tick_interval: Duration::from_secs(1),
            start_room: RoomId::new(content::START_ROOM),
            starting_inventory: content::STARTING_INVENTORY
                .iter()
                .map(ItemId::new)
                .collect(),
        }
    }
}

impl GameConfig {
    /// Builder method to start invulnerable.
    #[must_use]
    pub fn with_invulnerable(mut self, invulnerable: bool) -> Self {
        self.invulnerable = invulnerable;
        self
    }

    /// Builder method to set the exit listing style.
    #[must_use]
    pub fn with_exit_style(mut self, style: ExitStyle) -> Self {
        self.exit_style = style;
        self
    }

    /// Builder method to fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method to set the save directory.
    #[must_use]
    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = dir.into();
        self
    }

    /// Builder method to set the clock interval.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Builder method to set the start room.
    #[must_use]
    pub fn with_start_room(mut self, room: impl Into<RoomId>) -> Self {
        self.start_room = room.into();
        self
    }

    /// Builder method to set the starting inventory.
    #[must_use]
    pub fn with_starting_inventory(mut self, items: &[&str]) -> Self {
        self.starting_inventory = items.iter().map(ItemId::new).collect();
        self
    }

    /// Builds the town for `identity`, before any scattering.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWorld` if the start room or a starting item is
    /// unknown.
    pub fn build_world(&self, identity: &Identity) -> Result<World> {
        let mut player = Player::new(identity.name.clone(), self.start_room.clone());
        player.node.clone_from(&identity.node);
        player.address.clone_from(&identity.address);

        let mut inventory = Inventory::new();
        inventory.extend(self.starting_inventory.iter().cloned());

        World::new(
            content::items()?,
            content::rooms(),
            content::npcs(),
            player,
            inventory,
        )
    }

    /// Builds the game for `identity`, before any scattering.
    ///
    /// # Errors
    ///
    /// See [`GameConfig::build_world`].
    pub fn build_game(&self, identity: &Identity) -> Result<Game> {
        let world = self.build_world(identity)?;
        let game = match self.seed {
            Some(seed) => Game::new(world, seed),
            None => Game::from_entropy(world),
        };
        Ok(game.with_invulnerability(self.invulnerable))
    }
}
