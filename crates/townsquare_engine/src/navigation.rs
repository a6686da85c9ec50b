//! Moving between rooms.

use townsquare_foundation::{Direction, Error, ErrorKind, Result};
use tracing::debug;

use crate::game::Game;
use crate::report::Moved;

impl Game {
    /// Walks through an exit.
    ///
    /// Every attempt by a player able to move costs one health point unless
    /// invulnerable, including attempts that hit a wall.
    ///
    /// # Errors
    ///
    /// - `Incapacitated` if health is below 1; nothing changes.
    /// - `NoSuchExit` if the room has no exit that way; the cost is still paid.
    pub fn go(&mut self, direction: Direction) -> Result<Moved> {
        if self.world.player().is_incapacitated() {
            return Err(Error::new(ErrorKind::Incapacitated));
        }

        let from = self.world.player().location.clone();
        let target = self.world.current_room()?.exit_to(direction).cloned();
        self.charge_action();

        let Some(to) = target else {
            debug!(room = %from, %direction, "no exit");
            return Err(Error::new(ErrorKind::NoSuchExit(direction)));
        };

        self.world.relocate_player(to.clone())?;
        debug!(%from, %to, health = self.world.player().health, "player moved");
        Ok(Moved { direction, from, to })
    }
}
