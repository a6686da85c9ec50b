//! The game context.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use townsquare_foundation::Result;
use townsquare_world::{Placement, World, scatter};
use tracing::debug;

/// Everything a command handler touches: the world, the dice, and whether
/// the player is currently invulnerable.
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) world: World,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) invulnerable: bool,
}

impl Game {
    /// Creates a game with a deterministic RNG.
    #[must_use]
    pub fn new(world: World, seed: u64) -> Self {
        Self {
            world,
            rng: ChaCha8Rng::seed_from_u64(seed),
            invulnerable: false,
        }
    }

    /// Creates a game with an OS-seeded RNG.
    #[must_use]
    pub fn from_entropy(world: World) -> Self {
        Self {
            world,
            rng: ChaCha8Rng::from_entropy(),
            invulnerable: false,
        }
    }

    /// Sets invulnerability at construction.
    #[must_use]
    pub fn with_invulnerability(mut self, enabled: bool) -> Self {
        self.invulnerable = enabled;
        self
    }

    /// The world.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The world, mutably. Used to restore saved state.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Whether per-action health costs and retaliation are suppressed.
    #[must_use]
    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable
    }

    /// Turns invulnerability on or off.
    pub fn set_invulnerable(&mut self, enabled: bool) {
        debug!(enabled, "invulnerability changed");
        self.invulnerable = enabled;
    }

    /// Flips invulnerability and returns the new state.
    pub fn toggle_invulnerable(&mut self) -> bool {
        self.set_invulnerable(!self.invulnerable);
        self.invulnerable
    }

    /// Scatters items and NPCs across the world using the game's RNG.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`scatter`].
    pub fn scatter(&mut self) -> Result<Placement> {
        scatter(&mut self.world, &mut self.rng)
    }

    /// Charges the one-point health cost of moving or fighting.
    pub(crate) fn charge_action(&mut self) {
        if !self.invulnerable {
            self.world.player_mut().health -= 1;
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_state() {
        let mut game = fixtures::game();
        assert!(!game.is_invulnerable());
        assert!(game.toggle_invulnerable());
        assert!(!game.toggle_invulnerable());
    }

    #[test]
    fn action_cost_respects_invulnerability() {
        let mut game = fixtures::game();
        game.charge_action();
        assert_eq!(game.world().player().health, 99);
        game.set_invulnerable(true);
        game.charge_action();
        assert_eq!(game.world().player().health, 99);
    }
}
