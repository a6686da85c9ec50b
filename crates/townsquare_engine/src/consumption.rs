//! Eating.

use townsquare_foundation::{Error, ErrorKind, Result};
use tracing::debug;

use crate::game::Game;
use crate::report::Meal;

impl Game {
    /// Eats one carried edible item matching `fragment`. Health is not
    /// capped.
    ///
    /// # Errors
    ///
    /// - `MissingArgument` for an empty fragment.
    /// - `NotEdible` if every carried match is inedible.
    /// - `NotCarried` if nothing carried matches.
    pub fn eat(&mut self, fragment: &str) -> Result<Meal> {
        let fragment = fragment.trim().to_lowercase();
        if fragment.is_empty() {
            return Err(Error::missing_argument(
                "Eat",
                "Type \"inventory\" or \"inv\" to see your inventory.",
            ));
        }

        let matches = self
            .world
            .lexicon()
            .all_matches(&fragment, self.world.inventory());
        let Some(item) = matches.iter().find(|item| item.edible) else {
            return Err(if matches.is_empty() {
                Error::not_carried(fragment)
            } else {
                Error::new(ErrorKind::NotEdible(fragment))
            });
        };
        let id = item.id.clone();
        let short_desc = item.short_desc.clone();
        let gain = item.gain.unwrap_or(0);

        self.world.inventory_mut().remove_one(&id);
        let player = self.world.player_mut();
        player.health += gain;
        let health = player.health;
        debug!(item = %id, gain, health, "item eaten");

        Ok(Meal {
            item: id,
            short_desc,
            gain,
            health,
        })
    }
}
