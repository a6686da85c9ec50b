//! Alive/dead tallies over the NPCs placed in rooms.

use crate::npc::Npc;

/// Counts of living and dead NPCs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NpcCensus {
    /// NPCs with positive health.
    pub alive: usize,
    /// NPCs at or below zero health.
    pub dead: usize,
}

impl NpcCensus {
    pub(crate) fn record(&mut self, npc: &Npc) {
        if npc.is_alive() {
            self.alive += 1;
        } else {
            self.dead += 1;
        }
    }

    /// Total NPCs counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.alive + self.dead
    }

    /// True once every placed NPC is dead.
    ///
    /// A world with no placed NPCs has nothing to defeat and reports false.
    #[must_use]
    pub fn all_defeated(&self) -> bool {
        self.alive == 0 && self.dead > 0
    }
}
