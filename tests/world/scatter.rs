//! Integration tests for the world randomizer

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use townsquare_world::{content, scatter};

fn scattered(seed: u64) -> (townsquare_world::World, townsquare_world::Placement) {
    let mut world = content::town("Tester").unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let placement = scatter(&mut world, &mut rng).unwrap();
    (world, placement)
}

#[test]
fn same_seed_same_town() {
    let (a, pa) = scattered(99);
    let (b, pb) = scattered(99);
    assert_eq!(pa, pb);
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn scatter_places_npcs_alive() {
    let (world, placement) = scattered(5);
    assert!(!placement.npcs.is_empty());
    let census = world.census();
    assert_eq!(census.dead, 0);
    assert_eq!(census.alive, placement.npcs.len());
    assert!(!census.all_defeated());
}

proptest! {
    #[test]
    fn scattered_world_stays_valid(seed in any::<u64>()) {
        let (world, placement) = scattered(seed);
        prop_assert!(world.validate().is_ok());
        prop_assert!(placement.items.len() >= content::rooms().len().min(10));
        for (room, npc) in &placement.npcs {
            prop_assert!(world.room(room).unwrap().has_npc(npc));
        }
    }

    #[test]
    fn each_npc_lands_in_at_most_one_room(seed in any::<u64>()) {
        let (world, _) = scattered(seed);
        for npc in world.npcs() {
            let homes = world.rooms().filter(|r| r.has_npc(&npc.id)).count();
            prop_assert!(homes <= 1, "{} is in {homes} rooms", npc.id);
        }
    }
}
