//! Integration tests for snapshot capture and restore

use townsquare_foundation::{ErrorKind, ItemId, NpcId, RoomId};
use townsquare_world::{Inventory, content};

#[test]
fn restore_replaces_mutable_state() {
    let mut world = content::town("Tester").unwrap();
    let saved = world.snapshot();

    world.player_mut().money = 500;
    world.inventory_mut().add(ItemId::new("Bagel"));
    world.relocate_player(RoomId::new("Bakery")).unwrap();

    world.restore(saved.clone()).unwrap();
    assert_eq!(world.snapshot(), saved);
    assert_eq!(world.player().money, 10);
}

#[test]
fn restore_rejects_unknown_items() {
    let mut world = content::town("Tester").unwrap();
    let before = world.snapshot();
    let mut bad = world.snapshot();
    bad.inventory = Inventory::with_items(&["Holy Grail"]);

    let err = world.restore(bad).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidWorld(_)));
    assert_eq!(world.snapshot(), before);
}

#[test]
fn restore_rejects_unknown_location() {
    let mut world = content::town("Tester").unwrap();
    let mut bad = world.snapshot();
    bad.player.location = RoomId::new("Atlantis");
    assert!(world.restore(bad).is_err());
}

#[test]
fn restore_rejects_npc_in_two_rooms() {
    let mut world = content::town("Tester").unwrap();
    let mut bad = world.snapshot();
    for name in ["Town Square", "Bakery"] {
        bad.rooms
            .get_mut(&RoomId::new(name))
            .unwrap()
            .npcs
            .push(NpcId::new("Dave"));
    }
    assert!(world.restore(bad).is_err());
}
