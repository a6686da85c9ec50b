//! Integration tests for referential integrity of the built-in town

use townsquare_foundation::Direction;
use townsquare_world::content;

// =============================================================================
// Rooms
// =============================================================================

#[test]
fn every_exit_names_an_existing_room() {
    let world = content::town("Tester").unwrap();
    for room in world.rooms() {
        for (direction, target) in &room.exits {
            assert!(
                world.room(target).is_ok(),
                "{} {direction} leads to missing {target}",
                room.id
            );
        }
    }
}

#[test]
fn town_square_has_four_streets() {
    let world = content::town("Tester").unwrap();
    let square = world.current_room().unwrap();
    assert_eq!(square.id.as_str(), "Town Square");
    for direction in [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ] {
        assert!(square.exit_to(direction).is_some(), "{direction}");
    }
}

#[test]
fn every_room_is_reachable_from_the_square() {
    let world = content::town("Tester").unwrap();
    let mut seen = std::collections::BTreeSet::new();
    let mut frontier = vec![world.player().location.clone()];
    while let Some(id) = frontier.pop() {
        if !seen.insert(id.clone()) {
            continue;
        }
        frontier.extend(world.room(&id).unwrap().exits.values().cloned());
    }
    assert_eq!(seen.len(), world.rooms().count());
}

// =============================================================================
// Items
// =============================================================================

#[test]
fn every_ground_and_shop_item_is_cataloged() {
    let world = content::town("Tester").unwrap();
    for room in world.rooms() {
        for id in room.ground.iter().chain(room.shop.iter().flatten()) {
            assert!(world.items().contains(id.as_str()), "{id} in {}", room.id);
        }
    }
}

#[test]
fn shops_never_buy_back_at_cost() {
    let world = content::town("Tester").unwrap();
    for room in world.rooms().filter(|r| r.is_shop()) {
        for id in room.shop.iter().flatten() {
            let item = world.items().get(id.as_str()).unwrap();
            let cost = item.cost.unwrap();
            if item.sellable {
                assert!(item.sell.unwrap_or(0) < cost, "{id} resells at or above cost");
            }
        }
    }
}

#[test]
fn weapons_have_expected_damage() {
    let world = content::town("Tester").unwrap();
    let damage = |name: &str| world.items().get(name).unwrap().damage;
    assert_eq!(damage("Sword"), Some(20));
    assert_eq!(damage("Great Sword"), Some(40));
    assert_eq!(damage("War Axe"), Some(50));
    assert_eq!(damage("Donut"), None);
}

#[test]
fn starting_player() {
    let world = content::town("Tester").unwrap();
    let player = world.player();
    assert_eq!(player.health, 100);
    assert_eq!(player.money, 10);
    for item in content::STARTING_INVENTORY {
        assert!(world.inventory().contains(item));
    }
}
