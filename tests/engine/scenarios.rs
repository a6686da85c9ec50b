//! Integration tests for whole-town scenarios

use townsquare_engine::{ExitStyle, Game, render};
use townsquare_foundation::{Direction, ErrorKind, NpcId, RoomId};
use townsquare_world::{Inventory, content};

// =============================================================================
// Helper Functions
// =============================================================================

fn town() -> Game {
    Game::new(content::town("Tester").unwrap(), 17)
}

/// The town with one NPC moved into the square and its health overridden.
fn town_with(npc: &str, health: i64, inventory: &[&str]) -> Game {
    seeded_town_with(npc, health, inventory, 17)
}

fn seeded_town_with(npc: &str, health: i64, inventory: &[&str], seed: u64) -> Game {
    let mut world = content::town("Tester").unwrap();
    let mut snapshot = world.snapshot();
    snapshot
        .rooms
        .get_mut(&RoomId::new(content::START_ROOM))
        .unwrap()
        .npcs
        .push(NpcId::new(npc));
    snapshot.npcs.get_mut(&NpcId::new(npc)).unwrap().health = health;
    snapshot.inventory = Inventory::with_items(inventory);
    world.restore(snapshot).unwrap();
    Game::new(world, seed)
}

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn north_from_town_square() {
    let mut game = town();
    let moved = game.go(Direction::North).unwrap();
    assert_eq!(moved.to, RoomId::new("North Y Street"));
    assert_eq!(game.world().player().location, RoomId::new("North Y Street"));
    assert_eq!(game.world().player().health, 99);
}

#[test]
fn invulnerable_walk_is_free() {
    let mut game = town().with_invulnerability(true);
    for direction in [Direction::North, Direction::East, Direction::South] {
        game.go(direction).unwrap();
    }
    assert_eq!(game.world().player().location, RoomId::new("East X Street"));
    assert_eq!(game.world().player().health, 100);
}

#[test]
fn walking_into_a_wall() {
    let mut game = town();
    let err = game.go(Direction::Up).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NoSuchExit(Direction::Up));
    assert_eq!(game.world().player().location, RoomId::new("Town Square"));
}

#[test]
fn exhausted_player_cannot_move() {
    let mut game = town();
    game.world_mut().player_mut().health = 0;
    let err = game.go(Direction::North).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Incapacitated);
    assert_eq!(game.world().player().health, 0);
}

// =============================================================================
// Commerce
// =============================================================================

#[test]
fn gravestone_is_too_expensive() {
    let mut game = town();
    game.go(Direction::East).unwrap();
    game.go(Direction::East).unwrap();
    game.go(Direction::North).unwrap();
    assert_eq!(game.world().player().location, RoomId::new("Stone Mason"));

    let err = game.buy("gravestone").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::InsufficientFunds {
            cost: 100,
            available: 10,
            ..
        }
    ));
    assert_eq!(game.world().player().money, 10);
    assert!(!game.world().inventory().contains("Gravestone"));
}

#[test]
fn bakery_trade() {
    let mut game = town();
    game.go(Direction::North).unwrap();
    game.go(Direction::East).unwrap();

    let listing = game.list(false).unwrap();
    assert!(listing.entries.iter().any(|(id, _)| id.as_str() == "Cupcake"));

    let before = game.world().player().money;
    let purchase = game.buy("cupcake").unwrap();
    assert_eq!(purchase.remaining, before - purchase.cost);
    let sale = game.sell("cupcake").unwrap();
    assert!(sale.price < purchase.cost);
    assert!(game.world().player().money < before);
}

#[test]
fn a_bought_anvil_stays_where_it_is_dropped() {
    let mut game = town();
    game.go(Direction::West).unwrap();
    game.go(Direction::West).unwrap();
    assert_eq!(game.world().player().location, RoomId::new("Used Anvils Store"));

    game.buy("anvil").unwrap();
    assert_eq!(game.world().player().money, 0);
    game.drop_item("anvil").unwrap();
    let err = game.take("anvil").unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotTakeable("anvil".to_string()));
    assert!(!game.world().inventory().contains("Anvil"));
}

#[test]
fn outside_a_shop() {
    let mut game = town();
    assert_eq!(game.buy("donut").unwrap_err().kind, ErrorKind::NotAShop);
    assert_eq!(game.list(true).unwrap_err().kind, ErrorKind::NotAShop);
}

// =============================================================================
// Combat
// =============================================================================

#[test]
fn one_health_npc_dies_to_any_roll() {
    for seed in 0..20 {
        let mut game = seeded_town_with("Dave", 1, &["Great Sword"], seed);
        let strike = game.hit("dave").unwrap();
        assert!(strike.damage <= 1);
        let dave = game.world().npc(&NpcId::new("Dave")).unwrap();
        if strike.damage == 1 {
            assert_eq!(dave.health, 0);
            assert!(strike.killed());
            assert_eq!(game.world().player().experience, 1 + 2);
            assert_eq!(game.world().player().hit_points, 10 + 1);
            assert_eq!((dave.experience, dave.hit_points), (0, 0));
        } else {
            assert_eq!(dave.health, 1);
        }
    }
}

#[test]
fn unarmed_player_cannot_fight() {
    let mut game = town_with("Dave", 100, &["Donut"]);
    let err = game.hit("dave").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Unarmed(_)));
    assert_eq!(game.world().npc(&NpcId::new("Dave")).unwrap().health, 100);
}

#[test]
fn cannot_hit_who_is_not_here() {
    let mut game = town();
    let err = game.hit("lucifer").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TargetNotPresent(_)));
}

// =============================================================================
// Loot
// =============================================================================

#[test]
fn looting_the_living_fails() {
    let mut game = town_with("Dave", 100, &["Sword"]);
    let before = game.world().snapshot();
    let err = game.loot("dave").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TargetNotDead(_)));
    assert_eq!(game.world().snapshot(), before);
}

#[test]
fn looting_a_corpse_moves_everything() {
    let mut game = town_with("Dave", 0, &["Sword"]);
    let looted = game.loot("dave").unwrap();
    assert_eq!(looted.money, 40);
    assert_eq!(looted.items.len(), 3);
    assert_eq!(game.world().player().money, 50);
    assert!(game.world().inventory().contains("Meat Pie"));

    let dave = game.world().npc(&NpcId::new("Dave")).unwrap();
    assert_eq!(dave.money, 0);
    assert!(dave.inventory.is_empty());
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn square_renders_with_exits() {
    let game = town();
    let text = render::room(
        game.world(),
        &RoomId::new("Town Square"),
        ExitStyle::Full,
    )
    .unwrap();
    assert!(text.starts_with("Town Square\n==========="));
    assert!(text.contains("North: North Y Street"));
}

#[test]
fn census_before_and_after() {
    let mut game = town_with("Dave", 0, &["Sword"]);
    let census = game.census();
    assert_eq!((census.alive, census.dead), (0, 1));
    assert!(census.all_defeated());

    game.scatter().unwrap();
    assert!(!game.census().all_defeated());
}
