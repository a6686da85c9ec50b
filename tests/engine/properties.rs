//! Property tests for handler invariants

use proptest::prelude::*;
use townsquare_engine::Game;
use townsquare_foundation::{NpcId, RoomId};
use townsquare_world::{Inventory, content};

fn shop_game(room: &str, money: u64, seed: u64) -> Game {
    let mut world = content::town("Tester").unwrap();
    world.relocate_player(RoomId::new(room)).unwrap();
    world.player_mut().money = money;
    Game::new(world, seed)
}

const SHOPS: &[&str] = &["Bakery", "Blacksmith", "Hotel Restaurant", "Used Anvils Store"];

proptest! {
    #[test]
    fn buy_then_sell_never_profits(
        shop in prop::sample::select(SHOPS),
        money in 0u64..500,
        pick in any::<prop::sample::Index>(),
    ) {
        let mut game = shop_game(shop, money, 1);
        let wares: Vec<_> = game
            .world()
            .current_room()
            .unwrap()
            .shop
            .clone()
            .unwrap_or_default();
        let ware = pick.get(&wares).clone();
        let keyword = game.world().items().get(ware.as_str()).unwrap().primary_keyword().to_string();

        if game.buy(&keyword).is_ok() {
            let _ = game.sell(&keyword);
        }
        prop_assert!(game.world().player().money <= money);
    }

    #[test]
    fn fixed_items_are_never_taken(seed in any::<u64>()) {
        let mut game = Game::new(content::town("Tester").unwrap(), seed);
        game.scatter().unwrap();
        let fixed: Vec<_> = game
            .world()
            .current_room()
            .unwrap()
            .ground
            .iter()
            .filter_map(|id| game.world().items().get(id.as_str()))
            .filter(|item| !item.takeable)
            .map(|item| item.id.clone())
            .collect();
        for id in fixed {
            let keyword = game.world().items().get(id.as_str()).unwrap().primary_keyword().to_string();
            if let Ok(taken) = game.take(&keyword) {
                prop_assert!(game.world().items().get(taken.item.as_str()).unwrap().takeable);
            }
            prop_assert!(!game.world().inventory().contains(id.as_str()));
        }
    }

    #[test]
    fn hits_clamp_to_remaining_health(health in 1i64..120, seed in any::<u64>()) {
        let mut world = content::town("Tester").unwrap();
        let mut snapshot = world.snapshot();
        snapshot
            .rooms
            .get_mut(&RoomId::new(content::START_ROOM))
            .unwrap()
            .npcs
            .push(NpcId::new("Bobby"));
        snapshot.npcs.get_mut(&NpcId::new("Bobby")).unwrap().health = health;
        snapshot.inventory = Inventory::with_items(&["War Axe"]);
        world.restore(snapshot).unwrap();
        let mut game = Game::new(world, seed).with_invulnerability(true);

        let strike = game.hit("bobby").unwrap();
        let bobby = game.world().npc(&NpcId::new("Bobby")).unwrap();
        prop_assert!(strike.damage <= u64::try_from(health).unwrap());
        prop_assert_eq!(bobby.health, health - i64::try_from(strike.damage).unwrap());
        prop_assert!(bobby.health >= 0);
        prop_assert_eq!(strike.killed(), bobby.health == 0);
        prop_assert_eq!(game.world().player().health, 100);
    }

    #[test]
    fn eating_adds_exactly_the_gain(extra in 0usize..4) {
        let mut world = content::town("Tester").unwrap();
        for _ in 0..extra {
            world.inventory_mut().add("Donut".into());
        }
        let gain = world.items().get("Donut").unwrap().gain.unwrap();
        let before_count = world.inventory().count("Donut");
        let mut game = Game::new(world, 0);

        let meal = game.eat("donut").unwrap();
        prop_assert_eq!(meal.gain, gain);
        prop_assert_eq!(game.world().player().health, 100 + gain);
        prop_assert_eq!(game.world().inventory().count("Donut"), before_count - 1);
    }

    #[test]
    fn drop_always_succeeds_for_carried_items(index in any::<prop::sample::Index>()) {
        let mut game = Game::new(content::town("Tester").unwrap(), 0);
        let carried: Vec<_> = game.world().inventory().iter().cloned().collect();
        let id = index.get(&carried).clone();
        let keyword = game.world().items().get(id.as_str()).unwrap().primary_keyword().to_string();

        let dropped = game.drop_item(&keyword).unwrap();
        prop_assert!(game.world().current_room().unwrap().ground.contains(&dropped.item));
    }
}
