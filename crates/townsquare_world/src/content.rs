//! The built-in town.
//!
//! Rooms start without NPCs; [`crate::scatter`] places them when a session
//! begins.

use townsquare_foundation::{Direction, Result};

use crate::item::{Item, ItemCatalog, PlayerStat};
use crate::npc::Npc;
use crate::player::{Inventory, Player};
use crate::room::Room;
use crate::world::World;

use Direction::{Down, East, North, South, Up, West};

/// Where new players start.
pub const START_ROOM: &str = "Town Square";

/// What new players carry.
pub const STARTING_INVENTORY: [&str; 3] = ["README Note", "Sword", "Donut"];

/// The pseudo-item that becomes coins when taken.
pub const MONEY: &str = "Money";

/// The bonus item the randomizer drops alongside others.
pub const MONEYBAG: &str = "Moneybag";

/// Builds the town with a fresh player in the start room.
///
/// # Errors
///
/// Returns `InvalidWorld` if the built-in data is inconsistent.
pub fn town(player_name: impl Into<String>) -> Result<World> {
    World::new(
        items()?,
        rooms(),
        npcs(),
        Player::new(player_name, START_ROOM),
        Inventory::with_items(&STARTING_INVENTORY),
    )
}

/// The item catalog.
///
/// # Errors
///
/// Returns `InvalidWorld` if an item template is malformed.
#[allow(clippy::too_many_lines)]
pub fn items() -> Result<ItemCatalog> {
    ItemCatalog::from_items([
        Item::new(MONEY, &["money", "coin"])
            .describe(
                "A coin is lying on the ground.",
                "a coin",
                "The local currency used in the game.",
            )
            .counter(PlayerStat::Money),
        Item::new("Welcome Sign", &["welcome", "sign"])
            .describe(
                "A welcome sign stands here.",
                "a welcome sign",
                "The welcome sign reads, \"Welcome to this text adventure demo. You can type \
                 \"help\" for a list of commands to use.\"",
            )
            .fixed()
            .sells_for(0),
        Item::new("Do Not Take Sign Sign", &["sign"])
            .describe(
                "A sign stands here, not bolted to the ground.",
                "a sign",
                "The sign reads, \"Do Not Take This Sign\"",
            )
            .sells_for(100),
        Item::new("Fountain", &["fountain"])
            .describe(
                "A bubbling fountain of green water.",
                "a fountain",
                "The water in the fountain is a bright green color. Is that... gatorade?",
            )
            .fixed(),
        Item::new("Sword", &["sword", "longsword"])
            .describe(
                "A sword lies on the ground.",
                "a sword",
                "A longsword, engraved with the word, \"Used\". Has 20 DAMAGE",
            )
            .cost(20)
            .sells_for(10)
            .damage(20),
        Item::new("Great Sword", &["sword", "excaleber", "longsword"])
            .describe(
                "A great sword lies on the ground.",
                "a great sword",
                "A longsword, engraved with the word, \"Excaleber\". Has 40 DAMAGE",
            )
            .cost(100)
            .sells_for(50)
            .damage(40),
        Item::new("War Axe", &["axe", "war", "mighty"])
            .describe(
                "A mighty war axe lies on the ground.",
                "a war axe",
                "The mighty war axe is made with antimony impurities from a fallen star, \
                 rendering it surpassingly brittle. Has 50 DAMAGE",
            )
            .cost(150)
            .sells_for(75)
            .damage(50),
        Item::new(
            "Chainmail T-Shirt",
            &["chainmail", "chain", "mail", "t-shirt", "tshirt", "stupid"],
        )
        .describe(
            "A chainmail t-shirt lies wadded up on the ground.",
            "a chainmail t-shirt",
            "The chainmail t-shirt has a slogan and arrow engraved on the front: \"I'm with Stupid\"",
        )
        .cost(15)
        .sells_for(5),
        Item::new("Anvil", &["anvil"])
            .describe(
                "The blacksmith's anvil, far too heavy to pick up, rests in the corner.",
                "an anvil",
                "The black anvil has the word \"ACME\" engraved on the side.",
            )
            .fixed()
            .cost(10)
            .sells_for(5),
        Item::new("Lock Picks", &["lockpicks", "picks", "set"])
            .describe(
                "A set of lock picks lies on the ground.",
                "a set of lock picks",
                "A set of fine picks for picking locks.",
            )
            .sells_for(10),
        Item::new("Silly Glasses", &["glasses", "silly", "fake", "mustache"])
            .describe(
                "A pair of those silly gag glasses with the nose and fake mustache rest on the ground.",
                "a pair of silly fake mustache glasses",
                "These glasses have a fake nose and mustache attached to them. The perfect disguise!",
            )
            .sells_for(1),
        Item::new("Meat Pie", &["pie", "meat"])
            .describe(
                "A suspicious meat pie rests on the ground.",
                "a meat pie",
                "A meat pie. It tastes like chicken.",
            )
            .edible(30)
            .cost(3)
            .sells_for(2),
        Item::new("Continental Breakfast", &["breakfast"])
            .describe(
                "A continental breakfast rests on the ground. It looks like it was placed there suspiciously.",
                "a large breakfast",
                "A continental breakfast, includes sausages, scrambled egg, bacon, hash browns \
                 and all the trimmings.",
            )
            .edible(50)
            .cost(10)
            .sells_for(1),
        Item::new("Cheese Board", &["cheese"])
            .describe(
                "A cheese board is scattered on the ground, looks like it was thrown. Crumbs!",
                "a large mess of cheese",
                "A cheese board with all kinds of cheeses and crackers.",
            )
            .edible(20)
            .cost(5)
            .sells_for(1),
        Item::new("Bagel", &["bagel"])
            .describe(
                "A bagel rests on the ground. (Gross.)",
                "a bagel",
                "It is a donut-shaped bagel.",
            )
            .edible(10)
            .cost(2)
            .sells_for(1),
        Item::new("Donut", &["donut"])
            .describe(
                "A donut rests on the ground. (Gross.)",
                "a donut",
                "It is a bagel-shaped donut.",
            )
            .edible(10)
            .cost(2)
            .sells_for(1),
        Item::new("Cupcake", &["cupcake"])
            .describe(
                "A cupcake rests on the ground. (Gross.)",
                "a cupcake",
                "It is a cupcake shaped cupcake.",
            )
            .edible(20)
            .cost(2)
            .sells_for(1),
        Item::new("Crystal Ball", &["crystal", "ball"])
            .describe(
                "A glowing crystal ball rests on a small pillow.",
                "a crystal ball",
                "The crystal ball swirls with mystical energy, forming the words \"Answer \
                 Unclear. Check Again Later.\"",
            )
            .sells_for(10),
        Item::new("Floating Book", &["book", "floating"])
            .describe(
                "A magical book floats here.",
                "a floating book",
                "This magical tome doesn't have a lot of pictures in it. Boring!",
            )
            .sells_for(5),
        Item::new("Telescope", &["telescope"])
            .describe(
                "A telescope is bolted to the ground.",
                "a telescope",
                "Using the telescope, you can see your house from here!",
            )
            .fixed(),
        Item::new("README Note", &["readme", "note"])
            .describe(
                "A note titled \"README\" rests on the ground.",
                "a README note",
                "The README note reads, \"Welcome to the text adventure demo. Look around, \
                 talk to nobody, and hit anything that moves.\"",
            )
            .sells_for(1),
        Item::new("Shop Howto", &["howto", "note", "shop"])
            .describe(
                "A \"Shopping HOWTO\" note rests on the ground.",
                "a shopping howto",
                "The note reads, \"When you are at a shop, you can type \"list\" to show what is \
                 for sale. \"buy <item>\" will add it to your inventory, or you can value and \
                 sell an item in your inventory with \"value <item>\" and \"sell <item>\". Every \
                 item has a lower resale value than its original purchase price.\"",
            )
            .sells_for(1),
        Item::new("Gravestone", &["gravestone", "headstone"])
            .describe(
                "A new gravestone.",
                "a gravestone",
                "This is a gravestone. You can buy one now for your grave when you die.",
            )
            .cost(100)
            .sells_for(90),
        Item::new(MONEYBAG, &["moneybag", "coins"])
            .describe(
                "A money bag is lying on the ground.",
                "a bag full of money",
                "A heavy bag of the local currency.",
            )
            .cost(100)
            .sells_for(100),
    ])
}

/// Every room, including the generated hotel floors.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn rooms() -> Vec<Room> {
    let mut rooms = vec![
        Room::new(
            "Town Square",
            "The town square is a large open space with a fountain in the center. Streets lead \
             in all directions.",
        )
        .exit(North, "North Y Street")
        .exit(East, "East X Street")
        .exit(South, "South Y Street")
        .exit(West, "West X Street")
        .ground(&["Welcome Sign", "Fountain"]),
        Room::new(
            "North Y Street",
            "The northern end of Y Street has really gone down hill. Pot holes are everywhere, \
             as are stray cats, rats, and wombats.",
        )
        .exit(West, "Thief Guild")
        .exit(East, "Bakery")
        .exit(South, "Town Square")
        .exit(Down, "North Y Sewer")
        .ground(&["Do Not Take Sign Sign"]),
        Room::new(
            "Thief Guild",
            "The Thief Guild is a dark den of unprincipled types. You clutch your purse (though \
             several other people here would like to clutch your purse as well).",
        )
        .exit(South, "West X Street")
        .exit(East, "North Y Street")
        .ground(&["Lock Picks", "Silly Glasses"]),
        Room::new(
            "Bakery",
            "The delightful smell of meat pies fills the air, making you hungry. The baker \
             flashes a grin, as he slides a box marked \"Not Human Organs\" under a table with \
             his foot.",
        )
        .exit(West, "North Y Street")
        .exit(South, "East X Street")
        .shop(&["Meat Pie", "Donut", "Bagel", "Cupcake"])
        .ground(&["Shop Howto"]),
        Room::new(
            "Stone Mason",
            "The Stone Mason is where you get your gravestone when you die.",
        )
        .exit(South, "West Masons Alley")
        .shop(&["Gravestone"])
        .ground(&["Shop Howto"]),
        Room::new(
            "Hotel Entrance",
            "The only hotel for miles around. You are at the entrance. There isn't a bellboy in \
             sight.",
        )
        .exit(North, "Hotel Lobby")
        .exit(South, "East Masons Alley"),
        Room::new("Hotel Lobby", "You are in the hotel lobby. It's eerily quiet.")
            .exit(North, "Elevator 1")
            .exit(West, "Hotel Restaurant")
            .exit(East, "Hotel Reception")
            .exit(South, "Hotel Entrance"),
        Room::new("Elevator 1", "Elevator on the 1st floor.")
            .exit(South, "Hotel Lobby")
            .exit(Up, "Elevator 2")
            .exit(Down, "Elevator B1"),
        Room::new(
            "Hotel Restaurant",
            "You are in the hotel restaurant, looks like it's been closed for decades.",
        )
        .exit(East, "Hotel Lobby")
        .shop(&["Meat Pie", "Donut", "Continental Breakfast", "Cheese Board"])
        .ground(&["Shop Howto"]),
        Room::new(
            "Hotel Reception",
            "You are in the hotel reception. Strange, there isn't anyone here. There is a \
             guestbook on the desk, would you like to sign it?",
        )
        .exit(West, "Hotel Lobby")
        .with_guestbook(),
        Room::new("Elevator B1", "Elevator on the Upper Basement (B1) floor.")
            .exit(Up, "Elevator 1")
            .exit(Down, "Elevator B2"),
        Room::new("Elevator B2", "Elevator on the Lower Basement (B2) floor.")
            .exit(Up, "Elevator B1"),
        Room::new(
            "West Masons Alley",
            "The west end of Masons Alley. The stone mason's chisel rings out from the north.",
        )
        .exit(North, "Stone Mason")
        .exit(East, "East Masons Alley")
        .exit(West, "East X Street"),
        Room::new(
            "East Masons Alley",
            "The east end of Masons Alley, in the shadow of the hotel.",
        )
        .exit(North, "Hotel Entrance")
        .exit(West, "West Masons Alley"),
        Room::new(
            "West X Street",
            "West X Street is the rich section of town. So rich, they paved the streets with \
             gold. This probably was not a good idea. The thief guild opened up the next day.",
        )
        .exit(North, "Thief Guild")
        .exit(East, "Town Square")
        .exit(South, "Blacksmith")
        .exit(West, "Used Anvils Store"),
        Room::new(
            "Used Anvils Store",
            "The anvil store has anvils of all types and sizes, each previously-owned but still \
             in serviceable condition. The shopkeeper will happily sell you one, though nobody \
             has ever managed to pick one up again after putting it down.",
        )
        .exit(East, "West X Street")
        .shop(&["Anvil"])
        .ground(&["Shop Howto", "Anvil", "Anvil", "Anvil", "Anvil"]),
        Room::new(
            "East X Street",
            "East X Street. It's like X Street, except East.",
        )
        .exit(North, "Bakery")
        .exit(East, "West Masons Alley")
        .exit(West, "Town Square")
        .exit(South, "Wizard Tower"),
        Room::new(
            "Blacksmith",
            "The blacksmith loudly hammers a new sword over her anvil. Swords, axes, butter \
             knives all line the walls of her workshop, available for a price.",
        )
        .exit(North, "West X Street")
        .exit(East, "South Y Street")
        .shop(&["Sword", "Great Sword", "War Axe", "Chainmail T-Shirt"])
        .ground(&["Anvil", "Shop Howto"]),
        Room::new(
            "South Y Street",
            "The Christmas Carolers of South Y Street are famous for all legally changing their \
             name to Carol. They are also famous for singing year-round, in heavy fur coats and \
             wool mittens, even in the summer. That's dedication to their craft!",
        )
        .exit(North, "Town Square")
        .exit(West, "Blacksmith")
        .exit(Down, "South Y Sewer"),
        Room::new(
            "Wizard Tower",
            "Zany magical antics are afoot in the world-famous Wizard Tower. Cauldrons bubble, \
             rats talk, and books float midair in this center of magical discovery.",
        )
        .exit(North, "East X Street")
        .exit(Up, "Observation Deck")
        .ground(&["Crystal Ball", "Floating Book", "Floating Book"]),
        Room::new(
            "Observation Deck",
            "You can see the entire town from the top of the Wizard Tower. Everybody looks like \
             ants, especially the people transformed into ants by the wizards of the tower!",
        )
        .exit(Down, "Wizard Tower")
        .exit(Up, "Magical Escalator to Nowhere")
        .ground(&["Telescope"]),
        Room::new(
            "Magical Escalator to Nowhere",
            "No matter how much you climb the escalator, it doesn't seem to be getting you \
             anywhere.",
        )
        .exit(Up, "Magical Escalator to Nowhere")
        .exit(Down, "Observation Deck"),
        Room::new(
            "North Y Sewer",
            "The sewer in North Y Street is overrun with rats and sewage. This had better be \
             worth it.",
        )
        .exit(Up, "North Y Street")
        .exit(East, "Bakery Sewer")
        .exit(West, "Thief Guild Sewer")
        .exit(South, "Town Square Sewer"),
        Room::new("Town Square Sewer", "The sewer underneath the town square.")
            .exit(North, "North Y Sewer")
            .exit(South, "South Y Sewer"),
        Room::new(
            "South Y Sewer",
            "The sewer in South Y Street is relatively clean for a sewer. It looks like it has \
             been well looked after, and there are signs that this has been used for things \
             other than just waste.",
        )
        .exit(Up, "South Y Street")
        .exit(North, "Town Square Sewer")
        .exit(West, "Blacksmith Sewer")
        .exit(East, "Wizard Tower Sewer"),
        Room::new(
            "Bakery Sewer",
            "The sewer beneath the Bakery. Is that bread you can smell?",
        )
        .exit(East, "Stone Mason Sewer")
        .exit(West, "North Y Sewer"),
        Room::new(
            "Stone Mason Sewer",
            "The sewer beneath the Stone Mason. Shhhh, there's a ghost here.",
        )
        .exit(West, "Bakery Sewer"),
        Room::new(
            "Thief Guild Sewer",
            "The sewer beneath the Thief Guild building. Unsurprisingly there's a distinct \
             chance this area has been looted already.",
        )
        .exit(East, "North Y Sewer"),
        Room::new(
            "Blacksmith Sewer",
            "The sewer beneath the Blacksmith building. The blacksmith definitely has enough \
             iron in her diet.",
        )
        .exit(East, "South Y Sewer"),
        Room::new(
            "Wizard Tower Sewer",
            "The sewer beneath the Wizard Tower. Even this brown sludge smells magical.",
        )
        .exit(West, "South Y Sewer"),
    ];
    rooms.extend(hotel_floor(2, false));
    rooms.extend(hotel_floor(3, true));
    rooms
}

/// One upper hotel floor: elevator, laundry, ice machine, four corridor
/// sections, and eight guest rooms.
fn hotel_floor(floor: u32, top: bool) -> Vec<Room> {
    let ordinal = match floor {
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        n => format!("{n}th"),
    };
    let elevator = format!("Elevator {floor}");
    let laundry = format!("Laundry Room {floor}");
    let ice = format!("Ice Machine {floor}");
    let corridor = |section: u32| {
        let left = floor * 100 + section * 2 - 1;
        format!("Rooms {left}-{}", left + 1)
    };

    let mut lift = Room::new(elevator.clone(), format!("Elevator on the {ordinal} floor."))
        .exit(West, laundry.clone())
        .exit(East, ice.clone())
        .exit(South, corridor(1))
        .exit(Down, format!("Elevator {}", floor - 1));
    if !top {
        lift = lift.exit(Up, format!("Elevator {}", floor + 1));
    }

    let mut rooms = vec![
        lift,
        Room::new(ice, format!("Ice Machine room on the {ordinal} floor.")).exit(West, elevator.clone()),
        Room::new(laundry, format!("Laundry room on the {ordinal} floor.")).exit(East, elevator.clone()),
    ];

    for section in 1..=4 {
        let left = floor * 100 + section * 2 - 1;
        let right = left + 1;
        let here = corridor(section);
        let mut hall = Room::new(
            here.clone(),
            format!("The corridor outside rooms {left} and {right}."),
        )
        .exit(West, format!("Room {left}"))
        .exit(East, format!("Room {right}"))
        .exit(
            North,
            if section == 1 {
                elevator.clone()
            } else {
                corridor(section - 1)
            },
        );
        if section < 4 {
            hall = hall.exit(South, corridor(section + 1));
        }
        rooms.push(hall);
        rooms.push(Room::new(format!("Room {left}"), format!("Room {left}.")).exit(East, here.clone()));
        rooms.push(Room::new(format!("Room {right}"), format!("Room {right}.")).exit(West, here));
    }
    rooms
}

/// Every NPC, unplaced.
#[must_use]
pub fn npcs() -> Vec<Npc> {
    const ARMOURY: &[&str] = &["Sword", "Great Sword", "War Axe"];
    vec![
        Npc::new("Dave", 100, &["dave"])
            .rewards(2, 1)
            .money(40)
            .carrying(&["Meat Pie", "Donut", "Sword"]),
        Npc::new("Steve", 100, &["steve"])
            .rewards(2, 2)
            .money(100)
            .carrying(&[
                "Meat Pie", "Meat Pie", "Meat Pie", "Meat Pie", "Donut", "Donut", "Donut",
                "Donut", "Donut", "Sword",
            ]),
        Npc::new("Fred", 100, &["fred"])
            .rewards(3, 3)
            .money(100)
            .carrying(&["Sword"]),
        Npc::new("Ghost of Christmas Present", 150, &["ghost", "gocp"])
            .rewards(5, 10)
            .money(1000)
            .carrying(&[
                "Meat Pie", "Meat Pie", "Meat Pie", "Meat Pie", "Meat Pie", "Meat Pie",
                "Meat Pie", "Meat Pie", "Meat Pie", "Meat Pie", "War Axe",
            ]),
        Npc::new("Sam", 100, &["sam"])
            .rewards(20, 10)
            .money(40)
            .carrying(&["Sword"]),
        Npc::new("Dean", 100, &["dean"])
            .rewards(20, 10)
            .money(40)
            .carrying(&["Meat Pie", "Donut", "Sword"]),
        Npc::new("Castiel", 300, &["castiel"])
            .rewards(200, 30)
            .carrying(ARMOURY),
        Npc::new("Gabriel", 300, &["gabriel"])
            .rewards(200, 30)
            .carrying(ARMOURY),
        Npc::new("Zachariah", 300, &["zachariah"])
            .rewards(200, 50)
            .money(100)
            .carrying(ARMOURY),
        Npc::new("Anna", 300, &["anna"])
            .rewards(300, 30)
            .money(100)
            .carrying(ARMOURY),
        Npc::new("Michael", 500, &["michael"])
            .rewards(200, 50)
            .carrying(ARMOURY),
        Npc::new("Lucifer", 500, &["lucifer"])
            .rewards(200, 50)
            .carrying(ARMOURY),
        Npc::new("Bobby", 70, &["bobby"])
            .rewards(20, 10)
            .money(400)
            .carrying(&["Meat Pie", "Donut", "Sword"]),
        Npc::new("Ruby", 200, &["ruby"])
            .rewards(200, 20)
            .carrying(&["Great Sword"]),
        Npc::new("Meg", 200, &["meg"])
            .rewards(200, 20)
            .money(100)
            .carrying(&["Great Sword"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use townsquare_foundation::RoomId;

    #[test]
    fn town_validates() {
        let world = town("Tester").unwrap();
        assert_eq!(world.player().location, RoomId::new(START_ROOM));
        assert_eq!(world.inventory().len(), 3);
        assert_eq!(world.npcs().count(), 15);
    }

    #[test]
    fn hotel_floors_are_connected() {
        let world = town("Tester").unwrap();
        let corridor = world.room(&RoomId::new("Rooms 305-306")).unwrap();
        assert_eq!(corridor.exit_to(West), Some(&RoomId::new("Room 305")));
        assert_eq!(corridor.exit_to(North), Some(&RoomId::new("Rooms 303-304")));
        let top = world.room(&RoomId::new("Elevator 3")).unwrap();
        assert_eq!(top.exit_to(Up), None);
        assert_eq!(top.exit_to(Down), Some(&RoomId::new("Elevator 2")));
    }

    #[test]
    fn every_exit_has_a_way_back() {
        let world = town("Tester").unwrap();
        for room in world.rooms() {
            for (direction, target) in &room.exits {
                if *target == room.id {
                    continue;
                }
                let back = world.room(target).unwrap();
                assert!(
                    back.exits.values().any(|r| *r == room.id),
                    "{} -> {direction} -> {target} has no return",
                    room.id
                );
            }
        }
    }

    #[test]
    fn no_npcs_placed_before_scatter() {
        let world = town("Tester").unwrap();
        assert!(world.rooms().all(|room| room.npcs.is_empty()));
        assert_eq!(world.census().total(), 0);
    }

    #[test]
    fn every_shop_item_resells_below_cost() {
        let world = town("Tester").unwrap();
        for room in world.rooms() {
            for id in room.shop.iter().flatten() {
                let item = world.items().get(id.as_str()).unwrap();
                let cost = item.cost.unwrap();
                assert!(item.sell.unwrap_or(0) < cost, "{id}");
            }
        }
    }
}
