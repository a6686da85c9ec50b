//! Parsed commands.

use townsquare_foundation::Direction;

/// What `godmode` was asked to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GodModeSwitch {
    /// Bare `godmode`: flip it.
    Toggle,
    /// Report without changing. Unrecognised arguments land here too.
    Status,
    /// Turn it on.
    Enable,
    /// Turn it off.
    Disable,
}

/// One line of player input, parsed.
///
/// Item and NPC arguments are the lowercased remainder of the line; an
/// empty string means none was given and the handler decides how to react.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// A blank line.
    Empty,
    /// Walk through an exit.
    Go(Direction),
    /// Look at the room, an exit, an item, or an NPC.
    Look(String),
    /// Pick up a ground item.
    Take(String),
    /// Drop a carried item.
    Drop(String),
    /// Show the inventory.
    Inventory,
    /// Show the player record.
    Stats,
    /// Attack an NPC.
    Hit(String),
    /// Empty a corpse.
    Loot(String),
    /// List a shop's wares, with long descriptions when `full`.
    List {
        /// Whether `list full` was asked for.
        full: bool,
    },
    /// Buy a ware.
    Buy(String),
    /// Sell a carried item.
    Sell(String),
    /// Ask what a carried item is worth.
    Value(String),
    /// Eat a carried item.
    Eat(String),
    /// Query or change invulnerability.
    GodMode(GodModeSwitch),
    /// Toggle full or brief exit listings.
    Exits,
    /// Count living and dead NPCs.
    CheckNpcs,
    /// Save the game.
    Save,
    /// Load the last save.
    Load,
    /// Sign the guestbook here.
    SignGuestbook,
    /// Read the guestbook here.
    ReadGuestbook,
    /// List commands.
    Help,
    /// Leave the game.
    Quit,
}

/// One line per command for `help`.
pub const HELP: &str = "\
Movement:  north south east west up down (or n s e w u d)
Looking:   look [exits | <direction> | <item> | <npc>], exits, inventory (inv, i), stats
Items:     take <item>, drop <item>, eat <item>
Shops:     list [full], buy <item>, sell <item>, value <item>
Fighting:  hit <npc>, loot <npc>, checknpcs
Other:     godmode [status | enable | disable], signguestbook, readguestbook,
           save, load, help, quit";
