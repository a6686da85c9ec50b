//! Verbs and their aliases.

use townsquare_foundation::Direction;

/// A command verb.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verb {
    /// Walk in a direction.
    Go(Direction),
    /// Describe the room or something in it.
    Look,
    /// Pick something up.
    Take,
    /// Put something down.
    Drop,
    /// Show what is carried.
    Inventory,
    /// Show the player record.
    Stats,
    /// Attack an NPC.
    Hit,
    /// Empty a corpse.
    Loot,
    /// Show a shop's wares.
    List,
    /// Buy from a shop.
    Buy,
    /// Sell to a shop.
    Sell,
    /// Ask what a shop would pay.
    Value,
    /// Eat something carried.
    Eat,
    /// Query or change invulnerability.
    GodMode,
    /// Toggle full or brief exit listings.
    Exits,
    /// Count living and dead NPCs.
    CheckNpcs,
    /// Save the game.
    Save,
    /// Load the last save.
    Load,
    /// Sign the room's guestbook.
    SignGuestbook,
    /// Read the room's guestbook.
    ReadGuestbook,
    /// List commands.
    Help,
    /// Leave the game.
    Quit,
}

/// Every spelling the parser accepts, with its verb.
pub const VOCABULARY: &[(&str, Verb)] = &[
    ("north", Verb::Go(Direction::North)),
    ("n", Verb::Go(Direction::North)),
    ("south", Verb::Go(Direction::South)),
    ("s", Verb::Go(Direction::South)),
    ("east", Verb::Go(Direction::East)),
    ("e", Verb::Go(Direction::East)),
    ("west", Verb::Go(Direction::West)),
    ("w", Verb::Go(Direction::West)),
    ("up", Verb::Go(Direction::Up)),
    ("u", Verb::Go(Direction::Up)),
    ("down", Verb::Go(Direction::Down)),
    ("d", Verb::Go(Direction::Down)),
    ("look", Verb::Look),
    ("l", Verb::Look),
    ("take", Verb::Take),
    ("get", Verb::Take),
    ("drop", Verb::Drop),
    ("inventory", Verb::Inventory),
    ("inv", Verb::Inventory),
    ("i", Verb::Inventory),
    ("stats", Verb::Stats),
    ("status", Verb::Stats),
    ("hit", Verb::Hit),
    ("attack", Verb::Hit),
    ("loot", Verb::Loot),
    ("list", Verb::List),
    ("buy", Verb::Buy),
    ("sell", Verb::Sell),
    ("value", Verb::Value),
    ("eat", Verb::Eat),
    ("godmode", Verb::GodMode),
    ("god", Verb::GodMode),
    ("exits", Verb::Exits),
    ("checknpcs", Verb::CheckNpcs),
    ("save", Verb::Save),
    ("load", Verb::Load),
    ("signguestbook", Verb::SignGuestbook),
    ("readguestbook", Verb::ReadGuestbook),
    ("help", Verb::Help),
    ("quit", Verb::Quit),
    ("exit", Verb::Quit),
];

impl Verb {
    /// Looks up a lowercase word.
    #[must_use]
    pub fn lookup(word: &str) -> Option<Self> {
        VOCABULARY
            .iter()
            .find(|(spelling, _)| *spelling == word)
            .map(|(_, verb)| *verb)
    }

    /// Spellings of at least two letters, for completion.
    pub fn completion_words() -> impl Iterator<Item = &'static str> {
        VOCABULARY
            .iter()
            .map(|(spelling, _)| *spelling)
            .filter(|s| s.len() > 1)
    }
}
