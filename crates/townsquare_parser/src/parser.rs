//! Turns a line into a [`Command`].

use townsquare_foundation::{Error, ErrorKind, Result};

use crate::command::{Command, GodModeSwitch};
use crate::tokenizer::{InputToken, InputTokenizer};
use crate::vocabulary::Verb;

/// Parses one line of input.
///
/// The first word picks the verb; every following word, joined with single
/// spaces, is the argument.
///
/// # Errors
///
/// Returns `UnknownCommand` if the first word is not a known verb.
pub fn parse(input: &str) -> Result<Command> {
    let tokens = InputTokenizer::tokenize(input);
    let mut words = tokens.iter().filter_map(InputToken::text);
    let Some(first) = words.next() else {
        return Ok(Command::Empty);
    };
    let argument = words.collect::<Vec<_>>().join(" ").to_lowercase();

    let verb = Verb::lookup(first)
        .ok_or_else(|| Error::new(ErrorKind::UnknownCommand(first.to_string())))?;

    Ok(match verb {
        Verb::Go(direction) => Command::Go(direction),
        Verb::Look => Command::Look(argument),
        Verb::Take => Command::Take(argument),
        Verb::Drop => Command::Drop(argument),
        Verb::Inventory => Command::Inventory,
        Verb::Stats => Command::Stats,
        Verb::Hit => Command::Hit(argument),
        Verb::Loot => Command::Loot(argument),
        Verb::List => Command::List {
            full: argument == "full",
        },
        Verb::Buy => Command::Buy(argument),
        Verb::Sell => Command::Sell(argument),
        Verb::Value => Command::Value(argument),
        Verb::Eat => Command::Eat(argument),
        Verb::GodMode => Command::GodMode(match argument.as_str() {
            "" => GodModeSwitch::Toggle,
            "enable" | "on" => GodModeSwitch::Enable,
            "disable" | "off" => GodModeSwitch::Disable,
            _ => GodModeSwitch::Status,
        }),
        Verb::Exits => Command::Exits,
        Verb::CheckNpcs => Command::CheckNpcs,
        Verb::Save => Command::Save,
        Verb::Load => Command::Load,
        Verb::SignGuestbook => Command::SignGuestbook,
        Verb::ReadGuestbook => Command::ReadGuestbook,
        Verb::Help => Command::Help,
        Verb::Quit => Command::Quit,
    })
}
