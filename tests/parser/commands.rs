//! Integration tests for command parsing

use proptest::prelude::*;
use townsquare_foundation::{Direction, ErrorKind};
use townsquare_parser::{Command, GodModeSwitch, parse};

// =============================================================================
// Movement
// =============================================================================

#[test]
fn directions_and_abbreviations() {
    for (typed, direction) in [
        ("north", Direction::North),
        ("n", Direction::North),
        ("S", Direction::South),
        ("East", Direction::East),
        ("w", Direction::West),
        ("up", Direction::Up),
        ("d", Direction::Down),
    ] {
        assert_eq!(parse(typed).unwrap(), Command::Go(direction), "{typed}");
    }
}

#[test]
fn movement_ignores_trailing_words() {
    assert_eq!(parse("north quickly").unwrap(), Command::Go(Direction::North));
}

// =============================================================================
// Arguments
// =============================================================================

#[test]
fn arguments_are_joined_and_lowercased() {
    assert_eq!(
        parse("look  Great   Sword").unwrap(),
        Command::Look("great sword".to_string())
    );
    assert_eq!(parse("get donut").unwrap(), Command::Take("donut".to_string()));
    assert_eq!(parse("attack DAVE").unwrap(), Command::Hit("dave".to_string()));
}

#[test]
fn punctuation_is_dropped() {
    assert_eq!(parse("eat pie!").unwrap(), Command::Eat("pie".to_string()));
    assert_eq!(parse("take sword.").unwrap(), Command::Take("sword".to_string()));
}

#[test]
fn missing_argument_is_left_to_the_handler() {
    assert_eq!(parse("take").unwrap(), Command::Take(String::new()));
    assert_eq!(parse("look").unwrap(), Command::Look(String::new()));
    assert_eq!(parse("loot").unwrap(), Command::Loot(String::new()));
}

#[test]
fn list_full() {
    assert_eq!(parse("list").unwrap(), Command::List { full: false });
    assert_eq!(parse("list full").unwrap(), Command::List { full: true });
    assert_eq!(parse("list everything").unwrap(), Command::List { full: false });
}

#[test]
fn godmode_switches() {
    assert_eq!(parse("godmode").unwrap(), Command::GodMode(GodModeSwitch::Toggle));
    assert_eq!(parse("god on").unwrap(), Command::GodMode(GodModeSwitch::Enable));
    assert_eq!(parse("godmode disable").unwrap(), Command::GodMode(GodModeSwitch::Disable));
    assert_eq!(parse("godmode status").unwrap(), Command::GodMode(GodModeSwitch::Status));
    assert_eq!(parse("godmode maybe").unwrap(), Command::GodMode(GodModeSwitch::Status));
}

// =============================================================================
// Bare Commands
// =============================================================================

#[test]
fn bare_commands() {
    for (typed, command) in [
        ("i", Command::Inventory),
        ("inv", Command::Inventory),
        ("status", Command::Stats),
        ("exits", Command::Exits),
        ("checknpcs", Command::CheckNpcs),
        ("save", Command::Save),
        ("load", Command::Load),
        ("signguestbook", Command::SignGuestbook),
        ("readguestbook", Command::ReadGuestbook),
        ("help", Command::Help),
        ("exit", Command::Quit),
    ] {
        assert_eq!(parse(typed).unwrap(), command, "{typed}");
    }
}

#[test]
fn blank_lines_are_empty() {
    assert_eq!(parse("").unwrap(), Command::Empty);
    assert_eq!(parse("   \t ").unwrap(), Command::Empty);
    assert_eq!(parse("...").unwrap(), Command::Empty);
}

#[test]
fn unknown_verbs_are_reported() {
    let err = parse("dance wildly").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownCommand("dance".to_string()));
    assert!(err.to_string().contains("help"));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn parse_never_panics(input in ".{0,64}") {
        let _ = parse(&input);
    }

    #[test]
    fn case_does_not_matter(
        verb in prop::sample::select(vec!["look", "take", "drop", "eat", "buy", "sell", "value"]),
        noun in "[a-z]{1,12}",
    ) {
        let lower = parse(&format!("{verb} {noun}")).unwrap();
        let upper = parse(&format!("{} {}", verb.to_uppercase(), noun.to_uppercase())).unwrap();
        prop_assert_eq!(lower, upper);
    }
}
