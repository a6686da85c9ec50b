//! Integration tests for the guestbook file

use std::fs;

use chrono::{TimeZone, Utc};
use townsquare_foundation::{ErrorKind, RoomId};
use townsquare_runtime::guestbook::{SHOWN_ENTRIES, render};
use townsquare_runtime::session::GUESTBOOK_FILE;
use townsquare_runtime::{
    FileGuestbook, GameConfig, Guestbook, GuestbookEntry, Identity, Reply, Session,
};

use crate::scratch_dir;

const RECEPTION: &str = "Hotel Reception";

fn walk_to_reception(session: &mut Session) {
    for step in ["e", "e", "e", "n", "n", "e"] {
        session.handle(step).unwrap();
    }
    assert_eq!(
        session.game().world().player().location,
        RoomId::new(RECEPTION)
    );
}

fn text(reply: Reply) -> String {
    match reply {
        Reply::Text(text) => text,
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn signatures_are_shared_between_players() {
    let dir = scratch_dir("guestbook");
    let config = GameConfig::default()
        .with_seed(3)
        .with_invulnerable(true)
        .with_save_dir(&dir);

    let mut first = Session::start(&config, Identity::new("Ada", "1", "10.0.0.1")).unwrap();
    walk_to_reception(&mut first);
    assert_eq!(
        text(first.handle("readguestbook").unwrap()),
        "No previous entries found"
    );
    assert_eq!(
        text(first.handle("signguestbook").unwrap()),
        "Successfully added to the guestbook"
    );
    assert!(dir.join(GUESTBOOK_FILE).exists());

    let mut second = Session::start(&config, Identity::new("Grace", "2", "10.0.0.2")).unwrap();
    walk_to_reception(&mut second);
    let book = text(second.handle("readguestbook").unwrap());
    assert!(book.starts_with("Showing the last 5 entries"));
    assert!(book.contains("| Ada"));
    assert!(book.contains("10.0.0.1"));
    assert!(!book.contains("Grace"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn only_rooms_with_a_book_can_be_signed() {
    let dir = scratch_dir("no-book");
    let config = GameConfig::default().with_seed(3).with_save_dir(&dir);
    let mut session = Session::start(&config, Identity::default()).unwrap();

    let err = session.handle("signguestbook").unwrap_err();
    assert_eq!(err.kind, ErrorKind::NoGuestbook);
    assert!(!dir.join(GUESTBOOK_FILE).exists());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn the_file_keeps_every_entry_but_shows_the_latest() {
    let dir = scratch_dir("many");
    let path = dir.join(GUESTBOOK_FILE);
    let room = RoomId::new(RECEPTION);

    let mut book = FileGuestbook::new(&path);
    for second in 0..8 {
        book.sign(
            &room,
            GuestbookEntry {
                signed_at: Utc.with_ymd_and_hms(2023, 12, 24, 18, 30, second).unwrap(),
                visitor: Identity::new(format!("Caroler {second}"), "1", "10.1.1.1"),
            },
        )
        .unwrap();
    }

    let reopened = FileGuestbook::new(&path);
    let shown = reopened.last(&room, SHOWN_ENTRIES).unwrap();
    let names: Vec<_> = shown.iter().map(|e| e.visitor.name.as_str()).collect();
    assert_eq!(
        names,
        ["Caroler 3", "Caroler 4", "Caroler 5", "Caroler 6", "Caroler 7"]
    );
    assert!(render(&shown).contains("| 24-12-2023 18:30:07"));
    assert!(reopened.last(&RoomId::new("Bakery"), SHOWN_ENTRIES).unwrap().is_empty());
    let _ = fs::remove_dir_all(&dir);
}
