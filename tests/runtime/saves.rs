//! Integration tests for saving and loading across sessions

use std::fs;

use townsquare_foundation::{ErrorKind, RoomId};
use townsquare_runtime::{FileSaveStore, GameConfig, Identity, Reply, SaveStore, Session};

use crate::scratch_dir;

fn text(reply: Reply) -> String {
    match reply {
        Reply::Text(text) => text,
        other => panic!("expected text, got {other:?}"),
    }
}

fn start(config: &GameConfig, name: &str) -> Session {
    Session::start(config, Identity::new(name, "1", "127.0.0.1")).unwrap()
}

#[test]
fn progress_survives_a_restart() {
    let dir = scratch_dir("restart");
    let config = GameConfig::default().with_seed(9).with_save_dir(&dir);

    let mut first = start(&config, "Saver");
    first.handle("north").unwrap();
    first.handle("east").unwrap();
    first.handle("drop donut").unwrap();
    assert_eq!(text(first.handle("save").unwrap()), "Saved all data");
    let saved = first.game().world().snapshot();

    let mut second = start(&config, "Saver");
    assert_eq!(
        second.game().world().player().location,
        RoomId::new("Town Square")
    );
    assert_eq!(text(second.handle("load").unwrap()), "Loaded all data");
    assert_eq!(second.game().world().snapshot(), saved);
    assert_eq!(
        second.game().world().player().location,
        RoomId::new("Bakery")
    );
    assert!(!second.game().world().inventory().contains("Donut"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn saves_are_per_player() {
    let dir = scratch_dir("per-player");
    let config = GameConfig::default().with_seed(9).with_save_dir(&dir);

    let mut alice = start(&config, "Alice");
    alice.handle("west").unwrap();
    alice.handle("save").unwrap();

    let mut bob = start(&config, "Bob");
    assert_eq!(text(bob.handle("load").unwrap()), "No previous saves found");
    assert_eq!(bob.game().world().player().location, RoomId::new("Town Square"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn a_torn_save_is_refused() {
    let dir = scratch_dir("torn");
    let config = GameConfig::default().with_seed(9).with_save_dir(&dir);

    let mut session = start(&config, "Torn");
    session.handle("save").unwrap();
    fs::remove_file(dir.join("Torn.npcs")).unwrap();

    let err = session.handle("load").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SerializationError(_)));
    assert!(!err.is_user_facing());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn odd_names_stay_inside_the_save_dir() {
    let dir = scratch_dir("odd-names");
    let mut store = FileSaveStore::new(&dir);
    let world = GameConfig::default()
        .build_world(&Identity::new("../../etc/passwd", "1", "127.0.0.1"))
        .unwrap();

    store.save("../../etc/passwd", &world.snapshot()).unwrap();
    let written: Vec<_> = fs::read_dir(&dir).unwrap().collect();
    assert_eq!(written.len(), 4);
    assert_eq!(
        store.load("../../etc/passwd").unwrap(),
        Some(world.snapshot())
    );
    let _ = fs::remove_dir_all(&dir);
}
