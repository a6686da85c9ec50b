//! Integration tests for scripted sessions through the REPL

use townsquare_foundation::Result;
use townsquare_runtime::{GameConfig, Identity, LineEditor, ReadResult, Repl, Session};

use crate::scratch_dir;

/// Feeds a fixed script, then reports end of input.
struct Script {
    lines: std::vec::IntoIter<String>,
    prompts: Vec<String>,
}

impl Script {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|l| (*l).to_string())
                .collect::<Vec<_>>()
                .into_iter(),
            prompts: Vec::new(),
        }
    }
}

impl LineEditor for Script {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.next().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_keywords(&mut self, _keywords: Vec<String>) {}
}

fn play(config: &GameConfig, lines: &[&str]) -> (String, Session) {
    let identity = Identity::new("Walker", "3", "192.168.0.7");
    let session = Session::start(config, identity).unwrap();
    let mut repl = Repl::with_editor(Script::new(lines), Vec::new(), session);
    repl.run().unwrap();
    let (out, session) = repl.into_parts();
    (String::from_utf8(out).unwrap(), session)
}

#[test]
fn a_trip_to_the_bakery() {
    let dir = scratch_dir("bakery");
    let config = GameConfig::default().with_seed(5).with_save_dir(&dir);
    let (out, _) = play(
        &config,
        &["look", "n", "e", "list", "buy cupcake", "eat cupcake", "quit"],
    );

    assert!(out.contains("Welcome Walker from IP 192.168.0.7 on node 3"));
    assert!(out.contains("You move to the north."));
    assert!(out.contains("You move to the east."));
    assert!(out.contains("For sale:\n  - Meat Pie"));
    assert!(out.contains("You have purchased a cupcake"));
    assert!(out.contains("You eat a cupcake"));
    assert!(out.trim_end().ends_with("Thanks for playing!"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn mistakes_do_not_end_the_game() {
    let dir = scratch_dir("mistakes");
    let config = GameConfig::default().with_seed(5).with_save_dir(&dir);
    let (out, _) = play(&config, &["fly", "buy donut", "u", "signguestbook", "n"]);

    assert!(out.contains("I do not understand \"fly\""));
    assert!(!out.contains("Error: "));
    assert!(out.contains("You move to the north."));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn god_mode_from_config() {
    let dir = scratch_dir("god");
    let config = GameConfig::default()
        .with_seed(5)
        .with_invulnerable(true)
        .with_save_dir(&dir);
    let (out, session) = play(&config, &["godmode status", "n", "s", "stats"]);

    assert!(out.contains("God Mode: Enabled"));
    assert!(session.game().is_invulnerable());
    assert!(
        out.lines()
            .any(|l| l.trim_start().starts_with("Health") && l.ends_with(" 100"))
    );
    let _ = std::fs::remove_dir_all(&dir);
}
