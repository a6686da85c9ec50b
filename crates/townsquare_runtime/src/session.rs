//! One player's session: the game, who is playing, and where saves go.
//!
//! [`Session::execute`] runs one parsed command to completion and returns
//! the text to show. Gameplay refusals come back as errors whose `Display`
//! is the player-facing message; the session is unchanged by them except
//! where a handler charges its action cost first.

use townsquare_engine::{ExitStyle, Game, render};
use townsquare_foundation::{Direction, Error, ErrorKind, Result, RoomId};
use townsquare_parser::{Command, GodModeSwitch, Verb, command::HELP, parse};
use tracing::{debug, info};

use crate::clock::{SharedStatus, StatusBoard};
use crate::config::{GameConfig, Identity};
use crate::guestbook::{self, FileGuestbook, Guestbook, GuestbookEntry, MemoryGuestbook};
use crate::persistence::{FileSaveStore, MemorySaveStore, SaveStore};

/// File name of the guestbook inside the save directory.
pub const GUESTBOOK_FILE: &str = "guestbook.dat";

/// What a command produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Text to show.
    Text(String),
    /// Nothing to show.
    Silent,
    /// The player asked to leave.
    Quit,
}

/// The game plus everything a command needs outside it.
pub struct Session {
    game: Game,
    identity: Identity,
    exit_style: ExitStyle,
    store: Box<dyn SaveStore>,
    guestbook: Box<dyn Guestbook>,
    status: SharedStatus,
}

impl Session {
    /// Creates a session over an existing game, with in-memory saves and
    /// guestbook. Nothing is scattered.
    #[must_use]
    pub fn new(game: Game, identity: Identity) -> Self {
        let session = Self {
            game,
            identity,
            exit_style: ExitStyle::default(),
            store: Box::new(MemorySaveStore::new()),
            guestbook: Box::new(MemoryGuestbook::new()),
            status: StatusBoard::shared(),
        };
        session.publish();
        session
    }

    /// Builds the town from `config`, scatters it, and stores saves and the
    /// guestbook under the configured directory.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWorld` if the configuration names unknown rooms or
    /// items.
    pub fn start(config: &GameConfig, identity: Identity) -> Result<Self> {
        let mut game = config.build_game(&identity)?;
        let placement = game.scatter()?;
        info!(
            player = %identity.name,
            items = placement.items.len(),
            npcs = placement.npcs.len(),
            "session started"
        );

        Ok(Self::new(game, identity)
            .with_exit_style(config.exit_style)
            .with_store(FileSaveStore::new(&config.save_dir))
            .with_guestbook(FileGuestbook::new(config.save_dir.join(GUESTBOOK_FILE))))
    }

    /// Builder method to set the save store.
    #[must_use]
    pub fn with_store(mut self, store: impl SaveStore + 'static) -> Self {
        self.store = Box::new(store);
        self
    }

    /// Builder method to set the guestbook.
    #[must_use]
    pub fn with_guestbook(mut self, guestbook: impl Guestbook + 'static) -> Self {
        self.guestbook = Box::new(guestbook);
        self
    }

    /// Builder method to set the exit listing style.
    #[must_use]
    pub fn with_exit_style(mut self, style: ExitStyle) -> Self {
        self.exit_style = style;
        self
    }

    /// Builder method to share a status board, e.g. with a running clock.
    #[must_use]
    pub fn with_status(mut self, status: SharedStatus) -> Self {
        self.status = status;
        self.publish();
        self
    }

    /// The game.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The game, mutably.
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// Who is playing.
    #[must_use]
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// The current exit listing style.
    #[must_use]
    pub fn exit_style(&self) -> ExitStyle {
        self.exit_style
    }

    /// The status board this session publishes to.
    #[must_use]
    pub fn status(&self) -> &SharedStatus {
        &self.status
    }

    /// The status line for the prompt.
    #[must_use]
    pub fn prompt(&self) -> String {
        StatusBoard::lock(&self.status).prompt()
    }

    /// The greeting and the first room.
    ///
    /// # Errors
    ///
    /// Returns a lookup error if the world is inconsistent.
    pub fn welcome(&self) -> Result<String> {
        let Identity {
            name,
            node,
            address,
        } = &self.identity;
        let room = self.render_current_room()?;
        Ok(format!(
            "Text Adventure!\n===============\n\n\
             Welcome {name} from IP {address} on node {node}\n\
             (Type \"help\" for commands.)\n\n{room}"
        ))
    }

    /// Parses and runs one line of input.
    ///
    /// # Errors
    ///
    /// Returns the parse or command error.
    pub fn handle(&mut self, line: &str) -> Result<Reply> {
        let command = parse(line)?;
        self.execute(command)
    }

    /// Runs one command. The status board is updated whether or not it
    /// succeeds.
    ///
    /// # Errors
    ///
    /// Returns the refusal for gameplay errors, or the underlying failure
    /// for save, load, and guestbook faults.
    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        debug!(?command, "executing");
        let reply = self.dispatch(command);
        self.publish();
        reply
    }

    fn dispatch(&mut self, command: Command) -> Result<Reply> {
        let text = match command {
            Command::Empty => return Ok(Reply::Silent),
            Command::Quit => return Ok(Reply::Quit),
            Command::Help => HELP.to_string(),

            Command::Go(direction) => {
                let moved = self.game.go(direction)?;
                format!("{moved}\n\n{}", self.render_current_room()?)
            }
            Command::Look(target) => {
                let sighting = self.game.look(&target)?;
                render::sighting(self.game.world(), &sighting, self.exit_style)?
            }
            Command::Exits => {
                self.exit_style = self.exit_style.toggled();
                match self.exit_style {
                    ExitStyle::Full => "Showing full exit descriptions.".to_string(),
                    ExitStyle::Brief => "Showing brief exit descriptions.".to_string(),
                }
            }

            Command::Take(item) => self.game.take(&item)?.to_string(),
            Command::Drop(item) => self.game.drop_item(&item)?.to_string(),
            Command::Eat(item) => self.game.eat(&item)?.to_string(),
            Command::Inventory => render::inventory(self.game.world()),
            Command::Stats => {
                let elapsed = StatusBoard::lock(&self.status).elapsed();
                format!(
                    "{}\n\nTime played: {elapsed}",
                    render::stats(self.game.world().player())
                )
            }

            Command::Hit(target) => self.game.hit(&target)?.to_string(),
            Command::Loot(target) => self.game.loot(&target)?.to_string(),
            Command::CheckNpcs => render::census(self.game.census()),

            Command::List { full } => render::listing(&self.game.list(full)?),
            Command::Buy(item) => self.game.buy(&item)?.to_string(),
            Command::Sell(item) => self.game.sell(&item)?.to_string(),
            Command::Value(item) => self.game.value(&item)?.to_string(),

            Command::GodMode(switch) => {
                match switch {
                    GodModeSwitch::Toggle => {
                        self.game.toggle_invulnerable();
                    }
                    GodModeSwitch::Enable => self.game.set_invulnerable(true),
                    GodModeSwitch::Disable => self.game.set_invulnerable(false),
                    GodModeSwitch::Status => {}
                }
                let state = if self.game.is_invulnerable() {
                    "Enabled"
                } else {
                    "Disabled"
                };
                format!("God Mode: {state}")
            }

            Command::Save => {
                self.store
                    .save(&self.identity.name, &self.game.world().snapshot())?;
                "Saved all data".to_string()
            }
            Command::Load => match self.store.load(&self.identity.name)? {
                None => "No previous saves found".to_string(),
                Some(snapshot) => {
                    self.game.world_mut().restore(snapshot)?;
                    "Loaded all data".to_string()
                }
            },

            Command::SignGuestbook => {
                let room = self.guestbook_room()?;
                self.guestbook
                    .sign(&room, GuestbookEntry::now(self.identity.clone()))?;
                "Successfully added to the guestbook".to_string()
            }
            Command::ReadGuestbook => {
                let room = self.guestbook_room()?;
                guestbook::render(&self.guestbook.last(&room, guestbook::SHOWN_ENTRIES)?)
            }
        };
        Ok(Reply::Text(text))
    }

    fn guestbook_room(&self) -> Result<RoomId> {
        let room = self.game.world().current_room()?;
        if room.guestbook {
            Ok(room.id.clone())
        } else {
            Err(Error::new(ErrorKind::NoGuestbook))
        }
    }

    fn render_current_room(&self) -> Result<String> {
        let world = self.game.world();
        render::room(world, &world.player().location, self.exit_style)
    }

    fn publish(&self) {
        let player = self.game.world().player();
        StatusBoard::lock(&self.status).publish(player.health, player.money);
    }

    /// Words worth completing here: verbs, directions, primary keywords of
    /// items on the ground, for sale, or carried, and keywords of NPCs in
    /// the room.
    #[must_use]
    pub fn completion_words(&self) -> Vec<String> {
        let world = self.game.world();
        let mut words: Vec<String> = Verb::completion_words().map(str::to_string).collect();
        words.extend(Direction::ALL.iter().map(|d| d.name().to_string()));

        if let Ok(room) = world.current_room() {
            let nearby = room
                .ground
                .iter()
                .chain(room.shop.iter().flatten())
                .chain(world.inventory().iter());
            words.extend(
                world
                    .lexicon()
                    .primary_keywords(nearby)
                    .into_iter()
                    .map(str::to_string),
            );
            for npc in room.npcs.iter().filter_map(|id| world.npc(id).ok()) {
                words.extend(npc.keywords.iter().cloned());
            }
        }

        words.sort();
        words.dedup();
        words
    }

    /// A one-line summary for logs.
    #[must_use]
    pub fn describe(&self) -> String {
        let player = self.game.world().player();
        format!(
            "{} at {} (health {}, money {})",
            player.name, player.location, player.health, player.money
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use townsquare_foundation::NpcId;

    fn session() -> Session {
        let identity = Identity::new("Tester", "2", "10.1.1.1");
        let game = GameConfig::default()
            .with_seed(3)
            .build_game(&identity)
            .unwrap();
        Session::new(game, identity)
    }

    fn text(reply: Reply) -> String {
        match reply {
            Reply::Text(text) => text,
            other => panic!("expected text, got {other:?}"),
        }
    }

    fn walk(session: &mut Session, moves: &str) {
        for step in moves.split_whitespace() {
            session.handle(step).unwrap();
        }
    }

    #[test]
    fn moving_north_costs_health() {
        let mut session = session();
        let out = text(session.handle("north").unwrap());
        assert!(out.contains("North Y Street"));
        let player = session.game().world().player();
        assert_eq!(player.location, RoomId::new("North Y Street"));
        assert_eq!(player.health, 99);
        assert_eq!(session.prompt(), "[Health:99][Money:10]");
    }

    #[test]
    fn failed_move_still_publishes() {
        let mut session = session();
        session.handle("up").unwrap_err();
        assert_eq!(session.prompt(), "[Health:99][Money:10]");
    }

    #[test]
    fn unknown_command_is_reported() {
        let mut session = session();
        let err = session.handle("dance wildly").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::UnknownCommand(_)));
    }

    #[test]
    fn blank_and_quit() {
        let mut session = session();
        assert_eq!(session.handle("   ").unwrap(), Reply::Silent);
        assert_eq!(session.handle("quit").unwrap(), Reply::Quit);
    }

    #[test]
    fn godmode_switches() {
        let mut session = session();
        assert_eq!(text(session.handle("godmode").unwrap()), "God Mode: Enabled");
        assert_eq!(
            text(session.handle("godmode status").unwrap()),
            "God Mode: Enabled"
        );
        assert_eq!(
            text(session.handle("god disable").unwrap()),
            "God Mode: Disabled"
        );
        session.handle("godmode enable").unwrap();
        session.handle("n").unwrap();
        assert_eq!(session.game().world().player().health, 100);
    }

    #[test]
    fn exits_toggle_changes_room_display() {
        let mut session = session();
        assert_eq!(
            text(session.handle("exits").unwrap()),
            "Showing brief exit descriptions."
        );
        let room = text(session.handle("look").unwrap());
        assert!(room.contains("Exits: North South East West"));
    }

    #[test]
    fn stats_include_time_played() {
        let mut session = session();
        let out = text(session.handle("stats").unwrap());
        assert!(out.starts_with("User Stats:"));
        assert!(out.ends_with("Time played: 0h 0m 0s"));
    }

    #[test]
    fn save_then_load_restores_state() {
        let mut session = session();
        assert_eq!(
            text(session.handle("load").unwrap()),
            "No previous saves found"
        );
        assert_eq!(text(session.handle("save").unwrap()), "Saved all data");

        session.handle("n").unwrap();
        session.handle("eat donut").unwrap();
        assert!(!session.game().world().inventory().contains("Donut"));

        assert_eq!(text(session.handle("load").unwrap()), "Loaded all data");
        let world = session.game().world();
        assert_eq!(world.player().location, RoomId::new("Town Square"));
        assert_eq!(world.player().health, 100);
        assert!(world.inventory().contains("Donut"));
        assert_eq!(session.prompt(), "[Health:100][Money:10]");
    }

    #[test]
    fn guestbook_only_where_one_exists() {
        let mut session = session();
        let err = session.handle("signguestbook").unwrap_err();
        assert_eq!(err.kind, ErrorKind::NoGuestbook);

        walk(&mut session, "e e e n n e");
        assert_eq!(
            session.game().world().player().location,
            RoomId::new("Hotel Reception")
        );
        assert_eq!(
            text(session.handle("readguestbook").unwrap()),
            "No previous entries found"
        );
        session.handle("signguestbook").unwrap();
        let table = text(session.handle("readguestbook").unwrap());
        assert!(table.contains("| Tester"));
        assert!(table.contains("10.1.1.1"));
    }

    #[test]
    fn buying_beyond_means_fails() {
        let mut session = session();
        walk(&mut session, "e e n");
        assert_eq!(
            session.game().world().player().location,
            RoomId::new("Stone Mason")
        );
        let err = session.handle("buy gravestone").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InsufficientFunds { .. }));
        assert_eq!(session.game().world().player().money, 10);
    }

    #[test]
    fn completion_words_cover_surroundings() {
        let mut session = session();
        let npc = NpcId::new("Dave");
        session
            .game_mut()
            .world_mut()
            .current_room_mut()
            .unwrap()
            .npcs
            .push(npc);
        let words = session.completion_words();
        for expected in ["north", "look", "welcome", "fountain", "sword", "dave"] {
            assert!(words.iter().any(|w| w == expected), "{expected}");
        }
        assert!(!words.iter().any(|w| w == "gravestone"));
    }

    #[test]
    fn welcome_names_the_player() {
        let session = session();
        let welcome = session.welcome().unwrap();
        assert!(welcome.contains("Welcome Tester from IP 10.1.1.1 on node 2"));
        assert!(welcome.contains("Town Square"));
    }
}
