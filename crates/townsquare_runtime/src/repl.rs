//! The interactive command loop.

use std::io::{self, Write};

use townsquare_foundation::{Error, ErrorKind, Result};
use tracing::{info, warn};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::{Reply, Session};

/// Reads commands, runs them against a [`Session`], and prints the result.
pub struct Repl<E: LineEditor = RustylineEditor, W: Write = io::Stdout> {
    /// The line editor for input.
    editor: E,

    /// Where replies go.
    out: W,

    /// The player's session.
    session: Session,

    /// Whether to greet the player before the first prompt.
    show_banner: bool,
}

impl Repl<RustylineEditor, io::Stdout> {
    /// Creates a REPL on the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, io::stdout(), session))
    }
}

impl<E: LineEditor, W: Write> Repl<E, W> {
    /// Creates a REPL with the given editor and output.
    pub fn with_editor(editor: E, out: W, session: Session) -> Self {
        Self {
            editor,
            out,
            session,
            show_banner: true,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Consumes the REPL, returning its output.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Consumes the REPL, returning its output and the session.
    pub fn into_parts(self) -> (W, Session) {
        (self.out, self.session)
    }

    /// Runs until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor or the output fails. Command failures
    /// are printed and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            let welcome = self.session.welcome()?;
            self.print(&welcome)?;
        }

        while self.read_eval_print()? {}

        self.print("Thanks for playing!")?;
        info!(session = %self.session.describe(), "session ended");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        self.editor.set_keywords(self.session.completion_words());
        let prompt = format!("\n{}\n> ", self.session.prompt());

        let line = match self.editor.read_line(&prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return Ok(true),
            ReadResult::Eof => return Ok(false),
        };

        if !line.trim().is_empty() {
            self.editor.add_history(&line);
        }

        match self.session.handle(&line) {
            Ok(Reply::Text(text)) => self.print(&text)?,
            Ok(Reply::Silent) => {}
            Ok(Reply::Quit) => return Ok(false),
            Err(e) => self.print_error(&e)?,
        }

        Ok(true)
    }

    fn print(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")
            .and_then(|()| self.out.flush())
            .map_err(|e| Error::new(ErrorKind::IoError(e.to_string())))
    }

    /// Gameplay refusals print as-is; anything else is a fault worth logging.
    fn print_error(&mut self, error: &Error) -> Result<()> {
        if error.is_user_facing() {
            self.print(&error.to_string())
        } else {
            warn!(%error, "command failed");
            self.print(&format!("Error: {error}"))
        }
    }
}
