//! Background play-time clock and the status prompt.
//!
//! The command thread publishes health and money after each command; the
//! clock thread only advances elapsed time. Neither touches the other's
//! fields, and gameplay state never leaves the command thread.

use std::fmt;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use townsquare_foundation::{Error, ErrorKind, Result};
use tracing::debug;

/// Health at or below this is flagged in the prompt.
pub const LOW_HEALTH: i64 = 10;

/// Elapsed play time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayTime {
    /// Whole hours.
    pub hours: u64,
    /// Minutes, 0 to 59.
    pub minutes: u8,
    /// Seconds, 0 to 59.
    pub seconds: u8,
}

impl PlayTime {
    /// Advances by one second.
    pub fn tick(&mut self) {
        if self.seconds < 59 {
            self.seconds += 1;
            return;
        }
        self.seconds = 0;
        if self.minutes < 59 {
            self.minutes += 1;
        } else {
            self.minutes = 0;
            self.hours += 1;
        }
    }
}

impl fmt::Display for PlayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m {}s", self.hours, self.minutes, self.seconds)
    }
}

/// Display-only status shared between the command thread and the clock.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusBoard {
    elapsed: PlayTime,
    health: i64,
    money: u64,
}

/// A status board shared with the clock thread.
pub type SharedStatus = Arc<Mutex<StatusBoard>>;

impl StatusBoard {
    /// Creates a shareable board.
    #[must_use]
    pub fn shared() -> SharedStatus {
        Arc::new(Mutex::new(Self::default()))
    }

    /// Locks a shared board. A poisoned lock still yields the board; the
    /// data is display-only.
    pub fn lock(board: &SharedStatus) -> MutexGuard<'_, Self> {
        board.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records the latest health and money.
    pub fn publish(&mut self, health: i64, money: u64) {
        self.health = health;
        self.money = money;
    }

    /// Advances elapsed time by one second.
    pub fn tick(&mut self) {
        self.elapsed.tick();
    }

    /// Elapsed play time.
    #[must_use]
    pub fn elapsed(&self) -> PlayTime {
        self.elapsed
    }

    /// The status line, e.g. `[Health:100][Money:10]`.
    #[must_use]
    pub fn prompt(&self) -> String {
        let flag = if self.health <= LOW_HEALTH { "!" } else { "" };
        format!("[Health:{}{flag}][Money:{}]", self.health, self.money)
    }
}

/// A thread that ticks a [`StatusBoard`] once per interval until stopped.
#[derive(Debug)]
pub struct Clock {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Clock {
    /// Starts ticking `board` every `interval`.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the thread cannot be spawned.
    pub fn start(board: SharedStatus, interval: Duration) -> Result<Self> {
        let (stop, stopped) = mpsc::channel::<()>();
        let handle = thread::Builder::new()
            .name("status-clock".to_string())
            .spawn(move || {
                loop {
                    match stopped.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => StatusBoard::lock(&board).tick(),
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                debug!("status clock stopped");
            })
            .map_err(|e| Error::new(ErrorKind::IoError(format!("cannot start clock: {e}"))))?;

        debug!(?interval, "status clock started");
        Ok(Self {
            stop: Some(stop),
            handle: Some(handle),
        })
    }

    /// Stops the thread and waits for it to finish. Idempotent.
    pub fn stop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Returns true until [`Clock::stop`] has been called.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        self.stop();
    }
}
