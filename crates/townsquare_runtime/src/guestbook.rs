//! Per-room visitor logs.
//!
//! Entries are keyed by room, then by signing time. The file-backed book
//! rewrites the whole ledger on every signature.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use townsquare_foundation::{Result, RoomId};
use tracing::info;

use crate::config::Identity;
use crate::persistence::{from_bytes, io_error, to_bytes, write_atomic};

/// How many entries `readguestbook` shows.
pub const SHOWN_ENTRIES: usize = 5;

/// One signature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestbookEntry {
    /// When it was signed.
    pub signed_at: DateTime<Utc>,
    /// Who signed.
    pub visitor: Identity,
}

impl GuestbookEntry {
    /// An entry signed now.
    #[must_use]
    pub fn now(visitor: Identity) -> Self {
        Self {
            signed_at: Utc::now(),
            visitor,
        }
    }
}

type Ledger = BTreeMap<RoomId, BTreeMap<DateTime<Utc>, Identity>>;

/// Append-only visitor log.
pub trait Guestbook {
    /// Adds an entry for `room`.
    ///
    /// # Errors
    ///
    /// Returns `IoError` or `SerializationError` if the book cannot be
    /// updated.
    fn sign(&mut self, room: &RoomId, entry: GuestbookEntry) -> Result<()>;

    /// The most recent `n` entries for `room`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `IoError` or `SerializationError` if the book cannot be read.
    fn last(&self, room: &RoomId, n: usize) -> Result<Vec<GuestbookEntry>>;
}

fn append(ledger: &mut Ledger, room: &RoomId, entry: GuestbookEntry) {
    ledger
        .entry(room.clone())
        .or_default()
        .insert(entry.signed_at, entry.visitor);
}

fn tail(ledger: &Ledger, room: &RoomId, n: usize) -> Vec<GuestbookEntry> {
    let Some(entries) = ledger.get(room) else {
        return Vec::new();
    };
    let skip = entries.len().saturating_sub(n);
    entries
        .iter()
        .skip(skip)
        .map(|(signed_at, visitor)| GuestbookEntry {
            signed_at: *signed_at,
            visitor: visitor.clone(),
        })
        .collect()
}

/// A guestbook kept in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryGuestbook {
    ledger: Ledger,
}

impl MemoryGuestbook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Guestbook for MemoryGuestbook {
    fn sign(&mut self, room: &RoomId, entry: GuestbookEntry) -> Result<()> {
        append(&mut self.ledger, room, entry);
        Ok(())
    }

    fn last(&self, room: &RoomId, n: usize) -> Result<Vec<GuestbookEntry>> {
        Ok(tail(&self.ledger, room, n))
    }
}

/// A guestbook stored as one `MessagePack` file.
#[derive(Clone, Debug)]
pub struct FileGuestbook {
    path: PathBuf,
}

impl FileGuestbook {
    /// Creates a book backed by `path`. The file is created on first
    /// signature.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> Result<Ledger> {
        match fs::read(&self.path) {
            Ok(bytes) => from_bytes(&bytes),
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(Ledger::new()),
            Err(e) => Err(io_error("read", &self.path, &e)),
        }
    }
}

impl Guestbook for FileGuestbook {
    fn sign(&mut self, room: &RoomId, entry: GuestbookEntry) -> Result<()> {
        let mut ledger = self.read()?;
        let name = entry.visitor.name.clone();
        append(&mut ledger, room, entry);

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| io_error("create", dir, &e))?;
        }
        write_atomic(&self.path, &to_bytes(&ledger)?)?;

        info!(%room, visitor = %name, "guestbook signed");
        Ok(())
    }

    fn last(&self, room: &RoomId, n: usize) -> Result<Vec<GuestbookEntry>> {
        Ok(tail(&self.read()?, room, n))
    }
}

/// The entries as a bordered table.
#[must_use]
pub fn render(entries: &[GuestbookEntry]) -> String {
    if entries.is_empty() {
        return "No previous entries found".to_string();
    }

    let mut out = format!("Showing the last {SHOWN_ENTRIES} entries\n\n");
    out.push_str(".--------------------------+--------------------------+---------------------.\n");
    let _ = writeln!(out, "| {:25}| {:25}| {:20}|", "Date", "Name", "IP");
    out.push_str("+--------------------------+--------------------------+---------------------+\n");
    for entry in entries {
        let date = entry.signed_at.format("%d-%m-%Y %H:%M:%S").to_string();
        let _ = writeln!(
            out,
            "| {:25.24}| {:25.24}| {:20}|",
            date, entry.visitor.name, entry.visitor.address
        );
    }
    out.push_str("'--------------------------+--------------------------+---------------------'");
    out
}
