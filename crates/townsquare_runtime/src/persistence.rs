//! Saved games in `MessagePack`.
//!
//! A save is the four parts of a [`Snapshot`], keyed by the player's name.
//! [`FileSaveStore`] keeps one file per part; [`MemorySaveStore`] keeps the
//! encoded bytes in memory.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind as IoErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use townsquare_foundation::{Error, ErrorKind, Result};
use townsquare_world::Snapshot;
use tracing::{debug, info};

/// Serializes a value to `MessagePack` with named fields.
///
/// # Errors
///
/// Returns `SerializationError` if encoding fails.
pub fn to_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(value)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Deserializes a value from `MessagePack` bytes.
///
/// # Errors
///
/// Returns `SerializationError` if decoding fails.
pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    rmp_serde::from_slice(bytes)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Whole-snapshot persistence keyed by owner.
pub trait SaveStore {
    /// Writes every part of `snapshot` for `owner`, replacing any earlier save.
    ///
    /// # Errors
    ///
    /// Returns `IoError` or `SerializationError` if the save cannot be written.
    fn save(&mut self, owner: &str, snapshot: &Snapshot) -> Result<()>;

    /// Reads the save for `owner`. `Ok(None)` means there is none.
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if a save exists but is incomplete or
    /// unreadable, and `IoError` if it cannot be opened.
    fn load(&self, owner: &str) -> Result<Option<Snapshot>>;
}

// =============================================================================
// Files
// =============================================================================

const PLAYER: &str = "player";
const INVENTORY: &str = "inventory";
const ROOMS: &str = "rooms";
const NPCS: &str = "npcs";

/// Saves under a directory as `<owner>.player`, `<owner>.inventory`,
/// `<owner>.rooms`, and `<owner>.npcs`.
#[derive(Clone, Debug)]
pub struct FileSaveStore {
    dir: PathBuf,
}

impl FileSaveStore {
    /// Creates a store rooted at `dir`. The directory is created on first save.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory saves live in.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, owner: &str, part: &str) -> PathBuf {
        self.dir.join(format!("{}.{part}", file_stem(owner)))
    }

    fn write_part<T: Serialize>(&self, owner: &str, part: &str, value: &T) -> Result<()> {
        write_atomic(&self.path(owner, part), &to_bytes(value)?)
    }

    fn read_part<T: DeserializeOwned>(&self, owner: &str, part: &str) -> Result<T> {
        let path = self.path(owner, part);
        match fs::read(&path) {
            Ok(bytes) => from_bytes(&bytes),
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                Err(Error::new(ErrorKind::SerializationError(format!(
                    "incomplete save: '{}' is missing",
                    path.display()
                ))))
            }
            Err(e) => Err(io_error("read", &path, &e)),
        }
    }
}

impl SaveStore for FileSaveStore {
    fn save(&mut self, owner: &str, snapshot: &Snapshot) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| io_error("create", &self.dir, &e))?;

        self.write_part(owner, PLAYER, &snapshot.player)?;
        self.write_part(owner, INVENTORY, &snapshot.inventory)?;
        self.write_part(owner, ROOMS, &snapshot.rooms)?;
        self.write_part(owner, NPCS, &snapshot.npcs)?;

        info!(owner, dir = %self.dir.display(), "game saved");
        Ok(())
    }

    fn load(&self, owner: &str) -> Result<Option<Snapshot>> {
        if !self.path(owner, PLAYER).exists() {
            debug!(owner, "no save found");
            return Ok(None);
        }

        let snapshot = Snapshot {
            player: self.read_part(owner, PLAYER)?,
            inventory: self.read_part(owner, INVENTORY)?,
            rooms: self.read_part(owner, ROOMS)?,
            npcs: self.read_part(owner, NPCS)?,
        };

        info!(owner, dir = %self.dir.display(), "game loaded");
        Ok(Some(snapshot))
    }
}

/// Keeps file names inside the save directory whatever the player calls
/// themselves.
fn file_stem(owner: &str) -> String {
    let stem: String = owner
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() { "_".to_string() } else { stem }
}

/// Writes to a sibling temporary file, then renames it into place.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let file = File::create(&tmp).map_err(|e| io_error("create", &tmp, &e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(bytes)
        .map_err(|e| io_error("write to", &tmp, &e))?;
    writer.flush().map_err(|e| io_error("flush", &tmp, &e))?;
    drop(writer);

    fs::rename(&tmp, path).map_err(|e| io_error("replace", path, &e))
}

pub(crate) fn io_error(action: &str, path: &Path, e: &std::io::Error) -> Error {
    Error::new(ErrorKind::IoError(format!(
        "failed to {action} '{}': {e}",
        path.display()
    )))
}

// =============================================================================
// Memory
// =============================================================================

/// Keeps encoded saves in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySaveStore {
    saves: HashMap<String, Vec<u8>>,
}

impl MemorySaveStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of owners with a save.
    #[must_use]
    pub fn len(&self) -> usize {
        self.saves.len()
    }

    /// Returns true if nothing has been saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.saves.is_empty()
    }
}

impl SaveStore for MemorySaveStore {
    fn save(&mut self, owner: &str, snapshot: &Snapshot) -> Result<()> {
        self.saves.insert(owner.to_string(), to_bytes(snapshot)?);
        Ok(())
    }

    fn load(&self, owner: &str) -> Result<Option<Snapshot>> {
        self.saves
            .get(owner)
            .map(Vec::as_slice)
            .map(from_bytes)
            .transpose()
    }
}
