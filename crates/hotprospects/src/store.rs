//! Prospect store.
//!
//! Owns the list of prospects and mirrors it to a JSON file. Every mutation
//! rewrites the whole file. Loading and saving are best-effort: failures are
//! logged and the store carries on with whatever it has in memory.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use crate::error::{Error, Result};
use crate::prospect::{Prospect, ProspectId};

/// Capacity of the change event channel.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// A change to the store's collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A prospect was appended.
    Added(Prospect),
    /// A toggle is about to happen; carries the record as it is now.
    WillToggle(Prospect),
    /// A toggle happened; carries the replacement record.
    Toggled(Prospect),
}

/// The list of prospects, synchronized to a JSON file.
///
/// The store is meant to be owned by a single task. Observers receive
/// [`StoreEvent`]s through [`ProspectStore::subscribe`].
#[derive(Debug)]
pub struct ProspectStore {
    /// Path to the JSON file.
    path: PathBuf,
    /// Prospects in insertion order.
    people: Vec<Prospect>,
    /// Change notifications.
    events: broadcast::Sender<StoreEvent>,
}

impl ProspectStore {
    /// Load the store from the given file.
    ///
    /// A missing, unreadable or malformed file yields an empty store. A file
    /// that exists but cannot be decoded is renamed to
    /// `<name>.corrupt-<timestamp>` first so the next save does not destroy it.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let people = read_people(&path);
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            path,
            people,
            events,
        }
    }

    /// Get the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All prospects in insertion order.
    #[must_use]
    pub fn people(&self) -> &[Prospect] {
        &self.people
    }

    /// Number of prospects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether the store holds no prospects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Look up a prospect by identifier.
    #[must_use]
    pub fn get(&self, id: ProspectId) -> Option<&Prospect> {
        self.people.iter().find(|p| p.id() == id)
    }

    /// Resolve a full identifier or a unique, case-insensitive prefix of one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProspectId`] when nothing or more than one
    /// prospect matches.
    pub fn resolve_id(&self, input: &str) -> Result<ProspectId> {
        if let Ok(id) = ProspectId::parse_str(input) {
            return Ok(id);
        }

        let needle = input.trim().to_ascii_lowercase();
        if needle.is_empty() {
            return Err(Error::InvalidProspectId {
                input: input.to_string(),
            });
        }

        let mut matches = self
            .people
            .iter()
            .map(Prospect::id)
            .filter(|id| id.to_string().starts_with(&needle));

        match (matches.next(), matches.next()) {
            (Some(id), None) => Ok(id),
            _ => Err(Error::InvalidProspectId {
                input: input.to_string(),
            }),
        }
    }

    /// Subscribe to change events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Append a prospect and persist the collection.
    ///
    /// No deduplication is performed.
    pub fn add(&mut self, prospect: Prospect) {
        debug!("Adding prospect {}", prospect.id());
        self.people.push(prospect.clone());
        self.save();
        self.emit(StoreEvent::Added(prospect));
    }

    /// Flip the contacted flag of the prospect with the given identifier.
    ///
    /// Observers see [`StoreEvent::WillToggle`] with the old record before the
    /// change, then [`StoreEvent::Toggled`] with the new one. Returns the
    /// replacement record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProspectNotFound`] if no prospect has that identifier;
    /// the collection is left unchanged.
    pub fn toggle(&mut self, id: ProspectId) -> Result<Prospect> {
        let index = self
            .people
            .iter()
            .position(|p| p.id() == id)
            .ok_or(Error::ProspectNotFound { id })?;

        let current = &self.people[index];
        self.emit(StoreEvent::WillToggle(current.clone()));

        let updated = current.toggled();
        self.people[index] = updated.clone();
        debug!(
            "Toggled prospect {} to contacted={}",
            id,
            updated.is_contacted()
        );

        self.save();
        self.emit(StoreEvent::Toggled(updated.clone()));
        Ok(updated)
    }

    /// Get store statistics.
    #[must_use]
    pub fn stats(&self) -> StoreStats {
        let contacted = self.people.iter().filter(|p| p.is_contacted()).count();
        let file_size_bytes = std::fs::metadata(&self.path).map_or(0, |m| m.len());

        StoreStats {
            total: self.people.len(),
            contacted,
            uncontacted: self.people.len() - contacted,
            file_size_bytes,
        }
    }

    fn emit(&self, event: StoreEvent) {
        // Sending only fails when nobody is subscribed
        let _ = self.events.send(event);
    }

    /// Persist the collection, logging failures.
    fn save(&self) {
        if let Err(e) = self.write_file() {
            error!("Failed to save prospects to {}: {}", self.path.display(), e);
        }
    }

    fn write_file(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let encoded = serde_json::to_vec(&self.people)?;
        std::fs::write(&self.path, encoded)?;
        debug!(
            "Saved {} prospects to {}",
            self.people.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Statistics about the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    /// Total number of prospects.
    pub total: usize,
    /// Prospects marked contacted.
    pub contacted: usize,
    /// Prospects not yet contacted.
    pub uncontacted: usize,
    /// Size of the backing file in bytes (0 if it does not exist).
    pub file_size_bytes: u64,
}

fn read_people(path: &Path) -> Vec<Prospect> {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No prospects file at {}, starting empty", path.display());
            return Vec::new();
        }
        Err(e) => {
            warn!("Could not read {}: {}, starting empty", path.display(), e);
            return Vec::new();
        }
    };

    match serde_json::from_slice::<Vec<Prospect>>(&data) {
        Ok(people) => {
            info!("Loaded {} prospects from {}", people.len(), path.display());
            people
        }
        Err(e) => {
            warn!("Could not decode {}: {}, starting empty", path.display(), e);
            quarantine(path);
            Vec::new()
        }
    }
}

/// Move an undecodable file out of the way.
fn quarantine(path: &Path) -> Option<PathBuf> {
    let file_name = path.file_name()?.to_string_lossy();
    let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3fZ");
    let target = path.with_file_name(format!("{file_name}.corrupt-{stamp}"));

    match std::fs::rename(path, &target) {
        Ok(()) => {
            warn!("Moved unreadable prospects file to {}", target.display());
            Some(target)
        }
        Err(e) => {
            warn!("Could not move {} aside: {}", path.display(), e);
            None
        }
    }
}
