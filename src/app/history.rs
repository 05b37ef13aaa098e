use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use super::error::Result;

/// History is capped; the oldest entries beyond this are discarded.
pub const MAX_HISTORY_ITEMS: usize = 50;

/// One persisted record of a completed calculation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub expression: String,
    pub result: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Bounded, newest-first log of past calculations.
///
/// The JSON file is the source of truth: every operation reloads it,
/// mutates, and writes it back. When storage is unavailable the in-memory
/// copy carries the session and writes are reported to stderr and dropped.
pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
    id_counter: u64,
}

/// Returns the history file path: data_dir/calcpad/history.json
pub fn history_path() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("calcpad");
    path.push("history.json");
    path
}

impl HistoryStore {
    pub fn open() -> Self {
        Self::with_path(history_path())
    }

    pub fn with_path(path: PathBuf) -> Self {
        let entries = read_entries(&path).unwrap_or_default();
        Self {
            path,
            entries,
            id_counter: 0,
        }
    }

    /// Prepend a new entry, evicting past the cap, and persist.
    pub fn append(&mut self, expression: &str, result: &str) -> HistoryEntry {
        self.reload();

        let entry = HistoryEntry {
            id: self.mint_id(),
            expression: expression.to_string(),
            result: result.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        self.entries.insert(0, entry.clone());
        self.entries.truncate(MAX_HISTORY_ITEMS);
        self.persist();
        entry
    }

    /// Remove the entry with the given id. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) {
        self.reload();
        self.entries.retain(|e| e.id != id);
        self.persist();
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    /// The current log, newest first.
    pub fn list(&mut self) -> &[HistoryEntry] {
        self.reload();
        &self.entries
    }

    pub fn len(&mut self) -> usize {
        self.list().len()
    }

    pub fn is_empty(&mut self) -> bool {
        self.len() == 0
    }

    /// Re-read the backing file so another instance's writes are picked up.
    /// A failed read keeps the in-memory log for this session.
    fn reload(&mut self) {
        if let Ok(entries) = read_entries(&self.path) {
            self.entries = entries;
        }
    }

    fn persist(&self) {
        if let Err(err) = write_entries(&self.path, &self.entries) {
            eprintln!("Failed to save history: {}", err);
        }
    }

    fn mint_id(&mut self) -> String {
        self.id_counter += 1;
        let mut hasher = DefaultHasher::new();
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
            .hash(&mut hasher);
        self.id_counter.hash(&mut hasher);
        format!("{:016x}", hasher.finish())
    }
}

fn read_entries(path: &Path) -> Result<Vec<HistoryEntry>> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn write_entries(path: &Path, entries: &[HistoryEntry]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store(dir: &TempDir) -> HistoryStore {
        HistoryStore::with_path(dir.path().join("history.json"))
    }

    #[test]
    fn test_starts_empty() {
        let dir = TempDir::new().unwrap();
        let mut store = temp_store(&dir);
        assert!(store.is_empty());
    }

    #[test]
    fn test_append_prepends() {
        let dir = TempDir::new().unwrap();
        let mut store = temp_store(&dir);
        store.append("1+1", "2");
        store.append("2+2", "4");

        let entries = store.list();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].expression, "2+2");
        assert_eq!(entries[1].expression, "1+1");
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let dir = TempDir::new().unwrap();
        let mut store = temp_store(&dir);
        for i in 0..51 {
            store.append(&format!("{}+0", i), &format!("{}", i));
        }

        let entries = store.list();
        assert_eq!(entries.len(), MAX_HISTORY_ITEMS);
        // 51st append is most recent; the original oldest ("0+0") is gone
        assert_eq!(entries[0].expression, "50+0");
        assert_eq!(entries.last().unwrap().expression, "1+0");
    }

    #[test]
    fn test_remove_by_id() {
        let dir = TempDir::new().unwrap();
        let mut store = temp_store(&dir);
        let keep = store.append("1+1", "2");
        let drop = store.append("2+2", "4");

        store.remove(&drop.id);

        let entries = store.list();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, keep.id);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut store = temp_store(&dir);
        store.append("1+1", "2");

        store.remove("no-such-id");

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear() {
        let dir = TempDir::new().unwrap();
        let mut store = temp_store(&dir);
        store.append("1+1", "2");
        store.append("2+2", "4");

        store.clear();

        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let dir = TempDir::new().unwrap();
        let mut store = temp_store(&dir);
        let a = store.append("1+1", "2");
        let b = store.append("1+1", "2");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_entries_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");

        let mut store = HistoryStore::with_path(path.clone());
        store.append("6*7", "42");
        drop(store);

        let mut reopened = HistoryStore::with_path(path);
        let entries = reopened.list();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].expression, "6*7");
        assert_eq!(entries[0].result, "42");
    }

    #[test]
    fn test_corrupt_file_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "{not json").unwrap();

        let mut store = HistoryStore::with_path(path);
        assert!(store.is_empty());
    }

    #[test]
    fn test_persisted_shape_uses_camel_case_timestamp() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        let mut store = HistoryStore::with_path(path.clone());
        store.append("1+1", "2");

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"createdAt\""));
        assert!(raw.contains("\"expression\""));
    }
}
