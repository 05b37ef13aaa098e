use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::Result;

/// The in-progress formula, written on every edit so an interrupted
/// session can pick up where it left off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftData {
    pub formula: String,
}

/// Returns the autosave file path: data_dir/calcpad/autosave.json
pub fn autosave_path() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("calcpad");
    path.push("autosave.json");
    path
}

/// Save the current draft formula to disk.
pub fn save_draft(formula: &str) -> Result<()> {
    write_draft(&autosave_path(), formula)
}

/// Load the draft formula from disk, if there is one worth restoring.
pub fn load_draft() -> Option<String> {
    read_draft(&autosave_path())
}

/// Delete the autosave file.
pub fn clear_draft() {
    let _ = fs::remove_file(autosave_path());
}

fn write_draft(path: &Path, formula: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string(&DraftData {
        formula: formula.to_string(),
    })?;
    fs::write(path, json)?;
    Ok(())
}

fn read_draft(path: &Path) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    let draft: DraftData = serde_json::from_str(&contents).ok()?;

    // A pristine "0" is not worth restoring
    if draft.formula.is_empty() || draft.formula == "0" {
        return None;
    }

    Some(draft.formula)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_draft_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("autosave.json");

        write_draft(&path, "12 + 34").unwrap();
        assert_eq!(read_draft(&path), Some("12 + 34".to_string()));
    }

    #[test]
    fn test_pristine_draft_is_not_restored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("autosave.json");

        write_draft(&path, "0").unwrap();
        assert_eq!(read_draft(&path), None);

        write_draft(&path, "").unwrap();
        assert_eq!(read_draft(&path), None);
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_draft(&dir.path().join("autosave.json")), None);
    }

    #[test]
    fn test_corrupt_file_is_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("autosave.json");
        fs::write(&path, "][").unwrap();
        assert_eq!(read_draft(&path), None);
    }
}
