//! Resource catalog: maps command names to data files on disk.

use crate::domain::ports::ResourceStore;
use crate::utils::error::Result;
use crate::utils::validation::is_valid_command_name;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Commands handled by the router itself; resources may not shadow them.
pub const RESERVED_COMMANDS: [&str; 2] = ["start", "help"];

/// Read-only `command name -> file` table built once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandTable {
    entries: BTreeMap<String, PathBuf>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resource. An existing entry with the same name is replaced.
    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        self.entries.insert(name.into(), path.into());
    }

    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Scans `dir` (non-recursively) for files ending in `.{extension}` and maps
/// each file stem to its path.
///
/// Stems Telegram cannot route as commands, and stems that collide with the
/// built-in commands, are skipped with a warning.
pub fn scan_directory(dir: &Path, extension: &str) -> Result<CommandTable> {
    let mut table = CommandTable::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            warn!(path = %path.display(), "skipping file with non UTF-8 name");
            continue;
        };

        if !is_valid_command_name(stem) {
            warn!(
                name = stem,
                "skipping resource: Telegram commands allow only a-z, 0-9 and _ (max 32)"
            );
            continue;
        }
        if RESERVED_COMMANDS.contains(&stem) {
            warn!(name = stem, "skipping resource: name is a built-in command");
            continue;
        }

        debug!(name = stem, path = %path.display(), "registered resource");
        let name = stem.to_string();
        table.insert(name, path);
    }

    Ok(table)
}

/// Reads resources straight from the local file system.
#[derive(Debug, Clone, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }
}

impl ResourceStore for LocalStore {
    async fn read_resource(&self, path: &Path) -> Result<Vec<u8>> {
        let data = tokio::fs::read(path).await?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scan_picks_json_files_by_stem() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("prices.json"), "[]").unwrap();
        std::fs::write(dir.path().join("moon_set.json"), "{}").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        std::fs::create_dir(dir.path().join("nested.json")).unwrap();

        let table = scan_directory(dir.path(), "json").unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["moon_set", "prices"]);
        assert_eq!(table.get("prices"), Some(dir.path().join("prices.json").as_path()));
        assert!(!table.contains("notes"));
        assert!(!table.contains("nested"));
    }

    #[test]
    fn test_scan_skips_unroutable_and_reserved_names() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Prices.json"), "[]").unwrap();
        std::fs::write(dir.path().join("my-file.json"), "[]").unwrap();
        std::fs::write(dir.path().join("help.json"), "[]").unwrap();
        std::fs::write(dir.path().join("ok_1.json"), "[]").unwrap();

        let table = scan_directory(dir.path(), "json").unwrap();
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["ok_1"]);
    }

    #[test]
    fn test_scan_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        assert!(scan_directory(&dir.path().join("absent"), "json").is_err());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut table = CommandTable::new();
        table.insert("prices", "/data/prices.json");
        assert!(table.get("Prices").is_none());
    }

    #[test]
    fn test_insert_overwrites_silently() {
        let mut table = CommandTable::new();
        table.insert("prices", "/a/prices.json");
        table.insert("prices", "/b/prices.json");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("prices"), Some(Path::new("/b/prices.json")));
    }

    #[tokio::test]
    async fn test_local_store_reads_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "[1]").unwrap();

        let bytes = LocalStore::new().read_resource(&path).await.unwrap();
        assert_eq!(bytes, b"[1]");
    }
}
