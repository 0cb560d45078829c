//! Design store: whole-snapshot get/put keyed by design id

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use shared::{DesignId, DesignSnapshot};

/// Errors from a design store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid design JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("design '{0}' not found")]
    NotFound(DesignId),
    #[error("no data directory available on this platform")]
    NoDataDir,
}

/// Atomic whole-snapshot storage
pub trait DesignStore {
    /// Insert or replace the snapshot with the same id
    fn put(&mut self, snapshot: &DesignSnapshot) -> Result<(), StoreError>;
    fn get(&self, id: &str) -> Result<DesignSnapshot, StoreError>;
    /// All stored designs, most recently edited first
    fn list(&self) -> Result<Vec<DesignSnapshot>, StoreError>;
    fn delete(&mut self, id: &str) -> Result<(), StoreError>;
}

/// In-memory store
#[derive(Default)]
pub struct MemoryDesignStore {
    designs: HashMap<DesignId, DesignSnapshot>,
}

impl DesignStore for MemoryDesignStore {
    fn put(&mut self, snapshot: &DesignSnapshot) -> Result<(), StoreError> {
        self.designs.insert(snapshot.id.clone(), snapshot.clone());
        Ok(())
    }

    fn get(&self, id: &str) -> Result<DesignSnapshot, StoreError> {
        self.designs
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn list(&self) -> Result<Vec<DesignSnapshot>, StoreError> {
        let mut all: Vec<_> = self.designs.values().cloned().collect();
        all.sort_by(|a, b| b.last_edited.cmp(&a.last_edited));
        Ok(all)
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        self.designs
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

/// One `<id>.json` file per design inside a directory
pub struct FileDesignStore {
    root: PathBuf,
}

impl FileDesignStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store under the platform data directory
    pub fn open_default() -> Result<Self, StoreError> {
        let dirs = directories::ProjectDirs::from("com", "roomcraft", "roomcraft")
            .ok_or(StoreError::NoDataDir)?;
        Ok(Self::new(dirs.data_dir().join("designs")))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the thumbnail for a design lives
    pub fn thumbnail_path(&self, id: &str) -> PathBuf {
        self.root.join("thumbnails").join(format!("{}.png", file_stem(id)))
    }

    fn design_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.json", file_stem(id)))
    }
}

/// Keep ids from escaping the store directory
fn file_stem(id: &str) -> String {
    id.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

impl DesignStore for FileDesignStore {
    fn put(&mut self, snapshot: &DesignSnapshot) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.root)?;
        let path = self.design_path(&snapshot.id);
        let tmp = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(snapshot)?;
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &path)?;
        tracing::info!("Saved design '{}' to {}", snapshot.name, path.display());
        Ok(())
    }

    fn get(&self, id: &str) -> Result<DesignSnapshot, StoreError> {
        let path = self.design_path(id);
        if !path.exists() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        let json = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn list(&self) -> Result<Vec<DesignSnapshot>, StoreError> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        let mut all = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let parsed = std::fs::read_to_string(&path)
                .map_err(StoreError::from)
                .and_then(|json| serde_json::from_str::<DesignSnapshot>(&json).map_err(StoreError::from));
            match parsed {
                Ok(snapshot) => all.push(snapshot),
                Err(e) => tracing::warn!("Skipping unreadable design {}: {e}", path.display()),
            }
        }
        all.sort_by(|a, b| b.last_edited.cmp(&a.last_edited));
        Ok(all)
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let path = self.design_path(id);
        if !path.exists() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        std::fs::remove_file(path)?;
        let thumb = self.thumbnail_path(id);
        if thumb.exists() {
            std::fs::remove_file(thumb)?;
        }
        Ok(())
    }
}

/// Read a snapshot from an arbitrary JSON file (`--design`, File > Open)
pub fn read_snapshot_file(path: &Path) -> Result<DesignSnapshot, StoreError> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Write a snapshot to an arbitrary JSON file (File > Save As)
pub fn write_snapshot_file(path: &Path, snapshot: &DesignSnapshot) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(snapshot)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::scene::SceneState;

    fn snapshot(id: &str) -> DesignSnapshot {
        let mut scene = SceneState::default();
        scene.add_furniture_item(crate::fixtures::item("a", shared::FurnitureKind::Table, 0.0, 0.0));
        scene.to_snapshot(id, "Test", "")
    }

    #[test]
    fn test_memory_store_upsert() {
        let mut store = MemoryDesignStore::default();
        let mut snap = snapshot("d1");
        store.put(&snap).unwrap();
        snap.name = "Renamed".into();
        store.put(&snap).unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
        assert_eq!(store.get("d1").unwrap().name, "Renamed");
        assert!(matches!(store.get("nope"), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileDesignStore::new(dir.path());
        let snap = snapshot("d-1");
        store.put(&snap).unwrap();
        assert_eq!(store.get("d-1").unwrap(), snap);
        assert_eq!(store.list().unwrap().len(), 1);
        store.delete("d-1").unwrap();
        assert!(matches!(store.get("d-1"), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_file_store_list_skips_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileDesignStore::new(dir.path());
        store.put(&snapshot("good")).unwrap();
        std::fs::write(dir.path().join("bad.json"), "{ not json").unwrap();
        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "good");
    }

    #[test]
    fn test_ids_cannot_escape_root() {
        let store = FileDesignStore::new("/tmp/designs");
        assert_eq!(store.design_path("../etc/passwd"), PathBuf::from("/tmp/designs/___etc_passwd.json"));
    }

    #[test]
    fn test_snapshot_file_helpers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("room.json");
        let snap = snapshot("x");
        write_snapshot_file(&path, &snap).unwrap();
        assert_eq!(read_snapshot_file(&path).unwrap(), snap);
        assert!(matches!(
            read_snapshot_file(&dir.path().join("missing.json")),
            Err(StoreError::Io(_))
        ));
    }
}
