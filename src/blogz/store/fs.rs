use super::PostStore;
use crate::error::{BlogError, Result};
use crate::model::Post;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Stores the whole collection as a JSON array in a single file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the data file. A bare file name lives in the working directory.
    fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(BlogError::Io)?;
        }
        Ok(())
    }

    fn tmp_path(&self, dir: &Path) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(DEFAULT_DATA_FILE);
        dir.join(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl PostStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Post>> {
        let content = fs::read_to_string(&self.path).map_err(BlogError::Io)?;
        let posts: Vec<Post> =
            serde_json::from_str(&content).map_err(BlogError::Serialization)?;
        debug!(path = %self.path.display(), count = posts.len(), "loaded posts");
        Ok(posts)
    }

    fn save(&self, posts: &[Post]) -> Result<()> {
        let dir = self.dir();
        self.ensure_dir(&dir)?;

        let content = serde_json::to_string_pretty(posts).map_err(BlogError::Serialization)?;

        // Atomic write: the data file is either the old or the new collection
        let tmp_file = self.tmp_path(&dir);
        if let Err(e) = fs::write(&tmp_file, content) {
            let _ = fs::remove_file(&tmp_file);
            return Err(BlogError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(BlogError::Io(e));
        }

        debug!(path = %self.path.display(), count = posts.len(), "saved posts");
        Ok(())
    }

    fn is_initialized(&self) -> Result<bool> {
        Ok(self.path.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PostDraft;
    use tempfile::TempDir;

    fn setup() -> (TempDir, JsonFileStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("data.json"));
        (dir, store)
    }

    #[test]
    fn missing_file_fails_to_load() {
        let (_dir, store) = setup();
        assert!(!store.is_initialized().unwrap());
        assert!(matches!(store.load(), Err(BlogError::Io(_))));
    }

    #[test]
    fn corrupt_file_fails_to_load() {
        let (_dir, store) = setup();
        fs::write(store.path(), "{not json").unwrap();
        assert!(matches!(store.load(), Err(BlogError::Serialization(_))));
    }

    #[test]
    fn save_then_load_preserves_order() {
        let (_dir, store) = setup();
        let posts = vec![
            Post::new(5, PostDraft::new("b", "second", "")),
            Post::new(2, PostDraft::new("a", "first", "text")),
        ];
        store.save(&posts).unwrap();
        assert!(store.is_initialized().unwrap());
        assert_eq!(store.load().unwrap(), posts);
    }

    #[test]
    fn save_creates_missing_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/deeper/posts.json"));
        store.save(&[]).unwrap();
        assert_eq!(store.load().unwrap(), Vec::<Post>::new());
    }

    #[test]
    fn reads_files_written_by_other_tools() {
        let (_dir, store) = setup();
        fs::write(
            store.path(),
            r#"[{"id": 1, "author": "Ann", "title": "Hello", "content": "World"}]"#,
        )
        .unwrap();
        let posts = store.load().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Hello");
    }
}
