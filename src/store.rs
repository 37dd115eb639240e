//! Todo store with whole-file JSON persistence.
//!
//! The store keeps an ordered in-memory list of items and rewrites the
//! backing file as a pretty-printed JSON array after every mutation. Reads
//! and writes are blocking whole-file operations; the file handle is scoped
//! to each call. There is no locking: a second process writing the same file
//! wins or loses by last write.
//!
//! `save`/`load` surface a `Result` so embedding callers can react to I/O
//! problems; the mutating operations keep persistence failures non-fatal by
//! logging and returning normally, so the in-memory list can diverge from
//! disk after an error.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, warn};

use crate::error::Result;
use crate::item::TodoItem;

/// Ordered collection of todo items bound to one backing file.
pub struct TodoStore {
    path: PathBuf,
    items: Vec<TodoItem>,
}

impl TodoStore {
    /// Open a store backed by the given file, loading existing state.
    ///
    /// A missing file yields an empty store. An unreadable or malformed
    /// file is logged and also yields an empty store; construction itself
    /// never fails.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let mut store = Self {
            path: path.as_ref().to_path_buf(),
            items: Vec::new(),
        };
        if let Err(e) = store.load() {
            warn!("Failed to load {}: {}; starting empty", store.path.display(), e);
            store.items.clear();
        }
        store
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a new item with an auto-generated id, append it, persist,
    /// and return the created item.
    ///
    /// Always succeeds; a persistence failure is logged and swallowed.
    pub fn add(&mut self, text: impl Into<String>) -> TodoItem {
        let item = TodoItem::new(text);
        self.items.push(item.clone());
        self.persist();
        item
    }

    /// Remove every item whose id matches.
    ///
    /// Returns true and persists only if the list shrank; a miss returns
    /// false without touching the file. Matching is an equality filter over
    /// the whole list, so duplicate ids all go in one call (unlike `toggle`,
    /// which stops at the first match).
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Flip the completion flag of the first item with the matching id.
    ///
    /// Returns true and persists on a match, false without persisting
    /// otherwise. Only the first match is affected even if ids collide.
    pub fn toggle(&mut self, id: i64) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.toggle();
                self.persist();
                true
            }
            None => false,
        }
    }

    /// All items in insertion order.
    pub fn get_all(&self) -> &[TodoItem] {
        &self.items
    }

    /// Completed items in insertion order, computed fresh on each call.
    pub fn get_completed(&self) -> Vec<TodoItem> {
        self.items.iter().filter(|i| i.completed).cloned().collect()
    }

    /// Pending items in insertion order, computed fresh on each call.
    pub fn get_pending(&self) -> Vec<TodoItem> {
        self.items.iter().filter(|i| !i.completed).cloned().collect()
    }

    /// Write all items to the backing file as a pretty-printed JSON array.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.items)?;
        fs::write(&self.path, json)?;
        debug!("Saved {} items to {}", self.items.len(), self.path.display());
        Ok(())
    }

    /// Replace the in-memory list with the contents of the backing file.
    ///
    /// A missing file clears the list and is not an error. Unreadable or
    /// malformed content propagates; `open` degrades that to an empty store.
    pub fn load(&mut self) -> Result<()> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                self.items.clear();
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        self.items = serde_json::from_str(&content)?;
        debug!("Loaded {} items from {}", self.items.len(), self.path.display());
        Ok(())
    }

    /// Save after a mutation, logging instead of failing.
    fn persist(&self) {
        if let Err(e) = self.save() {
            error!("Failed to save {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TodoStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = TodoStore::open(temp_dir.path().join("todos.json"));
        (store, temp_dir)
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let (store, _temp) = create_test_store();
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn test_add_appends_pending_item() {
        let (mut store, _temp) = create_test_store();

        let item = store.add("buy milk");

        assert_eq!(store.get_all().len(), 1);
        assert_eq!(store.get_all()[0], item);
        assert_eq!(item.text, "buy milk");
        assert!(!item.completed);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let (mut store, _temp) = create_test_store();

        store.add("first");
        store.add("second");
        store.add("third");

        let texts: Vec<&str> = store.get_all().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_remove_existing_item() {
        let (mut store, _temp) = create_test_store();
        let item = store.add("doomed");

        assert!(store.remove(item.id));
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn test_remove_miss_returns_false_and_keeps_items() {
        let (mut store, _temp) = create_test_store();
        store.add("keep me");

        assert!(!store.remove(999));
        assert_eq!(store.get_all().len(), 1);
    }

    #[test]
    fn test_remove_miss_does_not_touch_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("todos.json");
        let mut store = TodoStore::open(&path);

        assert!(!store.remove(999));
        assert!(!path.exists());
    }

    #[test]
    fn test_remove_takes_all_duplicate_ids() {
        let (mut store, _temp) = create_test_store();
        store.items.push(TodoItem::with_id("a", 1));
        store.items.push(TodoItem::with_id("b", 1));
        store.items.push(TodoItem::with_id("c", 2));

        assert!(store.remove(1));
        let texts: Vec<&str> = store.get_all().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["c"]);
    }

    #[test]
    fn test_toggle_flips_first_match_only() {
        let (mut store, _temp) = create_test_store();
        store.items.push(TodoItem::with_id("a", 1));
        store.items.push(TodoItem::with_id("b", 1));

        assert!(store.toggle(1));
        assert!(store.get_all()[0].completed);
        assert!(!store.get_all()[1].completed);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let (mut store, _temp) = create_test_store();
        let item = store.add("flip me");

        assert!(store.toggle(item.id));
        assert!(store.toggle(item.id));
        assert!(!store.get_all()[0].completed);
    }

    #[test]
    fn test_toggle_miss_returns_false() {
        let (mut store, _temp) = create_test_store();
        assert!(!store.toggle(42));
    }

    #[test]
    fn test_completed_and_pending_views() {
        let (mut store, _temp) = create_test_store();
        let a = store.add("a");
        store.add("b");

        store.toggle(a.id);

        let completed_items = store.get_completed();
        let completed: Vec<&str> = completed_items.iter().map(|i| i.text.as_str()).collect();
        let pending_items = store.get_pending();
        let pending: Vec<&str> = pending_items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(completed, vec!["a"]);
        assert_eq!(pending, vec!["b"]);
    }

    #[test]
    fn test_save_writes_pretty_json_array() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("todos.json");
        let mut store = TodoStore::open(&path);
        store.add("pretty");

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n  {"));
        assert!(content.contains("\"text\": \"pretty\""));
    }

    #[test]
    fn test_save_error_surfaces_to_caller() {
        let temp_dir = TempDir::new().unwrap();
        // Backing path is a directory, so writes fail
        let store = TodoStore::open(temp_dir.path());
        assert!(store.save().is_err());
    }

    #[test]
    fn test_add_survives_save_failure() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = TodoStore::open(temp_dir.path());

        let item = store.add("still here");

        assert_eq!(store.get_all().len(), 1);
        assert_eq!(store.get_all()[0], item);
    }

    #[test]
    fn test_open_malformed_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("todos.json");
        fs::write(&path, "not json at all").unwrap();

        let store = TodoStore::open(&path);
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn test_load_propagates_malformed_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("todos.json");
        fs::write(&path, "[{\"id\": 1}]").unwrap();

        let mut store = TodoStore::open(&path);
        assert!(store.load().is_err());
    }

    #[test]
    fn test_load_missing_file_clears_items() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("todos.json");
        let mut store = TodoStore::open(&path);
        store.add("transient");

        fs::remove_file(&path).unwrap();
        store.load().unwrap();

        assert!(store.get_all().is_empty());
    }

    #[test]
    fn test_roundtrip_through_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("todos.json");

        let original = {
            let mut store = TodoStore::open(&path);
            store.add("a");
            let b = store.add("b");
            store.toggle(b.id);
            store.get_all().to_vec()
        };

        let store = TodoStore::open(&path);
        assert_eq!(store.get_all(), original.as_slice());
    }
}
