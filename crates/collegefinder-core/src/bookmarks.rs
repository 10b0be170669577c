//! Bookmarked colleges and their persistence.
//!
//! The set itself is plain data. [`Bookmarks`] pairs it with an injected
//! [`KeyValueStorage`] and stores it as a JSON array of ids under
//! [`BOOKMARKS_KEY`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::model::{Catalog, College};
use crate::traits::KeyValueStorage;

/// Storage key the bookmark list is saved under.
pub const BOOKMARKS_KEY: &str = "bookmarkedColleges";

/// Ordered set of bookmarked college ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkSet {
    ids: Vec<String>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from ids, dropping repeats after the first.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for id in ids {
            let id = id.into();
            if !set.contains(&id) {
                set.ids.push(id);
            }
        }
        set
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|b| b == id)
    }

    /// Add `id` if absent, remove it if present. Returns whether it is now
    /// bookmarked.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|b| b == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Bookmarked colleges in catalog order.
    pub fn saved_colleges<'a>(&self, catalog: &'a Catalog) -> Vec<&'a College> {
        catalog
            .colleges
            .iter()
            .filter(|c| self.contains(&c.id))
            .collect()
    }
}

/// A bookmark set backed by key-value storage.
pub struct Bookmarks {
    storage: Arc<dyn KeyValueStorage>,
    set: BookmarkSet,
}

impl Bookmarks {
    /// Load the saved set from `storage`.
    ///
    /// Missing, unreadable, or corrupt data yields an empty set.
    pub fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        let set = load_bookmarks(storage.as_ref());
        Self { storage, set }
    }

    pub fn set(&self) -> &BookmarkSet {
        &self.set
    }

    pub fn contains(&self, id: &str) -> bool {
        self.set.contains(id)
    }

    /// Toggle `id` and save. Returns whether it is now bookmarked.
    ///
    /// A failed save is logged and otherwise ignored; the in-memory set is
    /// still updated.
    pub fn toggle(&mut self, id: &str) -> bool {
        let now_saved = self.set.toggle(id);
        if let Err(e) = save_bookmarks(self.storage.as_ref(), &self.set) {
            tracing::warn!("failed to save bookmarks: {e}");
        }
        now_saved
    }
}

/// Read the bookmark set stored under [`BOOKMARKS_KEY`].
pub fn load_bookmarks(storage: &dyn KeyValueStorage) -> BookmarkSet {
    let raw = match storage.get(BOOKMARKS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return BookmarkSet::new(),
        Err(e) => {
            tracing::warn!("failed to read bookmarks, starting empty: {e}");
            return BookmarkSet::new();
        }
    };

    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(ids) => BookmarkSet::from_ids(ids),
        Err(e) => {
            tracing::warn!("ignoring corrupt bookmark data: {e}");
            BookmarkSet::new()
        }
    }
}

/// Write `set` under [`BOOKMARKS_KEY`] as a JSON array.
pub fn save_bookmarks(
    storage: &dyn KeyValueStorage,
    set: &BookmarkSet,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(set).map_err(|e| StorageError::Encode {
        key: BOOKMARKS_KEY.to_string(),
        message: e.to_string(),
    })?;
    storage.set(BOOKMARKS_KEY, &json)
}
