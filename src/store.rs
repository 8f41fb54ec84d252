//! In-memory bookmark collection.
//!
//! Entries are kept in insertion order and every lookup is a linear scan.
//! Removal preserves the relative order of the remaining entries.

use crate::model::Bookmark;

#[derive(Debug, Default, Clone)]
pub struct BookmarkStore {
    bookmarks: Vec<Bookmark>,
}

impl BookmarkStore {
    pub fn new() -> Self {
        BookmarkStore {
            bookmarks: Vec::new(),
        }
    }

    pub fn list(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    /// Every bookmark carrying `tag` exactly (case-sensitive), in insertion order.
    pub fn filter_by_tag(&self, tag: &str) -> Vec<&Bookmark> {
        self.bookmarks.iter().filter(|b| b.has_tag(tag)).collect()
    }

    /// Appends to the end. The caller is responsible for a unique `id`.
    pub fn insert(&mut self, bookmark: Bookmark) {
        self.bookmarks.push(bookmark);
    }

    pub fn remove_by_id(&mut self, id: &str) -> Option<Bookmark> {
        let index = self.bookmarks.iter().position(|b| b.id == id)?;
        Some(self.bookmarks.remove(index))
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}
