//! In-memory favorites and custom phrase stores

use tasbih_core::{CustomDhikrEntry, FavoriteEntry};

/// Why a store refused a change
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("entry name is empty")]
    EmptyName,

    #[error("no favorite named {key:?}")]
    NotFound { key: String },

    #[error("index {index} out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Whether a save added a new entry or replaced an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Inserted,
    Updated,
}

// ─────────────────────────────────────────────────────────────────────────────
// Favorites
// ─────────────────────────────────────────────────────────────────────────────

/// Saved sessions, unique by key, in insertion order
#[derive(Debug, Clone, Default)]
pub struct FavoritesStore {
    entries: Vec<FavoriteEntry>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert in place by key, otherwise append
    pub fn save(&mut self, key: &str, count: u32, target: u32) -> Result<SaveOutcome, StoreError> {
        if key.is_empty() {
            return Err(StoreError::EmptyName);
        }

        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(existing) => {
                existing.count = count;
                existing.target = target;
                Ok(SaveOutcome::Updated)
            }
            None => {
                self.entries.push(FavoriteEntry::new(key, count, target));
                Ok(SaveOutcome::Inserted)
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&FavoriteEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn delete(&mut self, key: &str) -> Result<FavoriteEntry, StoreError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.key == key)
            .ok_or_else(|| StoreError::NotFound {
                key: key.to_string(),
            })?;
        Ok(self.entries.remove(index))
    }

    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Custom phrases
// ─────────────────────────────────────────────────────────────────────────────

/// User-authored phrase names. Duplicates are allowed.
#[derive(Debug, Clone, Default)]
pub struct CustomDhikrStore {
    entries: Vec<CustomDhikrEntry>,
}

impl CustomDhikrStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name` as typed. Only whitespace-only names are refused.
    pub fn add(&mut self, name: &str) -> Result<(), StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }
        self.entries.push(CustomDhikrEntry::new(name));
        Ok(())
    }

    pub fn remove_at(&mut self, index: usize) -> Result<CustomDhikrEntry, StoreError> {
        if index >= self.entries.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&CustomDhikrEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[CustomDhikrEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
