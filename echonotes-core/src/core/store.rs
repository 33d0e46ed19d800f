//! The ordered note list and its persistence.

use crate::{EchonotesError, KeyValueStore, Note, Result, NOTES_KEY};
use log::warn;

/// Owns the in-memory note sequence and keeps it synchronized with a
/// [`KeyValueStore`].
///
/// The sequence is always ordered newest-first: `create` prepends, and no
/// operation ever reorders existing notes. Every mutation serializes the
/// entire sequence back to storage before returning.
pub struct NoteStore<S: KeyValueStore> {
    storage: S,
    notes: Vec<Note>,
}

impl<S: KeyValueStore> NoteStore<S> {
    /// Loads the note list from `storage`.
    ///
    /// A missing value initializes an empty list. An unparseable value is
    /// logged and also treated as empty — startup always succeeds with
    /// whatever local data is usable.
    pub fn load(storage: S) -> Self {
        let notes = match storage.get(NOTES_KEY) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(notes) => notes,
                Err(e) => {
                    warn!("discarding unparseable stored notes: {e}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Self { storage, notes }
    }

    /// Creates a new note from `content`, prepends it to the list, persists
    /// the full list, and returns the created note.
    ///
    /// # Errors
    ///
    /// Returns [`EchonotesError::EmptyContent`] if `content` is empty or
    /// whitespace-only, and a storage error if the persistence write fails.
    pub fn create(&mut self, content: &str) -> Result<Note> {
        if content.trim().is_empty() {
            return Err(EchonotesError::EmptyContent);
        }

        let note = Note::new(content);
        self.notes.insert(0, note.clone());
        self.persist()?;
        Ok(note)
    }

    /// Deletes the note with the given `id`, if present.
    ///
    /// Deleting an unknown id is a no-op; the list is persisted either way,
    /// so calling this twice with the same id is safe.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the persistence write fails.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        self.notes.retain(|note| note.id != id);
        self.persist()
    }

    /// Returns the notes whose content contains `query`, case-insensitively,
    /// preserving the stored order.
    ///
    /// A query that trims to empty returns the full list unfiltered.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        if query.trim().is_empty() {
            return self.notes.iter().collect();
        }

        let needle = query.to_lowercase();
        self.notes
            .iter()
            .filter(|note| note.content.to_lowercase().contains(&needle))
            .collect()
    }

    /// Returns the full note sequence, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Serializes the entire sequence and overwrites the stored value.
    fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.notes)?;
        self.storage.set(NOTES_KEY, &json)
    }
}
