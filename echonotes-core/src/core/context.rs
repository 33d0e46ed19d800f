//! The application context: one explicitly constructed object owning the
//! note store and the theme resolver.
//!
//! The presentation layer holds exactly one of these per running
//! application and calls through it; tests construct as many independent
//! instances as they like over in-memory storage.

use crate::{
    AmbientScheme, FileStore, KeyValueStore, LogNotifier, Note, NoteStore, Notifier, Result, Theme,
    ThemePreference, ThemeResolver,
};
use std::path::PathBuf;

/// Owns all application state: the note list, the theme preference, and
/// the notifier used for success toasts.
///
/// The note store and theme resolver never call each other; this context
/// is the only thing that holds both.
pub struct AppContext<S: KeyValueStore> {
    notes: NoteStore<S>,
    theme: ThemeResolver<S>,
    notifier: Box<dyn Notifier>,
}

impl AppContext<FileStore> {
    /// Opens a context over file-backed storage rooted at `dir`, using the
    /// log-based notifier. The two components get separate store handles
    /// on the same directory; their keys are disjoint.
    pub fn open<P: Into<PathBuf>>(dir: P, ambient: &AmbientScheme) -> Self {
        let dir = dir.into();
        Self::new(
            FileStore::new(&dir),
            FileStore::new(&dir),
            ambient,
            Box::new(LogNotifier),
        )
    }
}

impl<S: KeyValueStore> AppContext<S> {
    /// Builds a context from explicit collaborators.
    pub fn new(
        notes_storage: S,
        theme_storage: S,
        ambient: &AmbientScheme,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            notes: NoteStore::load(notes_storage),
            theme: ThemeResolver::load(theme_storage, ambient),
            notifier,
        }
    }

    /// Creates a note and fires the success notification.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::EchonotesError::EmptyContent`] and storage
    /// errors from the note store; no notification fires on failure.
    pub fn create_note(&mut self, content: &str) -> Result<Note> {
        let note = self.notes.create(content)?;
        self.notifier.notify("Note created successfully!");
        Ok(note)
    }

    /// Deletes a note by id. Unknown ids are a no-op.
    pub fn delete_note(&mut self, id: &str) -> Result<()> {
        self.notes.delete(id)
    }

    /// Returns the notes matching `query` (all notes for a blank query).
    pub fn search(&self, query: &str) -> Vec<&Note> {
        self.notes.search(query)
    }

    /// The full note list, newest first.
    pub fn notes(&self) -> &[Note] {
        self.notes.notes()
    }

    /// Persists and applies a new explicit theme choice.
    pub fn set_theme_preference(&mut self, preference: ThemePreference) -> Result<()> {
        self.theme.set_preference(preference)
    }

    /// The user's explicit theme choice.
    pub fn theme_preference(&self) -> ThemePreference {
        self.theme.preference()
    }

    /// The concrete theme the UI should render with.
    pub fn effective_theme(&self) -> Theme {
        self.theme.effective_theme()
    }
}
