//! Core library for Echo Notes — a local-first note-taking application with
//! speech-to-text entry.
//!
//! The primary entry point is [`AppContext`], which owns the two stateful
//! components: the [`NoteStore`] (the ordered note list and its
//! persistence) and the [`ThemeResolver`] (explicit theme choice plus the
//! host's ambient color-scheme signal). Neither component calls the other.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    context::AppContext,
    error::{EchonotesError, Result},
    note::Note,
    notify::{LogNotifier, Notifier},
    speech::{SpeechRecognizer, TranscriptionSession, UnavailableRecognizer},
    storage::{FileStore, KeyValueStore, MemoryStore, NOTES_KEY, THEME_KEY},
    store::NoteStore,
    theme::{AmbientScheme, AmbientSubscription, Theme, ThemePreference, ThemeResolver},
};
