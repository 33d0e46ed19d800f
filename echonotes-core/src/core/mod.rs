//! Internal domain modules for the Echo Notes core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod context;
pub mod error;
pub mod note;
pub mod notify;
pub mod speech;
pub mod storage;
pub mod store;
pub mod theme;

#[doc(inline)]
pub use context::AppContext;
#[doc(inline)]
pub use error::{EchonotesError, Result};
#[doc(inline)]
pub use note::Note;
#[doc(inline)]
pub use notify::{LogNotifier, Notifier};
#[doc(inline)]
pub use speech::{SpeechRecognizer, TranscriptionSession, UnavailableRecognizer};
#[doc(inline)]
pub use storage::{FileStore, KeyValueStore, MemoryStore, NOTES_KEY, THEME_KEY};
#[doc(inline)]
pub use store::NoteStore;
#[doc(inline)]
pub use theme::{AmbientScheme, AmbientSubscription, Theme, ThemePreference, ThemeResolver};
