//! Speech-to-text capture for dictated notes.
//!
//! Speech capture is an optional host capability: some environments have no
//! recognizer at all. Availability is checked at the point of use, and an
//! unavailable host degrades to text-only note entry — the rest of the
//! application keeps working.

use crate::{EchonotesError, Result};
use log::error;

/// A host speech recognizer.
///
/// Implementations wrap whatever transcription engine the platform offers.
/// `start`/`stop` bracket one utterance session; transcribed text is
/// delivered to a [`TranscriptionSession`] by the host event loop.
pub trait SpeechRecognizer {
    /// Whether the host provides speech recognition at all.
    fn is_available(&self) -> bool;

    /// Begins listening for the current utterance session.
    ///
    /// # Errors
    ///
    /// Returns [`EchonotesError::SpeechUnavailable`] on hosts without the
    /// capability.
    fn start(&mut self) -> Result<()>;

    /// Stops listening. Safe to call when not recording.
    fn stop(&mut self);
}

/// Recognizer for hosts without any speech capability.
#[derive(Debug, Default)]
pub struct UnavailableRecognizer;

impl SpeechRecognizer for UnavailableRecognizer {
    fn is_available(&self) -> bool {
        false
    }

    fn start(&mut self) -> Result<()> {
        Err(EchonotesError::SpeechUnavailable)
    }

    fn stop(&mut self) {}
}

/// One dictation session: from start of recording to the final transcript.
///
/// The host delivers recognition events while the session is live. Each
/// result event carries the accumulated transcription chunks for the whole
/// utterance so far; the session's transcript is rebuilt from them on every
/// event. Runtime recognition errors are logged and the session continues
/// with its current transcript.
pub struct TranscriptionSession<'a, R: SpeechRecognizer> {
    recognizer: &'a mut R,
    transcript: String,
}

impl<'a, R: SpeechRecognizer> TranscriptionSession<'a, R> {
    /// Starts recording through `recognizer`.
    ///
    /// # Errors
    ///
    /// Returns [`EchonotesError::SpeechUnavailable`] without any state
    /// change when the host lacks the capability; the caller surfaces this
    /// once to the user and falls back to text entry.
    pub fn start(recognizer: &'a mut R) -> Result<Self> {
        if !recognizer.is_available() {
            return Err(EchonotesError::SpeechUnavailable);
        }
        recognizer.start()?;
        Ok(Self {
            recognizer,
            transcript: String::new(),
        })
    }

    /// Handles a recognition result event: `chunks` are the per-result
    /// transcriptions for the utterance so far, concatenated in order.
    pub fn on_result(&mut self, chunks: &[&str]) {
        self.transcript = chunks.concat();
    }

    /// Handles a recognition runtime error. Logged only; the transcript is
    /// left as-is.
    pub fn on_error(&mut self, message: &str) {
        error!("speech recognition error: {message}");
    }

    /// The accumulated transcript so far.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Stops recording and yields the final transcript.
    pub fn finish(self) -> String {
        self.recognizer.stop();
        self.transcript
    }
}
