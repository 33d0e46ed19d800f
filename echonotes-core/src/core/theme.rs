//! Theme preference resolution.
//!
//! Two inputs produce the rendering theme: the user's persisted explicit
//! choice (light, dark, or follow-system) and the host environment's
//! ambient color-scheme signal. The effective theme is a pure function of
//! the pair and is always a concrete light/dark value.

use crate::{EchonotesError, KeyValueStore, Result, THEME_KEY};
use log::warn;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// A concrete rendering theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Stable string form used across the storage and UI boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// The user's stored theme preference.
///
/// `System` defers to the host environment's ambient signal. The stored
/// default, applied when no valid persisted value exists, is `Dark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemePreference {
    /// Stable string form used as the persisted value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl FromStr for ThemePreference {
    type Err = EchonotesError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(EchonotesError::UnknownTheme(other.to_string())),
        }
    }
}

struct AmbientInner {
    current: Mutex<Theme>,
    listeners: Mutex<HashMap<u64, Arc<Mutex<Theme>>>>,
    next_id: AtomicU64,
}

/// Handle to the host environment's reported color scheme.
///
/// The environment owns the value; this handle mirrors it. The host side
/// (or a test) calls [`AmbientScheme::set`] when the reported scheme flips,
/// which fans the change out to every live subscription.
#[derive(Clone)]
pub struct AmbientScheme {
    inner: Arc<AmbientInner>,
}

impl AmbientScheme {
    pub fn new(initial: Theme) -> Self {
        Self {
            inner: Arc::new(AmbientInner {
                current: Mutex::new(initial),
                listeners: Mutex::new(HashMap::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Returns the currently reported scheme.
    pub fn current(&self) -> Theme {
        *self.inner.current.lock().expect("mutex poisoned")
    }

    /// Reports a scheme change, notifying all live subscriptions.
    pub fn set(&self, theme: Theme) {
        *self.inner.current.lock().expect("mutex poisoned") = theme;
        let listeners = self.inner.listeners.lock().expect("mutex poisoned");
        for mirror in listeners.values() {
            *mirror.lock().expect("mutex poisoned") = theme;
        }
    }

    /// Registers for change notification. The subscription deregisters
    /// itself when dropped.
    pub fn subscribe(&self) -> AmbientSubscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let mirror = Arc::new(Mutex::new(self.current()));
        self.inner
            .listeners
            .lock()
            .expect("mutex poisoned")
            .insert(id, Arc::clone(&mirror));
        AmbientSubscription {
            mirror,
            id,
            source: Arc::clone(&self.inner),
        }
    }

    /// Number of live subscriptions. Useful for leak checks in tests.
    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.lock().expect("mutex poisoned").len()
    }
}

/// A live registration against an [`AmbientScheme`].
///
/// Holds the subscriber's view of the signal, updated on every change.
/// Dropping the subscription removes the listener registration, so tying
/// its lifetime to the owning resolver guarantees cleanup on teardown.
pub struct AmbientSubscription {
    mirror: Arc<Mutex<Theme>>,
    id: u64,
    source: Arc<AmbientInner>,
}

impl AmbientSubscription {
    /// The last scheme delivered to this subscription.
    pub fn current(&self) -> Theme {
        *self.mirror.lock().expect("mutex poisoned")
    }
}

impl Drop for AmbientSubscription {
    fn drop(&mut self) {
        self.source
            .listeners
            .lock()
            .expect("mutex poisoned")
            .remove(&self.id);
    }
}

/// Owns the explicit theme choice and derives the effective theme.
pub struct ThemeResolver<S: KeyValueStore> {
    storage: S,
    preference: ThemePreference,
    ambient: AmbientSubscription,
}

impl<S: KeyValueStore> ThemeResolver<S> {
    /// Loads the persisted preference from `storage` and subscribes to the
    /// ambient signal.
    ///
    /// A missing or unrecognized stored value (logged) falls back to the
    /// `Dark` default.
    pub fn load(storage: S, ambient: &AmbientScheme) -> Self {
        let preference = match storage.get(THEME_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|e: EchonotesError| {
                warn!("discarding stored theme preference: {e}");
                ThemePreference::default()
            }),
            None => ThemePreference::default(),
        };
        Self {
            storage,
            preference,
            ambient: ambient.subscribe(),
        }
    }

    /// Persists and applies a new explicit choice.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the persistence write fails; the
    /// in-memory preference is left unchanged in that case.
    pub fn set_preference(&mut self, preference: ThemePreference) -> Result<()> {
        self.storage.set(THEME_KEY, preference.as_str())?;
        self.preference = preference;
        Ok(())
    }

    /// The user's explicit choice.
    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// The host environment's current scheme, as last delivered.
    pub fn ambient(&self) -> Theme {
        self.ambient.current()
    }

    /// The concrete theme to render with: the ambient scheme when the
    /// preference is `System`, the explicit choice otherwise.
    pub fn effective_theme(&self) -> Theme {
        match self.preference {
            ThemePreference::Light => Theme::Light,
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::System => self.ambient.current(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_preference_parses_known_values_only() {
        assert_eq!(
            "light".parse::<ThemePreference>().unwrap(),
            ThemePreference::Light
        );
        assert_eq!(
            "system".parse::<ThemePreference>().unwrap(),
            ThemePreference::System
        );
        assert!("Light".parse::<ThemePreference>().is_err());
        assert!("solarized".parse::<ThemePreference>().is_err());
    }

    #[test]
    fn test_defaults_to_dark_without_stored_preference() {
        let ambient = AmbientScheme::new(Theme::Light);
        let resolver = ThemeResolver::load(MemoryStore::new(), &ambient);

        assert_eq!(resolver.preference(), ThemePreference::Dark);
        assert_eq!(resolver.effective_theme(), Theme::Dark);
    }

    #[test]
    fn test_invalid_stored_preference_falls_back_to_dark() {
        let mut storage = MemoryStore::new();
        storage.set(THEME_KEY, "sepia").unwrap();

        let ambient = AmbientScheme::new(Theme::Light);
        let resolver = ThemeResolver::load(storage, &ambient);
        assert_eq!(resolver.effective_theme(), Theme::Dark);
    }

    #[test]
    fn test_system_preference_follows_ambient_signal() {
        let mut storage = MemoryStore::new();
        storage.set(THEME_KEY, "system").unwrap();

        let ambient = AmbientScheme::new(Theme::Light);
        let resolver = ThemeResolver::load(storage, &ambient);
        assert_eq!(resolver.effective_theme(), Theme::Light);

        ambient.set(Theme::Dark);
        assert_eq!(resolver.effective_theme(), Theme::Dark);
    }

    #[test]
    fn test_explicit_choice_overrides_ambient_signal() {
        let ambient = AmbientScheme::new(Theme::Dark);
        let mut resolver = ThemeResolver::load(MemoryStore::new(), &ambient);

        resolver.set_preference(ThemePreference::Light).unwrap();
        assert_eq!(resolver.effective_theme(), Theme::Light);

        ambient.set(Theme::Light);
        ambient.set(Theme::Dark);
        assert_eq!(resolver.effective_theme(), Theme::Light);
    }

    #[test]
    fn test_set_preference_persists_plain_string() {
        let ambient = AmbientScheme::new(Theme::Dark);
        let mut resolver = ThemeResolver::load(MemoryStore::new(), &ambient);
        resolver.set_preference(ThemePreference::Light).unwrap();

        assert_eq!(resolver.storage.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_dropping_subscription_deregisters_listener() {
        let ambient = AmbientScheme::new(Theme::Light);
        assert_eq!(ambient.subscriber_count(), 0);

        let resolver = ThemeResolver::load(MemoryStore::new(), &ambient);
        assert_eq!(ambient.subscriber_count(), 1);

        drop(resolver);
        assert_eq!(ambient.subscriber_count(), 0);
    }

    #[test]
    fn test_effective_theme_is_never_system() {
        let ambient = AmbientScheme::new(Theme::Light);
        let mut resolver = ThemeResolver::load(MemoryStore::new(), &ambient);
        resolver.set_preference(ThemePreference::System).unwrap();

        for theme in [Theme::Light, Theme::Dark] {
            ambient.set(theme);
            assert_eq!(resolver.effective_theme(), theme);
        }
    }
}
