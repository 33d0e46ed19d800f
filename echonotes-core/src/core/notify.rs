//! Transient user-facing notifications.

use log::info;

/// Fire-and-forget success signal shown to the user (e.g. a toast after a
/// note is created). Delivery is best-effort; there is no result to check.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Notifier that writes through the `log` facade, for shells without a
/// toast surface and for tests.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        info!("{message}");
    }
}
