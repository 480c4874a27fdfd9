use crate::interaction::domain::notifier::{Notice, Notifier, Severity};

/// Notifier that routes notices to the `log` facade, for headless callers.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notice: Notice) {
        match notice.severity {
            Severity::Info | Severity::Success => log::info!("{}", notice.message),
            Severity::Error => log::error!("{}", notice.message),
        }
    }
}
