/// Weight of a transient notice, used by sinks to pick styling or level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// A transient, user-facing status message. Fire-and-forget: nothing waits
/// for acknowledgment and nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Sink for transient notices.
///
/// Decouples the session from the delivery mechanism (GUI toasts, log
/// output) so the orchestration emits the same notices everywhere.
pub trait Notifier: Send {
    fn notify(&mut self, notice: Notice);
}

/// Notifier that discards everything. Used by tests where notices are
/// irrelevant.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _notice: Notice) {}
}
