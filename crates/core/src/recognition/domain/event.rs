use super::error::RecognitionError;

/// Lifecycle and result events the adapter delivers to the session,
/// translated from raw capability events and in the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognizerEvent {
    Started,
    Stopped,
    Error(RecognitionError),
    /// One folded result update: `final_delta` is the newly finalized text
    /// (possibly empty), `interim` the full replacement for the in-progress
    /// segment (possibly empty).
    Result { final_delta: String, interim: String },
}
