use crossbeam_channel::Receiver;

use super::error::RecognitionError;

/// One recognition alternative from the capability's result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultChunk {
    pub transcript: String,
    pub is_final: bool,
}

impl ResultChunk {
    pub fn final_text(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            is_final: true,
        }
    }

    pub fn interim(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            is_final: false,
        }
    }
}

/// Raw event as produced by the recognition capability, in production order.
///
/// `Result` carries the capability's full result list; `result_index` marks
/// where the changed chunks begin, so consumers fold from there onward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityEvent {
    Started,
    Stopped,
    Error(RecognitionError),
    Result {
        result_index: usize,
        results: Vec<ResultChunk>,
    },
}

/// Session parameters handed to the capability at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizerConfig {
    /// BCP-47 language tag for recognition.
    pub language: String,
    /// Keep listening across utterances instead of stopping after the first.
    pub continuous: bool,
    /// Deliver provisional (not-yet-final) results.
    pub interim_results: bool,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            continuous: true,
            interim_results: true,
        }
    }
}

/// Control interface of the external recognition capability.
///
/// Implementations own the underlying engine handle (and with it the
/// microphone). Both calls are fire-and-forget requests; their effects are
/// observed later on the capability's event channel.
pub trait RecognizerCapability: Send {
    fn start(&mut self) -> Result<(), RecognitionError>;
    fn stop(&mut self) -> Result<(), RecognitionError>;
}

/// A live capability: its control handle plus the ordered event channel.
pub struct CapabilityHandle {
    pub control: Box<dyn RecognizerCapability>,
    pub events: Receiver<CapabilityEvent>,
}

impl CapabilityHandle {
    pub fn new(control: Box<dyn RecognizerCapability>, events: Receiver<CapabilityEvent>) -> Self {
        Self { control, events }
    }
}

/// Result of probing for the capability, checked once at construction.
///
/// `Unsupported` is terminal: no handle exists and no recognizer command can
/// ever be issued, so callers degrade to a static message.
pub enum CapabilityProbe {
    Supported(CapabilityHandle),
    Unsupported,
}

impl CapabilityProbe {
    pub fn is_supported(&self) -> bool {
        matches!(self, CapabilityProbe::Supported(_))
    }
}
