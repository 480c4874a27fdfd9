use thiserror::Error;

/// Error codes surfaced by the recognition capability.
///
/// The variants mirror the codes the platform service reports on its error
/// event; `Other` carries anything outside that set verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecognitionError {
    #[error("no speech detected")]
    NoSpeech,
    #[error("recognition aborted")]
    Aborted,
    #[error("audio capture failed")]
    AudioCapture,
    #[error("microphone access not allowed")]
    NotAllowed,
    #[error("network failure in recognition service")]
    Network,
    #[error("recognition service not allowed")]
    ServiceNotAllowed,
    #[error("recognition failed: {0}")]
    Other(String),
}

impl RecognitionError {
    /// The capability's wire code for this error.
    pub fn code(&self) -> &str {
        match self {
            RecognitionError::NoSpeech => "no-speech",
            RecognitionError::Aborted => "aborted",
            RecognitionError::AudioCapture => "audio-capture",
            RecognitionError::NotAllowed => "not-allowed",
            RecognitionError::Network => "network",
            RecognitionError::ServiceNotAllowed => "service-not-allowed",
            RecognitionError::Other(code) => code,
        }
    }

    /// Parse a wire code back into an error value.
    pub fn from_code(code: &str) -> Self {
        match code {
            "no-speech" => RecognitionError::NoSpeech,
            "aborted" => RecognitionError::Aborted,
            "audio-capture" => RecognitionError::AudioCapture,
            "not-allowed" => RecognitionError::NotAllowed,
            "network" => RecognitionError::Network,
            "service-not-allowed" => RecognitionError::ServiceNotAllowed,
            other => RecognitionError::Other(other.to_string()),
        }
    }
}
