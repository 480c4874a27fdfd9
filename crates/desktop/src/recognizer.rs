use voxpad_core::recognition::domain::capability::{CapabilityProbe, RecognizerConfig};

/// Probe for a recognition backend, once at startup.
///
/// The only backend this build knows is the scripted demo engine behind the
/// `demo-recognizer` feature; without it the probe fails and the app runs in
/// the unsupported state with a static message.
#[cfg(feature = "demo-recognizer")]
pub fn probe(config: &RecognizerConfig) -> CapabilityProbe {
    use std::time::Duration;
    use voxpad_core::recognition::infrastructure::scripted_capability::{
        demo_script, ScriptedCapability,
    };

    log::info!(
        "using demo recognition backend (language {}, continuous {})",
        config.language,
        config.continuous
    );
    ScriptedCapability::probe(demo_script(), Some(Duration::from_millis(280)))
}

#[cfg(not(feature = "demo-recognizer"))]
pub fn probe(_config: &RecognizerConfig) -> CapabilityProbe {
    CapabilityProbe::Unsupported
}
