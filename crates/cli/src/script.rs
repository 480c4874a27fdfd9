use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use voxpad_core::recognition::domain::capability::{CapabilityEvent, ResultChunk};
use voxpad_core::recognition::domain::error::RecognitionError;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("failed to read script {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse script {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One scripted capability event as it appears in a JSON script file.
///
/// ```json
/// [
///   {"kind": "result", "result_index": 0,
///    "results": [{"transcript": "hello ", "is_final": true}]},
///   {"kind": "error", "code": "no-speech"}
/// ]
/// ```
/// `started`/`stopped` entries are accepted for completeness but rarely
/// needed: the scripted capability brackets the replay with them itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScriptEvent {
    Started,
    Stopped,
    Error {
        code: String,
    },
    Result {
        #[serde(default)]
        result_index: usize,
        results: Vec<ScriptChunk>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptChunk {
    pub transcript: String,
    pub is_final: bool,
}

impl From<ScriptEvent> for CapabilityEvent {
    fn from(event: ScriptEvent) -> Self {
        match event {
            ScriptEvent::Started => CapabilityEvent::Started,
            ScriptEvent::Stopped => CapabilityEvent::Stopped,
            ScriptEvent::Error { code } => {
                CapabilityEvent::Error(RecognitionError::from_code(&code))
            }
            ScriptEvent::Result {
                result_index,
                results,
            } => CapabilityEvent::Result {
                result_index,
                results: results
                    .into_iter()
                    .map(|chunk| ResultChunk {
                        transcript: chunk.transcript,
                        is_final: chunk.is_final,
                    })
                    .collect(),
            },
        }
    }
}

/// Load a script file into capability events, in file order.
pub fn load(path: &Path) -> Result<Vec<CapabilityEvent>, ScriptError> {
    let raw = fs::read_to_string(path).map_err(|source| ScriptError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let events: Vec<ScriptEvent> =
        serde_json::from_str(&raw).map_err(|source| ScriptError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    Ok(events.into_iter().map(CapabilityEvent::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_documented_shapes() {
        let json = r#"[
            {"kind": "result", "results": [
                {"transcript": "hello ", "is_final": true},
                {"transcript": "wor", "is_final": false}
            ]},
            {"kind": "error", "code": "no-speech"},
            {"kind": "stopped"}
        ]"#;
        let events: Vec<ScriptEvent> = serde_json::from_str(json).unwrap();
        let events: Vec<CapabilityEvent> =
            events.into_iter().map(CapabilityEvent::from).collect();

        assert_eq!(events.len(), 3);
        assert_eq!(
            events[0],
            CapabilityEvent::Result {
                result_index: 0,
                results: vec![
                    ResultChunk::final_text("hello "),
                    ResultChunk::interim("wor"),
                ],
            }
        );
        assert_eq!(
            events[1],
            CapabilityEvent::Error(RecognitionError::NoSpeech)
        );
        assert_eq!(events[2], CapabilityEvent::Stopped);
    }

    #[test]
    fn rejects_unknown_kind() {
        let json = r#"[{"kind": "telepathy"}]"#;
        assert!(serde_json::from_str::<Vec<ScriptEvent>>(json).is_err());
    }

    #[test]
    fn load_reads_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"kind": "result", "results": [{{"transcript": "ok", "is_final": true}}]}}]"#
        )
        .unwrap();

        let events = load(file.path()).unwrap();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn load_missing_file_is_a_read_error() {
        let err = load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ScriptError::Read { .. }));
    }
}
