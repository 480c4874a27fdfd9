use crossbeam_channel::Receiver;

use super::capability::{CapabilityEvent, CapabilityHandle, RecognizerCapability, ResultChunk};
use super::error::RecognitionError;
use super::event::RecognizerEvent;

/// Wraps the recognition capability and owns its handle exclusively.
///
/// The adapter serializes lifecycle commands, translates raw result batches
/// into `(final_delta, interim)` pairs, and gates delivery so that no result
/// event ever reaches the session outside a Started..Stopped window. It never
/// retries after an error; restarting is the caller's decision.
pub struct RecognizerAdapter {
    control: Box<dyn RecognizerCapability>,
    events: Receiver<CapabilityEvent>,
    /// A start has been requested and no stop/error observed since.
    active: bool,
    /// A `Started` has been observed and no `Stopped`/`Error` since;
    /// results are delivered only while this holds.
    delivering: bool,
}

impl RecognizerAdapter {
    pub fn new(handle: CapabilityHandle) -> Self {
        Self {
            control: handle.control,
            events: handle.events,
            active: false,
            delivering: false,
        }
    }

    /// Request that the capability begin listening. No-op if a start is
    /// already in flight or listening is underway.
    pub fn start(&mut self) -> Result<(), RecognitionError> {
        if self.active {
            return Ok(());
        }
        self.control.start()?;
        self.active = true;
        log::debug!("recognizer start requested");
        Ok(())
    }

    /// Request that the capability stop listening. No-op if idle.
    pub fn stop(&mut self) -> Result<(), RecognitionError> {
        if !self.active {
            return Ok(());
        }
        self.control.stop()?;
        self.active = false;
        log::debug!("recognizer stop requested");
        Ok(())
    }

    /// Drain all pending capability events, in arrival order, translated
    /// for the session. Results outside a Started..Stopped window are
    /// discarded here rather than burdening every consumer with the rule.
    pub fn poll(&mut self) -> Vec<RecognizerEvent> {
        let mut out = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            match event {
                CapabilityEvent::Started => {
                    self.delivering = true;
                    out.push(RecognizerEvent::Started);
                }
                CapabilityEvent::Stopped => {
                    self.delivering = false;
                    self.active = false;
                    out.push(RecognizerEvent::Stopped);
                }
                CapabilityEvent::Error(err) => {
                    self.delivering = false;
                    self.active = false;
                    out.push(RecognizerEvent::Error(err));
                }
                CapabilityEvent::Result {
                    result_index,
                    results,
                } => {
                    if !self.delivering {
                        log::debug!("dropping result batch outside listening window");
                        continue;
                    }
                    let (final_delta, interim) = fold_results(result_index, &results);
                    out.push(RecognizerEvent::Result {
                        final_delta,
                        interim,
                    });
                }
            }
        }
        out
    }
}

impl Drop for RecognizerAdapter {
    fn drop(&mut self) {
        // Release the microphone even if the caller forgot to stop.
        if self.active {
            let _ = self.control.stop();
        }
    }
}

/// Fold the changed tail of a result list (from `result_index` onward):
/// final chunks concatenate into the delta, non-final chunks into the
/// replacement interim segment.
fn fold_results(result_index: usize, results: &[ResultChunk]) -> (String, String) {
    let mut final_delta = String::new();
    let mut interim = String::new();
    for chunk in results.iter().skip(result_index) {
        if chunk.is_final {
            final_delta.push_str(&chunk.transcript);
        } else {
            interim.push_str(&chunk.transcript);
        }
    }
    (final_delta, interim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::{unbounded, Sender};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct CommandLog {
        starts: usize,
        stops: usize,
    }

    struct StubCapability {
        log: Arc<Mutex<CommandLog>>,
        fail_start: bool,
    }

    impl RecognizerCapability for StubCapability {
        fn start(&mut self) -> Result<(), RecognitionError> {
            self.log.lock().unwrap().starts += 1;
            if self.fail_start {
                return Err(RecognitionError::NotAllowed);
            }
            Ok(())
        }

        fn stop(&mut self) -> Result<(), RecognitionError> {
            self.log.lock().unwrap().stops += 1;
            Ok(())
        }
    }

    fn adapter_with_stub(
        fail_start: bool,
    ) -> (RecognizerAdapter, Sender<CapabilityEvent>, Arc<Mutex<CommandLog>>) {
        let (tx, rx) = unbounded();
        let log = Arc::new(Mutex::new(CommandLog::default()));
        let capability = StubCapability {
            log: log.clone(),
            fail_start,
        };
        let adapter = RecognizerAdapter::new(CapabilityHandle::new(Box::new(capability), rx));
        (adapter, tx, log)
    }

    #[test]
    fn start_is_idempotent_while_active() {
        let (mut adapter, _tx, log) = adapter_with_stub(false);
        adapter.start().unwrap();
        adapter.start().unwrap();
        assert_eq!(log.lock().unwrap().starts, 1);
    }

    #[test]
    fn stop_without_start_is_a_no_op() {
        let (mut adapter, _tx, log) = adapter_with_stub(false);
        adapter.stop().unwrap();
        assert_eq!(log.lock().unwrap().stops, 0);
    }

    #[test]
    fn failed_start_is_surfaced_and_leaves_adapter_idle() {
        let (mut adapter, _tx, log) = adapter_with_stub(true);
        assert_eq!(adapter.start(), Err(RecognitionError::NotAllowed));
        // A later start may retry because the first one never took effect.
        let _ = adapter.start();
        assert_eq!(log.lock().unwrap().starts, 2);
    }

    #[test]
    fn results_fold_from_result_index() {
        let (mut adapter, tx, _log) = adapter_with_stub(false);
        adapter.start().unwrap();
        tx.send(CapabilityEvent::Started).unwrap();
        tx.send(CapabilityEvent::Result {
            result_index: 1,
            results: vec![
                ResultChunk::final_text("stale "),
                ResultChunk::final_text("hello "),
                ResultChunk::interim("wor"),
            ],
        })
        .unwrap();

        let events = adapter.poll();
        assert_eq!(
            events,
            vec![
                RecognizerEvent::Started,
                RecognizerEvent::Result {
                    final_delta: "hello ".to_string(),
                    interim: "wor".to_string(),
                },
            ]
        );
    }

    #[test]
    fn results_before_started_are_dropped() {
        let (mut adapter, tx, _log) = adapter_with_stub(false);
        tx.send(CapabilityEvent::Result {
            result_index: 0,
            results: vec![ResultChunk::interim("ghost")],
        })
        .unwrap();

        assert!(adapter.poll().is_empty());
    }

    #[test]
    fn results_after_stopped_are_dropped() {
        let (mut adapter, tx, _log) = adapter_with_stub(false);
        adapter.start().unwrap();
        tx.send(CapabilityEvent::Started).unwrap();
        tx.send(CapabilityEvent::Stopped).unwrap();
        tx.send(CapabilityEvent::Result {
            result_index: 0,
            results: vec![ResultChunk::interim("late")],
        })
        .unwrap();

        let events = adapter.poll();
        assert_eq!(
            events,
            vec![RecognizerEvent::Started, RecognizerEvent::Stopped]
        );
    }

    #[test]
    fn delivery_resumes_after_restart() {
        let (mut adapter, tx, _log) = adapter_with_stub(false);
        adapter.start().unwrap();
        tx.send(CapabilityEvent::Started).unwrap();
        tx.send(CapabilityEvent::Stopped).unwrap();
        tx.send(CapabilityEvent::Started).unwrap();
        tx.send(CapabilityEvent::Result {
            result_index: 0,
            results: vec![ResultChunk::interim("fresh")],
        })
        .unwrap();

        let events = adapter.poll();
        assert_eq!(events.len(), 4);
        assert_eq!(
            events[3],
            RecognizerEvent::Result {
                final_delta: String::new(),
                interim: "fresh".to_string(),
            }
        );
    }

    #[test]
    fn error_marks_adapter_inactive() {
        let (mut adapter, tx, log) = adapter_with_stub(false);
        adapter.start().unwrap();
        tx.send(CapabilityEvent::Started).unwrap();
        tx.send(CapabilityEvent::Error(RecognitionError::Network)).unwrap();
        adapter.poll();

        // stop after an observed error is a no-op
        adapter.stop().unwrap();
        assert_eq!(log.lock().unwrap().stops, 0);
    }

    #[test]
    fn drop_stops_an_active_capability() {
        let (mut adapter, _tx, log) = adapter_with_stub(false);
        adapter.start().unwrap();
        drop(adapter);
        assert_eq!(log.lock().unwrap().stops, 1);
    }

    #[test]
    fn drop_leaves_an_idle_capability_alone() {
        let (adapter, _tx, log) = adapter_with_stub(false);
        drop(adapter);
        assert_eq!(log.lock().unwrap().stops, 0);
    }
}
