use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::recognition::domain::capability::{
    CapabilityEvent, CapabilityHandle, CapabilityProbe, RecognizerCapability, ResultChunk,
};
use crate::recognition::domain::error::RecognitionError;

/// A recognition capability that replays a fixed event script.
///
/// `start()` emits `Started`, then the script, then `Stopped` — the trailing
/// `Stopped` models a platform-initiated stop, the same way a live engine
/// ends a session on silence. Without pacing the whole script is queued
/// synchronously, which keeps CLI replays and tests deterministic; with
/// pacing a feeder thread delivers one event per interval and `stop()` halts
/// it mid-script.
pub struct ScriptedCapability {
    script: Arc<Vec<CapabilityEvent>>,
    pacing: Option<Duration>,
    tx: Sender<CapabilityEvent>,
    running: Arc<AtomicBool>,
    feeder: Option<thread::JoinHandle<()>>,
}

impl ScriptedCapability {
    /// Build the capability and the event channel its consumer reads from.
    pub fn new(
        script: Vec<CapabilityEvent>,
        pacing: Option<Duration>,
    ) -> (Self, Receiver<CapabilityEvent>) {
        let (tx, rx) = unbounded();
        (
            Self {
                script: Arc::new(script),
                pacing,
                tx,
                running: Arc::new(AtomicBool::new(false)),
                feeder: None,
            },
            rx,
        )
    }

    /// Convenience: wrap a script directly into a supported probe.
    pub fn probe(script: Vec<CapabilityEvent>, pacing: Option<Duration>) -> CapabilityProbe {
        let (capability, events) = Self::new(script, pacing);
        CapabilityProbe::Supported(CapabilityHandle::new(Box::new(capability), events))
    }
}

impl RecognizerCapability for ScriptedCapability {
    fn start(&mut self) -> Result<(), RecognitionError> {
        if self.running.load(Ordering::SeqCst) {
            return Ok(());
        }
        // A previous feeder may still be winding down after a stop; let it
        // finish before rearming the flag it watches.
        if let Some(feeder) = self.feeder.take() {
            let _ = feeder.join();
        }
        self.running.store(true, Ordering::SeqCst);
        self.tx
            .send(CapabilityEvent::Started)
            .map_err(|_| RecognitionError::Aborted)?;

        match self.pacing {
            None => {
                for event in self.script.iter() {
                    if self.tx.send(event.clone()).is_err() {
                        break;
                    }
                }
                let _ = self.tx.send(CapabilityEvent::Stopped);
                self.running.store(false, Ordering::SeqCst);
            }
            Some(interval) => {
                let script = self.script.clone();
                let tx = self.tx.clone();
                let running = self.running.clone();
                self.feeder = Some(thread::spawn(move || {
                    for event in script.iter() {
                        if !running.load(Ordering::SeqCst) {
                            return;
                        }
                        thread::sleep(interval);
                        if !running.load(Ordering::SeqCst) {
                            return;
                        }
                        if tx.send(event.clone()).is_err() {
                            return;
                        }
                    }
                    // Script exhausted: the platform stops on its own.
                    if running.swap(false, Ordering::SeqCst) {
                        let _ = tx.send(CapabilityEvent::Stopped);
                    }
                }));
            }
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<(), RecognitionError> {
        if !self.running.swap(false, Ordering::SeqCst) {
            return Ok(());
        }
        let _ = self.tx.send(CapabilityEvent::Stopped);
        log::debug!("scripted capability stopped mid-script");
        Ok(())
    }
}

impl Drop for ScriptedCapability {
    fn drop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(feeder) = self.feeder.take() {
            let _ = feeder.join();
        }
    }
}

/// The built-in sample script: a few phrases, each reaching the listener as
/// a growing interim segment before finalizing. Used by the desktop demo
/// backend and as the CLI default.
pub fn demo_script() -> Vec<CapabilityEvent> {
    let phrases = [
        "the quick brown fox",
        "jumps over the lazy dog",
        "pack my box with five dozen jugs",
    ];

    let mut script = Vec::new();
    for phrase in phrases {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        for end in 1..=words.len() {
            script.push(CapabilityEvent::Result {
                result_index: 0,
                results: vec![ResultChunk::interim(words[..end].join(" "))],
            });
        }
        script.push(CapabilityEvent::Result {
            result_index: 0,
            results: vec![ResultChunk::final_text(phrase)],
        });
    }
    script
}
