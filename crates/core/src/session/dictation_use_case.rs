use crate::interaction::domain::clipboard::Clipboard;
use crate::interaction::domain::notifier::{Notice, Notifier};
use crate::recognition::domain::adapter::RecognizerAdapter;
use crate::recognition::domain::capability::CapabilityProbe;
use crate::recognition::domain::event::RecognizerEvent;
use crate::session::domain::state_machine::{SessionState, SessionStateMachine};
use crate::transcript::domain::accumulator::TranscriptAccumulator;

/// The View-facing orchestrator for one capture session.
///
/// Owns the recognizer adapter (absent when the capability probe failed),
/// the transcript buffers, and the session state machine; commands come in
/// from the View, lifecycle effects come back through `pump()`. Everything
/// runs on the caller's thread — commands and event application are
/// serialized by construction.
pub struct DictationUseCase {
    machine: SessionStateMachine,
    accumulator: TranscriptAccumulator,
    adapter: Option<RecognizerAdapter>,
    clipboard: Box<dyn Clipboard>,
    notifier: Box<dyn Notifier>,
}

impl DictationUseCase {
    pub fn new(
        probe: CapabilityProbe,
        clipboard: Box<dyn Clipboard>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        let (machine, adapter) = match probe {
            CapabilityProbe::Supported(handle) => (
                SessionStateMachine::default(),
                Some(RecognizerAdapter::new(handle)),
            ),
            CapabilityProbe::Unsupported => {
                log::warn!("speech recognition capability unavailable");
                (SessionStateMachine::new(SessionState::Unsupported), None)
            }
        };
        Self {
            machine,
            accumulator: TranscriptAccumulator::new(),
            adapter,
            clipboard,
            notifier,
        }
    }

    pub fn state(&self) -> SessionState {
        self.machine.state()
    }

    pub fn supported(&self) -> bool {
        self.adapter.is_some()
    }

    pub fn finalized(&self) -> &str {
        self.accumulator.finalized()
    }

    pub fn interim(&self) -> &str {
        self.accumulator.interim()
    }

    pub fn snapshot(&self) -> String {
        self.accumulator.snapshot()
    }

    /// Request to begin listening. Idempotent while already listening; the
    /// `Idle -> Listening` transition lands later via `pump()`.
    pub fn start(&mut self) {
        if self.machine.state() != SessionState::Idle {
            return;
        }
        let Some(adapter) = self.adapter.as_mut() else {
            return;
        };
        if let Err(err) = adapter.start() {
            self.notifier
                .notify(Notice::error(format!("Recognition error: {}", err.code())));
        }
    }

    /// Request to stop listening. Idempotent while idle.
    pub fn stop(&mut self) {
        if self.machine.state() != SessionState::Listening {
            return;
        }
        let Some(adapter) = self.adapter.as_mut() else {
            return;
        };
        if let Err(err) = adapter.stop() {
            self.notifier
                .notify(Notice::error(format!("Recognition error: {}", err.code())));
        }
    }

    /// Reset the transcript. Available in every state except `Unsupported`.
    pub fn clear(&mut self) {
        if self.machine.state() == SessionState::Unsupported {
            return;
        }
        self.accumulator.clear();
        self.notifier.notify(Notice::success("Transcript cleared"));
    }

    /// Copy the current snapshot to the clipboard; refuses blank text.
    pub fn copy(&mut self) {
        if self.machine.state() == SessionState::Unsupported {
            return;
        }
        if self.accumulator.is_blank() {
            self.notifier.notify(Notice::error("No text to copy"));
            return;
        }
        match self.clipboard.write_text(&self.accumulator.snapshot()) {
            Ok(()) => self.notifier.notify(Notice::success("Copied to clipboard")),
            Err(err) => {
                log::error!("clipboard write failed: {err}");
                self.notifier.notify(Notice::error("Copy failed"));
            }
        }
    }

    /// Drain adapter events and apply them in arrival order. Returns true
    /// when anything observable changed, so views know to re-render.
    pub fn pump(&mut self) -> bool {
        let Some(adapter) = self.adapter.as_mut() else {
            return false;
        };
        let events = adapter.poll();
        let mut changed = false;
        for event in events {
            changed = true;
            match event {
                RecognizerEvent::Started => {
                    if self.machine.on_started() {
                        self.accumulator.clear_interim();
                        self.notifier.notify(Notice::success("Listening started"));
                    }
                }
                RecognizerEvent::Stopped => {
                    if self.machine.on_stopped() {
                        self.accumulator.clear_interim();
                        self.notifier.notify(Notice::info("Listening stopped"));
                    }
                }
                RecognizerEvent::Error(err) => {
                    log::warn!("recognition error: {err}");
                    self.notifier
                        .notify(Notice::error(format!("Recognition error: {}", err.code())));
                    if self.machine.on_stopped() {
                        self.accumulator.clear_interim();
                    }
                }
                RecognizerEvent::Result {
                    final_delta,
                    interim,
                } => {
                    self.accumulator.push_result(&final_delta, &interim);
                }
            }
        }
        changed
    }
}
