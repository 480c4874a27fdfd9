//! Core orchestration for live speech-transcript capture.
//!
//! Speech recognition itself is an external capability reached through the
//! port in [`recognition::domain::capability`]; this crate owns everything
//! around it: the adapter lifecycle, the transcript buffers, the session
//! state machine, and the clipboard/notification ports the UIs plug into.

pub mod interaction;
pub mod recognition;
pub mod session;
pub mod transcript;
