use crate::interaction::domain::clipboard::{Clipboard, ClipboardError};

/// Host clipboard backed by `arboard`.
///
/// The platform handle is opened lazily on the first write, so constructing
/// the session on a headless system only fails once a copy is attempted.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let handle = match self.handle.as_mut() {
            Some(handle) => handle,
            None => {
                let handle = arboard::Clipboard::new()
                    .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
                self.handle.insert(handle)
            }
        };
        handle
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}
