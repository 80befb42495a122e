use std::io::{self, Write};
use std::sync::Mutex;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{DevCircleError, DevCircleResult};

pub trait Clipboard: Send + Sync {
    fn copy(&self, text: &str) -> DevCircleResult<()>;
}

/// Asks the terminal emulator to set the system clipboard via an OSC 52
/// escape sequence. Terminals without OSC 52 support silently ignore it.
pub struct Osc52Clipboard;

impl Osc52Clipboard {
    pub fn sequence(text: &str) -> String {
        format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
    }
}

impl Clipboard for Osc52Clipboard {
    fn copy(&self, text: &str) -> DevCircleResult<()> {
        let mut stdout = io::stdout();
        stdout
            .write_all(Self::sequence(text).as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| DevCircleError::ClipboardError(e.to_string()))
    }
}

/// Keeps the copied text in memory
#[derive(Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&self, text: &str) -> DevCircleResult<()> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|_| DevCircleError::ClipboardError("clipboard lock poisoned".to_string()))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osc52_sequence_wraps_base64_payload() {
        let seq = Osc52Clipboard::sequence("hi");
        assert_eq!(seq, "\x1b]52;c;aGk=\x07");
    }
}
