//! Clipboard collaborator.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

/// Sink for generated passwords headed to a paste buffer. The generation
/// core never sees this trait; it exists so callers can swap the platform
/// clipboard for a capture in tests.
pub trait ClipboardWriter {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug)]
pub struct ClipboardError(String);

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Clipboard error: {}", self.0)
    }
}

impl std::error::Error for ClipboardError {}

/// The system clipboard via copypasta.
pub struct SystemClipboard(ClipboardContext);

impl SystemClipboard {
    /// Connect to the platform clipboard. Fails on headless sessions with
    /// no display server.
    pub fn connect() -> Result<Self, ClipboardError> {
        ClipboardContext::new()
            .map(SystemClipboard)
            .map_err(|e| ClipboardError(e.to_string()))
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.0
            .set_contents(text.to_owned())
            .map_err(|e| ClipboardError(e.to_string()))?;

        // Readback copy holds the password too; scrub it.
        if let Ok(mut retrieved) = self.0.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Records writes instead of touching the platform clipboard.
    #[derive(Default)]
    pub struct CaptureClipboard {
        pub written: Vec<String>,
    }

    impl ClipboardWriter for CaptureClipboard {
        fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.written.push(text.to_owned());
            Ok(())
        }
    }
}
