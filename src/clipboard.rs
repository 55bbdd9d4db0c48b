use crate::copy::CopyError;
use arboard::Clipboard;
use std::time::Duration;
use tracing::debug;

/// The platform's copy command: puts text on a clipboard or reports why it could not.
pub trait CopyCommand {
    fn copy_text(&mut self, text: &str) -> Result<(), CopyError>;
}

/// How long a one-shot copy keeps the clipboard so a clipboard manager can take it over.
pub const HANDOFF_WAIT: Duration = Duration::from_millis(250);

/// The system clipboard.
///
/// The arboard handle is opened on first use and kept open. On Linux,
/// clipboard contents persist only while the application holding them is running,
/// so a process that exits right after copying should use [`SystemClipboard::for_oneshot`].
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
    handoff_wait: Option<Duration>,
}

impl SystemClipboard {
    /// For long-lived processes that keep the clipboard open.
    pub fn new() -> Self {
        Self::default()
    }

    /// For processes that exit right after copying: each copy blocks until
    /// [`HANDOFF_WAIT`] has passed or another application owns the clipboard.
    pub fn for_oneshot() -> Self {
        Self {
            inner: None,
            handoff_wait: Some(HANDOFF_WAIT),
        }
    }

    pub fn handoff_wait(&self) -> Option<Duration> {
        self.handoff_wait
    }

    fn handle(&mut self) -> Result<&mut Clipboard, CopyError> {
        if self.inner.is_none() {
            let clipboard = Clipboard::new().map_err(|e| {
                CopyError::CommandFailed(format!("Failed to access system clipboard: {e}"))
            })?;
            debug!("Opened system clipboard");
            self.inner = Some(clipboard);
        }

        self.inner
            .as_mut()
            .ok_or_else(|| CopyError::CommandFailed("System clipboard unavailable".to_string()))
    }
}

#[cfg(target_os = "linux")]
fn set_text(
    clipboard: &mut Clipboard,
    text: &str,
    handoff_wait: Option<Duration>,
) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;
    use std::time::Instant;

    match handoff_wait {
        Some(wait) => clipboard
            .set()
            .wait_until(Instant::now() + wait)
            .text(text.to_owned()),
        None => clipboard.set_text(text),
    }
}

#[cfg(not(target_os = "linux"))]
fn set_text(
    clipboard: &mut Clipboard,
    text: &str,
    _handoff_wait: Option<Duration>,
) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

impl CopyCommand for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), CopyError> {
        let handoff_wait = self.handoff_wait;
        let clipboard = self.handle()?;
        set_text(clipboard, text, handoff_wait)
            .map_err(|e| CopyError::CommandFailed(format!("Failed to copy text to clipboard: {e}")))
    }
}

/// A clipboard living in process memory. Can be told to refuse every copy.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    failure: Option<String>,
    copies: usize,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose copy command always fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of successful copies.
    pub fn copies(&self) -> usize {
        self.copies
    }
}

impl CopyCommand for MemoryClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), CopyError> {
        if let Some(reason) = &self.failure {
            return Err(CopyError::CommandFailed(reason.clone()));
        }
        self.contents = Some(text.to_string());
        self.copies += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_stores_last_copy() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.contents(), None);

        clipboard.copy_text("first").unwrap();
        clipboard.copy_text("second").unwrap();

        assert_eq!(clipboard.contents(), Some("second"));
        assert_eq!(clipboard.copies(), 2);
    }

    #[test]
    fn test_oneshot_clipboard_waits_for_handoff() {
        assert_eq!(SystemClipboard::new().handoff_wait(), None);
        assert_eq!(SystemClipboard::for_oneshot().handoff_wait(), Some(HANDOFF_WAIT));
    }

    #[test]
    fn test_failing_memory_clipboard_keeps_contents() {
        let mut clipboard = MemoryClipboard::failing("blocked by policy");
        let err = clipboard.copy_text("secret").unwrap_err();

        assert_eq!(err, CopyError::CommandFailed("blocked by policy".to_string()));
        assert_eq!(clipboard.contents(), None);
        assert_eq!(clipboard.copies(), 0);
    }
}
