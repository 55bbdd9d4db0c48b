use crate::clipboard::CopyCommand;
use crate::page::{ElementId, Page, PageError, Range};
use thiserror::Error;
use tracing::{debug, warn};

/// Class of the element whose text is the password to copy.
pub const PASSWORD_CLASS: &str = "password";
pub const PASSWORD_SELECTOR: &str = ".password";
/// Class of the element whose text reports the outcome of a copy.
pub const STATUS_CLASS: &str = "copyToClipboard";
pub const STATUS_SELECTOR: &str = ".copyToClipboard";

pub const COPIED_MESSAGE: &str = "✓ Copied to clipboard";
pub const FAILED_MESSAGE: &str = "✗ Failed to copy to clipboard";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CopyError {
    /// The copy command was refused or is unavailable.
    #[error("copy command failed: {0}")]
    CommandFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed(CopyError),
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied)
    }

    /// The label the status element shows for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            CopyOutcome::Copied => COPIED_MESSAGE,
            CopyOutcome::Failed(_) => FAILED_MESSAGE,
        }
    }
}

/// Copies whatever the page currently has selected.
pub fn request_copy<C: CopyCommand + ?Sized>(page: &Page, clipboard: &mut C) -> Result<(), CopyError> {
    let text = page.selected_text();
    clipboard.copy_text(&text)
}

/// Selects the password on a page, copies it and reports the outcome in the
/// status element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardCopyAction {
    target: ElementId,
    status: ElementId,
}

impl ClipboardCopyAction {
    pub fn new(target: ElementId, status: ElementId) -> Self {
        Self { target, status }
    }

    /// Looks up the password and status elements by their fixed selectors.
    pub fn resolve(page: &Page) -> Result<Self, PageError> {
        let target = page.require(PASSWORD_SELECTOR)?;
        let status = page.require(STATUS_SELECTOR)?;
        Ok(Self::new(target, status))
    }

    pub fn target(&self) -> ElementId {
        self.target
    }

    pub fn status(&self) -> ElementId {
        self.status
    }

    pub fn run<C: CopyCommand + ?Sized>(&self, page: &mut Page, clipboard: &mut C) -> CopyOutcome {
        // The copy command only sees the active selection, so stage the password there first.
        let range = Range::select_node_contents(page, self.target);
        let selection = page.selection_mut();
        selection.remove_all_ranges();
        selection.add_range(range);

        let outcome = match request_copy(page, clipboard) {
            Ok(()) => {
                page.selection_mut().remove_all_ranges();
                debug!("Password copied to clipboard");
                CopyOutcome::Copied
            }
            Err(err) => {
                // Selection stays on the failure path.
                warn!(error = %err, "Failed to copy password to clipboard");
                CopyOutcome::Failed(err)
            }
        };

        page.element_mut(self.status).set_text_content(outcome.message());
        outcome
    }
}
