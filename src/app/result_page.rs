use crate::clipboard::CopyCommand;
use crate::copy::{ClipboardCopyAction, CopyOutcome, PASSWORD_CLASS, STATUS_CLASS};
use crate::page::{Element, ElementId, Page, PageError};

pub const COPY_BUTTON_LABEL: &str = "Copy to clipboard";

/// The page shown after a password is generated: the domain, the password and
/// a copy button whose label reports the last copy outcome.
#[derive(Debug, Clone)]
pub struct ResultPage {
    page: Page,
    domain: ElementId,
    action: ClipboardCopyAction,
}

impl ResultPage {
    pub fn new(domain: &str, password: &str) -> Result<Self, PageError> {
        let mut page = Page::new();
        let domain_id = page.push(Element::with_id("domain", domain));
        page.push(Element::with_class(PASSWORD_CLASS, password));
        page.push(Element::with_class("button", COPY_BUTTON_LABEL).add_class(STATUS_CLASS));

        let action = ClipboardCopyAction::resolve(&page)?;

        Ok(Self {
            page,
            domain: domain_id,
            action,
        })
    }

    pub fn domain(&self) -> &str {
        self.page.element(self.domain).text_content()
    }

    pub fn password(&self) -> &str {
        self.page.element(self.action.target()).text_content()
    }

    pub fn button_label(&self) -> &str {
        self.page.element(self.action.status()).text_content()
    }

    /// Whether the password is currently shown as selected.
    pub fn is_password_selected(&self) -> bool {
        self.page.selection().covers(self.action.target())
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn copy(&mut self, clipboard: &mut dyn CopyCommand) -> CopyOutcome {
        self.action.run(&mut self.page, clipboard)
    }
}
