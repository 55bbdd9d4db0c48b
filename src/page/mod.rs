pub mod selection;

pub use selection::{Range, Selection};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("No element matches selector '{0}'")]
    NoMatch(String),
}

/// Handle of an element inside the [`Page`] that created it.
///
/// Pages never remove elements, so a handle stays valid for the lifetime of its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// A rendered piece of text on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    id: Option<String>,
    classes: Vec<String>,
    text: String,
}

impl Element {
    pub fn with_class(class: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: None,
            classes: vec![class.into()],
            text: text.into(),
        }
    }

    pub fn with_id(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            classes: Vec::new(),
            text: text.into(),
        }
    }

    pub fn add_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn text_content(&self) -> &str {
        &self.text
    }

    pub fn set_text_content(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Number of characters, which is the unit range offsets are measured in.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Supports `.class` and `#id` selectors.
    pub fn matches(&self, selector: &str) -> bool {
        if let Some(class) = selector.strip_prefix('.') {
            self.classes.iter().any(|c| c == class)
        } else if let Some(id) = selector.strip_prefix('#') {
            self.id.as_deref() == Some(id)
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    elements: Vec<Element>,
    selection: Selection,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: Element) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    /// First element matching `selector`.
    pub fn query_selector(&self, selector: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|element| element.matches(selector))
            .map(ElementId)
    }

    pub fn require(&self, selector: &str) -> Result<ElementId, PageError> {
        self.query_selector(selector)
            .ok_or_else(|| PageError::NoMatch(selector.to_string()))
    }

    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    pub fn element_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.0]
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    /// Text covered by the active selection, ranges concatenated in order.
    pub fn selected_text(&self) -> String {
        self.selection
            .ranges()
            .iter()
            .map(|range| range.extract(self.element(range.element())))
            .collect()
    }
}
