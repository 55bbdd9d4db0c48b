use super::{Element, ElementId, Page};

/// A span of characters inside one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    element: ElementId,
    start: usize,
    end: usize,
}

impl Range {
    /// Spans the whole current text of `id`.
    pub fn select_node_contents(page: &Page, id: ElementId) -> Self {
        Self {
            element: id,
            start: 0,
            end: page.element(id).len(),
        }
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    /// The covered text. Offsets past the end of a shrunken element are clamped.
    pub fn extract(&self, element: &Element) -> String {
        element
            .text_content()
            .chars()
            .skip(self.start)
            .take(self.end.saturating_sub(self.start))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ranges: Vec<Range>,
}

impl Selection {
    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn add_range(&mut self, range: Range) {
        self.ranges.push(range);
    }

    pub fn remove_all_ranges(&mut self) {
        self.ranges.clear();
    }

    /// Whether any range touches `id`.
    pub fn covers(&self, id: ElementId) -> bool {
        self.ranges.iter().any(|range| range.element == id)
    }
}
