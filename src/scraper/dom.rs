use std::collections::HashMap;

use ego_tree::NodeId;
use scraper::{ElementRef, Html};

/// Every element of a parsed page in document (pre-)order, so "next" and
/// "previous" lookups behave like a linear scan of the source markup.
///
/// Positions are indices into that order. Searching forward from an element
/// visits its descendants first; searching backward visits its ancestors.
pub struct DocumentIndex<'a> {
    elements: Vec<ElementRef<'a>>,
    positions: HashMap<NodeId, usize>,
}

impl<'a> DocumentIndex<'a> {
    pub fn new(document: &'a Html) -> Self {
        let elements: Vec<ElementRef<'a>> = document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .collect();
        let positions = elements
            .iter()
            .enumerate()
            .map(|(index, element)| (element.id(), index))
            .collect();

        Self { elements, positions }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn position(&self, element: ElementRef<'a>) -> Option<usize> {
        self.positions.get(&element.id()).copied()
    }

    pub fn element(&self, position: usize) -> ElementRef<'a> {
        self.elements[position]
    }

    /// First `tag` element strictly after `from` and strictly before `end`.
    pub fn find_next(&self, from: usize, end: usize, tag: &str) -> Option<usize> {
        let end = end.min(self.elements.len());
        (from + 1..end).find(|&index| self.is_tag(index, tag))
    }

    /// Nearest `tag` element strictly before `from`.
    pub fn find_previous(&self, from: usize, tag: &str) -> Option<usize> {
        (0..from.min(self.elements.len())).rev().find(|&index| self.is_tag(index, tag))
    }

    /// Descendant text of the element at `position`, trimmed.
    pub fn text(&self, position: usize) -> String {
        self.elements[position].text().collect::<String>().trim().to_string()
    }

    fn is_tag(&self, index: usize, tag: &str) -> bool {
        self.elements[index].value().name() == tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    const PAGE: &str = r#"<html><body>
        <h2>First</h2>
        <div class="wrap"><p>inside</p></div>
        <p>after</p>
        <h2>Second</h2>
        <p>tail</p>
    </body></html>"#;

    fn position_of(index: &DocumentIndex<'_>, document: &Html, css: &str) -> usize {
        let selector = Selector::parse(css).unwrap();
        index.position(document.select(&selector).next().unwrap()).unwrap()
    }

    #[test]
    fn test_find_next_descends_into_children() {
        let document = Html::parse_document(PAGE);
        let index = DocumentIndex::new(&document);
        let wrap = position_of(&index, &document, "div.wrap");

        let next = index.find_next(wrap, index.len(), "p").unwrap();
        assert_eq!(index.text(next), "inside");
    }

    #[test]
    fn test_find_next_respects_end_bound() {
        let document = Html::parse_document(PAGE);
        let index = DocumentIndex::new(&document);
        let first = position_of(&index, &document, "h2");
        let second = index.find_next(first, index.len(), "h2").unwrap();

        let after = index.find_next(first, second, "p").unwrap();
        let after = index.find_next(after, second, "p").unwrap();
        assert_eq!(index.text(after), "after");
        assert_eq!(index.find_next(after, second, "p"), None);
    }

    #[test]
    fn test_find_previous_excludes_self() {
        let document = Html::parse_document(PAGE);
        let index = DocumentIndex::new(&document);
        let first = position_of(&index, &document, "h2");
        let second = index.find_next(first, index.len(), "h2").unwrap();

        assert_eq!(index.find_previous(second, "h2"), Some(first));
        assert_eq!(index.find_previous(first, "h2"), None);
    }
}
