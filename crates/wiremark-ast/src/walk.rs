//! Element tree traversal
//!
//! Shared pre-order walk so validation passes and tooling do not each
//! duplicate the recursion. A closure visitor is enough here; every caller
//! wants the same traversal and owns its own state.

use crate::node::{Document, Element};

/// Walk elements depth-first in source order, visiting each node before its
/// children.
pub fn walk_elements<V>(elements: &[Element], visitor: &mut V)
where
    V: FnMut(&Element),
{
    for element in elements {
        visitor(element);
        walk_elements(&element.children, visitor);
    }
}

/// Walk every element of a document.
pub fn walk_document<V>(document: &Document, visitor: &mut V)
where
    V: FnMut(&Element),
{
    walk_elements(&document.children, visitor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::ElementKind;
    use crate::location::{SourceLocation, SourceSpan};

    fn el(kind: ElementKind, children: Vec<Element>) -> Element {
        let mut element = Element::new(kind, SourceSpan::point(SourceLocation::origin()));
        element.children = children;
        element
    }

    #[test]
    fn visits_parents_before_children_in_source_order() {
        let tree = vec![el(
            ElementKind::Vertical,
            vec![
                el(ElementKind::Button, vec![]),
                el(ElementKind::Card, vec![el(ElementKind::Label, vec![])]),
            ],
        )];

        let mut kinds = Vec::new();
        walk_elements(&tree, &mut |e| kinds.push(e.kind));

        assert_eq!(
            kinds,
            vec![
                ElementKind::Vertical,
                ElementKind::Button,
                ElementKind::Card,
                ElementKind::Label,
            ]
        );
    }

    #[test]
    fn empty_tree_visits_nothing() {
        let mut count = 0;
        walk_elements(&[], &mut |_| count += 1);
        assert_eq!(count, 0);
    }
}
