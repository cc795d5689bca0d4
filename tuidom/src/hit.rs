use crate::element::Element;
use crate::layout::LayoutResult;

/// Find the deepest clickable element at the given coordinates.
/// Returns None if no clickable element contains the point.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    let rect = layout.get(&root.id)?;

    if !rect.contains(x, y) {
        return None;
    }

    // Check children in reverse order (last rendered = on top)
    for child in root.child_elements().iter().rev() {
        if let Some(id) = hit_test(layout, child, x, y) {
            return Some(id);
        }
    }

    root.clickable.then(|| root.id.clone())
}

/// Ids of every element containing the point, outermost first.
///
/// Each level follows the topmost child containing the point, so the
/// last entry is the element a pointer at `(x, y)` is over.
pub fn hit_path(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = Some(root);

    while let Some(element) = current.take() {
        match layout.get(&element.id) {
            Some(rect) if rect.contains(x, y) => path.push(element.id.clone()),
            _ => break,
        }

        current = element
            .child_elements()
            .iter()
            .rev()
            .find(|child| layout.get(&child.id).is_some_and(|r| r.contains(x, y)));
    }

    path
}
