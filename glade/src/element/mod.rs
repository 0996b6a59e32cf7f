mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Test whether `id` names the container or one of its descendants.
///
/// This is the containment check used for click-outside detection: a click
/// counts as "inside" a widget iff its target element lives somewhere under
/// the widget's root container, so clicks landing on a dropdown overlay that
/// belongs to the widget are never treated as outside.
pub fn is_within(root: &Element, container_id: &str, id: &str) -> bool {
    match find_element(root, container_id) {
        Some(container) => find_element(container, id).is_some(),
        None => false,
    }
}
