mod content;
mod node;
mod selector;

pub use content::Content;
pub use node::Element;
pub use selector::Selector;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id.as_deref() == Some(id) {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// First element in document order matching a compound selector such as
/// `.mdl-textfield__input` or `textarea#bio.wide`.
///
/// Returns `None` for selectors that fail to parse.
pub fn query_selector<'a>(root: &'a Element, selector: &str) -> Option<&'a Element> {
    let Some(parsed) = Selector::parse(selector) else {
        log::debug!("Ignoring unsupported selector {selector:?}");
        return None;
    };
    find_first(root, &parsed)
}

/// Every element matching `selector`, in document order.
pub fn query_selector_all<'a>(root: &'a Element, selector: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    if let Some(selector) = Selector::parse(selector) {
        collect_matching(root, &selector, &mut found);
    }
    found
}

fn find_first<'a>(element: &'a Element, selector: &Selector) -> Option<&'a Element> {
    if selector.matches(element) {
        return Some(element);
    }
    element
        .child_elements()
        .iter()
        .find_map(|child| find_first(child, selector))
}

fn collect_matching<'a>(element: &'a Element, selector: &Selector, out: &mut Vec<&'a Element>) {
    if selector.matches(element) {
        out.push(element);
    }
    for child in element.child_elements() {
        collect_matching(child, selector, out);
    }
}
