use crate::Node;

/// Attribute value by case-insensitive name. `Some("")` for valueless attributes.
pub fn attr<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    let Node::Element { attributes, .. } = node else {
        return None;
    };
    attributes
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_deref().unwrap_or(""))
}

pub fn has_attr(node: &Node, name: &str) -> bool {
    attr(node, name).is_some()
}

pub fn has_class(node: &Node, class: &str) -> bool {
    attr(node, "class").is_some_and(|v| v.split_ascii_whitespace().any(|c| c == class))
}

/// First descendant (excluding `node` itself) matching `pred`, in document order.
pub fn find_descendant<'a>(node: &'a Node, pred: &impl Fn(&Node) -> bool) -> Option<&'a Node> {
    node.children()?
        .iter()
        .find_map(|c| if pred(c) { Some(c) } else { find_descendant(c, pred) })
}

pub fn find_descendant_with_class<'a>(node: &'a Node, class: &str) -> Option<&'a Node> {
    find_descendant(node, &|n| has_class(n, class))
}

/// `input`/`textarea` elements are form controls even if marked contenteditable.
pub fn is_text_control(node: &Node) -> bool {
    node.is_element_named("input") || node.is_element_named("textarea")
}

/// `contenteditable` present and not `"false"`.
pub fn is_content_editable(node: &Node) -> bool {
    if is_text_control(node) {
        return false;
    }
    attr(node, "contenteditable").is_some_and(|v| !v.trim().eq_ignore_ascii_case("false"))
}
