//! Markup serialization (`outerHTML` / `innerHTML` equivalents).

use crate::Node;
use crate::entities::{escape_attr, escape_text};
use crate::tokenizer::{is_rawtext_element, is_void_element};

/// Markup of `node` including its own tag.
pub fn outer_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, false, &mut out);
    out
}

/// Markup of `node`'s children. Empty for text and comments.
pub fn inner_html(node: &Node) -> String {
    match node {
        Node::Element { name, children, .. } => {
            let mut out = String::new();
            let raw = is_rawtext_element(name);
            for c in children {
                write_node(c, raw, &mut out);
            }
            out
        }
        _ => String::new(),
    }
}

/// Markup of a sequence of sibling nodes.
pub fn inner_html_of(nodes: &[Node]) -> String {
    let mut out = String::new();
    for n in nodes {
        write_node(n, false, &mut out);
    }
    out
}

fn write_node(node: &Node, in_rawtext: bool, out: &mut String) {
    match node {
        Node::Text { text, .. } => {
            if in_rawtext {
                out.push_str(text);
            } else {
                out.push_str(&escape_text(text));
            }
        }
        Node::Comment { text, .. } => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
        Node::Element {
            name,
            attributes,
            children,
            ..
        } => {
            out.push('<');
            out.push_str(name);
            for (k, v) in attributes {
                out.push(' ');
                out.push_str(k);
                if let Some(v) = v {
                    out.push_str("=\"");
                    out.push_str(&escape_attr(v));
                    out.push('"');
                }
            }
            out.push('>');
            if is_void_element(name) {
                return;
            }
            let raw = is_rawtext_element(name);
            for c in children {
                write_node(c, raw, out);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
    }
}
