use crate::tokenizer::{is_rawtext_element, tokenize};
use crate::traverse::IdAllocator;
use crate::types::{Node, Token};

/// Open elements deeper than this are flattened: the element is kept as an
/// empty leaf and its content joins the enclosing element.
pub const MAX_NESTING_DEPTH: usize = 512;

/// Parse a markup fragment into top-level nodes, assigning fresh ids.
///
/// Unclosed elements are closed at the end of input; end tags with no open
/// match are ignored. Nesting is capped at [`MAX_NESTING_DEPTH`].
pub fn parse_fragment(input: &str, ids: &mut IdAllocator) -> Vec<Node> {
    let tokens = tokenize(input);
    log::trace!(target: "html.fragment", "parsing {} tokens", tokens.len());
    build_fragment(tokens, ids)
}

pub(crate) fn build_fragment(tokens: Vec<Token>, ids: &mut IdAllocator) -> Vec<Node> {
    let mut roots: Vec<Node> = Vec::new();
    let mut open: Vec<Node> = Vec::new();

    for token in tokens {
        match token {
            Token::Text(text) => {
                if text.is_empty() {
                    continue;
                }
                append(&mut open, &mut roots, Node::Text { id: ids.next_id(), text });
            }
            Token::Comment(text) => {
                append(&mut open, &mut roots, Node::Comment { id: ids.next_id(), text });
            }
            Token::StartTag {
                name,
                attributes,
                self_closing,
            } => {
                let element = Node::Element {
                    id: ids.next_id(),
                    name,
                    attributes,
                    children: Vec::new(),
                };
                // Rawtext elements only ever hold one text run, so they may
                // open one level past the cap.
                let flatten = !self_closing
                    && open.len() >= MAX_NESTING_DEPTH
                    && !element.name().is_some_and(is_rawtext_element);
                if flatten {
                    log::trace!(target: "html.fragment", "nesting cap reached, flattening element");
                }
                if self_closing || flatten {
                    append(&mut open, &mut roots, element);
                } else {
                    open.push(element);
                }
            }
            Token::EndTag(name) => {
                if !open.iter().any(|n| n.is_element_named(&name)) {
                    log::trace!(target: "html.fragment", "ignoring stray </{name}>");
                    continue;
                }
                while let Some(node) = open.pop() {
                    let matched = node.is_element_named(&name);
                    append(&mut open, &mut roots, node);
                    if matched {
                        break;
                    }
                }
            }
        }
    }

    while let Some(node) = open.pop() {
        append(&mut open, &mut roots, node);
    }

    roots
}

fn append(open: &mut [Node], roots: &mut Vec<Node>, node: Node) {
    match open.last_mut().and_then(Node::children_mut) {
        Some(children) => children.push(node),
        None => roots.push(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialize::inner_html_of;

    fn parse(input: &str) -> Vec<Node> {
        parse_fragment(input, &mut IdAllocator::new())
    }

    #[test]
    fn nests_elements() {
        let nodes = parse("a<b>c<i>d</i></b>e");
        assert_eq!(nodes.len(), 3);
        let Node::Element { name, children, .. } = &nodes[1] else {
            panic!("expected element, got {:?}", nodes[1]);
        };
        assert_eq!(name, "b");
        assert_eq!(children.len(), 2);
        assert!(children[1].is_element_named("i"));
    }

    #[test]
    fn closes_unclosed_elements_at_end() {
        let nodes = parse("<div><span>x");
        assert_eq!(inner_html_of(&nodes), "<div><span>x</span></div>");
    }

    #[test]
    fn ignores_stray_end_tags() {
        let nodes = parse("a</p>b");
        assert_eq!(inner_html_of(&nodes), "ab");
    }

    #[test]
    fn mismatched_end_tag_closes_intermediate_elements() {
        let nodes = parse("<b><i>x</b>y");
        assert_eq!(inner_html_of(&nodes), "<b><i>x</i></b>y");
    }

    fn depth(node: &Node) -> usize {
        1 + node
            .children()
            .map_or(0, |c| c.iter().map(depth).max().unwrap_or(0))
    }

    #[test]
    fn deep_nesting_is_flattened_at_the_cap() {
        let input = format!("{}x{}", "<b>".repeat(10_000), "</b>".repeat(10_000));
        let nodes = parse(&input);
        assert_eq!(nodes.len(), 1);
        assert_eq!(depth(&nodes[0]), MAX_NESTING_DEPTH + 1);
        assert_eq!(crate::traverse::text_content(&nodes[0]), "x");
    }

    #[test]
    fn script_past_the_cap_keeps_its_text() {
        let input = format!("{}<script>a<b</script>", "<i>".repeat(MAX_NESTING_DEPTH));
        let nodes = parse(&input);
        let mut scripts = 0;
        crate::traverse::for_each_node(&nodes[0], &mut |n| {
            if n.is_element_named("script") {
                scripts += 1;
                assert_eq!(crate::traverse::text_content(n), "a<b");
            }
        });
        assert_eq!(scripts, 1);
    }

    #[test]
    fn assigns_unique_ids() {
        let mut ids = IdAllocator::new();
        let nodes = parse_fragment("<p>a</p><img>", &mut ids);
        let mut seen = Vec::new();
        for node in &nodes {
            crate::traverse::for_each_node(node, &mut |n| seen.push(n.id()));
        }
        let mut sorted = seen.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), seen.len());
    }
}
