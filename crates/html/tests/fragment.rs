use html::traverse::{find_node, text_content};
use html::{
    DomRange, IdAllocator, Node, clamp_range, inner_html, inner_html_of, insert_at_range,
    parse_fragment, range_after_node, replace_children, select_node_contents,
};

fn region(markup: &str) -> (Node, IdAllocator) {
    let mut ids = IdAllocator::new();
    let mut root = Node::element(ids.next_id(), "div");
    let children = parse_fragment(markup, &mut ids);
    if let Some(slot) = root.children_mut() {
        *slot = children;
    }
    (root, ids)
}

#[test]
fn reserialized_markup_parses_to_the_same_markup() {
    let inputs = [
        "plain",
        "a<b>bold</b> and <i>italic</i>",
        r#"<span class="emoji-outer"><span class="emoji-inner" data-codepoints="1f600"></span></span>"#,
        "<script>if (a < b) {}</script>",
        "one<br>two<!-- c -->",
        "1 &lt; 2 &amp; 3",
    ];
    for input in inputs {
        let once = inner_html_of(&parse_fragment(input, &mut IdAllocator::new()));
        let twice = inner_html_of(&parse_fragment(&once, &mut IdAllocator::new()));
        assert_eq!(once, twice, "{input}");
    }
}

#[test]
fn unclosed_and_stray_tags_are_tolerated() {
    let nodes = parse_fragment("<b>open</i> tail", &mut IdAllocator::new());
    assert_eq!(inner_html_of(&nodes), "<b>open tail</b>");
}

#[test]
fn zero_width_entity_decodes_in_text() {
    let (root, _) = region("x&#8203;y&#x200B;");
    assert_eq!(text_content(&root), "x\u{200B}y\u{200B}");
}

#[test]
fn insertion_splits_text_and_reports_position() {
    let (mut root, mut ids) = region("hello world");
    let text_id = root.children().unwrap()[0].id();
    let nodes = parse_fragment("<img alt=x>", &mut ids);
    let img = nodes[0].id();

    let inserted = insert_at_range(&mut root, DomRange::collapsed(text_id, 5), nodes, &mut ids).unwrap();
    assert_eq!(inserted.parent, root.id());
    assert_eq!(inserted.nodes, vec![img]);
    assert_eq!(inserted.end_offset, 2);
    assert_eq!(inner_html(&root), r#"hello<img alt="x"> world"#);
    assert_eq!(range_after_node(&root, img), Some(inserted.range_after()));
}

#[test]
fn stale_ranges_do_not_resolve() {
    let (mut root, mut ids) = region("<em>gone</em>");
    let em = root.children().unwrap()[0].id();
    let root_id = root.id();
    replace_children(&mut root, root_id, Vec::new()).unwrap();

    assert!(find_node(&root, em).is_none());
    assert_eq!(clamp_range(&root, DomRange::collapsed(em, 0)), None);
    let nodes = parse_fragment("x", &mut ids);
    assert!(insert_at_range(&mut root, DomRange::collapsed(em, 0), nodes, &mut ids).is_none());
    assert_eq!(inner_html(&root), "");
}

#[test]
fn node_contents_selection_collapses_to_end() {
    let (root, _) = region("<p>ab<b>c</b></p>");
    let p = root.children().unwrap()[0].id();
    assert_eq!(select_node_contents(&root, p, false), Some(DomRange::new(p, 0, 2)));
    assert_eq!(select_node_contents(&root, p, true), Some(DomRange::collapsed(p, 2)));
}
