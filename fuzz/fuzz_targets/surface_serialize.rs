#![no_main]

use editor::{EditorConfig, EmojiEditor, RichRegion, StaticEnvironment};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let mut editor = EmojiEditor::bind(
        RichRegion::from_markup(input).into(),
        EditorConfig::default(),
        StaticEnvironment::decomposed(),
    );
    let html = editor.get_html();
    assert_eq!(html, editor.get_html());
    let _ = editor.get_text();
    let _ = editor.insert_emoji("1f600");
    assert!(editor.get_text().contains('\u{1F600}'));
});
