#![no_main]

use emoji_codec::{MarkupConfig, MAX_CODEPOINTS, decode_token, render_character, render_markup};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(token) = decode_token(input) else {
        return;
    };
    assert!(!token.codepoints().is_empty());
    assert!(token.codepoints().len() <= MAX_CODEPOINTS);
    assert_eq!(render_character(&token).chars().count(), token.codepoints().len());
    let markup = render_markup(&token, &MarkupConfig::default());
    assert!(markup.starts_with("<img ") && markup.ends_with('>'));
});
