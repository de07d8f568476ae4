#![no_main]

use html::{IdAllocator, inner_html_of, parse_fragment};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let once = inner_html_of(&parse_fragment(input, &mut IdAllocator::new()));
    let twice = inner_html_of(&parse_fragment(&once, &mut IdAllocator::new()));
    assert_eq!(once, twice);
});
