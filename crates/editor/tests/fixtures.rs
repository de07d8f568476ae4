use editor::{EditorConfig, EmojiEditor, OutputMode, RichRegion, StaticEnvironment};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

const SERIALIZE_FORMAT_V1: &str = "emoji-editor-serialize-v1";

#[derive(Debug, Deserialize)]
struct Manifest {
    format: String,
    cases: Vec<Case>,
}

#[derive(Debug, Deserialize)]
struct Case {
    id: String,
    #[serde(default)]
    mode: Option<String>,
    markup: String,
    text: String,
    html: String,
    #[serde(default)]
    html_contains: bool,
}

fn load_manifest() -> Manifest {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/serialize.toml");
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read fixture manifest {path:?}: {err}"));
    toml::from_str(&content)
        .unwrap_or_else(|err| panic!("failed to parse fixture manifest {path:?}: {err}"))
}

#[test]
fn serialization_fixtures() {
    let manifest = load_manifest();
    assert_eq!(manifest.format, SERIALIZE_FORMAT_V1, "unsupported fixture format");
    assert!(!manifest.cases.is_empty());

    let mut failures = Vec::new();
    for case in &manifest.cases {
        let output_mode: OutputMode = case
            .mode
            .as_deref()
            .unwrap_or("utf8")
            .parse()
            .unwrap_or_else(|err| panic!("{}: {err}", case.id));
        let config = EditorConfig {
            output_mode,
            ..EditorConfig::default()
        };
        let editor = EmojiEditor::bind(
            RichRegion::from_markup(&case.markup).into(),
            config,
            StaticEnvironment::decomposed(),
        );

        let text = editor.get_text();
        if text != case.text {
            failures.push(format!("{}: text {:?} != {:?}", case.id, text, case.text));
        }
        let html = editor.get_html();
        let html_ok = if case.html_contains {
            html.contains(&case.html)
        } else {
            html == case.html
        };
        if !html_ok {
            failures.push(format!("{}: html {:?} vs {:?}", case.id, html, case.html));
        }
    }
    assert!(failures.is_empty(), "fixture failures:\n{}", failures.join("\n"));
}

#[test]
fn fixture_ids_are_unique() {
    let manifest = load_manifest();
    let mut ids: Vec<&str> = manifest.cases.iter().map(|c| c.id.as_str()).collect();
    ids.sort_unstable();
    let before = ids.len();
    ids.dedup();
    assert_eq!(before, ids.len(), "duplicate fixture id");
}
