//! Emoji editor core.
//!
//! Re-exports the workspace crates behind one name: the token codec
//! ([`codec`]), the surface tree ([`dom`]), plain text control state
//! ([`text`]) and the surface controller, whose public API is re-exported at
//! the root.

pub use editor::*;

pub use emoji_codec as codec;
pub use html as dom;
pub use input_core as text;

/// Bind a controller to the first element of `host_markup`.
///
/// `<input>` and `<textarea>` become plain surfaces, a `contenteditable`
/// element becomes a rich one. Anything else is rejected.
pub fn attach(host_markup: &str, config: EditorConfig) -> Result<EmojiEditor, EditorError> {
    let target = EditableTarget::parse(host_markup)?;
    log::debug!(
        target: "editor.bind",
        "attached {} surface, output {}",
        if target.is_rich() { "rich" } else { "plain" },
        config.output_mode
    );
    Ok(EmojiEditor::bind(target, config, StaticEnvironment::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_binds_editable_hosts() {
        let rich = attach(r#"<div contenteditable="true">a</div>"#, EditorConfig::default()).unwrap();
        assert!(rich.is_rich());
        assert_eq!(rich.get_text(), "a");

        let input = attach(r#"<input value="ab">"#, EditorConfig::default()).unwrap();
        assert!(!input.is_rich());
    }

    #[test]
    fn attach_rejects_static_hosts() {
        let err = attach("<p>static</p>", EditorConfig::default()).unwrap_err();
        assert!(matches!(err, EditorError::InvalidOperation { operation: "bind", .. }));
    }
}
