//! Input generators for property-based testing
#![allow(clippy::expect_used)]
use proptest::prelude::*;

/// Any string, including control characters and multi-byte text.
pub fn any_document_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(".*").expect("Failed to create any string strategy")
}

/// Text that cannot contain markup: no underscores, no backslashes, no `#`.
pub fn plain_text() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-zA-Zа-яА-Я0-9 .,!?]*")
        .expect("Failed to create plain text strategy")
}

/// Documents assembled from markup fragments, well-formed or not.
///
/// Fragments are glued together without separators so markers end up next to words,
/// digits and each other.
pub fn markup_document() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("# ".to_string()),
            Just("_".to_string()),
            Just("__".to_string()),
            Just("____".to_string()),
            Just("\\".to_string()),
            Just("\\_".to_string()),
            Just("\\\\".to_string()),
            Just(" ".to_string()),
            Just("\n".to_string()),
            Just("12".to_string()),
            Just("_italic_".to_string()),
            Just("__bold__".to_string()),
            Just("__bold _italic_ bold__".to_string()),
            Just("_italic __bold__ italic_".to_string()),
            prop::string::string_regex(r"[a-zA-Zа-я]{1,8}").expect("Failed to create word"),
        ],
        0..40,
    )
    .prop_map(|chunks| chunks.join(""))
}
