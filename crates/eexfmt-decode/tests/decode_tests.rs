/*
 * decode_tests.rs
 * Copyright (c) 2026 eexfmt contributors
 *
 * End-to-end decode tests driven by layout-engine JSON fixtures.
 */

use eexfmt_decode::{ExpressionMap, NullStrategies, decode_document};
use eexfmt_doc::{from_layout, to_layout};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn decode_fixture(doc: Value, map_json: Value) -> (Value, ExpressionMap) {
    let doc = from_layout(&doc).expect("fixture document should parse");
    let mut map: ExpressionMap =
        serde_json::from_value(map_json).expect("fixture map should parse");
    let decoded = decode_document(doc, &mut map, &NullStrategies).expect("decode should succeed");
    (to_layout(&decoded), map)
}

#[test]
fn decodes_single_inline_expression() {
    let (decoded, map) = decode_fixture(
        json!({ "parts": ["<span>", "EEX1", "</span>"] }),
        json!({ "EEX1": { "print": "<%= @user.name %>", "afterWhitespace": true } }),
    );

    assert_eq!(
        decoded,
        json!({ "parts": ["<span>", "<%= @user.name %>", "</span>"] })
    );
    assert!(map.is_empty());

    // The placeholder text is gone and the print text appears exactly once.
    let rendered = decoded.to_string();
    assert!(!rendered.contains("EEX1"));
    assert_eq!(rendered.matches("<%= @user.name %>").count(), 1);
}

#[test]
fn decodes_split_tag_across_leaves() {
    let (decoded, map) = decode_fixture(
        json!({
            "parts": [
                { "contents": { "parts": ["<EEXT2", { "type": "line", "soft": true }] } },
                "/>"
            ]
        }),
        json!({ "<EEXT2/>": { "print": "<%= render @form %>" } }),
    );

    // The construct is replaced down to the closing leaf, which stays
    // in the sequence.
    assert_eq!(decoded, json!({ "parts": ["<%= render @form %>", "/>"] }));
    assert!(!decoded.to_string().contains("<EEXT"));
    assert!(map.is_empty());
}

#[test]
fn split_tag_with_whitespace_between_halves_leaves_no_fragment() {
    let (decoded, map) = decode_fixture(
        json!({ "parts": ["<EEXT2", "  ", "/>", "tail"] }),
        json!({ "<EEXT2/>": { "print": "<%= render @form %>" } }),
    );

    assert_eq!(
        decoded,
        json!({ "parts": ["<%= render @form %>", "/>", "tail"] })
    );
    assert!(!decoded.to_string().contains("<EEXT"));
    assert!(map.is_empty());
}

#[test]
fn decodes_block_construct_with_forced_breaks() {
    let (decoded, map) = decode_fixture(
        json!({ "parts": ["<EEXT1>", "body", "</EEXT1>"] }),
        json!({
            "<EEXT1>": { "print": "<% if @ok do %>", "type": "start" },
            "</EEXT1>": { "print": "<% end %>", "type": "end" }
        }),
    );

    assert_eq!(
        decoded,
        json!({
            "parts": [
                "<% if @ok do %>",
                { "type": "break-parent" },
                "body",
                "<% end %>"
            ]
        })
    );
    assert!(map.is_empty());
}

#[test]
fn script_scoped_keys_survive_until_scope_close() {
    let (decoded, map) = decode_fixture(
        json!({ "parts": ["EEXS5", "var x = 1;", "EEXS5", "</script>"] }),
        json!({ "EEXS5": { "print": "<%= debug() %>" } }),
    );

    assert_eq!(
        decoded,
        json!({
            "parts": ["<%= debug() %>", "var x = 1;", "<%= debug() %>", "</script>"]
        })
    );
    assert!(map.is_empty());
}

#[test]
fn empty_map_round_trips_document_unchanged() {
    let original = json!({
        "parts": [
            "<div>",
            { "contents": ["text", { "type": "line", "soft": true }] },
            { "type": "line" },
            { "type": "line", "hard": true },
            "</div>"
        ]
    });

    let (decoded, map) = decode_fixture(original.clone(), json!({}));
    assert_eq!(decoded, original);
    assert!(map.is_empty());
}

#[test]
fn nested_documents_decode_at_every_depth() {
    let (decoded, map) = decode_fixture(
        json!({
            "parts": [
                "<ul>",
                { "parts": ["<li>", "EEX1", "</li>"] },
                { "parts": ["<li>", "EEX2", "</li>"] },
                "</ul>"
            ]
        }),
        json!({
            "EEX1": { "print": "<%= a %>" },
            "EEX2": { "print": "<%= b %>" }
        }),
    );

    assert_eq!(
        decoded,
        json!({
            "parts": [
                "<ul>",
                { "parts": ["<li>", "<%= a %>", "</li>"] },
                { "parts": ["<li>", "<%= b %>", "</li>"] },
                "</ul>"
            ]
        })
    );
    assert!(map.is_empty());
}

#[test]
fn missing_expression_aborts_the_decode() {
    let doc = from_layout(&json!({ "parts": ["EEX7"] })).unwrap();
    let mut map = ExpressionMap::new();

    let err = decode_document(doc, &mut map, &NullStrategies).unwrap_err();
    assert!(err.to_string().contains("EEX7"));
}
