//! Tests for the SML line grammar and the WSV value rules it is built on.

use sml::wsv::{self, LineLayout};
use sml::{from_str, to_string, Document, Element, Error, WsvErrorKind};

fn values(line: &str) -> Vec<Option<String>> {
    let mut lines = wsv::parse_lines(line, false).unwrap();
    assert_eq!(lines.len(), 1);
    lines.remove(0).values
}

fn some(s: &str) -> Option<String> {
    Some(s.to_string())
}

// Line classification

#[test]
fn test_line_arity_decides_node_kind() {
    let document = from_str("Root\n  Child\n  End\n  Key value\n  Many a b c\nEnd").unwrap();
    let root = document.root();
    assert!(root.nodes()[0].is_element_with_name("child"));
    assert!(root.nodes()[1].is_attribute_with_name("key"));
    assert_eq!(root.attribute("many").unwrap().values().len(), 3);
}

#[test]
fn test_indentation_is_not_significant() {
    let flat = from_str("Root\nChild\nKey value\nEnd\nEnd").unwrap();
    let odd = from_str("   Root\nChild\n\t\t\t\tKey value\n End\n      End").unwrap();
    assert_eq!(flat.root(), odd.root());
}

#[test]
fn test_end_keyword_is_case_insensitive() {
    let document = from_str("Root\n  Child\n  END\n  Other\n  end\nEnd").unwrap();
    assert_eq!(document.root().all_elements().count(), 2);
    assert_eq!(document.end_keyword(), Some("End"));
}

#[test]
fn test_quoted_end_keyword_still_closes() {
    let document = from_str("Root\n  Child\n  \"End\"\nEnd").unwrap();
    assert!(document.root().element("child").unwrap().nodes().is_empty());
}

#[test]
fn test_quoted_null_marker_is_a_name() {
    let document = from_str("Root\n  \"-\"\n  -\n-").unwrap();
    assert_eq!(document.end_keyword(), None);
    assert!(document.root().has_element("-"));
}

#[test]
fn test_attribute_named_like_end_keyword() {
    let document = from_str("Root\n  End 1\nEnd").unwrap();
    assert_eq!(document.root().string("end"), Some("1"));
}

#[test]
fn test_element_named_like_end_keyword_serializes_ambiguously() {
    let mut root = Element::new("Root");
    root.add_element("End");
    let text = to_string(&Document::new(root));
    assert_eq!(text, "Root\n\tEnd\n\tEnd\nEnd");
    assert!(matches!(from_str(&text), Err(Error::Parse { .. })));
}

// WSV values

#[test]
fn test_whitespace_separates_values() {
    assert_eq!(values("a b\tc"), vec![some("a"), some("b"), some("c")]);
    assert_eq!(values("  a  "), vec![some("a")]);
    assert_eq!(values("a\u{00A0}b\u{3000}c"), vec![some("a"), some("b"), some("c")]);
    assert_eq!(values("a\u{2003}b"), vec![some("a"), some("b")]);
}

#[test]
fn test_null_and_empty() {
    assert_eq!(values("- \"\" \"-\" --"), vec![None, some(""), some("-"), some("--")]);
}

#[test]
fn test_quoted_strings() {
    assert_eq!(values("\"a b\""), vec![some("a b")]);
    assert_eq!(values("\"a\"\"b\""), vec![some("a\"b")]);
    assert_eq!(values("\"a\"/\"b\""), vec![some("a\nb")]);
    assert_eq!(values("\"#not comment\""), vec![some("#not comment")]);
}

#[test]
fn test_comments() {
    assert_eq!(values("a # b c"), vec![some("a")]);
    assert_eq!(values("a#b"), vec![some("a")]);
    assert!(values("# only").is_empty());
}

#[test]
fn test_wsv_errors() {
    let err = wsv::parse_lines("a\"b", false).unwrap_err();
    assert!(matches!(
        err,
        Error::Wsv {
            line: 1,
            kind: WsvErrorKind::InvalidDoubleQuote,
            ..
        }
    ));

    let err = wsv::parse_lines("ok\n\"open", false).unwrap_err();
    assert!(matches!(
        err,
        Error::Wsv {
            line: 2,
            kind: WsvErrorKind::StringNotClosed,
            ..
        }
    ));

    let err = wsv::parse_lines("\"a\"b", false).unwrap_err();
    assert!(matches!(
        err,
        Error::Wsv {
            line: 1,
            kind: WsvErrorKind::InvalidCharacterAfterString,
            ..
        }
    ));
}

#[test]
fn test_value_quoting_rules() {
    assert_eq!(wsv::serialize_value(None), "-");
    assert_eq!(wsv::serialize_value(Some("")), "\"\"");
    assert_eq!(wsv::serialize_value(Some("-")), "\"-\"");
    assert_eq!(wsv::serialize_value(Some("plain")), "plain");
    assert_eq!(wsv::serialize_value(Some("a b")), "\"a b\"");
    assert_eq!(wsv::serialize_value(Some("a#b")), "\"a#b\"");
    assert_eq!(wsv::serialize_value(Some("a\"b")), "\"a\"\"b\"");
    assert_eq!(wsv::serialize_value(Some("a\nb")), "\"a\"/\"b\"");
    assert_eq!(wsv::serialize_value(Some("a\u{3000}b")), "\"a\u{3000}b\"");
}

#[test]
fn test_serialize_line_with_layout() {
    let layout = LineLayout {
        whitespaces: vec![Some("  ".into()), Some("\t".into()), Some(" ".into())],
        comment: Some(" note".into()),
    };
    assert_eq!(
        wsv::serialize_line(&[some("Key"), None], &layout),
        "  Key\t- # note"
    );
}

// Escaped values inside documents

#[test]
fn test_escaped_values_roundtrip_through_documents() {
    let mut root = Element::new("Root");
    root.add_attribute(
        "Texts",
        vec![some("a b"), some("\"q\""), some("x\ny"), some("#"), some(""), None],
    )
    .unwrap();
    let document = Document::new(root);
    let text = to_string(&document);
    assert_eq!(
        text,
        "Root\n\tTexts \"a b\" \"\"\"q\"\"\" \"x\"/\"y\" \"#\" \"\" -\nEnd"
    );
    assert_eq!(from_str(&text).unwrap().root(), document.root());
}
