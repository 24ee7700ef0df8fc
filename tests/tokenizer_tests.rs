use codemeld::errors::MeldError;
use codemeld::tokenizer::split_arguments_with_home;
use std::path::Path;

fn split(input: &str) -> Vec<String> {
    split_arguments_with_home(input, None)
        .unwrap_or_else(|e| panic!("Failed to tokenize {:?}: {:?}", input, e))
}

#[test]
fn test_single_quotes_preserve_spaces() {
    assert_eq!(split("'a b.txt' c.txt"), vec!["a b.txt", "c.txt"]);
}

#[test]
fn test_double_quotes_and_escapes() {
    assert_eq!(
        split(r#""a \"q\".txt" b\ c.txt"#),
        vec![r#"a "q".txt"#, "b c.txt"]
    );
    // Only `"` and `\` are escapable inside double quotes.
    assert_eq!(split(r#""dir\name.txt""#), vec![r"dir\name.txt"]);
    assert_eq!(split(r#""dir\\name.txt""#), vec![r"dir\name.txt"]);
}

#[test]
fn test_single_quotes_are_literal() {
    assert_eq!(split(r#"'a\b "c".txt'"#), vec![r#"a\b "c".txt"#]);
}

#[test]
fn test_adjacent_segments_join_into_one_token() {
    assert_eq!(split("pre'fix a'b \"x\"y"), vec!["prefix ab", "xy"]);
}

#[test]
fn test_any_whitespace_separates_tokens() {
    assert_eq!(
        split("  one.rs\ttwo.rs\nthree.rs   "),
        vec!["one.rs", "two.rs", "three.rs"]
    );
}

#[test]
fn test_empty_and_blank_input_yield_no_tokens() {
    assert!(split("").is_empty());
    assert!(split("   \t\n").is_empty());
    assert!(split("'' \"\"").is_empty());
}

#[test]
fn test_empty_quoted_tokens_are_dropped() {
    assert_eq!(split("'' a.txt"), vec!["a.txt"]);
}

#[test]
fn test_escaped_newline_is_kept() {
    assert_eq!(split("a.txt \\\nb.txt"), vec!["a.txt", "\nb.txt"]);
}

#[test]
fn test_unicode_spaces_do_not_separate_tokens() {
    assert_eq!(
        split("a\u{a0}b.txt\u{2003}c.txt d.txt"),
        vec!["a\u{a0}b.txt\u{2003}c.txt", "d.txt"]
    );
}

#[test]
fn test_unclosed_quotes_fail() {
    assert!(matches!(
        split_arguments_with_home("'abc", None),
        Err(MeldError::UnclosedQuote('\''))
    ));
    assert!(matches!(
        split_arguments_with_home("a \"b c", None),
        Err(MeldError::UnclosedQuote('"'))
    ));
}

#[test]
fn test_trailing_backslash_fails() {
    assert!(matches!(
        split_arguments_with_home("a.txt \\", None),
        Err(MeldError::TrailingEscape)
    ));
}

#[test]
fn test_leading_tilde_expands_to_home() {
    let home = Path::new("/home/meld");
    let tokens =
        split_arguments_with_home("~/f.md '~/g.md' a~b ~ ~user/x", Some(home)).unwrap();
    assert_eq!(
        tokens,
        vec!["/home/meld/f.md", "~/g.md", "a~b", "/home/meld", "~user/x"]
    );
}

#[test]
fn test_tilde_without_home_stays_literal() {
    assert_eq!(split("~/f.md"), vec!["~/f.md"]);
}
