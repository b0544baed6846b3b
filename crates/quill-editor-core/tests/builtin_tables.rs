//! Snapshot fixtures for every operation in the built-in tables.
//!
//! Each case renders as `<buffer> <start>..<end>` with the buffer in debug
//! form so newlines stay on one line.

use quill_editor_core::{MarkupTable, SelectionMarkupEditor, SelectionRange};

fn render(table: MarkupTable, buffer: &str, start: usize, end: usize, op: &str) -> String {
    let edit = SelectionMarkupEditor::new(table)
        .apply(buffer, SelectionRange::new(start, end), op)
        .expect("apply failed");
    format!(
        "{:?} {}..{}",
        edit.buffer, edit.selection.start, edit.selection.end
    )
}

fn md(buffer: &str, start: usize, end: usize, op: &str) -> String {
    render(MarkupTable::markdown(), buffer, start, end, op)
}

fn bb(buffer: &str, start: usize, end: usize, op: &str) -> String {
    render(MarkupTable::bbcode(), buffer, start, end, op)
}

#[test]
fn markdown_emphasis() {
    insta::assert_snapshot!(md("hello world", 0, 5, "bold"), @r#""**hello** world" 2..7"#);
    insta::assert_snapshot!(md("hello world", 6, 11, "italic"), @r#""hello *world*" 7..12"#);
    insta::assert_snapshot!(md("x", 1, 1, "code"), @r#""x`text`" 2..6"#);
}

#[test]
fn markdown_line_prefixes() {
    insta::assert_snapshot!(md("hello world", 5, 5, "heading1"), @r#""hello# text world" 7..7"#);
    insta::assert_snapshot!(md("", 0, 0, "heading2"), @r###""## text" 3..3"###);
    insta::assert_snapshot!(md("", 0, 0, "heading3"), @r####""### text" 4..4"####);
    insta::assert_snapshot!(md("a\n", 2, 2, "quote"), @r#""a\n> text" 4..4"#);
    insta::assert_snapshot!(md("", 0, 0, "list"), @r#""- text" 2..2"#);
    insta::assert_snapshot!(md("", 0, 0, "list-num"), @r#""1. text" 3..3"#);
}

#[test]
fn markdown_links_and_images() {
    insta::assert_snapshot!(md("abc", 1, 1, "link"), @r#""a[text](url)bc" 2..6"#);
    insta::assert_snapshot!(md("cat.png", 0, 7, "image"), @r#""![alt text](cat.png)" 12..19"#);
}

#[test]
fn bbcode_tags() {
    insta::assert_snapshot!(bb("hi", 0, 2, "b"), @r#""[b]hi[/b]" 3..5"#);
    insta::assert_snapshot!(bb("hi", 0, 2, "i"), @r#""[i]hi[/i]" 3..5"#);
    insta::assert_snapshot!(bb("hi", 0, 2, "u"), @r#""[u]hi[/u]" 3..5"#);
    insta::assert_snapshot!(bb("", 0, 0, "url"), @r#""[url=http://example.com]text[/url]" 24..28"#);
    insta::assert_snapshot!(bb("a.jpg", 0, 5, "img"), @r#""[img]a.jpg[/img]" 5..10"#);
    insta::assert_snapshot!(bb("", 0, 0, "code"), @r#""[code]text[/code]" 6..10"#);
    insta::assert_snapshot!(bb("", 0, 0, "quote"), @r#""[quote]text[/quote]" 7..11"#);
    insta::assert_snapshot!(bb("", 0, 0, "list"), @r#""[list]\n[*]text\n[/list]" 10..14"#);
}

#[test]
fn wrap_property_holds_for_every_wrap_rule() {
    let buffer = "alpha beta gamma";
    let selection = SelectionRange::new(6, 10);
    for table in [MarkupTable::markdown(), MarkupTable::bbcode()] {
        let editor = SelectionMarkupEditor::new(table.clone());
        for (id, rule) in table.rules() {
            let edit = editor.apply(buffer, selection, id).unwrap();
            let expected = format!("alpha {}beta{} gamma", rule.prefix, rule.suffix);
            assert_eq!(edit.buffer, expected, "{}::{id}", table.name());
        }
    }
}
