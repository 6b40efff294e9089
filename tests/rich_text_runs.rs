use sticky_canvas::rich_text::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use sticky_canvas::{Attribute, RichText, TextAttributes, TextRange};

fn sample() -> RichText {
    RichText::new("Hello sticky world", TextAttributes::new(14.0))
}

fn total_run_len(content: &RichText) -> usize {
    content.runs().iter().map(|run| run.len).sum()
}

#[test]
fn test_runs_cover_content_after_mixed_edits() {
    let mut content = sample();
    content.toggle_attribute(Some(TextRange::new(0, 5)), Attribute::Bold);
    content.toggle_attribute(Some(TextRange::new(3, 8)), Attribute::Italic);
    content.set_font_size(Some(TextRange::new(6, 6)), 20.0);
    content.replace_range(TextRange::new(5, 1), ", ");
    content.toggle_attribute(Some(TextRange::new(100, 4)), Attribute::Underline);
    content.sync_plain_text("Hello, sticky world!");

    assert!(content.is_well_formed());
    assert_eq!(total_run_len(&content), content.text().chars().count());
    assert_eq!(content.text(), "Hello, sticky world!");

    // Maximal runs: no two neighbours share attributes.
    for pair in content.runs().windows(2) {
        assert_ne!(pair[0].attributes, pair[1].attributes);
    }
}

#[test]
fn test_toggle_twice_on_uniform_range_restores() {
    let mut content = sample();
    let original = content.clone();
    let range = Some(TextRange::new(2, 7));

    assert!(content.toggle_attribute(range, Attribute::Strikethrough));
    assert!(content.query_attribute(range, Attribute::Strikethrough));
    assert!(!content.toggle_attribute(range, Attribute::Strikethrough));
    assert_eq!(content, original);
}

#[test]
fn test_toggle_mixed_range_clears_it() {
    let mut content = sample();
    content.toggle_attribute(Some(TextRange::new(0, 3)), Attribute::Bold);

    // Partially bold, so "any" reports bold and the toggle turns it all off.
    let range = Some(TextRange::new(0, 10));
    assert!(content.query_attribute(range, Attribute::Bold));
    assert!(!content.toggle_attribute(range, Attribute::Bold));
    assert!(!content.query_attribute(None, Attribute::Bold));
    assert_eq!(content.runs().len(), 1);
}

#[test]
fn test_grow_and_shrink_clamp() {
    let mut content = sample();
    for _ in 0..20 {
        content.grow_font_size(None);
    }
    assert_eq!(content.query_font_size(None), MAX_FONT_SIZE);

    for _ in 0..20 {
        content.shrink_font_size(None);
    }
    assert_eq!(content.query_font_size(None), MIN_FONT_SIZE);
}

#[test]
fn test_grow_uses_first_run_size() {
    let mut content = sample();
    content.set_font_size(Some(TextRange::new(0, 5)), 12.0);
    content.set_font_size(Some(TextRange::new(5, 5)), 24.0);

    let size = content.grow_font_size(Some(TextRange::new(0, 10)));
    assert_eq!(size, 14.0);
    assert_eq!(content.query_font_size(Some(TextRange::new(6, 1))), 14.0);
}

#[test]
fn test_out_of_bounds_range_is_clipped() {
    let mut content = sample();
    let len = content.len();
    content.toggle_attribute(Some(TextRange::new(len - 3, 50)), Attribute::Italic);

    assert!(content.is_well_formed());
    assert!(content.query_attribute(Some(TextRange::new(len - 1, 1)), Attribute::Italic));
    assert!(!content.query_attribute(Some(TextRange::new(0, len - 3)), Attribute::Italic));
}

#[test]
fn test_empty_content_queries_default() {
    let mut content = RichText::plain("", 16.0);
    assert!(!content.query_attribute(None, Attribute::Bold));
    assert_eq!(content.query_font_size(None), 12.0);
    content.toggle_attribute(None, Attribute::Bold);
    assert!(content.runs().is_empty());
}

#[test]
fn test_multibyte_text_slices() {
    let mut content = RichText::plain("naïve café", 14.0);
    content.toggle_attribute(Some(TextRange::new(2, 1)), Attribute::Underline);

    let slices: Vec<&str> = content.run_slices().into_iter().map(|(text, _)| text).collect();
    assert_eq!(slices, vec!["na", "ï", "ve café"]);
}
