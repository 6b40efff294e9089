//! Run-based rich text for note content.
//!
//! A [`RichText`] stores the plain string plus an ordered list of
//! [`TextRun`]s. The runs always cover the string exactly: their lengths sum
//! to the character count and no character belongs to two runs. Every
//! mutator splits runs at the range boundaries, edits the attributes in
//! between and merges equal neighbours back together, so the list stays
//! maximal.

mod attributes;
pub mod layout;
mod range;

pub use attributes::{
    clamp_font_size, Attribute, TextAttributes, DEFAULT_FONT_SIZE, FONT_SIZE_STEP, MAX_FONT_SIZE,
    MIN_FONT_SIZE,
};
pub use range::TextRange;

/// A maximal span of characters sharing one attribute set
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// Length in characters
    pub len: usize,
    pub attributes: TextAttributes,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RichText {
    text: String,
    runs: Vec<TextRun>,
    /// Attributes for text typed into empty content
    base: TextAttributes,
}

impl Default for RichText {
    fn default() -> Self {
        Self::new("", TextAttributes::default())
    }
}

impl RichText {
    /// Create content with a single run carrying `attributes`
    pub fn new(text: &str, attributes: TextAttributes) -> Self {
        let len = text.chars().count();
        let runs = if len == 0 {
            Vec::new()
        } else {
            vec![TextRun {
                len,
                attributes: attributes.clone(),
            }]
        };
        Self {
            text: text.to_owned(),
            runs,
            base: attributes,
        }
    }

    pub fn plain(text: &str, font_size: f32) -> Self {
        Self::new(text, TextAttributes::new(font_size))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.runs.iter().map(|run| run.len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    pub fn base_attributes(&self) -> &TextAttributes {
        &self.base
    }

    pub fn set_base_attributes(&mut self, attributes: TextAttributes) {
        self.base = attributes;
    }

    /// Runs paired with their character span, in string order
    pub fn spans(&self) -> impl Iterator<Item = (TextRange, &TextAttributes)> + '_ {
        let mut offset = 0;
        self.runs.iter().map(move |run| {
            let range = TextRange::new(offset, run.len);
            offset += run.len;
            (range, &run.attributes)
        })
    }

    /// Runs paired with their text slice, in string order
    pub fn run_slices(&self) -> Vec<(&str, &TextAttributes)> {
        self.spans()
            .map(|(range, attributes)| {
                let start = self.byte_offset(range.start);
                let end = self.byte_offset(range.end());
                (&self.text[start..end], attributes)
            })
            .collect()
    }

    /// Attributes of the character at `index`
    pub fn attributes_at(&self, index: usize) -> Option<&TextAttributes> {
        self.spans()
            .find(|(range, _)| range.intersects(index, index + 1))
            .map(|(_, attributes)| attributes)
    }

    /// Resolve a requested formatting range: missing or empty means the whole
    /// content, anything else is clipped to the content.
    pub fn resolve(&self, range: Option<TextRange>) -> TextRange {
        let len = self.len();
        match range {
            Some(range) if !range.is_empty() => range.clip(len),
            _ => TextRange::whole(len),
        }
    }

    /// True if any run intersecting the range has `attribute` set.
    pub fn query_attribute(&self, range: Option<TextRange>, attribute: Attribute) -> bool {
        let range = self.resolve(range);
        self.spans()
            .filter(|(span, _)| range.intersects(span.start, span.end()))
            .any(|(_, attributes)| attributes.get(attribute))
    }

    /// Size of the first run intersecting the range.
    pub fn query_font_size(&self, range: Option<TextRange>) -> f32 {
        let range = self.resolve(range);
        self.spans()
            .find(|(span, _)| range.intersects(span.start, span.end()))
            .map(|(_, attributes)| attributes.font_size)
            .unwrap_or(DEFAULT_FONT_SIZE)
    }

    /// Flip `attribute` across the range, uniformly.
    ///
    /// The new value is the negation of [`Self::query_attribute`], so a mixed
    /// range ends up entirely off. Returns the value that was applied.
    pub fn toggle_attribute(&mut self, range: Option<TextRange>, attribute: Attribute) -> bool {
        let value = !self.query_attribute(range, attribute);
        self.set_attribute(range, attribute, value);
        value
    }

    pub fn set_attribute(&mut self, range: Option<TextRange>, attribute: Attribute, value: bool) {
        let range = self.resolve(range);
        self.update_range(range, |attributes| attributes.set(attribute, value));
    }

    /// Replace the size of every run portion inside the range
    pub fn set_font_size(&mut self, range: Option<TextRange>, size: f32) {
        let range = self.resolve(range);
        self.update_range(range, |attributes| attributes.font_size = size);
    }

    /// Grow by one step from the first run's size. Returns the applied size.
    pub fn grow_font_size(&mut self, range: Option<TextRange>) -> f32 {
        let size = clamp_font_size(self.query_font_size(range) + FONT_SIZE_STEP);
        self.set_font_size(range, size);
        size
    }

    /// Shrink by one step from the first run's size. Returns the applied size.
    pub fn shrink_font_size(&mut self, range: Option<TextRange>) -> f32 {
        let size = clamp_font_size(self.query_font_size(range) - FONT_SIZE_STEP);
        self.set_font_size(range, size);
        size
    }

    /// Replace the characters in `range` with `replacement`.
    ///
    /// Inserted text takes the attributes of the character before the range,
    /// else the first replaced/following character, else the base attributes.
    pub fn replace_range(&mut self, range: TextRange, replacement: &str) {
        let range = range.clip(self.len());
        let attributes = range
            .start
            .checked_sub(1)
            .and_then(|index| self.attributes_at(index))
            .or_else(|| self.attributes_at(range.start))
            .unwrap_or(&self.base)
            .clone();

        let first = self.split_at(range.start);
        let last = self.split_at(range.end());
        let inserted = replacement.chars().count();
        let new_runs = (inserted > 0).then(|| TextRun {
            len: inserted,
            attributes,
        });
        self.runs.splice(first..last, new_runs);

        let byte_start = self.byte_offset(range.start);
        let byte_end = self.byte_offset(range.end());
        self.text.replace_range(byte_start..byte_end, replacement);
        self.normalize();
    }

    /// Bring the content in line with `new_text` as edited by a plain text
    /// widget. The change is detected as one replaced span between the common
    /// prefix and suffix. Returns false when nothing changed.
    pub fn sync_plain_text(&mut self, new_text: &str) -> bool {
        if self.text == new_text {
            return false;
        }
        let old: Vec<char> = self.text.chars().collect();
        let new: Vec<char> = new_text.chars().collect();

        let prefix = old.iter().zip(&new).take_while(|(a, b)| a == b).count();
        let max_suffix = old.len().min(new.len()) - prefix;
        let suffix = old
            .iter()
            .rev()
            .zip(new.iter().rev())
            .take(max_suffix)
            .take_while(|(a, b)| a == b)
            .count();

        let replacement: String = new[prefix..new.len() - suffix].iter().collect();
        self.replace_range(
            TextRange::from_bounds(prefix, old.len() - suffix),
            &replacement,
        );
        true
    }

    /// Runs cover `[0, len)` exactly and none is empty
    pub fn is_well_formed(&self) -> bool {
        self.runs.iter().all(|run| run.len > 0) && self.len() == self.text.chars().count()
    }

    fn update_range(&mut self, range: TextRange, mut apply: impl FnMut(&mut TextAttributes)) {
        if range.is_empty() {
            return;
        }
        let first = self.split_at(range.start);
        let last = self.split_at(range.end());
        for run in &mut self.runs[first..last] {
            apply(&mut run.attributes);
        }
        self.normalize();
    }

    /// Ensure a run boundary at character `index`; returns the index of the
    /// run starting there (or `runs.len()` at the end).
    fn split_at(&mut self, index: usize) -> usize {
        let mut offset = 0;
        for i in 0..self.runs.len() {
            if offset == index {
                return i;
            }
            let len = self.runs[i].len;
            if index < offset + len {
                let head = index - offset;
                let tail = TextRun {
                    len: len - head,
                    attributes: self.runs[i].attributes.clone(),
                };
                self.runs[i].len = head;
                self.runs.insert(i + 1, tail);
                return i + 1;
            }
            offset += len;
        }
        self.runs.len()
    }

    fn normalize(&mut self) {
        self.runs.retain(|run| run.len > 0);
        let mut merged: Vec<TextRun> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            match merged.last_mut() {
                Some(previous) if previous.attributes == run.attributes => previous.len += run.len,
                _ => merged.push(run),
            }
        }
        self.runs = merged;
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RichText {
        let mut text = RichText::plain("Hello world", 16.0);
        text.set_attribute(Some(TextRange::new(0, 5)), Attribute::Bold, true);
        text
    }

    #[test]
    fn test_split_and_merge_keep_runs_maximal() {
        let mut text = sample();
        assert_eq!(text.runs().len(), 2);

        text.set_attribute(Some(TextRange::new(5, 6)), Attribute::Bold, true);
        assert_eq!(text.runs().len(), 1);
        assert!(text.is_well_formed());
    }

    #[test]
    fn test_run_slices_follow_runs() {
        let text = sample();
        let slices: Vec<&str> = text.run_slices().into_iter().map(|(s, _)| s).collect();
        assert_eq!(slices, vec!["Hello", " world"]);
    }

    #[test]
    fn test_run_slices_multibyte() {
        let mut text = RichText::plain("héllo wörld", 12.0);
        text.set_attribute(Some(TextRange::new(1, 3)), Attribute::Italic, true);
        text.set_attribute(Some(TextRange::new(7, 2)), Attribute::Bold, true);
        let slices: Vec<&str> = text.run_slices().into_iter().map(|(s, _)| s).collect();
        assert_eq!(slices, vec!["h", "éll", "o w", "ör", "ld"]);
    }

    #[test]
    fn test_replace_inherits_previous_run() {
        let mut text = sample();
        text.replace_range(TextRange::new(5, 0), "!!");
        assert_eq!(text.text(), "Hello!! world");
        assert!(text.query_attribute(Some(TextRange::new(5, 2)), Attribute::Bold));
        assert!(text.is_well_formed());
    }

    #[test]
    fn test_sync_plain_text_detects_middle_edit() {
        let mut text = sample();
        assert!(text.sync_plain_text("Hello brave world"));
        assert_eq!(text.text(), "Hello brave world");
        assert_eq!(text.len(), 17);
        assert!(!text.query_attribute(Some(TextRange::new(6, 5)), Attribute::Bold));
        assert!(!text.sync_plain_text("Hello brave world"));
    }

    #[test]
    fn test_typing_into_empty_uses_base() {
        let mut text = RichText::new("", TextAttributes::new(20.0).with_bold(true));
        text.sync_plain_text("abc");
        assert_eq!(text.runs().len(), 1);
        assert!(text.runs()[0].attributes.bold);
        assert_eq!(text.runs()[0].attributes.font_size, 20.0);
    }
}
