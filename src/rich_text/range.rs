use std::ops::Range;

/// A half-open character span `[start, start + len)` inside a note's text.
///
/// An empty range is an insertion point. Formatting commands treat it as
/// "the whole content".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextRange {
    pub start: usize,
    pub len: usize,
}

impl TextRange {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Build a range from two character positions in any order
    pub fn from_bounds(a: usize, b: usize) -> Self {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        Self {
            start,
            len: end - start,
        }
    }

    pub fn whole(len: usize) -> Self {
        Self { start: 0, len }
    }

    pub fn end(&self) -> usize {
        self.start.saturating_add(self.len)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Restrict the range to `[0, content_len]`
    pub fn clip(&self, content_len: usize) -> Self {
        let start = self.start.min(content_len);
        let end = self.end().min(content_len);
        Self::from_bounds(start, end)
    }

    /// True if `[start, end)` shares at least one character with this range
    pub fn intersects(&self, start: usize, end: usize) -> bool {
        start < self.end() && end > self.start
    }
}

impl From<Range<usize>> for TextRange {
    fn from(range: Range<usize>) -> Self {
        Self::from_bounds(range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_past_end() {
        assert_eq!(TextRange::new(3, 10).clip(5), TextRange::new(3, 2));
        assert_eq!(TextRange::new(8, 4).clip(5), TextRange::new(5, 0));
    }

    #[test]
    fn test_intersects_is_half_open() {
        let range = TextRange::new(2, 3);
        assert!(range.intersects(4, 6));
        assert!(!range.intersects(5, 6));
        assert!(!range.intersects(0, 2));
    }
}
