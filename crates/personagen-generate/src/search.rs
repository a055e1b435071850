/// Byte-offset span of one keyword occurrence in preview text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

/// Find every occurrence of `keyword` in `text`, ASCII case-insensitive.
///
/// Matches are yielded left to right and never overlap: the scan resumes
/// past the end of each match. An empty keyword yields nothing. The
/// iterator holds no state beyond its position, so callers re-run it from
/// scratch against whatever text currently exists.
pub fn find_all<'a>(text: &'a str, keyword: &'a str) -> Matches<'a> {
    Matches {
        text: text.as_bytes(),
        keyword: keyword.as_bytes(),
        pos: 0,
    }
}

/// Lazy iterator over keyword matches, see [`find_all`].
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    text: &'a [u8],
    keyword: &'a [u8],
    pos: usize,
}

impl Iterator for Matches<'_> {
    type Item = MatchSpan;

    fn next(&mut self) -> Option<MatchSpan> {
        if self.keyword.is_empty() {
            return None;
        }
        while self.pos + self.keyword.len() <= self.text.len() {
            let start = self.pos;
            let end = start + self.keyword.len();
            if self.text[start..end].eq_ignore_ascii_case(self.keyword) {
                self.pos = end;
                return Some(MatchSpan { start, end });
            }
            self.pos += 1;
        }
        None
    }
}
