//! Skip filters: predicates applied at every outer iteration of the lexer
//! that advance the cursor past regions which must not be curled.

use crate::cursor::Cursor;
use crate::error::FilterNotice;
use std::collections::HashSet;

/// Element names whose contents must never be touched, per spec.
const UNTOUCHABLE: &[&str] = &["pre", "code", "tt", "tex", "kbd", "samp", "var", "l", "blockcode"];

pub trait SkipFilter {
    /// If the cursor sits at the start of a region this filter owns,
    /// consume it and return `true`. Otherwise return `false` without
    /// moving the cursor.
    fn skip(&mut self, cursor: &mut Cursor) -> bool;

    /// Non-fatal diagnostics accumulated while skipping (malformed tags).
    fn notices(&self) -> &[FilterNotice] {
        &[]
    }
}

/// The constant `false` filter: never skips anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainFilter;

impl SkipFilter for PlainFilter {
    fn skip(&mut self, _cursor: &mut Cursor) -> bool {
        false
    }
}

/// XML-aware filter: skips tags outright, and skips the full body of any
/// untouchable element (its contents pass through byte-for-byte).
#[derive(Debug, Default)]
pub struct XmlFilter {
    untouchable: HashSet<&'static str>,
    notices: Vec<FilterNotice>,
}

impl XmlFilter {
    pub fn new() -> Self {
        Self { untouchable: UNTOUCHABLE.iter().copied().collect(), notices: Vec::new() }
    }

    /// Consume tags (and, for untouchable elements, their bodies) starting
    /// at `cursor`'s current `<`. Must be called in a loop by the caller
    /// since two tags may abut.
    fn skip_one_tag(&mut self, cursor: &mut Cursor) -> bool {
        let tag_start = cursor.index();
        let rest = cursor.substring(tag_start, cursor.len());
        let Some(close_rel) = memchr::memchr(b'>', rest.as_bytes()) else {
            self.notices.push(FilterNotice::UnterminatedTag { position: tag_start });
            return false;
        };
        let tag_body = &rest[1..close_rel];
        let tag_end = tag_start + close_rel + 1;
        cursor.set_index(tag_end);

        if let Some(name) = tag_name(tag_body) {
            let lname = name.to_ascii_lowercase();
            if self.untouchable.contains(lname.as_str()) && !tag_body.trim_end().ends_with('/') {
                if !self.skip_to_closing(cursor, &lname) {
                    self.notices.push(FilterNotice::UnterminatedElement { name: lname, position: tag_start });
                }
            }
        }
        true
    }

    /// Advance the cursor past everything up to and including the closing
    /// tag whose bracket content (lowercased, trimmed) ends with `name`.
    fn skip_to_closing(&mut self, cursor: &mut Cursor, name: &str) -> bool {
        loop {
            let rest = cursor.substring(cursor.index(), cursor.len());
            let Some(next_lt) = memchr::memchr(b'<', rest.as_bytes()) else {
                cursor.set_index(cursor.len());
                return false;
            };
            cursor.set_index(cursor.index() + next_lt);
            let tag_start = cursor.index();
            let tag_rest = cursor.substring(tag_start, cursor.len());
            let Some(close_rel) = memchr::memchr(b'>', tag_rest.as_bytes()) else {
                return false;
            };
            let tag_body = &tag_rest[1..close_rel];
            let tag_end = tag_start + close_rel + 1;
            cursor.set_index(tag_end);
            if tag_body.trim().to_ascii_lowercase().ends_with(name) {
                return true;
            }
        }
    }
}

impl SkipFilter for XmlFilter {
    fn skip(&mut self, cursor: &mut Cursor) -> bool {
        if cursor.current() != '<' {
            return false;
        }
        let mut consumed_any = false;
        while cursor.current() == '<' {
            if !self.skip_one_tag(cursor) {
                break;
            }
            consumed_any = true;
        }
        consumed_any
    }

    fn notices(&self) -> &[FilterNotice] {
        &self.notices
    }
}

/// The first whitespace/`/`-terminated identifier inside a tag's brackets,
/// ignoring a leading `/` on closing tags.
fn tag_name(tag_body: &str) -> Option<&str> {
    let body = tag_body.strip_prefix('/').unwrap_or(tag_body).trim_start();
    let end = body.find(|c: char| c.is_whitespace() || c == '/' || c == '>').unwrap_or(body.len());
    if end == 0 { None } else { Some(&body[..end]) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_filter_never_skips() {
        let mut cursor = Cursor::new("<tag>");
        assert!(!PlainFilter.skip(&mut cursor));
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn xml_filter_skips_a_bare_tag() {
        let mut cursor = Cursor::new("<em>rest");
        let mut filter = XmlFilter::new();
        assert!(filter.skip(&mut cursor));
        assert_eq!(cursor.index(), 4);
        assert_eq!(cursor.current(), 'r');
    }

    #[test]
    fn xml_filter_skips_abutting_tags() {
        let mut cursor = Cursor::new("<em><b>rest");
        let mut filter = XmlFilter::new();
        assert!(filter.skip(&mut cursor));
        assert_eq!(cursor.substring(cursor.index(), cursor.len()), "rest");
    }

    #[test]
    fn xml_filter_skips_untouchable_element_body() {
        let mut cursor = Cursor::new("<code>don't touch 'this'</code>after");
        let mut filter = XmlFilter::new();
        assert!(filter.skip(&mut cursor));
        assert_eq!(cursor.substring(cursor.index(), cursor.len()), "after");
    }

    #[test]
    fn xml_filter_does_not_skip_untouchable_self_closed_tag_body() {
        let mut cursor = Cursor::new("<code/>after");
        let mut filter = XmlFilter::new();
        assert!(filter.skip(&mut cursor));
        assert_eq!(cursor.substring(cursor.index(), cursor.len()), "after");
    }

    #[test]
    fn xml_filter_yields_on_unterminated_tag() {
        let mut cursor = Cursor::new("<em no close");
        let mut filter = XmlFilter::new();
        assert!(!filter.skip(&mut cursor));
        assert_eq!(cursor.index(), 0);
        assert_eq!(filter.notices().len(), 1);
    }

    #[test]
    fn xml_filter_notes_unterminated_untouchable_element() {
        let mut cursor = Cursor::new("<pre>never closed");
        let mut filter = XmlFilter::new();
        assert!(filter.skip(&mut cursor));
        assert_eq!(cursor.index(), "<pre>never closed".len());
        assert_eq!(filter.notices().len(), 1);
    }
}
