//! The quote emitter's 4-lexeme sliding window over an already-lexed stream.
//!
//! Rather than a literal ring buffer that shifts on every push, `Window`
//! borrows the full lexeme slice produced by `curl-lexer` (itself bracketed
//! by `Sot`/`Eol,Eop,Eot` sentinels) and exposes a 4-slot view centered on
//! whichever lexeme is currently the classification candidate: one slot of
//! left context, the candidate itself, and two slots of lookahead. The
//! sentinel bracketing guarantees every candidate in the real input has both
//! lookahead slots available without a bounds check.
//!
//! "Obliteration" (design note: consumed slots keep their position but stop
//! matching anything but an explicit `None` predicate) is modeled as a
//! parallel `consumed: &[bool]` mask rather than literally overwriting the
//! lexeme array — a lexeme whose slot is consumed reports [`curl_token::LexemeType::None`]
//! to the rule table regardless of what it actually lexed as.

use curl_token::{Lexeme, LexemeType};

/// A read-only view of the lexeme stream centered on index `i`, consulting
/// `consumed` to report obliterated slots as [`LexemeType::None`].
pub struct Window<'a> {
    lexemes: &'a [Lexeme],
    consumed: &'a [bool],
    i: usize,
}

impl<'a> Window<'a> {
    pub fn new(lexemes: &'a [Lexeme], consumed: &'a [bool], i: usize) -> Self {
        debug_assert!(i < lexemes.len(), "candidate index must be in range");
        Self { lexemes, consumed, i }
    }

    /// The lexeme `rel` positions away from the candidate (negative looks
    /// left). Panics if that would leave the sentinel-bracketed stream,
    /// which should never happen for a real candidate.
    fn at(&self, rel: isize) -> usize {
        let idx = self.i as isize + rel;
        debug_assert!(idx >= 0 && (idx as usize) < self.lexemes.len(), "window read outside sentinel bracket");
        idx.clamp(0, self.lexemes.len() as isize - 1) as usize
    }

    /// The effective type at `rel`, honoring obliteration.
    pub fn kind(&self, rel: isize) -> LexemeType {
        let idx = self.at(rel);
        if self.consumed[idx] {
            LexemeType::None
        } else {
            self.lexemes[idx].kind
        }
    }

    pub fn lexeme(&self, rel: isize) -> Lexeme {
        self.lexemes[self.at(rel)]
    }

    pub fn index(&self, rel: isize) -> usize {
        self.at(rel)
    }

    /// The candidate lexeme itself (slot 1 in spec's rule-table columns).
    pub fn candidate(&self) -> Lexeme {
        self.lexeme(0)
    }

    /// Text of the lexeme at `rel` if (and only if) it is a `Word`.
    pub fn word_at<'s>(&self, input: &'s str, rel: isize) -> Option<&'s str> {
        let idx = self.at(rel);
        if self.consumed[idx] {
            return None;
        }
        let lex = self.lexemes[idx];
        (lex.kind == LexemeType::Word).then(|| &input[lex.began..lex.ended])
    }

    pub fn is_consumed(&self, rel: isize) -> bool {
        self.consumed[self.at(rel)]
    }
}

/// Matches `actual` against a small set of permitted slot patterns, each of
/// which may itself be `Any`/`Ending` meta-categories.
pub fn in_set(actual: LexemeType, set: &[LexemeType]) -> bool {
    set.iter().any(|&want| actual.matches(want))
}
