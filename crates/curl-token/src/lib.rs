//! Lexeme and token types shared by every stage of the curl pipeline.
//!
//! `Lexeme` is what the lexer produces; `Token` is what the quote emitter and
//! ambiguity resolver classify a lexeme into. Both are plain value types: a
//! lexeme's type never mutates once created, and a token's type mutates in
//! exactly one place (ambiguous → definite promotion in the resolver).

#![deny(unsafe_code)]

/// The category a [`Lexeme`] was classified into by the lexer.
///
/// `Ending` and `Any` are match-time meta-categories consulted by the quote
/// emitter's rule table; the lexer itself never emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexemeType {
    Word,
    Number,
    Space,
    Period,
    Ellipsis,
    Punct,
    Hyphen,
    Dash,
    Equals,
    OpeningGroup,
    ClosingGroup,
    QuoteSingle,
    QuoteDouble,
    QuoteSingleOpening,
    QuoteSingleClosing,
    QuoteDoubleOpening,
    QuoteDoubleClosing,
    EscSingle,
    EscDouble,
    PrimeDouble,
    Eol,
    Eop,
    Sot,
    Eot,
    /// Matches any of `{Eol, Eop, Eot}` — meta-category, never emitted.
    Ending,
    /// Matches anything — meta-category, never emitted.
    Any,
    /// Sentinel written into an obliterated ring-buffer slot.
    None,
}

impl LexemeType {
    /// Whether `self` (an emitted lexeme type) satisfies the slot pattern `want`.
    ///
    /// An obliterated window slot carries `LexemeType::None`, which matches
    /// only an explicit `None` predicate, not `Any` — a `*`-slot rule should
    /// never accidentally fire against a lexeme that has already been
    /// consumed by an earlier rule.
    pub fn matches(self, want: LexemeType) -> bool {
        match want {
            LexemeType::Any => self != LexemeType::None,
            LexemeType::Ending => matches!(self, LexemeType::Eol | LexemeType::Eop | LexemeType::Eot),
            other => self == other,
        }
    }
}

/// A half-open byte interval `[began, ended)` tagged with a [`LexemeType`].
///
/// `glyph` preserves the exact originating character for the international
/// opening/closing quote variants (and the German-style `,,` low-opening
/// double quote) so non-English marks round-trip untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lexeme {
    pub began: usize,
    pub ended: usize,
    pub kind: LexemeType,
    pub glyph: Option<char>,
}

impl Lexeme {
    pub fn new(began: usize, ended: usize, kind: LexemeType) -> Self {
        debug_assert!(began <= ended, "lexeme span must be non-decreasing");
        Self { began, ended, kind, glyph: None }
    }

    pub fn with_glyph(began: usize, ended: usize, kind: LexemeType, glyph: char) -> Self {
        debug_assert!(began <= ended, "lexeme span must be non-decreasing");
        Self { began, ended, kind, glyph: Some(glyph) }
    }

    /// A zero-width sentinel lexeme (used for `Sot`/`Eot` bracketing).
    pub fn sentinel(at: usize, kind: LexemeType) -> Self {
        Self { began: at, ended: at, kind, glyph: None }
    }

    pub fn len(&self) -> usize {
        self.ended - self.began
    }

    pub fn is_empty(&self) -> bool {
        self.began == self.ended
    }
}

/// The classification a quotation-mark-bearing [`Lexeme`] is minted into.
///
/// A token is *ambiguous* iff its kind is one of [`TokenType::AmbiguousLeading`],
/// [`TokenType::AmbiguousLagging`], or [`TokenType::Ambiguous`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    OpeningSingle,
    OpeningDouble,
    ClosingSingle,
    ClosingDouble,
    Apostrophe,
    StraightSingle,
    StraightDouble,
    PrimeSingle,
    PrimeDouble,
    PrimeTriple,
    PrimeQuadruple,
    AmbiguousLeading,
    AmbiguousLagging,
    Ambiguous,
    None,
}

impl TokenType {
    pub fn is_ambiguous(self) -> bool {
        matches!(self, TokenType::AmbiguousLeading | TokenType::AmbiguousLagging | TokenType::Ambiguous)
    }

    pub fn is_opening_single(self) -> bool {
        matches!(self, TokenType::OpeningSingle)
    }

    pub fn is_opening_double(self) -> bool {
        matches!(self, TokenType::OpeningDouble)
    }

    pub fn is_closing_single(self) -> bool {
        matches!(self, TokenType::ClosingSingle)
    }

    pub fn is_closing_double(self) -> bool {
        matches!(self, TokenType::ClosingDouble)
    }
}

/// A classified quotation mark: a [`TokenType`] plus the [`Lexeme`] it was
/// minted from. `kind` is the only field the resolver ever mutates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenType,
    pub lexeme: Lexeme,
}

impl Token {
    pub fn new(kind: TokenType, lexeme: Lexeme) -> Self {
        Self { kind, lexeme }
    }

    pub fn began(&self) -> usize {
        self.lexeme.began
    }

    pub fn ended(&self) -> usize {
        self.lexeme.ended
    }

    pub fn is_ambiguous(&self) -> bool {
        self.kind.is_ambiguous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ending_matches_any_terminal_lexeme() {
        assert!(LexemeType::Eol.matches(LexemeType::Ending));
        assert!(LexemeType::Eop.matches(LexemeType::Ending));
        assert!(LexemeType::Eot.matches(LexemeType::Ending));
        assert!(!LexemeType::Word.matches(LexemeType::Ending));
    }

    #[test]
    fn any_matches_everything_except_an_obliterated_slot() {
        assert!(LexemeType::Word.matches(LexemeType::Any));
        assert!(!LexemeType::None.matches(LexemeType::Any));
    }

    #[test]
    fn exact_match_requires_equality() {
        assert!(LexemeType::Word.matches(LexemeType::Word));
        assert!(!LexemeType::Word.matches(LexemeType::Number));
    }

    #[test]
    fn token_ambiguity_classification() {
        let lex = Lexeme::new(0, 1, LexemeType::QuoteSingle);
        assert!(Token::new(TokenType::AmbiguousLeading, lex).is_ambiguous());
        assert!(Token::new(TokenType::AmbiguousLagging, lex).is_ambiguous());
        assert!(Token::new(TokenType::Ambiguous, lex).is_ambiguous());
        assert!(!Token::new(TokenType::Apostrophe, lex).is_ambiguous());
    }
}
