//! Character cursor, XML-aware skip filter, and lexer for the curl
//! quote-curling engine.
//!
//! This crate implements components 1–3 of the pipeline described in the
//! engine's design: a bounds-check-light [`Cursor`] over the input string, an
//! optional [`filter::SkipFilter`] that advances the cursor past regions that
//! must never be curled (XML tags, untouchable element bodies), and a
//! [`Lexer`] that turns the remaining characters into an ordered stream of
//! [`curl_token::Lexeme`]s.
//!
//! The lexer never fails outright — prose lexical recognition cannot get
//! stuck — so [`Lexer::tokenize`] returns a plain `Vec<Lexeme>`. Only the XML
//! skip filter can observe malformed structure, and it degrades by yielding
//! control (see [`filter::XmlFilter`]) rather than raising.

#![deny(unsafe_code)]

pub mod cursor;
pub mod error;
pub mod filter;

pub use cursor::{Cursor, SENTINEL};
pub use error::FilterNotice;
pub use filter::{PlainFilter, SkipFilter, XmlFilter};

use curl_token::{Lexeme, LexemeType};

/// Which [`filter::SkipFilter`] the lexer installs, selected by the caller
/// per spec §6's `filter_mode` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    Plain,
    Xml,
}

/// Numeric connector characters: a `.`, `,`, `-`, `+`, or vulgar-fraction
/// glyph immediately followed by a digit stays inside the numeric run.
fn is_numeric_connector(ch: char) -> bool {
    matches!(ch, '.' | ',' | '-' | '+' | '⅟' | '⁄')
}

fn is_ascii_or_unicode_digit(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '¼'..='¾' | '⅐'..='⅞' | '↉')
}

fn is_word_continue(ch: char) -> bool {
    unicode_ident::is_xid_continue(ch) || ch == '_' || ch == '*' || ch.is_ascii_digit()
}

fn is_word_start(ch: char) -> bool {
    unicode_ident::is_xid_start(ch) || ch == '_' || ch == '*'
}

/// Converts an input string into an ordered lexeme stream.
///
/// Bracketed at both ends by sentinels so the quote emitter's sliding window
/// never needs a boundary check: `Sot` opens the stream, and the trailing
/// `Eol, Eop, Eot` triple gives it a full right context even for a
/// single-character input.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    filter: Box<dyn SkipFilter + 'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, mode: FilterMode) -> Self {
        let filter: Box<dyn SkipFilter + 'a> = match mode {
            FilterMode::Plain => Box::new(PlainFilter),
            FilterMode::Xml => Box::new(XmlFilter::new()),
        };
        Self { cursor: Cursor::new(input), filter }
    }

    /// Diagnostics accumulated by the skip filter while lexing (spec §7 item 1).
    pub fn notices(&self) -> &[FilterNotice] {
        self.filter.notices()
    }

    /// Run the lexer to completion, producing the full lexeme stream.
    /// Takes `&mut self` (rather than consuming) so a caller can still read
    /// [`Lexer::notices`] afterward to learn what the skip filter saw.
    pub fn tokenize(&mut self) -> Vec<Lexeme> {
        let mut out = Vec::new();
        out.push(Lexeme::sentinel(0, LexemeType::Sot));

        while self.cursor.has_next() {
            if self.filter.skip(&mut self.cursor) {
                continue;
            }
            if let Some(lexeme) = self.next_lexeme() {
                out.push(lexeme);
            }
        }

        let end = self.cursor.index();
        out.push(Lexeme::sentinel(end, LexemeType::Eol));
        out.push(Lexeme::sentinel(end, LexemeType::Eop));
        out.push(Lexeme::sentinel(end, LexemeType::Eot));

        tracing::debug!(lexeme_count = out.len(), "lexer: tokenize complete");
        out
    }

    /// Decide and consume one lexeme at the cursor's current position. The
    /// cursor is guaranteed to have at least one character available.
    fn next_lexeme(&mut self) -> Option<Lexeme> {
        let start = self.cursor.index();
        let ch = self.cursor.current();

        if is_word_start(ch) {
            return Some(self.lex_word(start));
        }
        if ch.is_whitespace() {
            return Some(self.lex_whitespace(start));
        }
        if is_ascii_or_unicode_digit(ch) || (is_numeric_connector(ch) && is_ascii_or_unicode_digit(self.cursor.peek(1))) {
            return Some(self.lex_number(start));
        }
        if ch == '.' {
            return Some(self.lex_dots(start));
        }
        if ch == '"' {
            self.cursor.next();
            return Some(Lexeme::new(start, self.cursor.index(), LexemeType::QuoteDouble));
        }
        if ch == '\'' {
            self.cursor.next();
            return Some(Lexeme::new(start, self.cursor.index(), LexemeType::QuoteSingle));
        }
        if ch == '-' {
            return Some(self.lex_dash(start));
        }
        if matches!(ch, '–' | '—' | '―') {
            return Some(self.lex_dash(start));
        }
        if matches!(ch, '(' | '{' | '[') {
            self.cursor.next();
            return Some(Lexeme::new(start, self.cursor.index(), LexemeType::OpeningGroup));
        }
        if matches!(ch, ')' | '}' | ']') {
            self.cursor.next();
            return Some(Lexeme::new(start, self.cursor.index(), LexemeType::ClosingGroup));
        }
        if let Some(kind) = international_quote_kind(ch) {
            self.cursor.next();
            return Some(Lexeme::with_glyph(start, self.cursor.index(), kind, ch));
        }
        if ch == ',' && self.cursor.peek(1) == ',' {
            self.cursor.next();
            self.cursor.next();
            return Some(Lexeme::with_glyph(start, self.cursor.index(), LexemeType::QuoteDoubleOpening, '„'));
        }
        if ch == '\\' {
            self.cursor.next();
            return Some(self.lex_backslash(start));
        }
        if ch == '=' {
            self.cursor.next();
            return Some(Lexeme::new(start, self.cursor.index(), LexemeType::Equals));
        }

        self.cursor.next();
        Some(Lexeme::new(start, self.cursor.index(), LexemeType::Punct))
    }

    fn lex_word(&mut self, start: usize) -> Lexeme {
        self.cursor.next();
        self.cursor.skip(is_word_continue);
        Lexeme::new(start, self.cursor.index(), LexemeType::Word)
    }

    fn lex_whitespace(&mut self, start: usize) -> Lexeme {
        let ch = self.cursor.current();
        if ch == '\r' || ch == '\n' {
            return self.lex_line_break(start);
        }
        self.cursor.skip(|c| c.is_whitespace() && c != '\r' && c != '\n');
        Lexeme::new(start, self.cursor.index(), LexemeType::Space)
    }

    /// A single CR, single LF, or one CR+LF pair is `Eol`; any longer run of
    /// line breaks (a blank line) is `Eop`.
    fn lex_line_break(&mut self, start: usize) -> Lexeme {
        let mut breaks = 0usize;
        loop {
            match self.cursor.current() {
                '\r' => {
                    self.cursor.next();
                    if self.cursor.current() == '\n' {
                        self.cursor.next();
                    }
                    breaks += 1;
                }
                '\n' => {
                    self.cursor.next();
                    breaks += 1;
                }
                _ => break,
            }
        }
        let kind = if breaks > 1 { LexemeType::Eop } else { LexemeType::Eol };
        Lexeme::new(start, self.cursor.index(), kind)
    }

    fn lex_number(&mut self, start: usize) -> Lexeme {
        loop {
            let ch = self.cursor.current();
            if is_ascii_or_unicode_digit(ch) {
                self.cursor.next();
                continue;
            }
            if is_numeric_connector(ch) && is_ascii_or_unicode_digit(self.cursor.peek(1)) {
                self.cursor.next();
                continue;
            }
            break;
        }
        Lexeme::new(start, self.cursor.index(), LexemeType::Number)
    }

    /// `.` runs, optionally space-separated, collapse to a single `Ellipsis`;
    /// a lone `.` is `Period`.
    fn lex_dots(&mut self, start: usize) -> Lexeme {
        self.cursor.next();
        let mut dot_count = 1usize;
        loop {
            let save = self.cursor.index();
            self.cursor.skip(|c| c == ' ');
            if self.cursor.current() == '.' {
                self.cursor.next();
                dot_count += 1;
            } else {
                self.cursor.set_index(save);
                break;
            }
        }
        let kind = if dot_count > 1 { LexemeType::Ellipsis } else { LexemeType::Period };
        Lexeme::new(start, self.cursor.index(), kind)
    }

    fn lex_dash(&mut self, start: usize) -> Lexeme {
        let ch = self.cursor.current();
        self.cursor.next();
        if matches!(ch, '–' | '—' | '―') {
            self.cursor.skip(|c| matches!(c, '-' | '–' | '—' | '―'));
            return Lexeme::new(start, self.cursor.index(), LexemeType::Dash);
        }
        // ch == '-': a lone hyphen unless followed by more dash characters.
        if matches!(self.cursor.current(), '-' | '–' | '—' | '―') {
            self.cursor.skip(|c| matches!(c, '-' | '–' | '—' | '―'));
            return Lexeme::new(start, self.cursor.index(), LexemeType::Dash);
        }
        Lexeme::new(start, self.cursor.index(), LexemeType::Hyphen)
    }

    fn lex_backslash(&mut self, start: usize) -> Lexeme {
        match self.cursor.current() {
            '\'' => {
                self.cursor.next();
                Lexeme::new(start, self.cursor.index(), LexemeType::EscSingle)
            }
            '"' => {
                self.cursor.next();
                Lexeme::new(start, self.cursor.index(), LexemeType::EscDouble)
            }
            _ => Lexeme::new(start, self.cursor.index(), LexemeType::Punct),
        }
    }
}

/// Maps an international opening/closing quote glyph to its lexeme type, or
/// `None` if `ch` is not one of the recognized glyphs.
fn international_quote_kind(ch: char) -> Option<LexemeType> {
    match ch {
        '«' | '‹' | '„' | '‚' => Some(LexemeType::QuoteDoubleOpening),
        '»' | '›' => Some(LexemeType::QuoteDoubleClosing),
        '“' => Some(LexemeType::QuoteDoubleOpening),
        '”' => Some(LexemeType::QuoteDoubleClosing),
        '‘' => Some(LexemeType::QuoteSingleOpening),
        '’' => Some(LexemeType::QuoteSingleClosing),
        _ => None,
    }
}
