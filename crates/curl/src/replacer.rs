//! Component 6 of the curl pipeline (spec §4.6): a stateful, positional
//! in-place rewrite of the original string, applied from a resolved,
//! offset-sorted token stream.
//!
//! Ambiguous tokens are skipped outright — the original characters are left
//! untouched, which is the system's contract for irreducible ambiguity
//! (spec §7 item 2), not a defect.

use curl_token::{Token, TokenType};

/// Which wire-level replacement table the replacer consults (spec §6's
/// `output_mode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// HTML/XML named entities (`&lsquo;`, `&rdquo;`, ...).
    Entities,
    /// Unicode curly glyphs (`‘`, `”`, ...).
    #[default]
    Glyphs,
}

/// The wire-level string a definite [`TokenType`] is rewritten to, or `None`
/// for token kinds the replacer never rewrites (ambiguous kinds, and
/// `StraightSingle`/`StraightDouble`, which the spec defines as "straight
/// quotes remain literal").
fn replacement_for(kind: TokenType, mode: OutputMode) -> Option<&'static str> {
    use OutputMode::{Entities, Glyphs};
    use TokenType as T;
    match (kind, mode) {
        (T::OpeningSingle, Entities) => Some("&lsquo;"),
        (T::OpeningSingle, Glyphs) => Some("\u{2018}"),
        (T::ClosingSingle, Entities) => Some("&rsquo;"),
        (T::ClosingSingle, Glyphs) => Some("\u{2019}"),
        (T::OpeningDouble, Entities) => Some("&ldquo;"),
        (T::OpeningDouble, Glyphs) => Some("\u{201C}"),
        (T::ClosingDouble, Entities) => Some("&rdquo;"),
        (T::ClosingDouble, Glyphs) => Some("\u{201D}"),
        (T::Apostrophe, Entities) => Some("&apos;"),
        (T::Apostrophe, Glyphs) => Some("\u{2019}"),
        (T::PrimeSingle, Entities) => Some("&prime;"),
        (T::PrimeSingle, Glyphs) => Some("\u{2032}"),
        (T::PrimeDouble, Entities) => Some("&Prime;"),
        (T::PrimeDouble, Glyphs) => Some("\u{2033}"),
        (T::PrimeTriple, Entities) => Some("&tprime;"),
        (T::PrimeTriple, Glyphs) => Some("\u{2034}"),
        (T::PrimeQuadruple, Entities) => Some("&qprime;"),
        (T::PrimeQuadruple, Glyphs) => Some("\u{2057}"),
        // Straight quotes remain literal in both modes (spec §4.6).
        (T::StraightSingle, _) | (T::StraightDouble, _) => None,
        // Ambiguous kinds and the sentinel `None` variant are never replaced.
        (T::AmbiguousLeading | T::AmbiguousLagging | T::Ambiguous | T::None, _) => None,
    }
}

/// International glyph passthrough: when a token carries an originating
/// glyph (an international opening/closing quote, or the German-style
/// low-opening double quote), the replacer consults this i18n-entities map
/// first rather than the English-only entity/glyph tables, so `« »`,
/// `‹ ›`, `„ "` round-trip as themselves instead of being coerced into
/// ASCII-adjacent curly quotes.
fn i18n_entity(glyph: char) -> Option<&'static str> {
    match glyph {
        '«' => Some("&laquo;"),
        '»' => Some("&raquo;"),
        '‹' => Some("&lsaquo;"),
        '›' => Some("&rsaquo;"),
        '„' => Some("&bdquo;"),
        '‚' => Some("&sbquo;"),
        '“' => Some("&ldquo;"),
        '”' => Some("&rdquo;"),
        '‘' => Some("&lsquo;"),
        '’' => Some("&rsquo;"),
        _ => None,
    }
}

/// The glyph itself is always a valid Unicode-mode replacement (it *is* the
/// curly character already); entity mode looks it up in [`i18n_entity`] and
/// falls back to the bare glyph if somehow unmapped.
fn i18n_passthrough(glyph: char, mode: OutputMode) -> String {
    match mode {
        OutputMode::Glyphs => glyph.to_string(),
        OutputMode::Entities => i18n_entity(glyph).map(str::to_string).unwrap_or_else(|| glyph.to_string()),
    }
}

/// Applies a resolved, offset-sorted token stream to `input`, producing the
/// curled output string. Tokens must be sorted non-decreasing by
/// [`Token::began`] (spec §8's *Ordering* property) — the replacer does not
/// re-sort.
pub struct Replacer<'a> {
    input: &'a str,
    mode: OutputMode,
}

impl<'a> Replacer<'a> {
    pub fn new(input: &'a str, mode: OutputMode) -> Self {
        Self { input, mode }
    }

    /// Rewrites `input` according to `tokens`, returning the final string.
    /// Tokens whose kind has no replacement (ambiguous kinds, straight
    /// quotes) are skipped, leaving the original bytes in place.
    pub fn apply(&self, tokens: &[Token]) -> String {
        let mut out = String::with_capacity(self.input.len());
        let mut cursor = 0usize;

        for token in tokens {
            debug_assert!(token.began() >= cursor, "tokens must be non-decreasing by began");
            if token.began() < cursor {
                // Defensive: an out-of-order or overlapping token (would be a
                // programmer error upstream) is skipped rather than corrupting
                // the already-written output.
                tracing::warn!(began = token.began(), cursor, "replacer: skipping out-of-order token");
                continue;
            }

            out.push_str(&self.input[cursor..token.began()]);

            // An internationalized glyph takes priority over the plain
            // TokenType lookup (spec §4.6: "consulting the i18n-entities map
            // first") so non-English marks round-trip as themselves.
            let replacement = match token.lexeme.glyph {
                Some(g) => Some(i18n_passthrough(g, self.mode)),
                None => replacement_for(token.kind, self.mode).map(str::to_string),
            };

            match replacement {
                Some(text) => out.push_str(&text),
                None => out.push_str(&self.input[token.began()..token.ended()]),
            }

            cursor = token.ended();
        }

        out.push_str(&self.input[cursor..]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curl_token::{Lexeme, LexemeType};

    fn tok(kind: TokenType, began: usize, ended: usize) -> Token {
        Token::new(kind, Lexeme::new(began, ended, LexemeType::QuoteSingle))
    }

    #[test]
    fn replaces_definite_tokens_with_entities() {
        let input = "\"hi\"";
        let tokens = vec![tok(TokenType::OpeningDouble, 0, 1), tok(TokenType::ClosingDouble, 3, 4)];
        let out = Replacer::new(input, OutputMode::Entities).apply(&tokens);
        assert_eq!(out, "&ldquo;hi&rdquo;");
    }

    #[test]
    fn replaces_definite_tokens_with_glyphs() {
        let input = "\"hi\"";
        let tokens = vec![tok(TokenType::OpeningDouble, 0, 1), tok(TokenType::ClosingDouble, 3, 4)];
        let out = Replacer::new(input, OutputMode::Glyphs).apply(&tokens);
        assert_eq!(out, "\u{201C}hi\u{201D}");
    }

    #[test]
    fn ambiguous_tokens_leave_original_characters() {
        let input = "a'b";
        let tokens = vec![tok(TokenType::Ambiguous, 1, 2)];
        let out = Replacer::new(input, OutputMode::Entities).apply(&tokens);
        assert_eq!(out, "a'b");
    }

    #[test]
    fn straight_tokens_leave_original_characters() {
        let input = r"a\'b";
        let tokens = vec![tok(TokenType::StraightSingle, 1, 3)];
        let out = Replacer::new(input, OutputMode::Entities).apply(&tokens);
        assert_eq!(out, r"a\'b");
    }

    #[test]
    fn cumulative_offset_is_implicit_in_cursor_tracking() {
        let input = "'a' 'b'";
        let tokens = vec![
            tok(TokenType::OpeningSingle, 0, 1),
            tok(TokenType::ClosingSingle, 2, 3),
            tok(TokenType::OpeningSingle, 4, 5),
            tok(TokenType::ClosingSingle, 6, 7),
        ];
        let out = Replacer::new(input, OutputMode::Entities).apply(&tokens);
        assert_eq!(out, "&lsquo;a&rsquo; &lsquo;b&rsquo;");
    }

    #[test]
    fn non_quote_spans_are_preserved_verbatim() {
        let input = "before \"quoted\" after\nwith a newline";
        let tokens = vec![tok(TokenType::OpeningDouble, 7, 8), tok(TokenType::ClosingDouble, 14, 15)];
        let out = Replacer::new(input, OutputMode::Entities).apply(&tokens);
        assert_eq!(out, "before &ldquo;quoted&rdquo; after\nwith a newline");
    }

    #[test]
    fn prime_tokens_render_measurement_marks() {
        let input = "35'×10\"";
        let tokens = vec![tok(TokenType::PrimeSingle, 2, 3), tok(TokenType::PrimeDouble, 6, 7)];
        let out = Replacer::new(input, OutputMode::Entities).apply(&tokens);
        assert_eq!(out, "35&prime;×10&Prime;");
    }

    #[test]
    fn international_glyph_passes_through_curled() {
        let input = "«bonjour»";
        let opening_len = '«'.len_utf8();
        let closing_start = input.len() - '»'.len_utf8();
        let tokens = vec![
            Token::new(TokenType::OpeningDouble, Lexeme::with_glyph(0, opening_len, LexemeType::QuoteDoubleOpening, '«')),
            Token::new(
                TokenType::ClosingDouble,
                Lexeme::with_glyph(closing_start, input.len(), LexemeType::QuoteDoubleClosing, '»'),
            ),
        ];
        let out = Replacer::new(input, OutputMode::Entities).apply(&tokens);
        assert_eq!(out, "\u{00AB}bonjour\u{00BB}");
    }
}
