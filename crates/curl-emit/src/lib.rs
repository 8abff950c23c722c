//! The quote emitter: component 4 of the curl pipeline.
//!
//! Consumes the lexeme stream produced by `curl-lexer` and, via a 4-lexeme
//! sliding window ([`window::Window`]) plus an ordered rule table
//! ([`rules`]), classifies every quotation-mark-bearing lexeme into a
//! [`curl_token::Token`] — either a definite kind, or one of the three
//! ambiguous kinds the resolver (`curl-resolve`) will try to settle.

#![deny(unsafe_code)]

pub mod rules;
pub mod window;

use curl_contractions::Contractions;
use curl_token::{Lexeme, LexemeType, Token, TokenType};
use rules::Outcome;
use window::Window;

/// Direct mapping for lexeme types the lexer already classified definitely
/// (international quote glyphs, and the German-style low-opening double
/// quote) — these bypass the rule table entirely (spec §4.4: "international
/// quotes emit directly without consulting the oracle"; this is rule 24 for
/// the opening-double case).
fn direct_mapping(kind: LexemeType) -> Option<TokenType> {
    match kind {
        LexemeType::QuoteSingleOpening => Some(TokenType::OpeningSingle),
        LexemeType::QuoteSingleClosing => Some(TokenType::ClosingSingle),
        LexemeType::QuoteDoubleOpening => Some(TokenType::OpeningDouble),
        LexemeType::QuoteDoubleClosing => Some(TokenType::ClosingDouble),
        _ => None,
    }
}

fn is_quote_bearing(kind: LexemeType) -> bool {
    matches!(kind, LexemeType::QuoteSingle | LexemeType::QuoteDouble | LexemeType::EscSingle | LexemeType::EscDouble)
}

/// Transforms a lexeme stream into a token stream, one [`Contractions`]
/// oracle shared across the whole conversion.
pub struct Emitter<'a> {
    contractions: &'a Contractions,
}

impl<'a> Emitter<'a> {
    pub fn new(contractions: &'a Contractions) -> Self {
        Self { contractions }
    }

    /// `input` must be the exact source string `lexemes` was lexed from —
    /// the emitter slices it by offset to read word text for the oracle and
    /// word-equality guards.
    pub fn emit(&self, input: &str, lexemes: &[Lexeme]) -> Vec<Token> {
        let n = lexemes.len();
        let mut consumed = vec![false; n];
        let mut slots: Vec<Option<Token>> = vec![None; n];

        for i in 0..n {
            if consumed[i] {
                continue;
            }
            let kind = lexemes[i].kind;

            if let Some(direct) = direct_mapping(kind) {
                slots[i] = Some(Token::new(direct, lexemes[i]));
                continue;
            }
            if !is_quote_bearing(kind) {
                continue;
            }

            let window = Window::new(lexemes, &consumed, i);
            let outcome = rules::classify(&window, self.contractions, input);

            #[cfg(feature = "trace-rules")]
            tracing::trace!(index = i, kind = ?kind, "emitter: rule fired");

            match outcome {
                Outcome::Candidate(token_type) => {
                    slots[i] = Some(Token::new(token_type, lexemes[i]));
                }
                Outcome::CandidateAndNeighbor { candidate, rel, neighbor } => {
                    let neighbor_idx = (i as isize + rel) as usize;
                    slots[i] = Some(Token::new(candidate, lexemes[i]));
                    slots[neighbor_idx] = Some(Token::new(neighbor, lexemes[neighbor_idx]));
                    consumed[neighbor_idx] = true;
                }
                Outcome::Merge { kind: merged_kind, rel } => {
                    let other_idx = (i as isize + rel) as usize;
                    let other = lexemes[other_idx];
                    let span = Lexeme::new(lexemes[i].began, other.ended, lexemes[i].kind);
                    slots[i] = Some(Token::new(merged_kind, span));
                    consumed[other_idx] = true;
                }
            }
        }

        slots.into_iter().flatten().collect()
    }
}
