//! Typographic quote curling: the public facade over the curl pipeline.
//!
//! Composes `curl-lexer` → `curl-emit` → `curl-resolve` → [`replacer`]
//! exactly per spec §2's data flow, exposing one entrypoint, [`curl`], plus
//! [`ambiguous_tokens`] for callers who want to enumerate residual
//! ambiguity (spec §7 item 2).
//!
//! The library surface never returns `Result`: per spec §7, residual
//! ambiguity is a contract, not an error, and invariant violations inside
//! the resolver are programmer-error assertions, not part of the public
//! surface a caller is expected to handle.

#![deny(unsafe_code)]

pub mod replacer;

pub use curl_contractions::{Contractions, ContractionsBuilder};
pub use curl_lexer::{FilterMode, FilterNotice};
pub use curl_token::{Token, TokenType};
pub use replacer::OutputMode;

use curl_emit::Emitter;
use curl_lexer::Lexer;
use curl_resolve::Resolver;

/// Converts straight quotation marks in `text` into typographic
/// equivalents, using `contractions` as the oracle, `output_mode` to pick
/// the wire-level replacement table, and `filter_mode` to pick the skip
/// filter (spec §6).
///
/// Unresolved (still-ambiguous) quote marks are left as straight quotes in
/// the output; this is the system's contract, not a partial failure.
pub fn curl(text: &str, contractions: &Contractions, output_mode: OutputMode, filter_mode: FilterMode) -> String {
    let resolved = resolve(text, contractions, filter_mode);
    replacer::Replacer::new(text, output_mode).apply(&resolved)
}

/// Runs the pipeline through resolution and returns every token whose kind
/// is still ambiguous after both resolver passes — useful for a caller that
/// wants to report residual ambiguity (spec §7 item 2) rather than silently
/// leaving the input untouched.
pub fn ambiguous_tokens(text: &str, contractions: &Contractions, filter_mode: FilterMode) -> Vec<Token> {
    resolve(text, contractions, filter_mode).into_iter().filter(|t| t.is_ambiguous()).collect()
}

/// Shared pipeline stages 3–5: lex, emit, resolve. Returns the final,
/// offset-sorted token stream (spec §4.5's "Emission order after
/// resolution"), handed to either the replacer or an ambiguity report.
fn resolve(text: &str, contractions: &Contractions, filter_mode: FilterMode) -> Vec<Token> {
    let lexemes = Lexer::new(text, filter_mode).tokenize();
    let tokens = Emitter::new(contractions).emit(text, &lexemes);
    let mut resolver = Resolver::build(&tokens);
    resolver.resolve();
    resolver.into_tokens()
}

/// Lexes `text` and returns whatever recoverable skip-filter diagnostics
/// were raised along the way (spec §7 item 1) — malformed or unterminated
/// XML tags and untouchable elements. Empty for [`FilterMode::Plain`],
/// since the plain filter never observes structure to malform.
pub fn lex_notices(text: &str, filter_mode: FilterMode) -> Vec<FilterNotice> {
    let mut lexer = Lexer::new(text, filter_mode);
    let _ = lexer.tokenize();
    lexer.notices().to_vec()
}
