//! The 25-rule ordered table from spec §4.4: classifies a single
//! quote-bearing lexeme (the window's candidate) by consulting up to one
//! slot of left context and two of lookahead, plus the contractions oracle.
//!
//! Rules are tried in the order they appear below; the first match wins —
//! callers must not reorder this file without re-running the seed-scenario
//! fixtures, since several rules are deliberately narrower special cases of
//! ones that appear later.

use crate::window::{in_set, Window};
use curl_contractions::Contractions;
use curl_token::{LexemeType, TokenType};

use LexemeType::*;

const OPENING_DOUBLE_LEADING: &[LexemeType] = &[Sot, Space, Dash, Equals, OpeningGroup, Eol, Eop];
const OPENING_DOUBLE_LAGGING: &[LexemeType] =
    &[Word, Punct, Number, Dash, Ellipsis, OpeningGroup, QuoteSingle, QuoteSingleOpening, QuoteSingleClosing, QuoteDouble];
const CLOSING_DOUBLE_LEADING: &[LexemeType] =
    &[Word, Number, Period, Punct, Dash, Ellipsis, ClosingGroup, QuoteSingle, QuoteSingleClosing, QuoteSingleOpening];
const CLOSING_DOUBLE_LAGGING: &[LexemeType] = &[Space, Punct, Period, Equals, Hyphen, Dash, QuoteSingle, ClosingGroup, Ending];

const OPENING_SINGLE_LEADING: &[LexemeType] = &[Sot, Space, Dash, QuoteDouble, OpeningGroup, Eol, Eop];
const OPENING_SINGLE_LAGGING: &[LexemeType] = &[Word, Ellipsis, QuoteSingle, QuoteDouble];

/// Spec §4.4 describes rule 17's context sets only as "symmetrical" to
/// rule 16's; these are the natural mirror (what can precede a closing
/// single quote mirrors what can follow an opening one, and vice versa).
const CLOSING_SINGLE_LEADING: &[LexemeType] = &[Word, Ellipsis, QuoteSingle, QuoteDouble];
const CLOSING_SINGLE_LAGGING: &[LexemeType] = &[Space, Dash, QuoteDouble, ClosingGroup, Ending, Punct];

fn eq_ignore_case(word: &str, other: &str) -> bool {
    word.eq_ignore_ascii_case(other)
}

/// Rules 1–4 and 6–12 and 15–22 and 25 are all about the ASCII single
/// quote; guard each against accidentally firing for the double quote or an
/// escaped-quote lexeme sharing the same rule-table pass.
fn is_single(w: &Window) -> bool {
    w.candidate().kind == QuoteSingle
}

/// What a firing rule wants the emitter to do with the window's candidate
/// slot and, occasionally, a neighboring slot that the rule also consumes.
pub enum Outcome {
    /// Classify the candidate only.
    Candidate(TokenType),
    /// Classify the candidate, and also classify the lexeme `rel` positions
    /// away (consuming it so it is never independently reconsidered).
    CandidateAndNeighbor { candidate: TokenType, rel: isize, neighbor: TokenType },
    /// Merge the candidate with the lexeme at `rel` into one token spanning
    /// both spans (rule 3's `2''` → a single double-prime).
    Merge { kind: TokenType, rel: isize },
}

/// Rule 1: `WORD|PERIOD|NUMBER · ' · WORD · *` → apostrophe.
/// *(y'all, Ph.D.'ll, 20's, she's)*
fn rule_01(w: &Window, _c: &Contractions) -> Option<Outcome> {
    if is_single(w) && in_set(w.kind(-1), &[Word, Period, Number]) && w.kind(1) == Word {
        return Some(Outcome::Candidate(TokenType::Apostrophe));
    }
    None
}

/// Rule 2: `* · ' · WORD · '` if the bracketed word is an unambiguous
/// contraction fragment → both quotes are apostrophes; the second is
/// consumed here. *('n', 'N', 'owlin')*
fn rule_02(w: &Window, c: &Contractions, input: &str) -> Option<Outcome> {
    if is_single(w) && w.kind(1) == Word && w.kind(2) == QuoteSingle {
        if let Some(word) = w.word_at(input, 1) {
            if c.began_unambiguously(word) || c.ended_unambiguously(word) {
                return Some(Outcome::CandidateAndNeighbor {
                    candidate: TokenType::Apostrophe,
                    rel: 2,
                    neighbor: TokenType::Apostrophe,
                });
            }
        }
    }
    None
}

/// Rule 3: `NUMBER · ' · ' · *` → a single double-prime spanning both quote
/// columns. *(2'')*
fn rule_03(w: &Window, _c: &Contractions) -> Option<Outcome> {
    if is_single(w) && w.kind(-1) == Number && w.kind(1) == QuoteSingle {
        return Some(Outcome::Merge { kind: TokenType::PrimeDouble, rel: 1 });
    }
    None
}

/// Rule 4: `NUMBER · ' · *` → single prime.
fn rule_04(w: &Window, _c: &Contractions) -> Option<Outcome> {
    if w.kind(-1) == Number && w.candidate().kind == QuoteSingle {
        return Some(Outcome::Candidate(TokenType::PrimeSingle));
    }
    None
}

/// Rule 5: `NUMBER · " · *` → double prime.
fn rule_05(w: &Window, _c: &Contractions) -> Option<Outcome> {
    if w.kind(-1) == Number && w.candidate().kind == QuoteDouble {
        return Some(Outcome::Candidate(TokenType::PrimeDouble));
    }
    None
}

/// Rule 6: `WORD · ' · * · *` if the left word ends unambiguously in a
/// contraction → apostrophe. *(thinkin')*
fn rule_06(w: &Window, c: &Contractions, input: &str) -> Option<Outcome> {
    if !is_single(w) {
        return None;
    }
    if let Some(word) = w.word_at(input, -1) {
        if c.ended_unambiguously(word) {
            return Some(Outcome::Candidate(TokenType::Apostrophe));
        }
    }
    None
}

/// Rule 7: `* · ' · NUMBER · {SPACE,PUNCT}` → apostrophe. *('02)*
fn rule_07(w: &Window, _c: &Contractions) -> Option<Outcome> {
    if is_single(w) && w.kind(1) == Number && in_set(w.kind(2), &[Space, Punct]) {
        return Some(Outcome::Candidate(TokenType::Apostrophe));
    }
    None
}

/// Rule 8: `* · ' · NUMBER · WORD` if the right word is exactly `s`
/// → apostrophe. *('20s)*
fn rule_08(w: &Window, _c: &Contractions, input: &str) -> Option<Outcome> {
    if is_single(w) && w.kind(1) == Number {
        if let Some(word) = w.word_at(input, 2) {
            if eq_ignore_case(word, "s") {
                return Some(Outcome::Candidate(TokenType::Apostrophe));
            }
        }
    }
    None
}

/// Rule 9: `{PUNCT,PERIOD,ELLIPSIS,DASH} · ' · ENDING · *` → closing single.
fn rule_09(w: &Window, _c: &Contractions) -> Option<Outcome> {
    if is_single(w) && in_set(w.kind(-1), &[Punct, Period, Ellipsis, Dash]) && w.kind(1) == Ending {
        return Some(Outcome::Candidate(TokenType::ClosingSingle));
    }
    None
}

/// Rule 10: `ESC_SINGLE`/`ESC_DOUBLE` → the corresponding straight quote.
fn rule_10(w: &Window, _c: &Contractions) -> Option<Outcome> {
    match w.candidate().kind {
        EscSingle => Some(Outcome::Candidate(TokenType::StraightSingle)),
        EscDouble => Some(Outcome::Candidate(TokenType::StraightDouble)),
        _ => None,
    }
}

/// Rule 11: `DASH · ' · " · {SPACE,ENDING}` → closing single (end of a
/// nested quote at a dash).
fn rule_11(w: &Window, _c: &Contractions) -> Option<Outcome> {
    if is_single(w) && w.kind(-1) == Dash && w.kind(1) == QuoteDouble && in_set(w.kind(2), &[Space, Ending]) {
        return Some(Outcome::Candidate(TokenType::ClosingSingle));
    }
    None
}

/// Rule 12: `WORD · ' · {SPACE,HYPHEN} · WORD` if the left word is `o`
/// → apostrophe. *(o'clock, jack-o'-lantern)*
fn rule_12(w: &Window, _c: &Contractions, input: &str) -> Option<Outcome> {
    if !is_single(w) {
        return None;
    }
    if let Some(word) = w.word_at(input, -1) {
        if eq_ignore_case(word, "o") && in_set(w.kind(1), &[Space, Hyphen]) && w.kind(2) == Word {
            return Some(Outcome::Candidate(TokenType::Apostrophe));
        }
    }
    None
}

/// Rule 13: double-quote opening.
fn rule_13(w: &Window, _c: &Contractions) -> Option<Outcome> {
    if w.candidate().kind == QuoteDouble && in_set(w.kind(-1), OPENING_DOUBLE_LEADING) && in_set(w.kind(1), OPENING_DOUBLE_LAGGING) {
        return Some(Outcome::Candidate(TokenType::OpeningDouble));
    }
    None
}

/// Rule 14: double-quote closing (symmetrical context sets to rule 13).
fn rule_14(w: &Window, _c: &Contractions) -> Option<Outcome> {
    if w.candidate().kind == QuoteDouble && in_set(w.kind(-1), CLOSING_DOUBLE_LEADING) && in_set(w.kind(1), CLOSING_DOUBLE_LAGGING) {
        return Some(Outcome::Candidate(TokenType::ClosingDouble));
    }
    None
}

/// Rule 15: `{SPACE,SOT} · ' · ' · WORD` → the first quote opens a single
/// quote, the second is a bare contraction apostrophe (prevents a false
/// ambiguity on dialect words like `'e`).
fn rule_15(w: &Window, _c: &Contractions) -> Option<Outcome> {
    if is_single(w) && in_set(w.kind(-1), &[Space, Sot]) && w.kind(1) == QuoteSingle && w.kind(2) == Word {
        return Some(Outcome::CandidateAndNeighbor {
            candidate: TokenType::OpeningSingle,
            rel: 1,
            neighbor: TokenType::Apostrophe,
        });
    }
    None
}

/// Rule 16: single-quote opening. Consults the oracle on the right-hand
/// word before falling back to nested-quote and back-to-back-opener
/// heuristics.
fn rule_16(w: &Window, c: &Contractions, input: &str) -> Option<Outcome> {
    if !is_single(w) || !(in_set(w.kind(-1), OPENING_SINGLE_LEADING) && in_set(w.kind(1), OPENING_SINGLE_LAGGING)) {
        return None;
    }
    if let Some(word) = w.word_at(input, 1) {
        if c.began_ambiguously(word) {
            return Some(Outcome::Candidate(TokenType::AmbiguousLeading));
        }
        if c.began_unambiguously(word) {
            return Some(Outcome::Candidate(TokenType::Apostrophe));
        }
    }
    if w.kind(-1) == QuoteDouble && w.kind(1) == QuoteDouble && w.kind(2) == Word {
        return Some(Outcome::Candidate(TokenType::OpeningSingle));
    }
    if w.kind(-1) == QuoteDouble && w.kind(1) == QuoteDouble {
        return Some(Outcome::Candidate(TokenType::Ambiguous));
    }
    if w.kind(1) == QuoteSingle {
        return Some(Outcome::Candidate(TokenType::OpeningSingle));
    }
    Some(Outcome::Candidate(TokenType::AmbiguousLeading))
}

/// Rule 17: single-quote closing (symmetrical context sets to rule 16).
fn rule_17(w: &Window, c: &Contractions, input: &str) -> Option<Outcome> {
    if !is_single(w) || !(in_set(w.kind(-1), CLOSING_SINGLE_LEADING) && in_set(w.kind(1), CLOSING_SINGLE_LAGGING)) {
        return None;
    }
    if let Some(word) = w.word_at(input, -1) {
        if c.ended_ambiguously(word) {
            return Some(Outcome::Candidate(TokenType::AmbiguousLagging));
        }
    }
    Some(Outcome::Candidate(TokenType::ClosingSingle))
}

/// Rule 18: `WORD · ' · {PUNCT,PERIOD} · *` → apostrophe (residual
/// contraction).
fn rule_18(w: &Window, _c: &Contractions) -> Option<Outcome> {
    if is_single(w) && w.kind(-1) == Word && in_set(w.kind(1), &[Punct, Period]) {
        return Some(Outcome::Candidate(TokenType::Apostrophe));
    }
    None
}

/// Rule 19: `DASH · ' · " · *` → closing single.
fn rule_19(w: &Window, _c: &Contractions) -> Option<Outcome> {
    if is_single(w) && w.kind(-1) == Dash && w.kind(1) == QuoteDouble {
        return Some(Outcome::Candidate(TokenType::ClosingSingle));
    }
    None
}

/// Rule 20: `* · ' · NUMBER · *` → opening single. *('42)*
fn rule_20(w: &Window, _c: &Contractions) -> Option<Outcome> {
    if is_single(w) && w.kind(1) == Number {
        return Some(Outcome::Candidate(TokenType::OpeningSingle));
    }
    None
}

/// Rule 21: a quote immediately after an obliterated slot → closing single.
fn rule_21(w: &Window, _c: &Contractions) -> Option<Outcome> {
    if is_single(w) && w.is_consumed(-1) {
        return Some(Outcome::Candidate(TokenType::ClosingSingle));
    }
    None
}

/// Rule 22: `' · ' · WORD · *`.
fn rule_22(w: &Window, c: &Contractions, input: &str) -> Option<Outcome> {
    if !is_single(w) || w.kind(-1) != QuoteSingle {
        return None;
    }
    if let Some(word) = w.word_at(input, 1) {
        if c.began_ambiguously(word) {
            return Some(Outcome::Candidate(TokenType::AmbiguousLeading));
        }
        if c.began_unambiguously(word) {
            return Some(Outcome::Candidate(TokenType::Apostrophe));
        }
    }
    Some(Outcome::Candidate(TokenType::Ambiguous))
}

/// Rule 23: bare fallback for an unclassified double quote.
fn rule_23(w: &Window, _c: &Contractions) -> Option<Outcome> {
    if w.candidate().kind == QuoteDouble {
        return Some(Outcome::Candidate(TokenType::Ambiguous));
    }
    None
}

/// Rule 25: bare fallback for an unclassified single quote.
fn rule_25(w: &Window, _c: &Contractions) -> Option<Outcome> {
    if w.candidate().kind == QuoteSingle {
        return Some(Outcome::Candidate(TokenType::Ambiguous));
    }
    None
}

/// Runs the ordered rule table against the candidate in `w`. Rule 24
/// (international opening-double quotes mapping directly to
/// `OpeningDouble`) is handled upstream in [`crate::Emitter`] before this
/// table is ever consulted, since those lexemes already carry a definite
/// type from the lexer and never need the oracle.
pub fn classify(w: &Window, c: &Contractions, input: &str) -> Outcome {
    rule_01(w, c)
        .or_else(|| rule_02(w, c, input))
        .or_else(|| rule_03(w, c))
        .or_else(|| rule_04(w, c))
        .or_else(|| rule_05(w, c))
        .or_else(|| rule_06(w, c, input))
        .or_else(|| rule_07(w, c))
        .or_else(|| rule_08(w, c, input))
        .or_else(|| rule_09(w, c))
        .or_else(|| rule_10(w, c))
        .or_else(|| rule_11(w, c))
        .or_else(|| rule_12(w, c, input))
        .or_else(|| rule_13(w, c))
        .or_else(|| rule_14(w, c))
        .or_else(|| rule_15(w, c))
        .or_else(|| rule_16(w, c, input))
        .or_else(|| rule_17(w, c, input))
        .or_else(|| rule_18(w, c))
        .or_else(|| rule_19(w, c))
        .or_else(|| rule_20(w, c))
        .or_else(|| rule_21(w, c))
        .or_else(|| rule_22(w, c, input))
        .or_else(|| rule_23(w, c))
        .or_else(|| rule_25(w, c))
        .unwrap_or(Outcome::Candidate(TokenType::Ambiguous))
}
