//! Property test: the lexer always terminates (no infinite loop on any
//! input, however adversarial) and never emits an empty non-sentinel
//! lexeme, for both filter modes.

use curl_lexer::{FilterMode, Lexer};
use curl_token::LexemeType;
use proptest::prelude::*;

fn check_termination(input: &str, mode: FilterMode) {
    let lexemes = Lexer::new(input, mode).tokenize();

    // Sentinels bracket the stream: Sot first, Eol/Eop/Eot last three.
    assert_eq!(lexemes.first().map(|l| l.kind), Some(LexemeType::Sot));
    let tail: Vec<LexemeType> = lexemes.iter().rev().take(3).rev().map(|l| l.kind).collect();
    assert_eq!(tail, vec![LexemeType::Eol, LexemeType::Eop, LexemeType::Eot]);

    // No non-sentinel lexeme is empty, and spans are non-decreasing.
    let mut prev_end = 0usize;
    for lex in &lexemes {
        assert!(lex.began <= lex.ended);
        if !matches!(lex.kind, LexemeType::Sot | LexemeType::Eol | LexemeType::Eop | LexemeType::Eot) {
            assert!(lex.began < lex.ended, "non-sentinel lexeme must not be empty: {lex:?}");
        }
        assert!(lex.began >= prev_end || lex.began == lex.ended, "lexeme spans must not overlap: {lex:?}");
        prev_end = lex.ended.max(prev_end);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn lexer_terminates_on_arbitrary_prose(s in ".{0,200}") {
        check_termination(&s, FilterMode::Plain);
    }

    #[test]
    fn lexer_terminates_on_arbitrary_input_in_xml_mode(s in ".{0,200}") {
        check_termination(&s, FilterMode::Xml);
    }

    #[test]
    fn lexer_terminates_on_quote_heavy_input(s in r#"[\x27\x22a-zA-Z0-9 .,<>/'"-]{0,200}"#) {
        check_termination(&s, FilterMode::Xml);
    }
}
