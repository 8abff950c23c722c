//! Integration tests for the XML fidelity property from spec §8: every
//! substring starting with `<` and ending with its matching `>` is
//! byte-identical between input and output, as is the body of every
//! untouchable element — in other words, lexing in XML mode must never
//! split or drop a byte belonging to a tag or an untouchable element body.

use curl_lexer::{FilterMode, Lexer};
use curl_token::LexemeType;

/// Concatenating every non-sentinel lexeme's slice of the original input
/// reconstructs the input exactly — the lexer (with the XML filter active)
/// never consumes a byte it doesn't also emit as part of some lexeme.
fn reconstruct(input: &str) -> String {
    Lexer::new(input, FilterMode::Xml)
        .tokenize()
        .into_iter()
        .filter(|l| !matches!(l.kind, LexemeType::Sot | LexemeType::Eol | LexemeType::Eop | LexemeType::Eot))
        .map(|l| &input[l.began..l.ended])
        .collect::<String>()
}

#[test]
fn bare_tag_round_trips_byte_identical() {
    let input = "<em>hello</em>";
    assert_eq!(reconstruct(input), input);
}

#[test]
fn attribute_values_pass_through_untouched() {
    let input = r#"<a href="it's mine">text</a>"#;
    assert_eq!(reconstruct(input), input);
}

#[test]
fn untouchable_element_body_is_byte_identical() {
    let input = "<code>don't touch 'this' or \"that\"</code>";
    assert_eq!(reconstruct(input), input);
}

#[test]
fn untouchable_element_case_insensitive_tag_name() {
    let input = "<PRE>keep 'as-is'</PRE>";
    assert_eq!(reconstruct(input), input);
}

#[test]
fn abutting_tags_both_skipped_without_gap() {
    let input = "<em><b>'nested'</b></em>";
    assert_eq!(reconstruct(input), input);
}

#[test]
fn self_closing_untouchable_tag_does_not_swallow_following_text() {
    let input = "<code/>after 'this'";
    assert_eq!(reconstruct(input), input);
}

#[test]
fn mixed_prose_and_markup_round_trips() {
    let input = "She said, \"<em>'twas</em> a dark night,\" and <code>left 'as-is'</code> the rest.";
    assert_eq!(reconstruct(input), input);
}

#[test]
fn unterminated_tag_still_reconstructs_remaining_input() {
    let input = "before <em no close";
    assert_eq!(reconstruct(input), input);
}
