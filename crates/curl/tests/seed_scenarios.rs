//! Integration tests encoding spec §8's eight seed input/output pairs
//! against the public `curl()` entrypoint, independent of the unit tests
//! already living in `src/lib.rs`'s own `#[cfg(test)]` module.

use curl::{curl, Contractions, FilterMode, OutputMode};

fn convert(input: &str, filter_mode: FilterMode) -> String {
    curl(input, &Contractions::default(), OutputMode::Entities, filter_mode)
}

#[test]
fn seed_01() {
    assert_eq!(
        convert("That's a 35'\u{d7}10\" yacht!", FilterMode::Plain),
        "That&apos;s a 35&prime;\u{d7}10&Prime; yacht!"
    );
}

#[test]
fn seed_02() {
    assert_eq!(convert("\"I am Sam\"", FilterMode::Plain), "&ldquo;I am Sam&rdquo;");
}

#[test]
fn seed_03() {
    assert_eq!(
        convert("'Twas and 'tis whate'er lay 'twixt dawn and dusk 'n River Styx.", FilterMode::Plain),
        "&apos;Twas and &apos;tis whate&apos;er lay &apos;twixt dawn and dusk &apos;n River Styx."
    );
}

#[test]
fn seed_04() {
    assert_eq!(convert("Fish-'n'-chips!", FilterMode::Plain), "Fish-&apos;n&apos;-chips!");
}

#[test]
fn seed_05() {
    assert_eq!(convert("\"'I'm trouble.'\"", FilterMode::Plain), "&ldquo;&lsquo;I&apos;m trouble.&rsquo;&rdquo;");
}

#[test]
fn seed_06() {
    assert_eq!(
        convert("'A', 'B', and 'C' are letters.", FilterMode::Plain),
        "&lsquo;A&rsquo;, &lsquo;B&rsquo;, and &lsquo;C&rsquo; are letters."
    );
}

#[test]
fn seed_07_xml_mode() {
    assert_eq!(convert("<em>'twas</em>", FilterMode::Xml), "<em>&apos;twas</em>");
}

#[test]
fn seed_08_unterminated_nesting() {
    assert_eq!(
        convert("\"She said, 'Llamas'll languish, they'll--", FilterMode::Plain),
        "&ldquo;She said, &lsquo;Llamas&apos;ll languish, they&apos;ll--"
    );
}

/// Property from spec §8: every non-quote-span substring of the input
/// survives verbatim in the output, for a paragraph mixing several
/// constructs at once.
#[test]
fn offset_invariance_on_a_mixed_paragraph() {
    let input = "The 1990's \"golden era\" of jazz -- or so they say -- didn't last.";
    let out = convert(input, FilterMode::Plain);
    assert!(out.contains("The 1990"));
    assert!(out.contains(" of jazz -- or so they say -- "));
    assert!(out.ends_with("last."));
}
