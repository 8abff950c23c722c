//! The contractions oracle: four word-fragment sets that let the quote
//! emitter and ambiguity resolver tell a contraction/possessive apostrophe
//! apart from a quotation mark.
//!
//! The oracle is consulted in both directions — the word *before* a
//! trailing apostrophe (`ended_*`) and the word *after* a leading one
//! (`began_*`) — and in two confidence tiers: unambiguous entries settle the
//! question outright, ambiguous entries only hint at a likely reading that
//! the resolver's tree-local rules (`curl-resolve`) still get to override.
//!
//! `ended_ambiguously` additionally falls back to a structural heuristic for
//! words not in the curated list: any word ending in `s`, `z`, `x`, or (when
//! longer than one character) `n` is treated as ambiguous, to catch
//! possessives and common dropped-*g* gerunds the curated list didn't
//! enumerate by hand. This is a heuristic, not a proof — spec's own open
//! question notes that distinguishing `s'` (possessive) from a closing quote
//! after a word ending in `s` is left entirely to resolver context.

#![deny(unsafe_code)]

mod defaults;

use std::collections::HashSet;

/// The immutable set of word-fragment lists consulted by the emitter and
/// resolver. Construct via [`Contractions::default`] for the baked-in
/// English defaults, or [`ContractionsBuilder`] to override one or more
/// categories.
#[derive(Debug, Clone)]
pub struct Contractions {
    began_unambiguous: HashSet<Box<str>>,
    began_ambiguous: HashSet<Box<str>>,
    ended_unambiguous: HashSet<Box<str>>,
    ended_ambiguous: HashSet<Box<str>>,
}

impl Default for Contractions {
    fn default() -> Self {
        Self {
            began_unambiguous: defaults::BEGAN_UNAMBIGUOUS.keys().map(|s| (*s).into()).collect(),
            began_ambiguous: defaults::BEGAN_AMBIGUOUS.keys().map(|s| (*s).into()).collect(),
            ended_unambiguous: defaults::ENDED_UNAMBIGUOUS.keys().map(|s| (*s).into()).collect(),
            ended_ambiguous: defaults::ENDED_AMBIGUOUS.keys().map(|s| (*s).into()).collect(),
        }
    }
}

impl Contractions {
    /// True when `word` (compared case-insensitively) is a fragment whose
    /// leading apostrophe is definitely a contraction, not a quote.
    pub fn began_unambiguously(&self, word: &str) -> bool {
        self.began_unambiguous.contains(lower(word).as_str())
    }

    /// True when `word`'s leading apostrophe is plausibly a contraction but
    /// not certainly so.
    pub fn began_ambiguously(&self, word: &str) -> bool {
        self.began_ambiguous.contains(lower(word).as_str())
    }

    /// True when `word` (compared case-insensitively) is a fragment whose
    /// trailing apostrophe is definitely a contraction, not a closing quote.
    pub fn ended_unambiguously(&self, word: &str) -> bool {
        self.ended_unambiguous.contains(lower(word).as_str())
    }

    /// True when `word`'s trailing apostrophe is plausibly a contraction,
    /// either via the curated list or the structural `s|z|x|n` fallback.
    pub fn ended_ambiguously(&self, word: &str) -> bool {
        let lowered = lower(word);
        if self.ended_ambiguous.contains(lowered.as_str()) {
            return true;
        }
        let chars: Vec<char> = lowered.chars().collect();
        match chars.last() {
            Some('s') | Some('z') | Some('x') => true,
            Some('n') if chars.len() > 1 => true,
            _ => false,
        }
    }
}

fn lower(word: &str) -> String {
    word.to_lowercase()
}

/// Identifies one of the four default word-fragment categories, for callers
/// (the `curl` CLI's `-l` listing flag and its append-semantics `-ub/-ue/
/// -ab/-ae` flags) that need to read the baked-in defaults back out rather
/// than only test membership in them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    BeganUnambiguous,
    BeganAmbiguous,
    EndedUnambiguous,
    EndedAmbiguous,
}

/// The default word list for `category`, in the table's declaration order.
pub fn default_words(category: Category) -> Vec<String> {
    let set: &phf::Set<&'static str> = match category {
        Category::BeganUnambiguous => &defaults::BEGAN_UNAMBIGUOUS,
        Category::BeganAmbiguous => &defaults::BEGAN_AMBIGUOUS,
        Category::EndedUnambiguous => &defaults::ENDED_UNAMBIGUOUS,
        Category::EndedAmbiguous => &defaults::ENDED_AMBIGUOUS,
    };
    set.iter().map(|s| s.to_string()).collect()
}

/// Builder for overriding one or more of the four default word lists.
/// Each `with_*` call *replaces* the category's default set entirely,
/// matching spec §6's "each replacing the default for its category."
#[derive(Debug, Clone, Default)]
pub struct ContractionsBuilder {
    began_unambiguous: Option<HashSet<Box<str>>>,
    began_ambiguous: Option<HashSet<Box<str>>>,
    ended_unambiguous: Option<HashSet<Box<str>>>,
    ended_ambiguous: Option<HashSet<Box<str>>>,
}

impl ContractionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_began_unambiguous<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.began_unambiguous = Some(words.into_iter().map(|w| lower(w.as_ref()).into_boxed_str()).collect());
        self
    }

    pub fn with_began_ambiguous<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.began_ambiguous = Some(words.into_iter().map(|w| lower(w.as_ref()).into_boxed_str()).collect());
        self
    }

    pub fn with_ended_unambiguous<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ended_unambiguous = Some(words.into_iter().map(|w| lower(w.as_ref()).into_boxed_str()).collect());
        self
    }

    pub fn with_ended_ambiguous<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ended_ambiguous = Some(words.into_iter().map(|w| lower(w.as_ref()).into_boxed_str()).collect());
        self
    }

    pub fn build(self) -> Contractions {
        let defaults = Contractions::default();
        Contractions {
            began_unambiguous: self.began_unambiguous.unwrap_or(defaults.began_unambiguous),
            began_ambiguous: self.began_ambiguous.unwrap_or(defaults.began_ambiguous),
            ended_unambiguous: self.ended_unambiguous.unwrap_or(defaults.ended_unambiguous),
            ended_ambiguous: self.ended_ambiguous.unwrap_or(defaults.ended_ambiguous),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_recognize_dialect_elisions() {
        let c = Contractions::default();
        assert!(c.began_unambiguously("tis"));
        assert!(c.began_unambiguously("TWAS"));
        assert!(!c.began_unambiguously("xyz"));
    }

    #[test]
    fn defaults_recognize_dropped_g_gerunds() {
        let c = Contractions::default();
        assert!(c.ended_unambiguously("goin"));
        assert!(c.ended_unambiguously("Thinkin"));
        assert!(!c.ended_unambiguously("random"));
    }

    #[test]
    fn ended_ambiguously_falls_back_to_suffix_heuristic() {
        let c = Contractions::default();
        assert!(c.ended_ambiguously("dogs"));
        assert!(c.ended_ambiguously("buzz"));
        assert!(c.ended_ambiguously("box"));
        assert!(c.ended_ambiguously("learnin"));
        assert!(!c.ended_ambiguously("n"));
        assert!(!c.ended_ambiguously("cat"));
    }

    #[test]
    fn case_insensitive_lookup() {
        let c = Contractions::default();
        assert!(c.began_unambiguously("Tis"));
        assert!(c.ended_unambiguously("GOIN"));
    }

    #[test]
    fn builder_replaces_rather_than_merges() {
        let c = ContractionsBuilder::new().with_began_unambiguous(["foo"]).build();
        assert!(c.began_unambiguously("foo"));
        assert!(!c.began_unambiguously("tis"));
    }

    #[test]
    fn builder_leaves_other_categories_at_default() {
        let c = ContractionsBuilder::new().with_began_unambiguous(["foo"]).build();
        assert!(c.ended_unambiguously("goin"));
    }
}
