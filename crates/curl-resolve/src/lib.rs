//! The ambiguity resolver: component 5 of the curl pipeline.
//!
//! Consumes the token stream from `curl-emit`, builds a nesting tree of
//! open/close quotation marks, and applies two resolution passes (spec
//! §4.5): tree-local rules that look only at a node's own opening, closing,
//! and direct leaf children, and a global "laggard prefix" pass that walks
//! the whole document once more in offset order. Tokens that remain
//! ambiguous after both passes are handed back unresolved — that is the
//! system's contract (spec §7 item 2), not a failure.

#![deny(unsafe_code)]

pub mod error;
pub mod passes;
pub mod tree;

pub use error::ResolverError;
pub use tree::{Arena, Node, NodeId, Stem};

use curl_token::{Token, TokenType};

/// Builds the nesting tree from an emitted token stream and runs both
/// resolution passes.
pub struct Resolver {
    arena: Arena,
}

impl Resolver {
    /// Walks `tokens` in offset order, building the nesting tree per spec
    /// §4.5: an opening mark starts a new child node, a closing mark
    /// closes the current node and returns to its parent, and anything
    /// else (including still-ambiguous marks) attaches as a leaf of
    /// whichever node is current.
    pub fn build(tokens: &[Token]) -> Self {
        let mut arena = Arena::new();
        let mut current = Arena::ROOT;

        for &token in tokens {
            match token.kind {
                TokenType::OpeningSingle | TokenType::OpeningDouble => {
                    current = arena.push_child(current, token);
                }
                TokenType::ClosingSingle | TokenType::ClosingDouble => {
                    if let Err(err) = arena.get_mut(current).try_close(token) {
                        tracing::warn!(error = %err, offset = token.began(), "resolver: invariant violation closing quote node");
                    }
                    current = arena.parent_of(current);
                }
                _ => {
                    arena.get_mut(current).children.push(Stem::Leaf(token));
                }
            }
        }

        Self { arena }
    }

    /// Runs Pass A, then Pass B, then Pass A again (spec §4.5: "After Pass
    /// B, re-run Pass A").
    pub fn resolve(&mut self) {
        passes::pass_a(&mut self.arena);
        passes::pass_b(&mut self.arena);
        passes::pass_a(&mut self.arena);
    }

    /// Flattens the tree back into a single offset-ordered token stream for
    /// the replacer (spec §4.5's "Emission order after resolution").
    pub fn into_tokens(self) -> Vec<Token> {
        let mut out = Vec::with_capacity(self.arena.len() * 2);
        for node in &self.arena.nodes {
            if let Some(opening) = node.opening {
                out.push(opening);
            }
            if let Some(closing) = node.closing {
                out.push(closing);
            }
            for stem in &node.children {
                if let Stem::Leaf(tok) = stem {
                    out.push(*tok);
                }
            }
        }
        out.sort_by_key(|t| t.began());
        out
    }

    /// Read-only access to the tree, e.g. for reporting residual ambiguity.
    pub fn arena(&self) -> &Arena {
        &self.arena
    }
}

/// Convenience wrapper: build the tree and run both resolution passes in
/// one call, returning the offset-sorted resolved token stream.
pub fn resolve_tokens(tokens: Vec<Token>) -> Vec<Token> {
    let mut resolver = Resolver::build(&tokens);
    resolver.resolve();
    resolver.into_tokens()
}

#[cfg(test)]
mod tests {
    use super::*;
    use curl_token::{Lexeme, LexemeType};

    fn tok(kind: TokenType, began: usize, ended: usize) -> Token {
        Token::new(kind, Lexeme::new(began, ended, LexemeType::QuoteSingle))
    }

    #[test]
    fn single_quote_pair_resolves_dangling_lagging() {
        // "'word" opened, then an ambiguous-lagging mark with no opener in
        // sight elsewhere in the node but the node itself has an open
        // single and no close — the lone lagging becomes the closer.
        let tokens = vec![tok(TokenType::OpeningSingle, 0, 1), tok(TokenType::AmbiguousLagging, 10, 11)];
        let resolved = resolve_tokens(tokens);
        assert_eq!(resolved[1].kind, TokenType::ClosingSingle);
    }

    #[test]
    fn lone_unknown_in_open_single_node_closes_it() {
        let tokens = vec![tok(TokenType::OpeningSingle, 0, 1), tok(TokenType::Ambiguous, 10, 11)];
        let resolved = resolve_tokens(tokens);
        assert_eq!(resolved[1].kind, TokenType::ClosingSingle);
    }

    #[test]
    fn lone_leading_before_a_close_single_becomes_opener() {
        let tokens = vec![tok(TokenType::AmbiguousLeading, 0, 1), tok(TokenType::ClosingSingle, 10, 11)];
        let resolved = resolve_tokens(tokens);
        assert_eq!(resolved[0].kind, TokenType::OpeningSingle);
    }

    #[test]
    fn unbalanced_node_leadings_become_apostrophes() {
        // Root has no opening/closing of its own, so the "neither open nor
        // close single" branch applies.
        let tokens = vec![tok(TokenType::AmbiguousLeading, 0, 1), tok(TokenType::AmbiguousLeading, 5, 6)];
        let resolved = resolve_tokens(tokens);
        assert!(resolved.iter().all(|t| t.kind == TokenType::Apostrophe));
    }

    #[test]
    fn unbalanced_node_laggings_become_apostrophes() {
        let tokens = vec![tok(TokenType::AmbiguousLagging, 0, 1), tok(TokenType::AmbiguousLagging, 5, 6)];
        let resolved = resolve_tokens(tokens);
        assert!(resolved.iter().all(|t| t.kind == TokenType::Apostrophe));
    }

    #[test]
    fn pass_b_converts_laggards_before_first_leader() {
        let tokens = vec![
            tok(TokenType::AmbiguousLagging, 0, 1),
            tok(TokenType::AmbiguousLagging, 2, 3),
            tok(TokenType::AmbiguousLeading, 4, 5),
        ];
        let resolved = resolve_tokens(tokens);
        assert_eq!(resolved[0].kind, TokenType::Apostrophe);
        assert_eq!(resolved[1].kind, TokenType::Apostrophe);
    }

    #[test]
    fn pass_b_stops_scanning_at_first_leader() {
        let tokens = vec![
            tok(TokenType::AmbiguousLeading, 0, 1),
            tok(TokenType::AmbiguousLagging, 5, 6),
        ];
        let resolved = resolve_tokens(tokens);
        // The lagging after the leader is outside a real opened node (the
        // leader here was never promoted to an opener, so both remain at
        // the root); Pass B must not touch it since it comes after the
        // first leader.
        assert_eq!(resolved[1].kind, TokenType::AmbiguousLagging);
    }

    #[test]
    fn nested_balanced_double_then_single_resolves_independently() {
        let tokens =
            vec![tok(TokenType::OpeningDouble, 0, 1), tok(TokenType::OpeningSingle, 1, 2), tok(TokenType::AmbiguousLagging, 5, 6)];
        let resolved = resolve_tokens(tokens);
        // The inner single-quote node has an opener but no explicit
        // closing token ever arrives — Pass A's tree-local rule still
        // closes it from the lone lagging leaf, independent of the outer
        // (legitimately dangling) double-quote node.
        let inner_close = resolved.iter().find(|t| t.began() == 5).unwrap();
        assert_eq!(inner_close.kind, TokenType::ClosingSingle);
    }

    #[test]
    fn nesting_alternation_never_mixes_single_and_double() {
        let tokens = vec![
            tok(TokenType::OpeningDouble, 0, 1),
            tok(TokenType::OpeningSingle, 1, 2),
            tok(TokenType::ClosingSingle, 5, 6),
            tok(TokenType::ClosingDouble, 10, 11),
        ];
        let mut resolver = Resolver::build(&tokens);
        resolver.resolve();
        for node in &resolver.arena().nodes {
            if let (Some(o), Some(c)) = (node.opening, node.closing) {
                assert_eq!(o.kind.is_opening_single(), c.kind.is_closing_single());
                assert_eq!(o.kind.is_opening_double(), c.kind.is_closing_double());
            }
        }
    }

    #[test]
    fn ordering_is_strictly_nondecreasing_by_began() {
        let tokens = vec![
            tok(TokenType::OpeningDouble, 0, 1),
            tok(TokenType::AmbiguousLeading, 3, 4),
            tok(TokenType::ClosingSingle, 7, 8),
            tok(TokenType::ClosingDouble, 10, 11),
        ];
        let resolved = resolve_tokens(tokens);
        for pair in resolved.windows(2) {
            assert!(pair[0].began() <= pair[1].began());
        }
    }

    #[test]
    fn dangling_opening_with_no_closer_is_legitimate() {
        let tokens = vec![tok(TokenType::OpeningDouble, 0, 1)];
        let resolved = resolve_tokens(tokens);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].kind, TokenType::OpeningDouble);
    }

    #[test]
    fn invariant_violation_on_double_close_is_reported_not_panicking() {
        let tokens = vec![
            tok(TokenType::OpeningSingle, 0, 1),
            tok(TokenType::ClosingSingle, 2, 3),
            tok(TokenType::ClosingSingle, 4, 5),
        ];
        // Building must not panic even though the second close is spurious
        // (it closes the root, which has no opening — still handled).
        let _ = resolve_tokens(tokens);
    }
}
