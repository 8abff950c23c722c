//! Pass A (tree-local rules) and Pass B (the global laggard-prefix rule)
//! from spec §4.5.

use crate::tree::{Arena, Stem};
use curl_token::TokenType;

/// Pass A: applied to every node independently — each node's outcome
/// depends only on its own opening/closing and direct leaf children, so
/// unlike a structural tree walk, the order nodes are visited in doesn't
/// change the result. We walk the arena in creation order for simplicity.
pub fn pass_a(arena: &mut Arena) {
    for node in arena.nodes.iter_mut() {
        let has_open_single = node.has_open_single();
        let has_close_single = node.has_close_single();
        let balanced = node.balanced();

        let mut leading: Vec<usize> = Vec::new();
        let mut lagging: Vec<usize> = Vec::new();
        let mut unknown: Vec<usize> = Vec::new();
        for (idx, stem) in node.children.iter().enumerate() {
            if let Stem::Leaf(tok) = stem {
                match tok.kind {
                    TokenType::AmbiguousLeading => leading.push(idx),
                    TokenType::AmbiguousLagging => lagging.push(idx),
                    TokenType::Ambiguous => unknown.push(idx),
                    _ => {}
                }
            }
        }

        let set = |node: &mut crate::tree::Node, idx: usize, kind: TokenType| {
            if let Stem::Leaf(tok) = &mut node.children[idx] {
                tok.kind = kind;
            }
        };

        if has_open_single && !has_close_single && unknown.is_empty() && leading.is_empty() && lagging.len() == 1 {
            set(node, lagging[0], TokenType::ClosingSingle);
        } else if has_open_single && !has_close_single && unknown.len() == 1 && lagging.is_empty() {
            set(node, unknown[0], TokenType::ClosingSingle);
        } else if !has_open_single && has_close_single && unknown.is_empty() && leading.len() == 1 && lagging.is_empty() {
            set(node, leading[0], TokenType::OpeningSingle);
        } else if (!has_open_single && !has_close_single) || balanced {
            if unknown.is_empty() && !leading.is_empty() && lagging.is_empty() {
                for idx in leading {
                    set(node, idx, TokenType::Apostrophe);
                }
            } else if unknown.is_empty() && leading.is_empty() && !lagging.is_empty() {
                for idx in lagging {
                    set(node, idx, TokenType::Apostrophe);
                }
            }
        }
    }
}

/// Pass B: flatten every ambiguous leading/lagging token tree-wide in
/// offset order, then scan forward turning each lagging token into an
/// apostrophe until the first leading token is reached (a trailing
/// apostrophe cannot logically close a quote that was never opened).
pub fn pass_b(arena: &mut Arena) {
    let mut refs: Vec<(usize, usize, usize)> = Vec::new(); // (began, node_idx, child_idx)
    for (ni, node) in arena.nodes.iter().enumerate() {
        for (ci, stem) in node.children.iter().enumerate() {
            if let Stem::Leaf(tok) = stem {
                if matches!(tok.kind, TokenType::AmbiguousLeading | TokenType::AmbiguousLagging) {
                    refs.push((tok.began(), ni, ci));
                }
            }
        }
    }
    refs.sort_by_key(|r| r.0);

    for (_, ni, ci) in refs {
        let kind = match &arena.nodes[ni].children[ci] {
            Stem::Leaf(tok) => tok.kind,
            Stem::Child(_) => unreachable!("refs only ever points at leaves"),
        };
        match kind {
            TokenType::AmbiguousLeading => break,
            TokenType::AmbiguousLagging => {
                if let Stem::Leaf(tok) = &mut arena.nodes[ni].children[ci] {
                    tok.kind = TokenType::Apostrophe;
                }
            }
            _ => {}
        }
    }
}
