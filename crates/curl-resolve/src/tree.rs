//! The arena-based nesting tree (spec §9's design note): a flat `Vec<Node>`
//! indexed by integer handles rather than the source's cyclic parent
//! pointers. Parent links are read-only back-references (plain indices, not
//! ownership), so there is no possibility of a reference cycle.

use crate::error::ResolverError;
use curl_token::Token;

/// An index into a [`crate::Resolver`]'s node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// A child of a node: either a nested quotation (another tree node) or a
/// non-quote-structural token attached as a leaf, in insertion order.
#[derive(Debug, Clone, Copy)]
pub enum Stem {
    Child(NodeId),
    Leaf(Token),
}

/// One level of quote nesting. `opening`/`closing` are `None` for the
/// arena's synthetic root (no real opening/closing mark precedes the whole
/// document) and for a node whose closing mark hasn't been seen yet
/// (a *dangling* node — legitimate input, e.g. an unterminated quote).
#[derive(Debug, Clone)]
pub struct Node {
    pub opening: Option<Token>,
    pub closing: Option<Token>,
    pub children: Vec<Stem>,
    pub parent: Option<NodeId>,
}

impl Node {
    fn root() -> Self {
        Self { opening: None, closing: None, children: Vec::new(), parent: None }
    }

    /// Assigns this node's closing token. Per spec §4.5, `closing` is
    /// assigned at most once and must follow `opening` in offset order;
    /// both are invariant violations (spec §7 item 3), never ordinary
    /// control flow, so the caller logs and moves on rather than unwinding.
    pub(crate) fn try_close(&mut self, token: Token) -> Result<(), ResolverError> {
        if self.closing.is_some() {
            return Err(ResolverError::ClosingAlreadyAssigned);
        }
        if let Some(opening) = self.opening {
            if token.began() <= opening.began() {
                return Err(ResolverError::ClosingPrecedesOpening { opening: opening.began(), closing: token.began() });
            }
        }
        self.closing = Some(token);
        Ok(())
    }

    pub fn has_open_single(&self) -> bool {
        self.opening.map(|t| t.kind.is_opening_single()).unwrap_or(false)
    }

    pub fn has_open_double(&self) -> bool {
        self.opening.map(|t| t.kind.is_opening_double()).unwrap_or(false)
    }

    pub fn has_close_single(&self) -> bool {
        self.closing.map(|t| t.kind.is_closing_single()).unwrap_or(false)
    }

    pub fn has_close_double(&self) -> bool {
        self.closing.map(|t| t.kind.is_closing_double()).unwrap_or(false)
    }

    /// A node is balanced iff its opening and closing marks are the same
    /// kind (both single, or both double).
    pub fn balanced(&self) -> bool {
        (self.has_open_double() && self.has_close_double()) || (self.has_open_single() && self.has_close_single())
    }
}

/// Owns the whole arena for one conversion. Index 0 is always the
/// synthetic document root.
#[derive(Debug, Clone)]
pub struct Arena {
    pub nodes: Vec<Node>,
}

impl Arena {
    pub fn new() -> Self {
        Self { nodes: vec![Node::root()] }
    }

    pub const ROOT: NodeId = NodeId(0);

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn push_child(&mut self, parent: NodeId, opening: Token) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { opening: Some(opening), closing: None, children: Vec::new(), parent: Some(parent) });
        self.nodes[parent.0].children.push(Stem::Child(id));
        id
    }

    pub fn parent_of(&self, id: NodeId) -> NodeId {
        self.nodes[id.0].parent.unwrap_or(Self::ROOT)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}
