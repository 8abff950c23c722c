//! Programmer-error invariant violations (spec §7 item 3) — not reachable
//! from well-formed emitter output, so callers are expected to log and
//! continue rather than unwind.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolverError {
    #[error("node already has a closing token assigned")]
    ClosingAlreadyAssigned,

    #[error("closing token at byte {closing} does not follow its opening at byte {opening}")]
    ClosingPrecedesOpening { opening: usize, closing: usize },
}
