//! Non-fatal diagnostics surfaced by the skip filter.
//!
//! The lexer itself never fails — lexical recognition of prose cannot get
//! stuck. Only the XML skip filter can observe malformed structure, and per
//! spec it degrades by yielding control rather than raising; these variants
//! exist so a caller (or the CLI's `-x` diagnostics) can report what was
//! seen, not to abort a conversion.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterNotice {
    #[error("unterminated tag starting at byte {position}")]
    UnterminatedTag { position: usize },

    #[error("unterminated untouchable element <{name}> starting at byte {position}")]
    UnterminatedElement { name: String, position: usize },
}
