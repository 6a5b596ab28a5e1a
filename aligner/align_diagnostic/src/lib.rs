//! Diagnostic and edit reporting for the alignment engine.
//!
//! The engine's entire output surface lives here:
//! - [`Diagnostic`]: one report per misaligned scope, with rule-specific
//!   message text
//! - [`RuleCode`]: stable codes for searchability
//! - [`Insertion`] / [`InsertionSet`]: positioned text insertions and a
//!   helper for applying them to a line
//!
//! Edits in this domain are insert-only. Alignment never replaces or
//! deletes source text, so the edit type cannot represent either.

mod diagnostic;
mod edit;
mod rule_code;

pub use diagnostic::{Diagnostic, Severity};
pub use edit::{Insertion, InsertionSet, PositionConflict};
pub use rule_code::RuleCode;
