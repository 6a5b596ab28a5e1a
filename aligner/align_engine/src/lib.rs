//! Alignment Engine
//!
//! Computes column-alignment edits for grouped syntactic constructs so that
//! a chosen anchor point (a value, a colon, an equals sign) starts at the
//! same column across all members of a group.
//!
//! # Architecture
//!
//! Two strictly layered components:
//!
//! 1. **Spacer generator** ([`spacer::generate`]): pure
//!    width-to-padding-text mapping, optionally wrapped as a delimited
//!    comment
//! 2. **Engine** ([`engine::evaluate`]): grouping, aligned detection,
//!    reference selection, deficit computation, insertion emission
//!
//! The host supplies already-projected [`align_ir::Item`] records for one
//! scope and applies the emitted insertions as text edits. Parsing,
//! position computation, and tree traversal all stay on the host side.
//!
//! # Modules
//!
//! - [`spacer`]: padding text generation
//! - [`config`]: fill/padding/computed-key configuration and validation
//! - [`engine`]: the core algorithm
//! - [`rules`]: the three shipped rule policies (enums, objects, types)

pub mod config;
pub mod engine;
pub mod rules;
pub mod spacer;

pub use config::{AlignConfig, ComputedKeyPolicy, ConfigError, Padding, DEFAULT_FILL};
pub use engine::{evaluate, ScopeReport};
pub use rules::{EnumOptions, ObjectOptions, RulePolicy, TypeOptions};
pub use spacer::{COMMENT_CLOSE, COMMENT_OPEN};
