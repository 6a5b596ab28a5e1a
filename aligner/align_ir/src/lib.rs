//! Alignment IR - shared data model for the alignment engine
//!
//! This crate contains the records exchanged between a host linter and the
//! alignment engine:
//! - [`Span`] for column positions within a line
//! - [`Item`] and [`ItemFlags`] for one alignable member
//! - [`ScopeKind`] for the syntactic container being aligned
//!
//! # Design Philosophy
//!
//! The host owns the syntax tree. Before the engine runs, the host projects
//! each candidate member down to an [`Item`]: a left span (key, enum member
//! id, or property name), an optional right span (value, initializer, or
//! type annotation), and a small set of flags. Node-kind discrimination
//! happens once, on the host side, by constructing a [`ScopeKind`] - the
//! engine never sees heterogeneous syntax nodes.
//!
//! Items are immutable and constructed fresh per evaluation. A member whose
//! key position could not be resolved cannot be represented at all; a member
//! whose right span is unresolved carries `None` and is skipped by the
//! engine. Nothing is ever coerced to column 0.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod item;
mod scope;
mod span;

pub use item::{Item, ItemFlags};
pub use scope::ScopeKind;
pub use span::Span;
