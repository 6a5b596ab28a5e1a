//! Alignable item records.
//!
//! An [`Item`] is the engine-facing projection of one member of a scope: the
//! column span of its key, the column span of its value (if any), and flags
//! describing source details that shift where padding goes.

use bitflags::bitflags;

use crate::Span;

bitflags! {
    /// Source-shape details of an item that affect padding placement.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ItemFlags: u8 {
        /// The left span is a computed/bracketed key (`["key"]`).
        const COMPUTED = 1 << 0;
        /// The left span is followed by a one-character optional marker
        /// (`key?`) that is not counted in `left.end`.
        const OPTIONAL = 1 << 1;
        /// The right span is a function body with no separating punctuation
        /// before it (`method() {}` has no colon); padding must inject a
        /// separator.
        const NO_SEPARATOR = 1 << 2;
    }
}

/// One alignable unit within a scope.
///
/// Constructed by the host from an already-discriminated syntax node and
/// consumed immutably by the engine. A member without a resolved key
/// position cannot be represented; a member without a resolved value
/// position carries `right: None` and is excluded from grouping.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Item {
    /// Key, enum member id, or property name.
    pub left: Span,
    /// Value, initializer, or type annotation. `None` when the member has
    /// nothing to align against.
    pub right: Option<Span>,
    /// Source-shape flags.
    pub flags: ItemFlags,
}

impl Item {
    /// Create an item with a resolved right span.
    pub const fn new(left: Span, right: Span) -> Self {
        Item {
            left,
            right: Some(right),
            flags: ItemFlags::empty(),
        }
    }

    /// Create an item whose right span could not be resolved.
    pub const fn without_right(left: Span) -> Self {
        Item {
            left,
            right: None,
            flags: ItemFlags::empty(),
        }
    }

    /// Mark the key as computed (`["key"]`).
    #[must_use]
    pub const fn computed(mut self) -> Self {
        self.flags = self.flags.union(ItemFlags::COMPUTED);
        self
    }

    /// Mark the key as carrying an optional marker (`key?`).
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.flags = self.flags.union(ItemFlags::OPTIONAL);
        self
    }

    /// Mark the value as a function body with no separator before it.
    #[must_use]
    pub const fn without_separator(mut self) -> Self {
        self.flags = self.flags.union(ItemFlags::NO_SEPARATOR);
        self
    }

    /// Check whether the key is computed.
    #[inline]
    pub const fn is_computed(&self) -> bool {
        self.flags.contains(ItemFlags::COMPUTED)
    }

    /// Check whether the key carries an optional marker.
    #[inline]
    pub const fn is_optional(&self) -> bool {
        self.flags.contains(ItemFlags::OPTIONAL)
    }

    /// Check whether the value needs an injected separator.
    #[inline]
    pub const fn needs_separator(&self) -> bool {
        self.flags.contains(ItemFlags::NO_SEPARATOR)
    }
}
