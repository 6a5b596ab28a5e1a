//! Scope kinds.

use std::fmt;

/// The syntactic container whose members are being aligned.
///
/// Decided once by the host before items reach the engine; the engine never
/// inspects raw syntax nodes. Replaces the runtime type-tag checks a
/// tree-walking host would otherwise thread through the algorithm.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum ScopeKind {
    /// An object-literal expression.
    Object,
    /// An enum declaration body.
    Enum,
    /// An interface body.
    Interface,
    /// A type-literal body.
    TypeLiteral,
}

impl ScopeKind {
    /// Check whether this scope holds type members (interface/type literal).
    #[inline]
    pub const fn is_type_scope(self) -> bool {
        matches!(self, ScopeKind::Interface | ScopeKind::TypeLiteral)
    }
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeKind::Object => write!(f, "object expression"),
            ScopeKind::Enum => write!(f, "enum declaration"),
            ScopeKind::Interface => write!(f, "interface"),
            ScopeKind::TypeLiteral => write!(f, "type literal"),
        }
    }
}
