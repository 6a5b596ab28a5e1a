//! Diagnostic records.

use std::fmt;

use align_ir::ScopeKind;

use crate::RuleCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Error,
    /// Layout lints default to warnings.
    #[default]
    Warning,
    Note,
    Help,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
            Severity::Help => write!(f, "help"),
        }
    }
}

/// One report for one misaligned scope.
///
/// A scope gets at most one diagnostic per evaluation, no matter how many of
/// its groups are misaligned. The host attaches its own source location when
/// registering the report; the engine only knows columns.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    pub code: RuleCode,
    pub severity: Severity,
    pub scope: ScopeKind,
    pub message: String,
}

impl Diagnostic {
    /// Create a diagnostic with an explicit message.
    pub fn new(code: RuleCode, scope: ScopeKind, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            severity: Severity::default(),
            scope,
            message: message.into(),
        }
    }

    /// Override the severity.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// The standard "not aligned" report for a scope kind.
    pub fn not_aligned(code: RuleCode, scope: ScopeKind) -> Self {
        let message = match scope {
            ScopeKind::Object => "Values are not aligned in the object expression.",
            ScopeKind::Enum => "Enum members are not aligned in the declaration.",
            ScopeKind::Interface => "Interface values are not aligned in the body.",
            ScopeKind::TypeLiteral => "Type literal values are not aligned in the body.",
        };
        Diagnostic::new(code, scope, message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)
    }
}
