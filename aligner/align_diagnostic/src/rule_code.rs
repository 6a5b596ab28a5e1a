//! Rule codes.

use std::fmt;

/// Stable codes for the alignment rules.
///
/// Format: A#### - one code per rule, so hosts can route suppressions and
/// documentation links without matching on message text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleCode {
    /// Enum members are not aligned
    A0001,
    /// Object-literal values are not aligned
    A0002,
    /// Interface/type-literal members are not aligned
    A0003,
}

impl RuleCode {
    /// The code as a string.
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleCode::A0001 => "A0001",
            RuleCode::A0002 => "A0002",
            RuleCode::A0003 => "A0003",
        }
    }

    /// The human-facing rule name, as a host configuration surface would
    /// spell it.
    pub const fn rule_name(self) -> &'static str {
        match self {
            RuleCode::A0001 => "align-enums",
            RuleCode::A0002 => "align-objects",
            RuleCode::A0003 => "align-types",
        }
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
