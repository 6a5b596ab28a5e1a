//! Rule policies.
//!
//! Three shipped rules, one algorithm. Each rule is a policy value over the
//! engine rather than a copy of the grouping/deficit code:
//!
//! 1. **`align-enums`** (`A0001`): enum member initializers, raw spaces
//! 2. **`align-objects`** (`A0002`): object-literal values, delimited
//!    comments, configurable computed-key placement
//! 3. **`align-types`** (`A0003`): interface and type-literal members,
//!    delimited comments, either kind can be switched off
//!
//! Host-side concerns stay host-side: deciding which syntax nodes form a
//! scope, skipping scopes by parent kind, and registering the diagnostic.
//! A policy only gates on [`ScopeKind`] and forwards to the engine.

use align_diagnostic::RuleCode;
use align_ir::{Item, ScopeKind};

use crate::config::{parse_fill, AlignConfig, ComputedKeyPolicy, ConfigError, Padding};
use crate::engine::{evaluate, ScopeReport};

/// A configured rule: code, engine configuration, and the scope kinds it
/// answers for.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct RulePolicy {
    code: RuleCode,
    config: AlignConfig,
    interfaces_enabled: bool,
    type_literals_enabled: bool,
}

impl RulePolicy {
    /// The enum-member alignment rule.
    pub fn enums() -> Self {
        RulePolicy {
            code: RuleCode::A0001,
            config: AlignConfig::default().with_padding(Padding::Spaces),
            interfaces_enabled: true,
            type_literals_enabled: true,
        }
    }

    /// The object-literal alignment rule.
    pub fn objects() -> Self {
        RulePolicy {
            code: RuleCode::A0002,
            config: AlignConfig::default(),
            interfaces_enabled: true,
            type_literals_enabled: true,
        }
    }

    /// The interface/type-literal alignment rule.
    pub fn types() -> Self {
        RulePolicy {
            code: RuleCode::A0003,
            config: AlignConfig::default(),
            interfaces_enabled: true,
            type_literals_enabled: true,
        }
    }

    /// The rule's code.
    pub const fn code(&self) -> RuleCode {
        self.code
    }

    /// The engine configuration this rule evaluates with.
    pub const fn config(&self) -> &AlignConfig {
        &self.config
    }

    /// Check whether this rule answers for the given scope kind.
    fn handles(&self, scope: ScopeKind) -> bool {
        match self.code {
            RuleCode::A0001 => matches!(scope, ScopeKind::Enum),
            RuleCode::A0002 => matches!(scope, ScopeKind::Object),
            RuleCode::A0003 => match scope {
                ScopeKind::Interface => self.interfaces_enabled,
                ScopeKind::TypeLiteral => self.type_literals_enabled,
                ScopeKind::Object | ScopeKind::Enum => false,
            },
        }
    }

    /// Evaluate one scope under this rule.
    ///
    /// Scopes of a kind the rule does not handle (or has disabled) are
    /// silent no-ops, like degenerate scopes.
    pub fn check(&self, scope: ScopeKind, items: &[Item]) -> Option<ScopeReport> {
        if !self.handles(scope) {
            return None;
        }
        evaluate(scope, items, self.code, &self.config)
    }
}

/// Host options for `align-enums`.
#[derive(Clone, Debug, Default)]
pub struct EnumOptions {
    /// Fill character as the host configuration spells it.
    pub spacing_character: Option<String>,
}

impl EnumOptions {
    /// Validate into a policy.
    pub fn into_policy(self) -> Result<RulePolicy, ConfigError> {
        let mut policy = RulePolicy::enums();
        if let Some(value) = self.spacing_character {
            policy.config = policy.config.with_fill(parse_fill(&value)?);
        }
        Ok(policy)
    }
}

/// Host options for `align-objects`.
#[derive(Clone, Debug, Default)]
pub struct ObjectOptions {
    /// Fill character as the host configuration spells it.
    pub spacing_character: Option<String>,
    /// Place the padding comment after the closing bracket of computed keys
    /// instead of inside the brackets.
    pub comment_outside_computed_key: bool,
}

impl ObjectOptions {
    /// Validate into a policy.
    pub fn into_policy(self) -> Result<RulePolicy, ConfigError> {
        let mut policy = RulePolicy::objects();
        if let Some(value) = self.spacing_character {
            policy.config = policy.config.with_fill(parse_fill(&value)?);
        }
        if self.comment_outside_computed_key {
            policy.config = policy
                .config
                .with_computed_key(ComputedKeyPolicy::OutsideBrackets);
        }
        Ok(policy)
    }
}

/// Host options for `align-types`.
#[derive(Clone, Debug, Default)]
pub struct TypeOptions {
    /// Fill character as the host configuration spells it.
    pub spacing_character: Option<String>,
    /// Skip interface bodies.
    pub disable_interfaces: bool,
    /// Skip type-literal bodies.
    pub disable_type_literals: bool,
}

impl TypeOptions {
    /// Validate into a policy.
    pub fn into_policy(self) -> Result<RulePolicy, ConfigError> {
        let mut policy = RulePolicy::types();
        if let Some(value) = self.spacing_character {
            policy.config = policy.config.with_fill(parse_fill(&value)?);
        }
        policy.interfaces_enabled = !self.disable_interfaces;
        policy.type_literals_enabled = !self.disable_type_literals;
        Ok(policy)
    }
}
