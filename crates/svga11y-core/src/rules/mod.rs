//! Rule system for SVG accessibility analysis.
//!
//! Provides the rule catalog, the trait every check implements, and the
//! registry that selects which checks run under a given configuration.

pub mod checks;

use std::collections::HashSet;

use crate::config::RulesConfig;
use crate::dom::Document;

/// Closed set of rule identifiers, in catalog order.
///
/// The variant's string form is the key under which its result appears in
/// result sets and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKey {
    Title,
    Description,
    AriaLabels,
    Contrast,
    RoleAttributes,
    TextAlternatives,
    FocusableElements,
    AnimatedContent,
    ImageText,
    LanguageDeclaration,
    ResponsiveScaling,
    UniqueIds,
}

impl RuleKey {
    /// Catalog order; registries register and reports iterate in this order.
    pub const ALL: [RuleKey; 12] = [
        RuleKey::Title,
        RuleKey::Description,
        RuleKey::AriaLabels,
        RuleKey::Contrast,
        RuleKey::RoleAttributes,
        RuleKey::TextAlternatives,
        RuleKey::FocusableElements,
        RuleKey::AnimatedContent,
        RuleKey::ImageText,
        RuleKey::LanguageDeclaration,
        RuleKey::ResponsiveScaling,
        RuleKey::UniqueIds,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleKey::Title => "title",
            RuleKey::Description => "description",
            RuleKey::AriaLabels => "ariaLabels",
            RuleKey::Contrast => "contrast",
            RuleKey::RoleAttributes => "roleAttributes",
            RuleKey::TextAlternatives => "textAlternatives",
            RuleKey::FocusableElements => "focusableElements",
            RuleKey::AnimatedContent => "animatedContent",
            RuleKey::ImageText => "imageText",
            RuleKey::LanguageDeclaration => "languageDeclaration",
            RuleKey::ResponsiveScaling => "responsiveScaling",
            RuleKey::UniqueIds => "uniqueIDs",
        }
    }

    pub fn parse(value: &str) -> Option<RuleKey> {
        RuleKey::ALL.iter().copied().find(|k| k.as_str() == value)
    }
}

impl std::fmt::Display for RuleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict of one rule for one document. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleResult {
    pub passed: bool,
    pub message: String,
}

impl RuleResult {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }
}

/// Keyed rule results for one document, in evaluation order.
///
/// A key that is absent was not evaluated, which is distinct from a
/// present-but-failed entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    entries: Vec<(RuleKey, RuleResult)>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: RuleKey, result: RuleResult) {
        self.entries.push((key, result));
    }

    pub fn get(&self, key: RuleKey) -> Option<&RuleResult> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, r)| r)
    }

    pub fn contains(&self, key: RuleKey) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RuleKey, &RuleResult)> {
        self.entries.iter().map(|(k, r)| (*k, r))
    }

    pub fn keys(&self) -> impl Iterator<Item = RuleKey> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn passed_count(&self) -> usize {
        self.entries.iter().filter(|(_, r)| r.passed).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMetadata {
    pub key: RuleKey,
    pub name: &'static str,
    pub description: &'static str,
}

/// One accessibility predicate over a whole document tree.
///
/// Rules are pure functions of the tree: no rule mutates the document,
/// depends on another rule's result, or errors on a well-formed tree.
pub trait Rule: Send + Sync {
    fn metadata(&self) -> &RuleMetadata;
    fn check(&self, doc: &Document) -> RuleResult;
}

/// Holds the rule catalog and decides which rules run.
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
    disabled: HashSet<RuleKey>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            disabled: HashSet::new(),
        }
    }

    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Applies the default-enabled policy: only an explicit `false` in the
    /// configuration disables a rule.
    pub fn configure(&mut self, config: &RulesConfig) {
        self.disabled.clear();
        for key in RuleKey::ALL {
            if !config.is_enabled(key) {
                self.disabled.insert(key);
            }
        }
    }

    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    pub fn get_rule(&self, key: RuleKey) -> Option<&dyn Rule> {
        self.rules
            .iter()
            .find(|r| r.metadata().key == key)
            .map(|r| r.as_ref())
    }

    pub fn is_rule_enabled(&self, key: RuleKey) -> bool {
        !self.disabled.contains(&key)
    }

    /// Runs every enabled rule against the document.
    ///
    /// The result set contains exactly one entry per enabled rule, in
    /// registration order; a failing rule never stops the others.
    pub fn run_all(&self, doc: &Document) -> ResultSet {
        let mut results = ResultSet::new();
        for rule in &self.rules {
            let key = rule.metadata().key;
            if self.disabled.contains(&key) {
                continue;
            }
            let result = rule.check(doc);
            tracing::debug!(rule = %key, passed = result.passed, "rule evaluated");
            results.insert(key, result);
        }
        results
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[macro_export]
macro_rules! declare_rule {
    (
        $name:ident,
        key = $key:ident,
        name = $rule_name:literal,
        description = $desc:literal
    ) => {
        pub struct $name {
            metadata: $crate::rules::RuleMetadata,
        }

        impl $name {
            pub fn new() -> Self {
                Self {
                    metadata: $crate::rules::RuleMetadata {
                        key: $crate::rules::RuleKey::$key,
                        name: $rule_name,
                        description: $desc,
                    },
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}
