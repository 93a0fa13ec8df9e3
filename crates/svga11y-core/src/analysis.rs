//! Analysis engine tying the rule catalog to a configuration.
//!
//! Builds the default registry in catalog order and runs it against parsed
//! documents.

use crate::config::Config;
use crate::dom::Document;
use crate::rules::checks::{
    AnimatedContent, AriaLabels, ColorContrast, FocusableElements, ImageText,
    LanguageDeclaration, RequireDescription, RequireTitle, ResponsiveScaling, RoleAttributes,
    TextAlternatives, UniqueIds,
};
use crate::rules::{ResultSet, RuleRegistry};

pub struct AnalysisEngine {
    registry: RuleRegistry,
}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self {
            registry: create_default_registry(),
        }
    }

    pub fn with_config(config: &Config) -> Self {
        let mut registry = create_default_registry();
        registry.configure(&config.rules);
        Self { registry }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Evaluates every enabled rule against the document.
    pub fn analyze(&self, doc: &Document) -> ResultSet {
        tracing::debug!(elements = doc.len(), "analyzing document");
        self.registry.run_all(doc)
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Registration order is the catalog order reports iterate in.
fn create_default_registry() -> RuleRegistry {
    let mut registry = RuleRegistry::new();

    registry.register(Box::new(RequireTitle::new()));
    registry.register(Box::new(RequireDescription::new()));
    registry.register(Box::new(AriaLabels::new()));
    registry.register(Box::new(ColorContrast::new()));
    registry.register(Box::new(RoleAttributes::new()));
    registry.register(Box::new(TextAlternatives::new()));
    registry.register(Box::new(FocusableElements::new()));
    registry.register(Box::new(AnimatedContent::new()));
    registry.register(Box::new(ImageText::new()));
    registry.register(Box::new(LanguageDeclaration::new()));
    registry.register(Box::new(ResponsiveScaling::new()));
    registry.register(Box::new(UniqueIds::new()));

    registry
}
