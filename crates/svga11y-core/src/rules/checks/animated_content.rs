//! animated-content: animations must be user-controllable, signalled by an
//! indefinite begin or end.

use crate::declare_rule;
use crate::dom::Document;
use crate::rules::{Rule, RuleMetadata, RuleResult};

const ANIMATION_NAMES: &[&str] = &["animate", "animateMotion", "animateTransform"];

declare_rule!(
    AnimatedContent,
    key = AnimatedContent,
    name = "animated-content",
    description = "Require animations to declare begin or end as indefinite"
);

impl Rule for AnimatedContent {
    fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }

    fn check(&self, doc: &Document) -> RuleResult {
        let animations = doc.find_by_names(doc.root(), ANIMATION_NAMES);
        let total = animations.len();
        let controllable = animations
            .iter()
            .filter(|&&id| {
                doc.attribute(id, "begin") == Some("indefinite")
                    || doc.attribute(id, "end") == Some("indefinite")
            })
            .count();

        RuleResult {
            passed: controllable == total,
            message: format!("{controllable}/{total} animations are controllable"),
        }
    }
}
