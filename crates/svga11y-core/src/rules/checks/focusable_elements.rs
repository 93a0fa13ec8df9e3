//! focusable-elements: anything with a mouse or key handler must be
//! reachable from the keyboard.

use crate::declare_rule;
use crate::dom::Document;
use crate::rules::{Rule, RuleMetadata, RuleResult};

const INTERACTIVE_ATTRIBUTES: &[&str] = &["onclick", "onkeypress", "onkeydown", "onkeyup"];
const FOCUSABLE_NAMES: &[&str] = &["a", "button"];

declare_rule!(
    FocusableElements,
    key = FocusableElements,
    name = "focusable-elements",
    description = "Require every interactive element to be keyboard focusable"
);

impl Rule for FocusableElements {
    fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }

    fn check(&self, doc: &Document) -> RuleResult {
        let interactive = doc.find_with_any_attribute(doc.root(), INTERACTIVE_ATTRIBUTES);
        let total = interactive.len();
        let focusable = interactive
            .iter()
            .filter(|&&id| {
                doc.has_attribute(id, "tabindex") || FOCUSABLE_NAMES.contains(&doc.name(id))
            })
            .count();

        RuleResult {
            passed: focusable == total,
            message: format!("{focusable}/{total} interactive elements are focusable"),
        }
    }
}
