//! aria-labels: at least one element should name itself for assistive
//! technology.

use crate::declare_rule;
use crate::dom::Document;
use crate::rules::{Rule, RuleMetadata, RuleResult};

declare_rule!(
    AriaLabels,
    key = AriaLabels,
    name = "aria-labels",
    description = "Require at least one element with a non-empty aria-label"
);

impl Rule for AriaLabels {
    fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }

    fn check(&self, doc: &Document) -> RuleResult {
        let count = doc.find_with_attribute(doc.root(), "aria-label").len();
        let message = format!("Found {count} elements with aria-label");

        if count > 0 {
            RuleResult::pass(message)
        } else {
            RuleResult::fail(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_svg;

    fn run(svg: &str) -> RuleResult {
        AriaLabels::new().check(&parse_svg(svg).unwrap())
    }

    #[test]
    fn counts_labeled_elements_anywhere_in_tree() {
        let result = run(
            r#"<svg aria-label="chart"><g><circle aria-label="point"/></g></svg>"#,
        );

        assert!(result.passed);
        assert_eq!(result.message, "Found 2 elements with aria-label");
    }

    #[test]
    fn fails_with_zero_labels() {
        let result = run("<svg><rect/></svg>");

        assert!(!result.passed);
        assert_eq!(result.message, "Found 0 elements with aria-label");
    }

    #[test]
    fn empty_aria_label_does_not_count() {
        let result = run(r#"<svg><rect aria-label=""/></svg>"#);

        assert!(!result.passed);
    }
}
