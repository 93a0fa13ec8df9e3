//! text-alternatives: the top-level svg needs an accessible name via
//! aria-label or aria-labelledby.

use super::top_level_svg;
use crate::declare_rule;
use crate::dom::Document;
use crate::rules::{Rule, RuleMetadata, RuleResult};

declare_rule!(
    TextAlternatives,
    key = TextAlternatives,
    name = "text-alternatives",
    description = "Require aria-label or aria-labelledby on the top-level svg element"
);

impl Rule for TextAlternatives {
    fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }

    fn check(&self, doc: &Document) -> RuleResult {
        let svg = top_level_svg(doc);
        let labeled = ["aria-label", "aria-labelledby"]
            .iter()
            .any(|attr| doc.attribute(svg, attr).is_some_and(|v| !v.is_empty()));

        if labeled {
            RuleResult::pass("SVG element has a text alternative")
        } else {
            RuleResult::fail("SVG element is missing aria-label or aria-labelledby")
        }
    }
}
