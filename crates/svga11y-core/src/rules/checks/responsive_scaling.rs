//! responsive-scaling: a viewBox lets the graphic scale with user zoom and
//! viewport size.

use super::top_level_svg;
use crate::declare_rule;
use crate::dom::Document;
use crate::rules::{Rule, RuleMetadata, RuleResult};

declare_rule!(
    ResponsiveScaling,
    key = ResponsiveScaling,
    name = "responsive-scaling",
    description = "Require a viewBox attribute on the top-level svg element"
);

impl Rule for ResponsiveScaling {
    fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }

    fn check(&self, doc: &Document) -> RuleResult {
        let svg = top_level_svg(doc);

        if doc.has_attribute(svg, "viewBox") {
            RuleResult::pass("viewBox attribute found")
        } else {
            RuleResult::fail("No viewBox attribute found")
        }
    }
}
