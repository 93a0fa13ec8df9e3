//! role-attributes: `role="img"` tells assistive technology to treat the
//! graphic as a single image.

use super::top_level_svg;
use crate::declare_rule;
use crate::dom::Document;
use crate::rules::{Rule, RuleMetadata, RuleResult};

declare_rule!(
    RoleAttributes,
    key = RoleAttributes,
    name = "role-attributes",
    description = "Require role=\"img\" on the top-level svg element"
);

impl Rule for RoleAttributes {
    fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }

    fn check(&self, doc: &Document) -> RuleResult {
        let svg = top_level_svg(doc);

        if doc.attribute(svg, "role") == Some("img") {
            RuleResult::pass("SVG element has role=\"img\"")
        } else {
            RuleResult::fail("SVG element is missing role=\"img\" attribute")
        }
    }
}
