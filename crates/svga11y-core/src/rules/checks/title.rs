//! require-title: screen readers announce the `<title>` as the accessible
//! name of the graphic.

use crate::declare_rule;
use crate::dom::Document;
use crate::rules::{Rule, RuleMetadata, RuleResult};

declare_rule!(
    RequireTitle,
    key = Title,
    name = "require-title",
    description = "Require a <title> element as a direct child of the document root"
);

impl Rule for RequireTitle {
    fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }

    fn check(&self, doc: &Document) -> RuleResult {
        let found = doc
            .children(doc.root())
            .iter()
            .any(|&child| doc.name(child) == "title");

        if found {
            RuleResult::pass("Title element found")
        } else {
            RuleResult::fail("No title element found")
        }
    }
}
