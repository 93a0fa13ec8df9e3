//! require-description: a `<desc>` gives assistive technology a longer
//! description than the title alone.

use crate::declare_rule;
use crate::dom::Document;
use crate::rules::{Rule, RuleMetadata, RuleResult};

declare_rule!(
    RequireDescription,
    key = Description,
    name = "require-description",
    description = "Require a <desc> element as a direct child of the document root"
);

impl Rule for RequireDescription {
    fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }

    fn check(&self, doc: &Document) -> RuleResult {
        let found = doc
            .children(doc.root())
            .iter()
            .any(|&child| doc.name(child) == "desc");

        if found {
            RuleResult::pass("Description element found")
        } else {
            RuleResult::fail("No description element found")
        }
    }
}
