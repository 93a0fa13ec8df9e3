//! image-text: `<textPath>` bakes text into a path shape, hiding it from
//! assistive technology.

use crate::declare_rule;
use crate::dom::Document;
use crate::rules::{Rule, RuleMetadata, RuleResult};

declare_rule!(
    ImageText,
    key = ImageText,
    name = "image-text",
    description = "Disallow textPath elements"
);

impl Rule for ImageText {
    fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }

    fn check(&self, doc: &Document) -> RuleResult {
        let count = doc.find_by_name(doc.root(), "textPath").len();

        if count == 0 {
            RuleResult::pass("No textPath elements found")
        } else {
            RuleResult::fail(format!("Found {count} textPath elements"))
        }
    }
}
