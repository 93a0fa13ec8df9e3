//! language-declaration: text inside the graphic needs an `xml:lang` so
//! screen readers pick the right voice.

use crate::declare_rule;
use crate::dom::Document;
use crate::rules::{Rule, RuleMetadata, RuleResult};

declare_rule!(
    LanguageDeclaration,
    key = LanguageDeclaration,
    name = "language-declaration",
    description = "Require an xml:lang attribute on a direct child of the document root"
);

impl Rule for LanguageDeclaration {
    fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }

    fn check(&self, doc: &Document) -> RuleResult {
        let found = doc
            .children(doc.root())
            .iter()
            .any(|&child| doc.has_attribute(child, "xml:lang"));

        if found {
            RuleResult::pass("Language declaration found")
        } else {
            RuleResult::fail("No xml:lang attribute found")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_svg;

    fn run(svg: &str) -> RuleResult {
        LanguageDeclaration::new().check(&parse_svg(svg).unwrap())
    }

    #[test]
    fn passes_when_a_direct_child_declares_language() {
        let result = run(r#"<svg><g xml:lang="en"><text>hi</text></g></svg>"#);

        assert!(result.passed);
        assert_eq!(result.message, "Language declaration found");
    }

    #[test]
    fn fails_without_declaration() {
        let result = run("<svg><g/></svg>");

        assert!(!result.passed);
        assert_eq!(result.message, "No xml:lang attribute found");
    }

    #[test]
    fn declaration_on_root_itself_does_not_count() {
        let result = run(r#"<svg xml:lang="en"><g/></svg>"#);

        assert!(!result.passed);
    }

    #[test]
    fn declaration_on_grandchild_does_not_count() {
        let result = run(r#"<svg><g><text xml:lang="en">hi</text></g></svg>"#);

        assert!(!result.passed);
    }
}
