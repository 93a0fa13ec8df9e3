//! unique-ids: duplicated id values break aria-labelledby references and
//! fragment links.

use std::collections::HashMap;

use crate::declare_rule;
use crate::dom::Document;
use crate::rules::{Rule, RuleMetadata, RuleResult};

declare_rule!(
    UniqueIds,
    key = UniqueIds,
    name = "unique-ids",
    description = "Require every non-empty id attribute to be unique"
);

impl Rule for UniqueIds {
    fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }

    fn check(&self, doc: &Document) -> RuleResult {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();

        for id in doc.descendants(doc.root()) {
            if let Some(value) = doc.attribute(id, "id").filter(|v| !v.is_empty()) {
                let count = counts.entry(value).or_insert(0);
                if *count == 0 {
                    order.push(value);
                }
                *count += 1;
            }
        }

        // Duplicates come out in first document-order occurrence.
        let duplicates: Vec<&str> = order
            .into_iter()
            .filter(|value| counts[value] > 1)
            .collect();

        if duplicates.is_empty() {
            RuleResult::pass("All id attributes are unique")
        } else {
            RuleResult::fail(format!(
                "Duplicate id attributes found: {}",
                duplicates.join(", ")
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_svg;

    fn run(svg: &str) -> RuleResult {
        UniqueIds::new().check(&parse_svg(svg).unwrap())
    }

    #[test]
    fn unique_ids_pass() {
        let result = run(r#"<svg><rect id="a"/><rect id="b"/></svg>"#);

        assert!(result.passed);
        assert_eq!(result.message, "All id attributes are unique");
    }

    #[test]
    fn duplicate_id_is_named_once() {
        let result = run(r#"<svg><rect id="a"/><rect id="a"/><rect id="a"/></svg>"#);

        assert!(!result.passed);
        assert_eq!(result.message, "Duplicate id attributes found: a");
    }

    #[test]
    fn every_duplicated_value_is_listed_in_document_order() {
        let result = run(
            r#"<svg><rect id="x"/><g id="y"><circle id="x"/></g><path id="y"/></svg>"#,
        );

        assert!(!result.passed);
        assert_eq!(result.message, "Duplicate id attributes found: x, y");
    }

    #[test]
    fn empty_ids_are_ignored() {
        let result = run(r#"<svg><rect id=""/><circle id=""/></svg>"#);

        assert!(result.passed);
    }

    #[test]
    fn tree_without_ids_passes() {
        assert!(run("<svg><rect/><circle/></svg>").passed);
    }
}
