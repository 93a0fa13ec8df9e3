//! The accessibility rule catalog, one rule per module.

pub mod animated_content;
pub mod aria_labels;
pub mod contrast;
pub mod description;
pub mod focusable_elements;
pub mod image_text;
pub mod language_declaration;
pub mod responsive_scaling;
pub mod role_attributes;
pub mod text_alternatives;
pub mod title;
pub mod unique_ids;

pub use animated_content::AnimatedContent;
pub use aria_labels::AriaLabels;
pub use contrast::ColorContrast;
pub use description::RequireDescription;
pub use focusable_elements::FocusableElements;
pub use image_text::ImageText;
pub use language_declaration::LanguageDeclaration;
pub use responsive_scaling::ResponsiveScaling;
pub use role_attributes::RoleAttributes;
pub use text_alternatives::TextAlternatives;
pub use title::RequireTitle;
pub use unique_ids::UniqueIds;

use crate::dom::{Document, NodeId};

/// Resolves "the top-level svg element" for rules that inspect it.
///
/// Some parsers hand over a synthetic document root with the `svg` tag as a
/// child; others make the `svg` tag the root itself. The first direct child
/// named `svg` wins, falling back to the root.
pub(crate) fn top_level_svg(doc: &Document) -> NodeId {
    doc.children(doc.root())
        .iter()
        .copied()
        .find(|&id| doc.name(id) == "svg")
        .unwrap_or_else(|| doc.root())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_svg_prefers_direct_svg_child() {
        let mut doc = Document::new("document");
        doc.push_child(doc.root(), "metadata");
        let svg = doc.push_child(doc.root(), "svg");

        assert_eq!(top_level_svg(&doc), svg);
    }

    #[test]
    fn top_level_svg_falls_back_to_root() {
        let mut doc = Document::new("svg");
        doc.push_child(doc.root(), "rect");

        assert_eq!(top_level_svg(&doc), doc.root());
    }

    #[test]
    fn top_level_svg_ignores_nested_svg() {
        let mut doc = Document::new("svg");
        let g = doc.push_child(doc.root(), "g");
        doc.push_child(g, "svg");

        assert_eq!(top_level_svg(&doc), doc.root());
    }
}
