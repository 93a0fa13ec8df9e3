//! color-contrast: every text element must meet WCAG AA against its
//! effective background.

use crate::contrast::{ContrastEvaluator, WcagContrast};
use crate::dom::Document;
use crate::rules::{Rule, RuleKey, RuleMetadata, RuleResult};

const DEFAULT_FILL: &str = "#000000";
const DEFAULT_BACKGROUND: &str = "#ffffff";
const TEXT_FONT_SIZE_PT: f32 = 14.0;

pub struct ColorContrast {
    metadata: RuleMetadata,
    evaluator: Box<dyn ContrastEvaluator>,
}

impl ColorContrast {
    pub fn new() -> Self {
        Self::with_evaluator(Box::new(WcagContrast::new()))
    }

    pub fn with_evaluator(evaluator: Box<dyn ContrastEvaluator>) -> Self {
        Self {
            metadata: RuleMetadata {
                key: RuleKey::Contrast,
                name: "color-contrast",
                description: "Require WCAG AA contrast for every text element",
            },
            evaluator,
        }
    }
}

impl Default for ColorContrast {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for ColorContrast {
    fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }

    fn check(&self, doc: &Document) -> RuleResult {
        let texts = doc.find_by_name(doc.root(), "text");
        let total = texts.len();
        let mut passed = 0;

        for &text in &texts {
            let fill = doc
                .attribute(text, "fill")
                .filter(|v| !v.is_empty())
                .or_else(|| doc.inherited_fill(text))
                .unwrap_or(DEFAULT_FILL);
            let background = doc.inherited_fill(text).unwrap_or(DEFAULT_BACKGROUND);

            if self
                .evaluator
                .is_accessible_aa(fill, background, TEXT_FONT_SIZE_PT)
            {
                passed += 1;
            }
        }

        // An empty candidate set trivially satisfies the check.
        RuleResult {
            passed: passed == total,
            message: format!("{passed}/{total} text elements pass contrast check"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_svg;
    use std::sync::Mutex;

    /// Records every color pair it is asked about and answers with a fixed
    /// verdict.
    struct RecordingEvaluator {
        verdict: bool,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl RecordingEvaluator {
        fn new(verdict: bool) -> Self {
            Self {
                verdict,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl ContrastEvaluator for &RecordingEvaluator {
        fn is_accessible_aa(&self, fg: &str, bg: &str, _font_size_pt: f32) -> bool {
            self.calls
                .lock()
                .unwrap()
                .push((fg.to_string(), bg.to_string()));
            self.verdict
        }
    }

    fn run_with(svg: &str, evaluator: &'static RecordingEvaluator) -> RuleResult {
        let doc = parse_svg(svg).unwrap();
        ColorContrast::with_evaluator(Box::new(evaluator)).check(&doc)
    }

    #[test]
    fn zero_text_elements_pass_trivially() {
        let doc = parse_svg("<svg><rect/></svg>").unwrap();
        let result = ColorContrast::new().check(&doc);

        assert!(result.passed);
        assert_eq!(result.message, "0/0 text elements pass contrast check");
    }

    #[test]
    fn defaults_are_black_on_white() {
        let evaluator = Box::leak(Box::new(RecordingEvaluator::new(true)));
        let result = run_with("<svg><text>hi</text></svg>", evaluator);

        assert!(result.passed);
        assert_eq!(
            evaluator.calls.lock().unwrap().as_slice(),
            [("#000000".to_string(), "#ffffff".to_string())]
        );
    }

    #[test]
    fn own_fill_wins_over_inherited() {
        let evaluator = Box::leak(Box::new(RecordingEvaluator::new(true)));
        run_with(
            r##"<svg fill="#111111"><text fill="#222222">hi</text></svg>"##,
            evaluator,
        );

        assert_eq!(
            evaluator.calls.lock().unwrap().as_slice(),
            [("#222222".to_string(), "#111111".to_string())]
        );
    }

    #[test]
    fn inherited_fill_serves_as_foreground_fallback_and_background() {
        let evaluator = Box::leak(Box::new(RecordingEvaluator::new(true)));
        run_with(r##"<svg><g fill="#333333"><text>hi</text></g></svg>"##, evaluator);

        assert_eq!(
            evaluator.calls.lock().unwrap().as_slice(),
            [("#333333".to_string(), "#333333".to_string())]
        );
    }

    #[test]
    fn fails_when_any_text_fails() {
        let evaluator = Box::leak(Box::new(RecordingEvaluator::new(false)));
        let result = run_with("<svg><text>a</text><text>b</text></svg>", evaluator);

        assert!(!result.passed);
        assert_eq!(result.message, "0/2 text elements pass contrast check");
    }

    #[test]
    fn default_evaluator_passes_black_on_white() {
        let doc = parse_svg(r##"<svg><text fill="#000000">hi</text></svg>"##).unwrap();
        let result = ColorContrast::new().check(&doc);

        assert!(result.passed);
        assert_eq!(result.message, "1/1 text elements pass contrast check");
    }
}
