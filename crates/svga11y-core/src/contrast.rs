//! WCAG color-contrast evaluation.
//!
//! The `contrast` rule only needs a yes/no answer for a foreground/background
//! pair at a given font size; the trait keeps that capability swappable in
//! tests.

/// Decides whether a color pair meets WCAG AA at the given font size.
pub trait ContrastEvaluator: Send + Sync {
    fn is_accessible_aa(&self, foreground: &str, background: &str, font_size_pt: f32) -> bool;
}

/// Default evaluator implementing the WCAG 2.x contrast-ratio formula.
///
/// Accepts `#rgb` and `#rrggbb` hex colors; anything else is treated as
/// failing the check.
#[derive(Debug, Default)]
pub struct WcagContrast;

impl WcagContrast {
    pub fn new() -> Self {
        Self
    }

    /// Contrast ratio between two colors, from 1.0 to 21.0.
    pub fn ratio(foreground: Rgb, background: Rgb) -> f32 {
        let fg = foreground.relative_luminance();
        let bg = background.relative_luminance();
        let (lighter, darker) = if fg > bg { (fg, bg) } else { (bg, fg) };
        (lighter + 0.05) / (darker + 0.05)
    }
}

impl ContrastEvaluator for WcagContrast {
    fn is_accessible_aa(&self, foreground: &str, background: &str, font_size_pt: f32) -> bool {
        let (Some(fg), Some(bg)) = (Rgb::parse_hex(foreground), Rgb::parse_hex(background)) else {
            return false;
        };
        // AA: 4.5:1 for normal text, 3:1 for large text (>= 18pt).
        let threshold = if font_size_pt >= 18.0 { 3.0 } else { 4.5 };
        Self::ratio(fg, bg) >= threshold
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parses `#rgb` or `#rrggbb`; returns `None` for anything else.
    pub fn parse_hex(value: &str) -> Option<Self> {
        let hex = value.strip_prefix('#')?;
        match hex.len() {
            3 => {
                let mut digits = hex.chars().map(|c| c.to_digit(16));
                let r = digits.next()??;
                let g = digits.next()??;
                let b = digits.next()??;
                Some(Self {
                    r: (r * 17) as u8,
                    g: (g * 17) as u8,
                    b: (b * 17) as u8,
                })
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self { r, g, b })
            }
            _ => None,
        }
    }

    fn relative_luminance(self) -> f32 {
        fn linearize(channel: u8) -> f32 {
            let c = f32::from(channel) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }
}
