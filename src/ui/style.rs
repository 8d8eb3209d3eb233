use crate::catalog::Rgb;
use console::style;
use std::fmt::Display;

/// White bold, for screen titles.
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Secondary text and rules.
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Yellow, for warnings and the image diagnostic.
pub fn yellow<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Green, for bottle names and affirmations.
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Cyan bold, for position labels and bullets.
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Cyan, for field labels.
pub fn cyan<D: Display>(text: D) -> String {
    style(text).cyan().to_string()
}

/// Two-cell bottle glyph: upper half in the top colour, lower half in the
/// bottom colour. Unparsable colours render as an outline.
pub fn bottle_glyph(top: Option<Rgb>, bottom: Option<Rgb>) -> String {
    match (top, bottom) {
        (Some(top), Some(bottom)) => style("▀▀")
            .color256(top.to_ansi256())
            .on_color256(bottom.to_ansi256())
            .to_string(),
        _ => style("[]").dim().to_string(),
    }
}

/// Solid swatch in a single colour.
pub fn swatch(color: Option<Rgb>) -> String {
    match color {
        Some(rgb) => style("██").color256(rgb.to_ansi256()).to_string(),
        None => style("░░").dim().to_string(),
    }
}
