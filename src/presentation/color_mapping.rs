//! Color choices for chart elements and summary boxes.
//!
//! Colors depend only on the data being drawn and the active palette.

use egui::Color32;
use unhdash::{ThemeColors, HIGHLIGHT_YEAR};

/// Fill for a satisfaction bar: the highlight year stands out.
pub fn satisfaction_bar_color(year: i32, colors: &ThemeColors) -> Color32 {
    if year == HIGHLIGHT_YEAR {
        colors.bar_highlight
    } else {
        colors.bar
    }
}

/// Green for gains, red for losses, dim for flat.
pub fn change_color(percent: f64, colors: &ThemeColors) -> Color32 {
    if percent > 0.0 {
        colors.positive
    } else if percent < 0.0 {
        colors.negative
    } else {
        colors.text_dim
    }
}

/// Fill for the `index`-th summary box, cycling through the palette.
pub fn card_fill(index: usize, colors: &ThemeColors) -> Color32 {
    colors.card_fills[index % colors.card_fills.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use unhdash::ThemeManager;

    #[test]
    fn test_highlight_year_only() {
        let manager = ThemeManager::new();
        let colors = &manager.theme_or_default("Dark").colors;
        assert_eq!(satisfaction_bar_color(HIGHLIGHT_YEAR, colors), colors.bar_highlight);
        assert_eq!(satisfaction_bar_color(2021, colors), colors.bar);
    }

    #[test]
    fn test_card_fill_cycles() {
        let manager = ThemeManager::new();
        let colors = &manager.theme_or_default("Light").colors;
        assert_eq!(card_fill(3, colors), card_fill(0, colors));
    }
}
