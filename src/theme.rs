//! Theme support for the dashboard
//!
//! Each theme carries the egui chrome colors plus the palette used by the
//! painted charts and summary boxes. Built-in themes: Light, Dark, Dracula.
//!
//! # Examples
//!
//! ```
//! use unhdash::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dracula = manager.get_theme("Dracula").unwrap();
//! println!("Revenue line: {:?}", dracula.colors.series_primary);
//! ```

use egui::Color32;
use std::collections::HashMap;

pub const DEFAULT_THEME: &str = "Dark";

/// Complete color palette for a theme
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Chrome
    pub panel_background: Color32,
    pub extreme_background: Color32,
    pub text: Color32,
    pub text_dim: Color32,
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Charts
    pub plot_background: Color32,
    pub grid: Color32,
    pub axis: Color32,
    /// Stock line and revenue series
    pub series_primary: Color32,
    /// Satisfaction series
    pub series_secondary: Color32,
    pub bar: Color32,
    /// Bar drawn for the highlighted year
    pub bar_highlight: Color32,
    pub event_marker: Color32,

    // Summary boxes and deltas
    pub card_fills: [Color32; 3],
    pub card_text: Color32,
    pub positive: Color32,
    pub negative: Color32,
}

/// A named theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    /// Whether egui's light visuals should be the starting point
    pub light: bool,
    pub colors: ThemeColors,
}

/// Registry of the built-in themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    fallback: Theme,
}

impl ThemeManager {
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        for theme in [light_theme(), dark_theme(), dracula_theme()] {
            themes.insert(theme.name.clone(), theme);
        }
        Self {
            themes,
            fallback: dark_theme(),
        }
    }

    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Looks up `name`, falling back to the default theme.
    pub fn theme_or_default(&self, name: &str) -> &Theme {
        self.themes.get(name).unwrap_or(&self.fallback)
    }

    /// Sorted theme names, for the selector
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Builds egui visuals for `theme`
    pub fn visuals_for(&self, theme: &Theme) -> egui::Visuals {
        let colors = &theme.colors;
        let mut visuals = if theme.light {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        };

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;
        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.series_primary;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.series_secondary;
        visuals.error_fg_color = colors.negative;
        visuals.warn_fg_color = colors.bar_highlight;
        visuals
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light background, corporate blue accents".to_string(),
        light: true,
        colors: ThemeColors {
            panel_background: Color32::from_rgb(246, 247, 249),
            extreme_background: Color32::from_rgb(255, 255, 255),
            text: Color32::from_rgb(33, 37, 41),
            text_dim: Color32::from_rgb(108, 117, 125),
            selection: Color32::from_rgb(190, 210, 245),
            hover: Color32::from_rgb(226, 230, 234),
            border: Color32::from_rgb(200, 204, 208),

            plot_background: Color32::from_rgb(255, 255, 255),
            grid: Color32::from_rgb(230, 232, 235),
            axis: Color32::from_rgb(120, 125, 130),
            series_primary: hex_to_color32("#002677"),
            series_secondary: hex_to_color32("#ff612b"),
            bar: hex_to_color32("#4a90d9"),
            bar_highlight: hex_to_color32("#ff612b"),
            event_marker: hex_to_color32("#c0392b"),

            card_fills: [
                hex_to_color32("#002677"),
                hex_to_color32("#00796b"),
                hex_to_color32("#6a1b9a"),
            ],
            card_text: Color32::WHITE,
            positive: Color32::from_rgb(40, 150, 60),
            negative: Color32::from_rgb(200, 40, 40),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "egui dark chrome with bright chart series".to_string(),
        light: false,
        colors: ThemeColors {
            panel_background: Color32::from_rgb(39, 39, 39),
            extreme_background: Color32::from_rgb(16, 16, 16),
            text: Color32::from_rgb(235, 235, 235),
            text_dim: Color32::from_rgb(160, 160, 160),
            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            border: Color32::from_rgb(100, 100, 100),

            plot_background: Color32::from_rgb(28, 28, 28),
            grid: Color32::from_rgb(55, 55, 55),
            axis: Color32::from_rgb(150, 150, 150),
            series_primary: Color32::from_rgb(52, 152, 219),
            series_secondary: Color32::from_rgb(243, 156, 18),
            bar: Color32::from_rgb(26, 188, 156),
            bar_highlight: Color32::from_rgb(231, 76, 60),
            event_marker: Color32::from_rgb(231, 76, 60),

            card_fills: [
                Color32::from_rgb(41, 98, 155),
                Color32::from_rgb(30, 130, 100),
                Color32::from_rgb(120, 70, 150),
            ],
            card_text: Color32::WHITE,
            positive: Color32::from_rgb(46, 204, 113),
            negative: Color32::from_rgb(231, 76, 60),
        },
    }
}

/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Dracula palette".to_string(),
        light: false,
        colors: ThemeColors {
            panel_background: hex_to_color32("#282a36"),
            extreme_background: hex_to_color32("#21222c"),
            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),
            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),
            border: hex_to_color32("#6272a4"),

            plot_background: hex_to_color32("#21222c"),
            grid: hex_to_color32("#343746"),
            axis: hex_to_color32("#6272a4"),
            series_primary: hex_to_color32("#8be9fd"),
            series_secondary: hex_to_color32("#ffb86c"),
            bar: hex_to_color32("#bd93f9"),
            bar_highlight: hex_to_color32("#ff79c6"),
            event_marker: hex_to_color32("#ff5555"),

            card_fills: [
                hex_to_color32("#6272a4"),
                hex_to_color32("#44475a"),
                hex_to_color32("#bd93f9"),
            ],
            card_text: hex_to_color32("#f8f8f2"),
            positive: hex_to_color32("#50fa7b"),
            negative: hex_to_color32("#ff5555"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };

    if hex.len() == 6 {
        Color32::from_rgb(channel(0..2), channel(2..4), channel(4..6))
    } else {
        Color32::BLACK
    }
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
