//! Dashboard sections and the dropdown/tab-strip synchronizer.
//!
//! The dashboard exposes the same five sections through two controls: a
//! dropdown in the header and a tab strip under it. Neither control is
//! authoritative. Whichever one the user touches is written first, then the
//! other one is reconciled to the same value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five mutually exclusive dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Section {
    #[default]
    StockImpact,
    Investigations,
    Data,
    Analysis,
    MetricsOverview,
}

impl Section {
    /// All sections in display order (dropdown options and tab order).
    pub const ALL: [Section; 5] = [
        Section::StockImpact,
        Section::Investigations,
        Section::Data,
        Section::Analysis,
        Section::MetricsOverview,
    ];

    /// Human-readable label shown on both controls.
    pub fn label(self) -> &'static str {
        match self {
            Section::StockImpact => "Stock Impact",
            Section::Investigations => "Investigations",
            Section::Data => "Data",
            Section::Analysis => "Analysis",
            Section::MetricsOverview => "Metrics Overview",
        }
    }

    /// Position of this section in [`Section::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|section| section.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown section '{}'", s))
    }
}

/// Which control originated a selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOrigin {
    Dropdown,
    TabStrip,
}

/// Keeps the dropdown and the tab strip showing the same section.
///
/// Each control has its own displayed value. The two handlers write their own
/// control, then write the opposite control only when it differs. They never
/// call each other, so a change can not bounce back and forth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionSync {
    dropdown: Section,
    tab_strip: Section,
}

impl SectionSync {
    /// Both controls start on the default section (Stock Impact).
    pub fn new() -> Self {
        Self::default()
    }

    /// Value currently shown by the dropdown.
    pub fn dropdown(&self) -> Section {
        self.dropdown
    }

    /// Tab currently active in the tab strip.
    pub fn tab_strip(&self) -> Section {
        self.tab_strip
    }

    /// The section whose panel is visible.
    pub fn active(&self) -> Section {
        self.tab_strip
    }

    /// True when both controls agree.
    pub fn is_consistent(&self) -> bool {
        self.dropdown == self.tab_strip
    }

    /// The user picked `section` in the dropdown.
    ///
    /// Returns true if the tab strip had to be moved.
    pub fn on_dropdown_changed(&mut self, section: Section) -> bool {
        self.dropdown = section;
        set_if_different(&mut self.tab_strip, section)
    }

    /// The user clicked the `section` tab.
    ///
    /// Returns true if the dropdown had to be moved.
    pub fn on_tab_changed(&mut self, section: Section) -> bool {
        self.tab_strip = section;
        set_if_different(&mut self.dropdown, section)
    }

    /// Dispatches to the handler for `origin`.
    pub fn apply(&mut self, origin: SelectionOrigin, section: Section) -> bool {
        match origin {
            SelectionOrigin::Dropdown => self.on_dropdown_changed(section),
            SelectionOrigin::TabStrip => self.on_tab_changed(section),
        }
    }
}

fn set_if_different(slot: &mut Section, value: Section) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_stock_impact() {
        let sync = SectionSync::new();
        assert_eq!(sync.dropdown(), Section::StockImpact);
        assert_eq!(sync.tab_strip(), Section::StockImpact);
        assert!(sync.is_consistent());
    }

    #[test]
    fn test_dropdown_moves_tab_strip() {
        for section in Section::ALL {
            let mut sync = SectionSync::new();
            sync.on_dropdown_changed(section);
            assert_eq!(sync.tab_strip(), section);
            assert!(sync.is_consistent());
        }
    }

    #[test]
    fn test_tab_moves_dropdown() {
        for section in Section::ALL {
            let mut sync = SectionSync::new();
            sync.on_tab_changed(section);
            assert_eq!(sync.dropdown(), section);
            assert!(sync.is_consistent());
        }
    }

    #[test]
    fn test_same_value_does_not_propagate() {
        let mut sync = SectionSync::new();
        assert!(!sync.on_dropdown_changed(Section::StockImpact));
        assert!(sync.on_tab_changed(Section::Data));
        assert!(!sync.on_dropdown_changed(Section::Data));
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("metrics overview".parse::<Section>(), Ok(Section::MetricsOverview));
        assert_eq!(" Stock Impact ".parse::<Section>(), Ok(Section::StockImpact));
        assert!("Overview".parse::<Section>().is_err());
    }

    #[test]
    fn test_index_matches_order() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }
}
