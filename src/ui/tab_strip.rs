//! Tab strip under the header.

use eframe::egui;
use unhdash::{Section, SelectionOrigin};

/// Origin reported for changes made in this panel.
pub const ORIGIN: SelectionOrigin = SelectionOrigin::TabStrip;

/// Renders one tab per section and returns the newly clicked one, if any.
pub fn render_tab_strip(ui: &mut egui::Ui, shown: Section) -> Option<Section> {
    let mut picked = shown;

    ui.horizontal(|ui| {
        for section in Section::ALL {
            ui.selectable_value(&mut picked, section, egui::RichText::new(section.label()).strong());
        }
    });

    (picked != shown).then_some(picked)
}
