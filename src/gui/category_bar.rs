use eframe::egui::Ui;

use crate::{
    core::{Category, CategoryFilter},
    gui::actions::{ActionQueue, UiAction},
};

fn glyph(category: Category) -> &'static str {
    match category {
        Category::LegalRegulatory => "🛡",
        Category::AdvertisingEcosystem => "🗂",
        Category::MetricsKpis => "📊",
        Category::InsuranceConcepts => "📖",
        Category::GoalStrategy => "🎯",
        Category::Technology => "💻",
        Category::Competitors => "👥",
    }
}

pub fn show(ui: &mut Ui, selected: CategoryFilter, actions: &mut ActionQueue) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 6.0;

        if ui.selectable_label(selected == CategoryFilter::All, "All").clicked() {
            actions.push(UiAction::SelectCategory(CategoryFilter::All));
        }

        for category in Category::ALL {
            let filter = CategoryFilter::Only(category);
            let label = format!("{} {}", glyph(category), category.label());
            if ui.selectable_label(selected == filter, label).clicked() {
                actions.push(UiAction::SelectCategory(filter));
            }
        }
    });
}
