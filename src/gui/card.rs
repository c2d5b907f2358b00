use eframe::egui::{self, Align, CursorIcon, Layout, RichText, Sense, Ui, Vec2};

use crate::{
    core::FetchStatus,
    definitions::{DefinitionStore, FALLBACK_TEXT},
    gui::{
        actions::{ActionQueue, UiAction},
        theme::Theme,
    },
    session::StudySession,
};

const CARD_SIZE: Vec2 = Vec2::new(560.0, 300.0);

/// The flashcard itself. Clicking anywhere on it flips it.
pub fn show(
    ui: &mut Ui,
    theme: &Theme,
    session: &StudySession,
    definitions: &DefinitionStore,
    actions: &mut ActionQueue,
) {
    let Some(card) = session.current_card() else {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.label(theme.muted("No cards in this category."));
        });
        return;
    };

    ui.vertical_centered(|ui| {
        ui.label(theme.muted(&format!(
            "Card {} of {}",
            session.current_index() + 1,
            session.card_count()
        )));
        ui.add_space(10.0);

        let frame = egui::Frame::group(ui.style())
            .fill(theme.card_face())
            .stroke(egui::Stroke::new(1.0, theme.card_edge()))
            .inner_margin(egui::Margin::same(24));

        let response = frame
            .show(ui, |ui| {
                ui.set_min_size(CARD_SIZE);
                ui.set_max_size(CARD_SIZE);

                if session.is_flipped() {
                    show_back(ui, theme, definitions, card.id);
                } else {
                    show_front(ui, theme, card.category.label(), card.term);
                }
            })
            .response
            .interact(Sense::click())
            .on_hover_cursor(CursorIcon::PointingHand);

        if response.clicked() {
            actions.push(UiAction::Flip);
        }
    });
}

fn show_front(ui: &mut Ui, theme: &Theme, category: &str, term: &str) {
    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        ui.label(theme.muted(&category.to_uppercase()).small());
        ui.add_space(CARD_SIZE.y * 0.28);
        ui.label(theme.bold(term).size(32.0));
        ui.add_space(16.0);
        ui.label(theme.muted("Tap to reveal"));
    });
}

fn show_back(ui: &mut Ui, theme: &Theme, definitions: &DefinitionStore, id: &str) {
    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        ui.label(theme.muted("DEFINITION").small());

        match definitions.fetch_status(id) {
            FetchStatus::Loading | FetchStatus::Idle => {
                ui.add_space(CARD_SIZE.y * 0.3);
                ui.add(egui::Spinner::new().size(28.0).color(theme.accent()));
                ui.add_space(10.0);
                ui.label(theme.muted("Consulting AI Knowledge Base..."));
            }
            FetchStatus::Success | FetchStatus::Error => {
                let text = definitions.display_text(id).unwrap_or(FALLBACK_TEXT);
                ui.add_space(18.0);
                egui::ScrollArea::vertical().max_height(CARD_SIZE.y - 70.0).show(ui, |ui| {
                    ui.label(RichText::new(text).size(18.0));
                });
            }
        }
    });
}
