use eframe::egui::{self, Align, Button, Layout, RichText, Ui};
use egui_extras::{Size, StripBuilder};

use crate::{
    gui::{
        actions::{ActionQueue, UiAction},
        theme::Theme,
    },
    session::StudySession,
};

/// Scoring buttons, navigation, and the session tally under the card.
pub fn show(ui: &mut Ui, theme: &Theme, session: &StudySession, actions: &mut ActionQueue) {
    ui.add_space(14.0);

    // Self-assessment only makes sense once the answer is showing.
    if session.is_flipped() && session.current_card().is_some() {
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                let width = ui.available_width();
                ui.add_space((width - 280.0).max(0.0) / 2.0);

                let incorrect = Button::new(RichText::new("✖ Needs Study").color(theme.red()))
                    .min_size(egui::vec2(132.0, 36.0));
                if ui.add(incorrect).clicked() {
                    actions.push(UiAction::MarkIncorrect);
                }

                let correct = Button::new(RichText::new("✔ Got It").color(theme.green()))
                    .min_size(egui::vec2(132.0, 36.0));
                if ui.add(correct).clicked() {
                    actions.push(UiAction::MarkCorrect);
                }
            });
        });
        ui.add_space(10.0);
    }

    ui.vertical_centered(|ui| {
        ui.set_max_width(600.0);

        StripBuilder::new(ui)
            .size(Size::exact(96.0))
            .size(Size::remainder())
            .size(Size::exact(96.0))
            .horizontal(|mut strip| {
                strip.cell(|ui| {
                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                        let prev = Button::new("⏴ Prev").min_size(egui::vec2(84.0, 32.0));
                        if ui.add_enabled(session.can_prev(), prev).clicked() {
                            actions.push(UiAction::Prev);
                        }
                    });
                });

                strip.cell(|ui| {
                    ui.with_layout(Layout::top_down(Align::Center), |ui| {
                        ui.horizontal(|ui| {
                            ui.label(theme.muted("SCORE").small());
                            ui.label(theme.heading(&session.score().to_string()));
                            ui.separator();
                            ui.label(theme.muted("PROGRESS").small());
                            let percent = (session.accuracy() * 100.0).round() as u32;
                            ui.label(theme.bold(&format!("{percent}%")));
                            ui.separator();
                            if ui.small_button("⟲ Reset").on_hover_text("Reset session").clicked()
                            {
                                actions.push(UiAction::Reset);
                            }
                        });
                    });
                });

                strip.cell(|ui| {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let next = Button::new("Next ⏵").min_size(egui::vec2(84.0, 32.0));
                        if ui.add_enabled(session.can_next(), next).clicked() {
                            actions.push(UiAction::Next);
                        }
                    });
                });
            });
    });
}
