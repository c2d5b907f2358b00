use eframe::egui::{self, Align, Layout, RichText};

use crate::gui::theme::Theme;

/// Branding strip with the provider reachability indicator.
pub fn show(ctx: &egui::Context, theme: &Theme, provider_online: bool) {
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(theme.heading("GOAL").size(20.0));
            ui.label(RichText::new("Academy").size(20.0));
            ui.add_space(8.0);
            ui.label(theme.muted("Internal Training Module"));

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let (dot, label) = if provider_online {
                    (theme.green(), "Gemini connected")
                } else {
                    (theme.red(), "Gemini unreachable")
                };
                ui.label(theme.muted(label).small());
                ui.label(RichText::new("●").color(dot));
            });
        });
        ui.add_space(6.0);
    });
}
