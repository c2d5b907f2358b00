use eframe::egui;
use termdeck::{core::tasks::TaskManager, gui::TermdeckApp, provider::GeminiConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // A missing credential is the one fatal startup condition: better here
    // than as a broken card back on the first flip.
    let config = match GeminiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("termdeck: {e}");
            eprintln!("Set GEMINI_API_KEY to a Google AI Studio key and relaunch.");
            std::process::exit(1);
        }
    };

    log::info!("using model {}", config.model);

    let task_manager = match TaskManager::new(config) {
        Ok(task_manager) => task_manager,
        Err(e) => {
            eprintln!("termdeck: failed to start background tasks: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([980.0, 740.0])
            .with_min_inner_size([720.0, 560.0])
            .with_title("GOAL Academy"),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "GOAL Academy",
        options,
        Box::new(|cc| Ok(Box::new(TermdeckApp::new(cc, task_manager)))),
    ) {
        log::error!("gui exited with error: {e}");
    }
}
