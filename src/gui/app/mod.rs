use std::time::{Duration, Instant};

use eframe::egui;

use crate::{
    catalog::TermCatalog,
    core::tasks::{TaskManager, TaskResult},
    definitions::DefinitionStore,
    gui::{
        actions::{ActionQueue, UiAction},
        card, category_bar, controls,
        theme::{set_theme, Theme},
        top_bar,
    },
    session::{FetchPlan, StudySession},
};

// Matches the flip animation: the card turns face-down immediately, the
// index advances a beat later so the answer never shows on the wrong card.
const NAV_DELAY: Duration = Duration::from_millis(200);

const PROVIDER_CHECK_INTERVAL: Duration = Duration::from_secs(30);
const RESULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

struct PendingNav {
    action: UiAction,
    due: Instant,
}

pub struct TermdeckApp {
    // Study State
    session: StudySession,
    definitions: DefinitionStore,

    // UI State
    theme: Theme,
    actions: ActionQueue,
    pending_nav: Option<PendingNav>,

    // External Services
    provider_online: bool,
    last_provider_check: Option<Instant>,
    task_manager: TaskManager,
}

impl TermdeckApp {
    pub fn new(cc: &eframe::CreationContext<'_>, task_manager: TaskManager) -> Self {
        let theme = Theme::goal();
        set_theme(&cc.egui_ctx, theme.clone());
        cc.egui_ctx.set_theme(egui::Theme::Dark);
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.2);

        let session = StudySession::new(TermCatalog::built_in());

        let mut app = Self {
            session,
            definitions: DefinitionStore::new(),
            theme,
            actions: ActionQueue::new(),
            pending_nav: None,
            provider_online: false,
            last_provider_check: None,
            task_manager,
        };

        // Warm the first card (and its neighbor) before the user flips.
        let plan = app.session.initial_plan();
        app.dispatch(plan);

        app
    }

    /// Turn a transition's directives into provider calls. The store's
    /// in-flight registry coalesces duplicates, so dispatching the same card
    /// from a flip and a prefetch costs one call.
    fn dispatch(&mut self, plan: FetchPlan) {
        for card in [plan.resolve, plan.prefetch].into_iter().flatten() {
            if self.definitions.begin_fetch(card.id) {
                self.task_manager.fetch_definition(card);
            }
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::DefinitionFetched { id, result } => {
                self.definitions.complete_fetch(id, result);
            }
            TaskResult::ProviderStatus(online) => {
                if online != self.provider_online {
                    log::info!(
                        "definition provider is {}",
                        if online { "reachable" } else { "unreachable" }
                    );
                }
                self.provider_online = online;
            }
        }
    }

    fn apply_action(&mut self, action: UiAction) {
        let plan = match action {
            UiAction::SelectCategory(filter) => {
                self.pending_nav = None;
                self.session.select_category(filter)
            }
            UiAction::Flip => self.session.flip(),
            UiAction::Reset => {
                self.pending_nav = None;
                self.session.reset()
            }
            UiAction::Next | UiAction::Prev | UiAction::MarkCorrect | UiAction::MarkIncorrect => {
                self.queue_nav(action);
                FetchPlan::empty()
            }
        };

        self.dispatch(plan);
    }

    fn queue_nav(&mut self, action: UiAction) {
        if self.pending_nav.is_some() {
            return;
        }

        let advances = match action {
            UiAction::Prev => self.session.can_prev(),
            _ => self.session.can_next(),
        };

        if !advances {
            // Marks still count at the last card even though nothing moves.
            let plan = match action {
                UiAction::MarkCorrect => self.session.mark_correct(),
                UiAction::MarkIncorrect => self.session.mark_incorrect(),
                _ => FetchPlan::empty(),
            };
            self.dispatch(plan);
            return;
        }

        // Face-down before the card underneath changes.
        if self.session.is_flipped() {
            self.session.flip();
        }

        self.pending_nav = Some(PendingNav { action, due: Instant::now() + NAV_DELAY });
    }

    fn advance_pending_nav(&mut self, ctx: &egui::Context) {
        let Some(pending) = self.pending_nav.take() else {
            return;
        };

        let now = Instant::now();
        if now < pending.due {
            ctx.request_repaint_after(pending.due - now);
            self.pending_nav = Some(pending);
            return;
        }

        let plan = match pending.action {
            UiAction::Next => self.session.next(),
            UiAction::Prev => self.session.prev(),
            UiAction::MarkCorrect => self.session.mark_correct(),
            UiAction::MarkIncorrect => self.session.mark_incorrect(),
            _ => FetchPlan::empty(),
        };

        self.dispatch(plan);
    }

    fn update_provider_status(&mut self) {
        let now = Instant::now();
        let should_check = match self.last_provider_check {
            None => true,
            Some(last_check) => now.duration_since(last_check) >= PROVIDER_CHECK_INTERVAL,
        };

        if should_check {
            self.task_manager.check_provider();
            self.last_provider_check = Some(now);
        }
    }
}

impl eframe::App for TermdeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let task_results = self.task_manager.poll_results();

        for result in task_results {
            self.handle_task_result(result);
        }

        self.update_provider_status();
        self.advance_pending_nav(ctx);

        top_bar::show(ctx, &self.theme, self.provider_online);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(10.0);
            category_bar::show(ui, self.session.filter(), &mut self.actions);
            ui.add_space(18.0);
            card::show(ui, &self.theme, &self.session, &self.definitions, &mut self.actions);
            controls::show(ui, &self.theme, &self.session, &mut self.actions);
        });

        let queued: Vec<UiAction> = self.actions.drain().collect();
        for action in queued {
            self.apply_action(action);
        }

        // Keep polling while work is outstanding; egui won't repaint on its
        // own just because a channel has results waiting.
        if self.definitions.has_in_flight() {
            ctx.request_repaint_after(RESULT_POLL_INTERVAL);
        }
    }
}
