//! Main egui application — composes the panels and drives the workflows.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, RichText, TopBottomPanel};

use companion_core::event_bus::EventBus;
use companion_core::format::{papers_reply, search_failure_reply};
use companion_core::ports::{BackendPort, StoragePort};
use companion_core::store::{SessionStore, CHATS_KEY, CURRENT_ID_KEY};
use companion_core::workflow::{validate_inputs, AnalysisPhase};
use companion_platform::backend::{HttpBackend, DEFAULT_BACKEND_ORIGIN};
use companion_platform::storage::auto_detect_storage;
use companion_types::event::{AnalysisOutcome, CompanionEvent};
use companion_types::message::Message;
use companion_ui::overlay::TooltipOverlay;
use companion_ui::panels::chat::{chat_panel, ChatAction};
use companion_ui::panels::draft::{draft_panel, DraftAction};
use companion_ui::state::{Mode, UiState};
use companion_ui::theme;

/// The main application state
pub struct CompanionApp {
    ui_state: UiState,
    store: SessionStore,
    event_bus: EventBus,
    backend: Rc<dyn BackendPort>,
    storage: Rc<dyn StoragePort>,
    overlay: TooltipOverlay,
    /// Filled by the async restore started in `new`.
    restore_slot: Rc<RefCell<Option<SessionStore>>>,
    first_frame: bool,
}

impl CompanionApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let event_bus = EventBus::new();
        let storage = auto_detect_storage();
        let backend: Rc<dyn BackendPort> = Rc::new(HttpBackend::default_origin());

        // Restore runs once at startup; the store is seeded until it lands.
        let restore_slot = Rc::new(RefCell::new(None));
        Self::restore_sessions(storage.clone(), restore_slot.clone());

        Self {
            ui_state: UiState::new(),
            store: SessionStore::seeded(),
            event_bus,
            backend,
            storage,
            overlay: TooltipOverlay::new(),
            restore_slot,
            first_frame: true,
        }
    }

    /// Restore the session store from durable storage (async).
    fn restore_sessions(storage: Rc<dyn StoragePort>, slot: Rc<RefCell<Option<SessionStore>>>) {
        wasm_bindgen_futures::spawn_local(async move {
            let chats = storage.get(CHATS_KEY).await.unwrap_or_else(|e| {
                log::warn!("Reading {} failed: {}", CHATS_KEY, e);
                None
            });
            let current = storage.get(CURRENT_ID_KEY).await.unwrap_or_else(|e| {
                log::warn!("Reading {} failed: {}", CURRENT_ID_KEY, e);
                None
            });
            let current_id = current.and_then(|bytes| String::from_utf8(bytes).ok());
            let store = SessionStore::from_persisted(chats.as_deref(), current_id.as_deref());
            *slot.borrow_mut() = Some(store);
        });
    }

    /// Persist the session store (async, fire-and-forget, best-effort).
    fn persist_sessions(&self) {
        let (bytes, current_id) = match self.store.to_persisted() {
            Ok(persisted) => persisted,
            Err(e) => {
                log::error!("Serializing sessions failed: {}", e);
                return;
            }
        };
        let storage = self.storage.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = storage.set(CHATS_KEY, &bytes).await {
                log::error!("Persisting {} failed: {}", CHATS_KEY, e);
            }
            if let Err(e) = storage.set(CURRENT_ID_KEY, current_id.as_bytes()).await {
                log::error!("Persisting {} failed: {}", CURRENT_ID_KEY, e);
            }
        });
    }

    fn handle_chat_action(&mut self, action: ChatAction, ctx: &egui::Context) {
        match action {
            ChatAction::NewChat => {
                self.store.new_conversation();
                self.persist_sessions();
            }
            ChatAction::SwitchTo(id) => match self.store.switch_to(&id) {
                Ok(()) => self.persist_sessions(),
                Err(e) => {
                    log::warn!("Switch failed: {}", e);
                    self.ui_state.status_text = e.to_string();
                }
            },
            ChatAction::Delete(id) => match self.store.delete_conversation(&id) {
                Ok(()) => self.persist_sessions(),
                Err(e) => log::warn!("Delete failed: {}", e),
            },
            ChatAction::Send(text) => self.dispatch_search(text, ctx),
        }
    }

    /// Append the user message and issue the single search request.
    fn dispatch_search(&mut self, text: String, ctx: &egui::Context) {
        let conversation_id = self.store.current_id().to_string();
        if let Err(e) = self
            .store
            .append_message(&conversation_id, Message::user(text.clone()))
        {
            log::error!("Appending user message failed: {}", e);
            return;
        }
        self.persist_sessions();

        self.ui_state.thinking = true;
        self.ui_state.status_text = "Searching...".to_string();

        let backend = self.backend.clone();
        let event_bus = self.event_bus.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let reply = match backend.search_papers(&text).await {
                Ok(response) => papers_reply(&text, &response),
                Err(e) => {
                    log::error!("Paper search failed: {}", e);
                    search_failure_reply(&e)
                }
            };
            event_bus.emit(CompanionEvent::SearchFinished {
                conversation_id,
                reply,
            });
            ctx.request_repaint();
        });
    }

    /// Validate inputs, then issue the scoring request.
    fn dispatch_analyze(&mut self, ctx: &egui::Context) {
        if let Err(e) = validate_inputs(&self.ui_state.draft_problem, &self.ui_state.draft_text) {
            self.ui_state.validation = Some(e.to_string());
            return;
        }
        self.ui_state.validation = None;
        self.ui_state.analysis = AnalysisPhase::Analyzing;
        self.ui_state.status_text = "Analyzing...".to_string();

        let problem = self.ui_state.draft_problem.clone();
        let paragraph = self.ui_state.draft_text.clone();
        let backend = self.backend.clone();
        let event_bus = self.event_bus.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = match backend.score_draft(&problem, &paragraph).await {
                Ok(response) => AnalysisOutcome::Succeeded(response.into_analysis()),
                Err(e) => {
                    log::error!("Draft scoring failed: {}", e);
                    AnalysisOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            };
            event_bus.emit(CompanionEvent::AnalysisFinished { outcome });
            ctx.request_repaint();
        });
    }
}

impl eframe::App for CompanionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Swap in the restored sessions once the startup read lands.
        if let Some(restored) = self.restore_slot.borrow_mut().take() {
            self.store = restored;
        }

        // Drain events from completed async work
        let events = self.event_bus.drain();
        if !events.is_empty() {
            let now = ctx.input(|i| i.time);
            let store_mutated = self
                .ui_state
                .process_events(events, &mut self.store, now);
            if store_mutated {
                self.persist_sessions();
            }
            ctx.request_repaint();
        }

        if self.ui_state.is_busy() {
            ctx.request_repaint();
        }
        // Keep repainting while the score ramp runs.
        if let AnalysisPhase::Displayed(AnalysisOutcome::Succeeded(analysis)) =
            &self.ui_state.analysis
        {
            let now = ctx.input(|i| i.time);
            if self.ui_state.score_animating(analysis.score, now) {
                ctx.request_repaint();
            }
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Research Companion AI")
                        .strong()
                        .color(theme::ACCENT_SOFT)
                        .size(16.0),
                );
                ui.separator();
                for (mode, label) in [
                    (Mode::LiveAssist, "Live Assist"),
                    (Mode::DraftAnalysis, "Draft Analysis"),
                ] {
                    if ui
                        .selectable_label(self.ui_state.mode == mode, label)
                        .clicked()
                    {
                        self.ui_state.mode = mode;
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("Backend: {}", DEFAULT_BACKEND_ORIGIN))
                            .color(theme::TEXT_SECONDARY)
                            .small(),
                    );
                });
            });
        });

        // ── Main content ─────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| match self.ui_state.mode {
            Mode::LiveAssist => {
                self.overlay.hide();
                if let Some(action) = chat_panel(ui, &mut self.ui_state, &self.store) {
                    self.handle_chat_action(action, ctx);
                }
            }
            Mode::DraftAnalysis => {
                if let Some(DraftAction::Analyze) =
                    draft_panel(ui, &mut self.ui_state, &mut self.overlay)
                {
                    self.dispatch_analyze(ctx);
                }
            }
        });

        // The overlay renders last so it floats above the panels.
        self.overlay.render(ctx);
    }
}
