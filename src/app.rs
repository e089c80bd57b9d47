use eframe::egui;

use crate::config::Config;
use crate::state::AppState;
use crate::ui::{cards, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CarlotApp {
    pub state: AppState,
    config: Config,
}

impl CarlotApp {
    /// Build the app and start fetching the configured listings.
    pub fn new(config: Config) -> Self {
        let mut state = AppState::default();
        state.start_load(config.source(), config.latency());
        Self { state, config }
    }
}

impl eframe::App for CarlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Pending load ----
        self.state.poll_load();
        if self.state.loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, &self.config);
        });

        // ---- Left side panel: search and filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: card grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            cards::card_grid(ui, &mut self.state);
        });

        cards::detail_window(ctx, &mut self.state);
    }
}
