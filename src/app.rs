use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct VowelSpaceApp {
    pub state: AppState,
}

impl Default for VowelSpaceApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for VowelSpaceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: vowel data and findings ----
        egui::SidePanel::left("vowel_panel")
            .default_width(300.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: summary table ----
        if self.state.report.is_some() {
            egui::TopBottomPanel::bottom("report_table")
                .resizable(true)
                .show(ctx, |ui| {
                    panels::report_table(ui, &self.state);
                });
        }

        // ---- Central panel: vowel chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::vowel_chart(ui, &self.state);
        });
    }
}
