use eframe::egui;

use crate::state::SessionState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PeakScopeApp {
    pub session: SessionState,
}

impl PeakScopeApp {
    pub fn new(session: SessionState) -> Self {
        Self { session }
    }
}

impl eframe::App for PeakScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &self.session);
        });

        // ---- Bottom panel: height-limit slider ----
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            panels::height_limit_control(ui, &mut self.session);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::spectrum_plot(ui, &self.session);
        });
    }
}
