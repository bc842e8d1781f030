use eframe::egui::{self, Ui};

use crate::state::{HEIGHT_LIMIT_MAX, HEIGHT_LIMIT_STEP, SessionState};

// ---------------------------------------------------------------------------
// Top bar – session status
// ---------------------------------------------------------------------------

/// Render the status bar: active mass range, window size, peak count.
pub fn status_bar(ui: &mut Ui, session: &SessionState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("m/z – sum spectrum");

        ui.separator();

        let (lo, hi) = session.mass_range();
        ui.label(format!(
            "mass range {lo}:{hi}, {} points",
            session.window().len()
        ));

        ui.separator();

        ui.label(format!(
            "{} peaks at height limit {:.0}",
            session.peaks().len(),
            session.height_limit()
        ));
    });
}

// ---------------------------------------------------------------------------
// Bottom panel – height-limit slider
// ---------------------------------------------------------------------------

/// Render the height-limit slider.
///
/// The slider edits a local copy; the session only sees the value through
/// `set_height_limit`, which re-runs detection before the plot is drawn, so
/// a frame never mixes an old peak set with a new limit.
pub fn height_limit_control(ui: &mut Ui, session: &mut SessionState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Height limit");

        ui.spacing_mut().slider_width = (ui.available_width() - 120.0).max(100.0);

        let mut limit = session.height_limit();
        let slider = egui::Slider::new(&mut limit, 0.0..=HEIGHT_LIMIT_MAX)
            .step_by(HEIGHT_LIMIT_STEP)
            .fixed_decimals(0);

        if ui.add(slider).changed() {
            session.set_height_limit(limit);
        }
    });
}
