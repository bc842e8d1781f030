use eframe::egui::{Color32, Ui};
use egui_plot::{HLine, Line, LineStyle, MarkerShape, Plot, PlotPoints, Points};

use crate::state::SessionState;

// ---------------------------------------------------------------------------
// Spectrum plot (central panel)
// ---------------------------------------------------------------------------

/// Render the windowed spectrum with peak markers and the height-limit line.
pub fn spectrum_plot(ui: &mut Ui, session: &SessionState) {
    let window = session.window();

    Plot::new("spectrum_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label("m/z")
        .y_axis_label("Intensity")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let trace: PlotPoints = window
                .mz
                .iter()
                .zip(window.intensity.iter())
                .map(|(&mz, &y)| [mz, y])
                .collect();

            plot_ui.line(
                Line::new(trace)
                    .name("Sum spectrum")
                    .color(Color32::LIGHT_BLUE)
                    .width(1.5),
            );

            let markers: PlotPoints = session
                .peaks()
                .iter()
                .map(|&i| [window.mz[i], window.intensity[i]])
                .collect();

            plot_ui.points(
                Points::new(markers)
                    .name("Peaks")
                    .shape(MarkerShape::Cross)
                    .radius(5.0)
                    .color(Color32::RED),
            );

            plot_ui.hline(
                HLine::new(session.height_limit())
                    .color(Color32::GRAY)
                    .style(LineStyle::dashed_loose()),
            );
        });
}
