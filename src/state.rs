use crate::analysis::peaks::find_peaks;
use crate::data::model::Window;

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Height limit applied before the operator first touches the slider.
pub const DEFAULT_HEIGHT_LIMIT: f64 = 1e4;

/// Upper bound of the height-limit control.
pub const HEIGHT_LIMIT_MAX: f64 = 2e7;

/// Step granularity of the height-limit control.
pub const HEIGHT_LIMIT_STEP: f64 = 10.0;

/// One interactive session over a fixed window.
///
/// The slider handler is the only writer; the plot and status bar read a
/// snapshot each frame. `height_limit` and `peaks` are only ever replaced
/// together, so the rendered markers always match the displayed limit.
pub struct SessionState {
    mass_range: (i64, i64),
    window: Window,
    height_limit: f64,
    peaks: Vec<usize>,
}

impl SessionState {
    /// Start a session: runs the initial detection at
    /// [`DEFAULT_HEIGHT_LIMIT`] so the first frame already shows peaks.
    pub fn new(window: Window, mass_range: (i64, i64)) -> Self {
        let peaks = find_peaks(&window.intensity, DEFAULT_HEIGHT_LIMIT);
        Self {
            mass_range,
            window,
            height_limit: DEFAULT_HEIGHT_LIMIT,
            peaks,
        }
    }

    /// The analysed window. Fixed for the lifetime of the session.
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// The unit-mass range the operator asked for at startup.
    pub fn mass_range(&self) -> (i64, i64) {
        self.mass_range
    }

    /// The current height limit.
    pub fn height_limit(&self) -> f64 {
        self.height_limit
    }

    /// Window indices of peaks at the current height limit.
    pub fn peaks(&self) -> &[usize] {
        &self.peaks
    }

    /// Handle a height-limit change from the slider.
    ///
    /// Clamps to the control domain, snaps to the step grid, and recomputes
    /// the whole peak set when the effective value changed. The old peak set
    /// is discarded, never patched.
    pub fn set_height_limit(&mut self, value: f64) {
        let value = snap_to_step(value.clamp(0.0, HEIGHT_LIMIT_MAX));
        if (value - self.height_limit).abs() < HEIGHT_LIMIT_STEP / 2.0 {
            return;
        }
        self.peaks = find_peaks(&self.window.intensity, value);
        self.height_limit = value;
    }
}

fn snap_to_step(value: f64) -> f64 {
    (value / HEIGHT_LIMIT_STEP).round() * HEIGHT_LIMIT_STEP
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
