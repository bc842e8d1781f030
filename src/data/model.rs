// ---------------------------------------------------------------------------
// Spectrum – the full summed spectrum as loaded from file
// ---------------------------------------------------------------------------

/// A summed mass spectrum: one intensity value per m/z axis point.
///
/// Invariants (enforced by the loader): `mz` and `intensity` have the same
/// length, and `mz` is strictly increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    /// Mass-to-charge axis (x).
    pub mz: Vec<f64>,
    /// Summed intensity (y) – same length as `mz`.
    pub intensity: Vec<f64>,
}

impl Spectrum {
    /// Number of axis points.
    pub fn len(&self) -> usize {
        self.mz.len()
    }

    /// Whether the spectrum has no points.
    pub fn is_empty(&self) -> bool {
        self.mz.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Window – the analysed sub-range of a Spectrum
// ---------------------------------------------------------------------------

/// A contiguous sub-range of a [`Spectrum`] over an m/z interval,
/// re-indexed from zero.
///
/// Produced fresh by `analysis::select::select_range` so the parent spectrum
/// stays untouched. Once a session starts, its window never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    /// Mass-to-charge axis of the kept points.
    pub mz: Vec<f64>,
    /// Intensity of the kept points – same length as `mz`.
    pub intensity: Vec<f64>,
}

impl Window {
    /// Number of points in the window.
    pub fn len(&self) -> usize {
        self.mz.len()
    }

    /// Whether the window has no points.
    pub fn is_empty(&self) -> bool {
        self.mz.is_empty()
    }
}
