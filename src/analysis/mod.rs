/// Analysis layer: range selection and peak detection.
///
/// Both operations are pure functions over the data-layer types, so the UI
/// can re-run them on every slider event without bookkeeping.

pub mod peaks;
pub mod select;

#[cfg(test)]
mod tests {
    use super::peaks::find_peaks;
    use super::select::select_range;
    use crate::data::model::Spectrum;

    #[test]
    fn selected_window_feeds_detection() {
        let spectrum = Spectrum {
            mz: vec![9.4, 9.6, 10.0, 10.4, 10.6],
            intensity: vec![0.0, 5.0, 20.0, 5.0, 0.0],
        };
        let window = select_range(&spectrum, 10, 10).unwrap();
        assert_eq!(window.len(), 3);
        assert_eq!(find_peaks(&window.intensity, 10.0), vec![1]);
    }
}
