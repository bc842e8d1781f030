use thiserror::Error;

use crate::data::model::{Spectrum, Window};

// ---------------------------------------------------------------------------
// Range selection
// ---------------------------------------------------------------------------

/// A mass range that cannot produce a usable window.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("inverted mass range {lo}:{hi} (min must not exceed max)")]
    InvertedRange { lo: i64, hi: i64 },
    #[error("no data points in mass range {lo}:{hi}")]
    EmptySelection { lo: i64, hi: i64 },
}

/// Cut the sub-range of `spectrum` whose m/z values fall in the unit-mass
/// interval `[lo, hi]`, widened by half a unit on each side.
///
/// The kept interval is `lo - 0.5 <= mz < hi + 0.5`: closed below, open
/// above. The widening keeps near-integer masses with small calibration
/// error from falling just outside the requested range.
///
/// The result is a fresh [`Window`] re-indexed from zero; `spectrum` is left
/// untouched and can be selected from again.
pub fn select_range(spectrum: &Spectrum, lo: i64, hi: i64) -> Result<Window, SelectionError> {
    if lo > hi {
        return Err(SelectionError::InvertedRange { lo, hi });
    }

    let min_mz = lo as f64 - 0.5;
    let max_mz = hi as f64 + 0.5;

    let mut mz = Vec::new();
    let mut intensity = Vec::new();
    for (&m, &y) in spectrum.mz.iter().zip(spectrum.intensity.iter()) {
        if min_mz <= m && m < max_mz {
            mz.push(m);
            intensity.push(y);
        }
    }

    if mz.is_empty() {
        return Err(SelectionError::EmptySelection { lo, hi });
    }
    Ok(Window { mz, intensity })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn spectrum(mz: &[f64], intensity: &[f64]) -> Spectrum {
        Spectrum {
            mz: mz.to_vec(),
            intensity: intensity.to_vec(),
        }
    }

    #[test]
    fn bounds_are_widened_and_half_open() {
        // 9.5 sits exactly on the widened lower bound (kept), 10.5 exactly
        // on the widened upper bound (dropped).
        let s = spectrum(&[9.4, 9.5, 10.0, 10.4, 10.5], &[1.0, 2.0, 3.0, 4.0, 5.0]);
        let w = select_range(&s, 10, 10).unwrap();
        assert_eq!(w.mz, vec![9.5, 10.0, 10.4]);
        assert_eq!(w.intensity, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn window_preserves_order_and_pairing() {
        let s = spectrum(&[1.0, 2.0, 3.0, 4.0, 5.0], &[10.0, 20.0, 30.0, 40.0, 50.0]);
        let w = select_range(&s, 2, 4).unwrap();
        assert_eq!(w.mz, vec![2.0, 3.0, 4.0]);
        assert_eq!(w.intensity, vec![20.0, 30.0, 40.0]);
        assert_eq!(w.len(), 3);
    }

    #[test]
    fn single_unit_mass_example() {
        let s = spectrum(&[9.4, 9.6, 10.0, 10.4, 10.6], &[0.0, 5.0, 20.0, 5.0, 0.0]);
        let w = select_range(&s, 10, 10).unwrap();
        assert_eq!(w.mz, vec![9.6, 10.0, 10.4]);
        assert_eq!(w.intensity, vec![5.0, 20.0, 5.0]);
    }

    #[test]
    fn reselection_is_idempotent() {
        let s = spectrum(&[9.4, 9.6, 10.0, 10.4, 10.6], &[0.0, 5.0, 20.0, 5.0, 0.0]);
        let w = select_range(&s, 10, 10).unwrap();
        let again = select_range(
            &Spectrum {
                mz: w.mz.clone(),
                intensity: w.intensity.clone(),
            },
            10,
            10,
        )
        .unwrap();
        assert_eq!(again, w);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let s = spectrum(&[1.0, 2.0, 3.0], &[0.0; 3]);
        assert_eq!(
            select_range(&s, 3, 1),
            Err(SelectionError::InvertedRange { lo: 3, hi: 1 })
        );
    }

    #[test]
    fn out_of_range_selection_is_empty() {
        let s = spectrum(&[1.0, 2.0, 3.0], &[0.0; 3]);
        assert_eq!(
            select_range(&s, 100, 200),
            Err(SelectionError::EmptySelection { lo: 100, hi: 200 })
        );
    }

    #[test]
    fn parent_spectrum_is_unchanged() {
        let s = spectrum(&[1.0, 2.0, 3.0], &[5.0, 6.0, 7.0]);
        let before = s.clone();
        let _ = select_range(&s, 2, 2).unwrap();
        assert_eq!(s, before);
    }
}
