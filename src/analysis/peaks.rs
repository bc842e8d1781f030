// ---------------------------------------------------------------------------
// Peak detection
// ---------------------------------------------------------------------------

/// Find local maxima in `intensity` that reach `height_limit`.
///
/// A position is a peak when both neighbors are strictly lower. A flat
/// plateau (a run of equal values strictly above both outer neighbors)
/// collapses to a single marker at the floored midpoint of the run, so
/// adjacent tied samples never produce duplicate markers.
///
/// The first and last position are never reported: they lack a two-sided
/// neighbor comparison. Fewer than 3 samples therefore always yields an
/// empty result.
///
/// Returned indices are strictly increasing with no duplicates, and the
/// function is pure, so it is safe to re-run on every slider event.
pub fn find_peaks(intensity: &[f64], height_limit: f64) -> Vec<usize> {
    let mut peaks = Vec::new();
    if intensity.len() < 3 {
        return peaks;
    }

    let last = intensity.len() - 1;
    let mut i = 1;
    while i < last {
        if intensity[i - 1] < intensity[i] {
            // Walk ahead over the plateau, if any. Exact equality is
            // intentional: a plateau is a run of identical samples.
            let mut ahead = i + 1;
            while ahead < last && intensity[ahead] == intensity[i] {
                ahead += 1;
            }
            if intensity[ahead] < intensity[i] {
                let left_edge = i;
                let right_edge = ahead - 1;
                let mid = (left_edge + right_edge) / 2;
                if intensity[mid] >= height_limit {
                    peaks.push(mid);
                }
                i = ahead;
            }
        }
        i += 1;
    }

    peaks
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_sharp_peak() {
        assert_eq!(find_peaks(&[5.0, 20.0, 5.0], 10.0), vec![1]);
    }

    #[test]
    fn height_limit_filters_candidates() {
        let data = [0.0, 5.0, 0.0, 50.0, 0.0, 7.0, 0.0];
        assert_eq!(find_peaks(&data, 0.0), vec![1, 3, 5]);
        assert_eq!(find_peaks(&data, 6.0), vec![3, 5]);
        assert_eq!(find_peaks(&data, 50.0), vec![3]);
        assert_eq!(find_peaks(&data, 51.0), Vec::<usize>::new());
    }

    #[test]
    fn plateau_collapses_to_midpoint() {
        // Plateau of 100 spanning positions 5..=7.
        let data = [0.0, 10.0, 30.0, 60.0, 90.0, 100.0, 100.0, 100.0, 90.0, 10.0];
        assert_eq!(find_peaks(&data, 50.0), vec![6]);
    }

    #[test]
    fn even_plateau_takes_floored_midpoint() {
        // Plateau at positions 2..=3: midpoint floors to 2.
        let data = [0.0, 1.0, 5.0, 5.0, 1.0, 0.0];
        assert_eq!(find_peaks(&data, 0.0), vec![2]);
    }

    #[test]
    fn ascending_shelf_is_not_a_peak() {
        let data = [0.0, 1.0, 1.0, 2.0, 0.0];
        assert_eq!(find_peaks(&data, 0.0), vec![3]);
    }

    #[test]
    fn endpoints_are_never_reported() {
        assert_eq!(find_peaks(&[0.0, 1.0, 2.0], 0.0), Vec::<usize>::new());
        assert_eq!(find_peaks(&[2.0, 1.0, 0.0], 0.0), Vec::<usize>::new());
        // Plateau touching the last sample has no right neighbor below it.
        assert_eq!(find_peaks(&[0.0, 5.0, 5.0], 0.0), Vec::<usize>::new());
    }

    #[test]
    fn short_input_yields_nothing() {
        assert_eq!(find_peaks(&[], 0.0), Vec::<usize>::new());
        assert_eq!(find_peaks(&[7.0], 0.0), Vec::<usize>::new());
        assert_eq!(find_peaks(&[7.0, 9.0], 0.0), Vec::<usize>::new());
    }

    #[test]
    fn raising_the_limit_never_adds_peaks() {
        let data = [0.0, 12.0, 3.0, 40.0, 40.0, 2.0, 9.0, 1.0, 25.0, 0.0];
        let mut previous = find_peaks(&data, 0.0);
        for limit in [5.0, 10.0, 26.0, 41.0] {
            let current = find_peaks(&data, limit);
            assert!(current.iter().all(|i| previous.contains(i)));
            previous = current;
        }
    }

    #[test]
    fn indices_are_strictly_increasing() {
        let data = [0.0, 8.0, 0.0, 8.0, 0.0, 8.0, 0.0];
        let peaks = find_peaks(&data, 0.0);
        assert_eq!(peaks, vec![1, 3, 5]);
        assert!(peaks.windows(2).all(|p| p[0] < p[1]));
    }
}
