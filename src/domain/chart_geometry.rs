//! Chart coordinate math.
//!
//! This module provides pure functions for:
//! - Mapping data values onto screen coordinates and back
//! - Picking padded data ranges and "nice" axis ticks
//! - Finding the data point nearest to the cursor
//!
//! These functions are stateless and can be tested independently.

/// Linearly maps `value` from `domain` onto `range`.
///
/// A degenerate domain maps everything to the start of the range.
pub fn map_linear(value: f64, domain: (f64, f64), range: (f32, f32)) -> f32 {
    let span = domain.1 - domain.0;
    if span == 0.0 {
        return range.0;
    }
    let normalized = (value - domain.0) / span;
    range.0 + (normalized as f32) * (range.1 - range.0)
}

/// Inverse of [`map_linear`].
pub fn unmap_linear(position: f32, domain: (f64, f64), range: (f32, f32)) -> f64 {
    let span = range.1 - range.0;
    if span == 0.0 {
        return domain.0;
    }
    let normalized = ((position - range.0) / span) as f64;
    domain.0 + normalized * (domain.1 - domain.0)
}

/// Smallest step of the form {1, 2, 5} x 10^k that is >= `raw`.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let factor = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

/// Tick positions covering `[min, max]` with roughly `target` intervals.
///
/// Ticks are multiples of a [`nice_step`] and all lie inside the range.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || max <= min {
        return vec![min];
    }
    let step = nice_step((max - min) / target.max(1) as f64);
    let first = (min / step).ceil() * step;

    let mut ticks: Vec<f64> = Vec::new();
    // Bounded: at large magnitudes adding a step can round back to the same tick
    for i in 0..=target.max(1) * 4 {
        let tick = first + i as f64 * step;
        // Tolerance absorbs float drift at the top end
        if tick > max + step * 1e-9 {
            break;
        }
        if ticks.last().is_some_and(|&last| tick <= last) {
            break;
        }
        ticks.push(tick);
    }
    ticks
}

/// `[lo, hi]` widened by `fraction` of its span on both sides.
///
/// A flat range is widened by `fraction` of its magnitude (or by 1 at zero).
pub fn padded_range(lo: f64, hi: f64, fraction: f64) -> (f64, f64) {
    let span = hi - lo;
    let pad = if span > 0.0 {
        span * fraction
    } else if lo != 0.0 {
        lo.abs() * fraction
    } else {
        1.0
    };
    (lo - pad, hi + pad)
}

/// Min and max of `values`, or `None` if empty.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Indices of the labels to draw so that no two are closer than `min_gap`.
///
/// `positions` must be sorted. The first label is always kept; a later one is
/// kept only when it clears the last kept label.
pub fn spaced_label_indices(positions: &[f64], min_gap: f64) -> Vec<usize> {
    let mut kept = Vec::new();
    let mut last: Option<f64> = None;
    for (index, &x) in positions.iter().enumerate() {
        if last.map_or(true, |prev| x - prev >= min_gap) {
            kept.push(index);
            last = Some(x);
        }
    }
    kept
}

/// Index of the x value closest to `x`.
pub fn nearest_index(xs: &[f64], x: f64) -> Option<usize> {
    xs.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - x).abs().total_cmp(&(*b - x).abs()))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_and_unmap() {
        let y = map_linear(250.0, (200.0, 300.0), (100.0, 0.0));
        assert_eq!(y, 50.0);
        assert_eq!(unmap_linear(50.0, (200.0, 300.0), (100.0, 0.0)), 250.0);
        assert_eq!(map_linear(5.0, (1.0, 1.0), (10.0, 20.0)), 10.0);
    }

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(0.7), 1.0);
        assert_eq!(nice_step(13.0), 20.0);
        assert_eq!(nice_step(26.0), 50.0);
        assert_eq!(nice_step(60.0), 100.0);
        assert_eq!(nice_step(-3.0), 1.0);
    }

    #[test]
    fn test_nice_ticks_inside_range() {
        assert_eq!(nice_ticks(226.2, 360.0, 5), vec![250.0, 300.0, 350.0]);
        assert_eq!(
            nice_ticks(226.2, 360.0, 7),
            vec![240.0, 260.0, 280.0, 300.0, 320.0, 340.0, 360.0]
        );
        assert_eq!(nice_ticks(5.0, 5.0, 4), vec![5.0]);
    }

    #[test]
    fn test_nice_ticks_at_huge_magnitude_terminates() {
        let (lo, hi) = padded_range(1e20, 1e20 + 20000.0, 0.08);
        let ticks = nice_ticks(lo, hi, 5);
        assert!(!ticks.is_empty());
        assert!(ticks.len() <= 21);
        assert!(ticks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_spaced_label_indices() {
        // Two events a day apart on a two-month axis
        assert_eq!(spaced_label_indices(&[0.0, 62.0, 63.0], 5.0), vec![0, 1]);
        assert_eq!(spaced_label_indices(&[0.0, 62.0, 63.0], 0.5), vec![0, 1, 2]);
        assert_eq!(spaced_label_indices(&[0.0, 1.0, 2.0, 3.0, 4.0], 2.0), vec![0, 2, 4]);
        assert!(spaced_label_indices(&[], 1.0).is_empty());
    }

    #[test]
    fn test_padded_range() {
        assert_eq!(padded_range(0.0, 10.0, 0.1), (-1.0, 11.0));
        assert_eq!(padded_range(50.0, 50.0, 0.1), (45.0, 55.0));
        assert_eq!(padded_range(0.0, 0.0, 0.1), (-1.0, 1.0));
    }

    #[test]
    fn test_extent_and_nearest() {
        assert_eq!(extent([3.0, -1.0, 7.5]), Some((-1.0, 7.5)));
        assert_eq!(extent(Vec::<f64>::new()), None);
        assert_eq!(nearest_index(&[0.0, 1.0, 4.0], 2.9), Some(2));
        assert_eq!(nearest_index(&[], 1.0), None);
    }
}
