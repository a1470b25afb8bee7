//! Pure chart geometry: scale bounds, gridline steps, and projection of
//! a nullable series into canvas-space polyline segments.
//!
//! The scale always starts at zero, sample points are spread evenly
//! across the full width, and a `null` sample breaks the line into
//! separate segments instead of interpolating across the gap.

/// Chart colors, shared by the three stats charts.
pub mod colors {
    /// Stroke for the first series of each pair.
    pub const PRIMARY_STROKE: &str = "rgb(217, 83, 79)";
    /// Area fill for the first series of each pair.
    pub const PRIMARY_FILL: &str = "rgba(217, 83, 79, 0.75)";
    /// Stroke for the second series of each pair.
    pub const SECONDARY_STROKE: &str = "rgb(51, 122, 183)";
    /// Area fill for the second series of each pair.
    pub const SECONDARY_FILL: &str = "rgba(51, 122, 183, 0.75)";
}

/// Largest value across the given series, floored at zero so the scale
/// is usable even for empty or all-null data.
#[must_use]
pub fn series_max(series: &[&[Option<f64>]]) -> f64 {
    series
        .iter()
        .flat_map(|values| values.iter().flatten())
        .fold(0.0_f64, |max, value| max.max(*value))
}

/// Step between horizontal gridlines: the smallest 1, 2, or 5 times a
/// power of ten that divides the scale into at most five bands.
#[must_use]
pub fn tick_step(max: f64) -> f64 {
    if max <= 0.0 {
        return 1.0;
    }
    let target = max / 5.0;
    let mut step = 10.0_f64.powf(target.log10().floor());
    for factor in [1.0, 2.0, 5.0, 10.0] {
        if step * factor >= target {
            step *= factor;
            break;
        }
    }
    step
}

/// Project a series onto a `width` by `height` canvas with a zero-based
/// scale topping out at `max`. Consecutive present samples join into one
/// segment; a `null` starts a new one. Single-point segments are kept so
/// an isolated sample still gets a dot-sized stroke.
#[must_use]
pub fn polyline_segments(
    series: &[Option<f64>],
    width: f64,
    height: f64,
    max: f64,
) -> Vec<Vec<(f64, f64)>> {
    if max <= 0.0 || series.is_empty() {
        return Vec::new();
    }
    let step = if series.len() > 1 {
        width / (series.len() - 1) as f64
    } else {
        0.0
    };

    let mut segments = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    for (index, sample) in series.iter().enumerate() {
        match sample {
            Some(value) => {
                let x = step * index as f64;
                let y = height - (value / max).clamp(0.0, 1.0) * height;
                current.push((x, y));
            }
            None => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::{polyline_segments, series_max, tick_step};

    #[test]
    fn max_spans_all_series_and_ignores_nulls() {
        let a = [Some(1.0), None, Some(3.0)];
        let b = [Some(2.0), Some(7.0), None];
        assert_eq!(series_max(&[&a, &b]), 7.0);
    }

    #[test]
    fn all_null_series_scale_to_zero() {
        let a: [Option<f64>; 3] = [None, None, None];
        assert_eq!(series_max(&[&a]), 0.0);
        assert!(polyline_segments(&a, 100.0, 50.0, series_max(&[&a])).is_empty());
    }

    #[test]
    fn max_projects_to_the_top_and_zero_to_the_bottom() {
        let series = [Some(0.0), Some(10.0)];
        let segments = polyline_segments(&series, 100.0, 50.0, 10.0);
        assert_eq!(segments, vec![vec![(0.0, 50.0), (100.0, 0.0)]]);
    }

    #[test]
    fn nulls_split_the_line_instead_of_interpolating() {
        let series = [Some(1.0), Some(2.0), None, Some(4.0)];
        let segments = polyline_segments(&series, 90.0, 40.0, 4.0);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].len(), 2);
        assert_eq!(segments[1].len(), 1);
        // Fourth sample sits at the right edge despite the gap.
        assert!((segments[1][0].0 - 90.0).abs() < 1e-9);
    }

    #[test]
    fn single_sample_lands_on_the_left_edge() {
        let series = [Some(5.0)];
        let segments = polyline_segments(&series, 100.0, 50.0, 5.0);
        assert_eq!(segments, vec![vec![(0.0, 0.0)]]);
    }

    #[test]
    fn tick_steps_follow_the_one_two_five_ladder() {
        assert_eq!(tick_step(10.0), 2.0);
        assert_eq!(tick_step(100.0), 20.0);
        assert_eq!(tick_step(7.0), 2.0);
        assert_eq!(tick_step(23.0), 5.0);
        assert_eq!(tick_step(0.0), 1.0);
        assert_eq!(tick_step(4.0), 1.0);
    }
}
