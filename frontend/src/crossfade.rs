//! Scroll-linked background slideshow.
//!
//! The page scroll is reduced to a single progress value in `[0, 1]` and every
//! photo gets an opacity and a zoom derived from it. The range is cut into
//! `N - 1` equal segments; photo `i` peaks at `i / (N - 1)` and fades against
//! its neighbours on either side, so two adjacent layers always add up to a
//! fully covered background.

pub const SCALE_FROM: f64 = 1.03;
pub const SCALE_TO: f64 = 1.12;

pub const DIM_FROM: f64 = 0.45;
pub const DIM_TO: f64 = 0.55;

/// Piecewise linear mapping of `input` over `stops` onto `values`.
///
/// Outside the first/last stop the edge value is held. Zero-width spans jump
/// straight to the right-hand value instead of dividing by zero.
pub fn interpolate(input: f64, stops: &[f64], values: &[f64]) -> f64 {
    let len = stops.len().min(values.len());
    if len == 0 {
        return 0.0;
    }
    let input = if input.is_nan() { stops[0] } else { input };

    if input <= stops[0] {
        return values[0];
    }
    if input >= stops[len - 1] {
        return values[len - 1];
    }

    for i in 0..len - 1 {
        let (start, end) = (stops[i], stops[i + 1]);
        if input <= end {
            let span = end - start;
            if span <= f64::EPSILON {
                return values[i + 1];
            }
            let t = (input - start) / span;
            return values[i] + (values[i + 1] - values[i]) * t;
        }
    }
    values[len - 1]
}

/// Normalised page scroll. A page that does not scroll sits at `0`.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let range = document_height - viewport_height;
    if range <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / range).clamp(0.0, 1.0)
}

/// Window of one photo: fades in over `start..peak`, out over `peak..end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: f64,
    pub peak: f64,
    pub end: f64,
}

impl Segment {
    pub fn of(index: usize, count: usize) -> Segment {
        if count <= 1 {
            return Segment { start: 0.0, peak: 0.0, end: 1.0 };
        }
        let step = 1.0 / (count - 1) as f64;
        let i = index as f64;
        Segment {
            start: ((i - 1.0) * step).max(0.0),
            peak: (i * step).min(1.0),
            end: ((i + 1.0) * step).min(1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyle {
    pub opacity: f64,
    pub scale: f64,
}

impl LayerStyle {
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {:.4}; transform: scale({:.4});",
            self.opacity, self.scale
        )
    }
}

pub fn layer_style(progress: f64, index: usize, count: usize) -> LayerStyle {
    let seg = Segment::of(index, count);
    let scale = interpolate(progress, &[seg.start, seg.end], &[SCALE_FROM, SCALE_TO]);

    let opacity = if count <= 1 {
        1.0
    } else if index == 0 {
        interpolate(progress, &[0.0, seg.peak, seg.end], &[1.0, 1.0, 0.0])
    } else if index == count - 1 {
        interpolate(progress, &[seg.start, seg.peak, 1.0], &[0.0, 1.0, 1.0])
    } else {
        interpolate(progress, &[seg.start, seg.peak, seg.end], &[0.0, 1.0, 0.0])
    };

    LayerStyle { opacity, scale }
}

/// Styles for every layer of an `count`-photo stack. All layers are always
/// returned, even fully transparent ones, since they stay mounted.
pub fn layer_styles(progress: f64, count: usize) -> Vec<LayerStyle> {
    (0..count).map(|i| layer_style(progress, i, count)).collect()
}

/// Opacity of the darkening gradient laid over the photos.
pub fn dim_opacity(progress: f64) -> f64 {
    interpolate(progress, &[0.0, 1.0], &[DIM_FROM, DIM_TO])
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn samples() -> impl Iterator<Item = f64> {
        (0..=400).map(|i| i as f64 / 400.0)
    }

    #[test]
    fn test_interpolate_clamps_outside_stops() {
        assert_eq!(interpolate(-0.5, &[0.0, 1.0], &[2.0, 4.0]), 2.0);
        assert_eq!(interpolate(1.5, &[0.0, 1.0], &[2.0, 4.0]), 4.0);
        assert!((interpolate(0.25, &[0.0, 1.0], &[2.0, 4.0]) - 2.5).abs() < EPS);
    }

    #[test]
    fn test_interpolate_handles_zero_width_span() {
        let v = interpolate(0.1, &[0.0, 0.0, 0.5], &[1.0, 1.0, 0.0]);
        assert!((v - 0.8).abs() < EPS);
        assert_eq!(interpolate(0.0, &[0.0, 0.0, 0.5], &[1.0, 1.0, 0.0]), 1.0);
    }

    #[test]
    fn test_segments_are_clamped_to_unit_range() {
        let first = Segment::of(0, 8);
        assert_eq!(first.start, 0.0);
        assert_eq!(first.peak, 0.0);
        let last = Segment::of(7, 8);
        assert_eq!(last.peak, 1.0);
        assert_eq!(last.end, 1.0);
    }

    #[test]
    fn test_first_photo_is_visible_at_start_and_last_at_end() {
        for n in 2..=10 {
            let start = layer_styles(0.0, n);
            assert_eq!(start[0].opacity, 1.0);
            let end = layer_styles(1.0, n);
            assert_eq!(end[n - 1].opacity, 1.0);
            assert_eq!(end[0].opacity, 0.0);
        }
    }

    #[test]
    fn test_crossfade_has_no_gap() {
        for n in 2..=9 {
            for p in samples() {
                let styles = layer_styles(p, n);
                let total: f64 = styles.iter().map(|s| s.opacity).sum();
                assert!(
                    (total - 1.0).abs() < 1e-6,
                    "n={} p={} total opacity {}",
                    n,
                    p,
                    total
                );
                assert!(styles.iter().any(|s| s.opacity >= 0.5 - EPS));
            }
        }
    }

    #[test]
    fn test_each_photo_peaks_at_its_own_stop() {
        let n = 8;
        for i in 0..n {
            let peak = i as f64 / (n - 1) as f64;
            assert!((layer_style(peak, i, n).opacity - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_middle_photo_is_triangular() {
        let n = 5;
        let i = 2;
        assert_eq!(layer_style(0.25, i, n).opacity, 0.0);
        assert!((layer_style(0.375, i, n).opacity - 0.5).abs() < EPS);
        assert!((layer_style(0.625, i, n).opacity - 0.5).abs() < EPS);
        assert_eq!(layer_style(0.75, i, n).opacity, 0.0);
    }

    #[test]
    fn test_scale_stays_within_zoom_bounds() {
        for n in 1..=8 {
            for p in samples() {
                for s in layer_styles(p, n) {
                    assert!(s.scale >= SCALE_FROM - EPS && s.scale <= SCALE_TO + EPS);
                    assert!((0.0..=1.0).contains(&s.opacity));
                }
            }
        }
    }

    #[test]
    fn test_degenerate_stacks() {
        assert!(layer_styles(0.5, 0).is_empty());
        let single = layer_styles(0.5, 1);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].opacity, 1.0);
    }

    #[test]
    fn test_scroll_progress_is_clamped() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(300.0, 1400.0, 800.0), 0.5);
        assert_eq!(scroll_progress(900.0, 1400.0, 800.0), 1.0);
        assert_eq!(scroll_progress(-20.0, 1400.0, 800.0), 0.0);
    }

    #[test]
    fn test_dim_overlay_ramps() {
        assert_eq!(dim_opacity(0.0), DIM_FROM);
        assert_eq!(dim_opacity(1.0), DIM_TO);
        assert!((dim_opacity(0.5) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_layer_css() {
        let css = LayerStyle { opacity: 0.5, scale: 1.03 }.to_css();
        assert_eq!(css, "opacity: 0.5000; transform: scale(1.0300);");
    }
}
