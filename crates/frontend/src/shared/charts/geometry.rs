//! Pure layout math for the SVG charts

use std::f64::consts::{PI, TAU};

const EPSILON: f64 = 1e-9;

/// Maps a data interval onto a pixel interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// A degenerate domain maps everything to the middle of the range
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if (d1 - d0).abs() < EPSILON {
            (r0 + r1) / 2.0
        } else {
            r0 + (value - d0) / (d1 - d0) * (r1 - r0)
        }
    }
}

/// Tick step of 1, 2 or 5 times a power of ten giving about `target` ticks
pub fn nice_step(span: f64, target: usize) -> f64 {
    if !span.is_finite() || span <= 0.0 || target == 0 {
        return 1.0;
    }
    let raw = span / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Evenly spaced round ticks covering `[min, max]`
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    if (hi - lo).abs() < EPSILON {
        return vec![lo];
    }

    let step = nice_step(hi - lo, target);
    let start = (lo / step).floor() * step;
    let end = (hi / step).ceil() * step;
    let count = ((end - start) / step).round() as usize;
    (0..=count).map(|i| start + i as f64 * step).collect()
}

/// Point at `angle` radians clockwise from twelve o'clock
pub fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.sin(), cy - radius * angle.cos())
}

/// SVG path of a ring segment between two angles.
///
/// A segment covering the whole circle is drawn as two concentric circles and
/// needs `fill-rule="evenodd"`.
pub fn donut_slice_path(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    let sweep = end - start;

    if sweep >= TAU - EPSILON {
        let (top_x, top_y) = polar(cx, cy, outer, 0.0);
        let (bottom_x, bottom_y) = polar(cx, cy, outer, PI);
        let (inner_top_x, inner_top_y) = polar(cx, cy, inner, 0.0);
        let (inner_bottom_x, inner_bottom_y) = polar(cx, cy, inner, PI);
        return format!(
            "M {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} Z \
             M {:.2} {:.2} A {ri:.2} {ri:.2} 0 1 0 {:.2} {:.2} A {ri:.2} {ri:.2} 0 1 0 {:.2} {:.2} Z",
            top_x,
            top_y,
            bottom_x,
            bottom_y,
            top_x,
            top_y,
            inner_top_x,
            inner_top_y,
            inner_bottom_x,
            inner_bottom_y,
            inner_top_x,
            inner_top_y,
            r = outer,
            ri = inner,
        );
    }

    let large_arc = if sweep > PI { 1 } else { 0 };
    let (outer_start_x, outer_start_y) = polar(cx, cy, outer, start);
    let (outer_end_x, outer_end_y) = polar(cx, cy, outer, end);
    let (inner_end_x, inner_end_y) = polar(cx, cy, inner, end);
    let (inner_start_x, inner_start_y) = polar(cx, cy, inner, start);

    format!(
        "M {:.2} {:.2} A {r:.2} {r:.2} 0 {large} 1 {:.2} {:.2} L {:.2} {:.2} A {ri:.2} {ri:.2} 0 {large} 0 {:.2} {:.2} Z",
        outer_start_x,
        outer_start_y,
        outer_end_x,
        outer_end_y,
        inner_end_x,
        inner_end_y,
        inner_start_x,
        inner_start_y,
        r = outer,
        ri = inner,
        large = large_arc,
    )
}

/// Greedy word wrap to lines of at most `max_chars` characters.
///
/// A single word longer than the limit gets a line of its own and is not cut.
pub fn wrap_label(label: &str, max_chars: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in label.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Font size for text inside a donut slice, smaller for thin slices
pub fn slice_font_size(share: f64) -> f64 {
    (6.0 + share.clamp(0.0, 1.0) * 40.0).clamp(7.0, 11.0)
}

/// Font size that fits `lines` lines of text into `available` pixels
pub fn fit_font_size(available: f64, lines: usize, preferred: f64) -> f64 {
    if lines == 0 {
        return preferred;
    }
    (available / (lines as f64 * 1.2)).clamp(6.0, preferred)
}

/// Tick text without a trailing ".0" for whole numbers
pub fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < EPSILON {
        format!("{}", value.round() as i64)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new((0.0, 100.0), (200.0, 600.0));
        assert_eq!(scale.map(0.0), 200.0);
        assert_eq!(scale.map(50.0), 400.0);
        assert_eq!(scale.map(100.0), 600.0);

        // inverted range, as used for y axes
        let scale = LinearScale::new((0.0, 10.0), (400.0, 50.0));
        assert_eq!(scale.map(10.0), 50.0);

        let flat = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(flat.map(5.0), 50.0);
    }

    #[test]
    fn test_nice_ticks() {
        assert_eq!(
            nice_ticks(0.0, 95.0, 5),
            vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]
        );
        assert_eq!(nice_ticks(1.0, 9.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(nice_ticks(50.0, 1050.0, 5).len(), 7);
        assert_eq!(nice_ticks(3.0, 3.0, 5), vec![3.0]);
        assert!(nice_ticks(0.0, f64::INFINITY, 5).is_empty());
    }

    #[test]
    fn test_quarter_slice_path() {
        let path = donut_slice_path(100.0, 100.0, 50.0, 20.0, 0.0, PI / 2.0);
        assert_eq!(
            path,
            "M 100.00 50.00 A 50.00 50.00 0 0 1 150.00 100.00 L 120.00 100.00 A 20.00 20.00 0 0 0 100.00 80.00 Z"
        );
    }

    #[test]
    fn test_large_and_full_slices() {
        let path = donut_slice_path(0.0, 0.0, 10.0, 4.0, 0.0, 1.5 * PI);
        assert!(path.contains(" 0 1 1 "));

        let ring = donut_slice_path(0.0, 0.0, 10.0, 4.0, 0.0, TAU);
        assert_eq!(ring.matches('M').count(), 2);
        assert!(ring.starts_with("M 0.00 -10.00"));
    }

    #[test]
    fn test_wrap_label() {
        assert_eq!(wrap_label("Books", 10), vec!["Books"]);
        assert_eq!(
            wrap_label("Very Long Electronics Category Name", 28),
            vec!["Very Long Electronics", "Category Name"]
        );
        assert_eq!(
            wrap_label("Very Long Electronics Category Name", 8),
            vec!["Very", "Long", "Electronics", "Category", "Name"]
        );
        // nothing is dropped
        let wrapped = wrap_label("Peripherals & Accessories", 12).join(" ");
        assert_eq!(wrapped, "Peripherals & Accessories");
    }

    #[test]
    fn test_slice_font_size() {
        assert_eq!(slice_font_size(0.5), 11.0);
        assert_eq!(slice_font_size(0.01), 7.0);
        assert!(slice_font_size(0.1) > slice_font_size(0.03));
    }

    #[test]
    fn test_fit_font_size() {
        assert_eq!(fit_font_size(100.0, 2, 11.0), 11.0);
        assert!((fit_font_size(24.0, 2, 11.0) - 10.0).abs() < 1e-9);
        assert_eq!(fit_font_size(1.0, 4, 11.0), 6.0);
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(200.0), "200");
        assert_eq!(format_tick(2.5), "2.5");
    }
}
