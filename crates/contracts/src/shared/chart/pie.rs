use crate::shared::format::slice_label;
use crate::shared::series::ChartPoint;

/// Gap between the pie edge and its outside labels.
pub const LABEL_OFFSET: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub index: usize,
    pub point: ChartPoint,
    /// Fraction of the series total, `0..=1`.
    pub share: f64,
    /// Degrees, counter-clockwise from 3 o'clock.
    pub start_angle: f64,
    pub end_angle: f64,
    /// SVG path data for the sector; empty when the slice has no sweep.
    pub path: String,
    pub label: String,
    pub label_x: f64,
    pub label_y: f64,
    pub label_anchor: TextAnchor,
}

impl PieSlice {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn is_visible(&self) -> bool {
        self.sweep() > 0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieGeometry {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub slices: Vec<PieSlice>,
}

fn polar(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (cx + radius * rad.cos(), cy - radius * rad.sin())
}

fn sector_path(cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> String {
    let sweep = end - start;
    if sweep <= 0.0 {
        return String::new();
    }
    if sweep >= 360.0 - 1e-9 {
        // A single arc cannot close on itself; draw two half circles.
        return format!(
            "M {:.2} {:.2} A {r:.2} {r:.2} 0 1 0 {:.2} {:.2} A {r:.2} {r:.2} 0 1 0 {:.2} {:.2} Z",
            cx + radius,
            cy,
            cx - radius,
            cy,
            cx + radius,
            cy,
            r = radius
        );
    }
    let (x1, y1) = polar(cx, cy, radius, start);
    let (x2, y2) = polar(cx, cy, radius, end);
    let large_arc = if sweep > 180.0 { 1 } else { 0 };
    format!(
        "M {:.2} {:.2} L {:.2} {:.2} A {r:.2} {r:.2} 0 {} 0 {:.2} {:.2} Z",
        cx,
        cy,
        x1,
        y1,
        large_arc,
        x2,
        y2,
        r = radius
    )
}

/// Split a full circle between the points in input order.
///
/// Negative values count as zero. A zero total yields zero-sweep slices
/// which renderers skip via [`PieSlice::is_visible`].
pub fn layout_pie(points: &[ChartPoint], cx: f64, cy: f64, radius: f64) -> PieGeometry {
    let total: f64 = points.iter().map(|p| p.value.max(0.0)).sum();
    let mut angle = 0.0;

    let slices = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let share = if total > 0.0 {
                point.value.max(0.0) / total
            } else {
                0.0
            };
            let start_angle = angle;
            let end_angle = start_angle + share * 360.0;
            angle = end_angle;

            let mid = (start_angle + end_angle) / 2.0;
            let (label_x, label_y) = polar(cx, cy, radius + LABEL_OFFSET, mid);
            let label_anchor = if mid.to_radians().cos() >= 0.0 {
                TextAnchor::Start
            } else {
                TextAnchor::End
            };

            PieSlice {
                index,
                point: point.clone(),
                share,
                start_angle,
                end_angle,
                path: sector_path(cx, cy, radius, start_angle, end_angle),
                label: slice_label(&point.name, share),
                label_x,
                label_y,
                label_anchor,
            }
        })
        .collect();

    PieGeometry {
        cx,
        cy,
        radius,
        slices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::series::transform_to_chart_data;
    use approx::assert_relative_eq;

    #[test]
    fn test_shares_and_angles() {
        let points = transform_to_chart_data(&["A", "B", "C"], &[1.0, 1.0, 2.0]);
        let pie = layout_pie(&points, 100.0, 100.0, 80.0);

        let shares: Vec<f64> = pie.slices.iter().map(|s| s.share).collect();
        assert_eq!(shares, vec![0.25, 0.25, 0.5]);
        assert_eq!(pie.slices[0].start_angle, 0.0);
        assert_eq!(pie.slices[1].start_angle, pie.slices[0].end_angle);
        assert_relative_eq!(pie.slices[2].end_angle, 360.0);
        assert_eq!(pie.slices[2].label, "C: 50.0%");
    }

    #[test]
    fn test_first_slice_path_starts_at_three_oclock() {
        let points = transform_to_chart_data(&["A", "B"], &[1.0, 3.0]);
        let pie = layout_pie(&points, 100.0, 100.0, 80.0);
        assert_eq!(
            pie.slices[0].path,
            "M 100.00 100.00 L 180.00 100.00 A 80.00 80.00 0 0 0 100.00 20.00 Z"
        );
        assert!(pie.slices[1].path.contains(" 0 1 0 "));
    }

    #[test]
    fn test_label_anchor_follows_side() {
        let points = transform_to_chart_data(&["right", "left"], &[1.0, 3.0]);
        let pie = layout_pie(&points, 0.0, 0.0, 10.0);
        // mid angles: 45 and 225 degrees
        assert_eq!(pie.slices[0].label_anchor, TextAnchor::Start);
        assert_eq!(pie.slices[1].label_anchor, TextAnchor::End);
        assert!(pie.slices[0].label_y < 0.0);
    }

    #[test]
    fn test_single_slice_is_full_circle() {
        let points = transform_to_chart_data(&["all"], &[7.0]);
        let pie = layout_pie(&points, 50.0, 50.0, 10.0);
        assert_eq!(pie.slices[0].share, 1.0);
        assert!(pie.slices[0].path.starts_with("M 60.00 50.00 A"));
    }

    #[test]
    fn test_zero_total_hides_slices() {
        let points = transform_to_chart_data(&["a", "b"], &[0.0, -2.0]);
        let pie = layout_pie(&points, 0.0, 0.0, 10.0);
        assert!(pie.slices.iter().all(|s| !s.is_visible() && s.path.is_empty()));
        assert_eq!(pie.slices[1].label, "b: 0.0%");
    }
}
