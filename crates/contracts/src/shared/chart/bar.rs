use super::scale::{ValueAxis, DEFAULT_TICK_COUNT};
use super::PlotArea;
use crate::shared::series::ChartPoint;

/// Fraction of a category band left empty on each side of its bar.
pub const BAND_GAP_RATIO: f64 = 0.1;

/// One bar in plot coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub point: ChartPoint,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Horizontal centre of the category band, where the axis label goes.
    pub band_center: f64,
}

/// Horizontal gridline / axis tick in plot coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct TickLine {
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartGeometry {
    pub area: PlotArea,
    pub bars: Vec<BarRect>,
    pub ticks: Vec<TickLine>,
}

/// Lay out a vertical bar chart.
///
/// Every point gets an equal-width band across `area`. Bars grow up from
/// the domain floor; values outside the domain are clamped to the plot.
pub fn layout_bars(
    points: &[ChartPoint],
    y_domain: Option<(f64, f64)>,
    area: PlotArea,
) -> BarChartGeometry {
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let axis = ValueAxis::resolve(&values, y_domain, DEFAULT_TICK_COUNT);
    let y_for = |value: f64| area.bottom() - axis.domain.normalize(value) * area.height;

    let band = if points.is_empty() {
        0.0
    } else {
        area.width / points.len() as f64
    };
    let gap = band * BAND_GAP_RATIO;

    let bars = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let band_x = area.x + band * i as f64;
            let top = y_for(point.value);
            BarRect {
                point: point.clone(),
                x: band_x + gap,
                y: top,
                width: band - 2.0 * gap,
                height: area.bottom() - top,
                band_center: band_x + band / 2.0,
            }
        })
        .collect();

    let ticks = axis
        .ticks
        .into_iter()
        .map(|tick| TickLine {
            y: y_for(tick.value),
            label: tick.label,
        })
        .collect();

    BarChartGeometry { area, bars, ticks }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::series::transform_to_chart_data;
    use approx::assert_relative_eq;

    fn area() -> PlotArea {
        PlotArea::new(40.0, 20.0, 400.0, 200.0)
    }

    #[test]
    fn test_bars_fill_equal_bands() {
        let points = transform_to_chart_data(&["A", "B", "C", "D"], &[10.0, 20.0, 30.0, 45.0]);
        let geometry = layout_bars(&points, None, area());

        assert_eq!(geometry.bars.len(), 4);
        assert_relative_eq!(geometry.bars[0].x, 50.0);
        assert_relative_eq!(geometry.bars[0].width, 80.0);
        assert_relative_eq!(geometry.bars[1].band_center, 190.0);
        // 45 of a 0..50 domain
        assert_relative_eq!(geometry.bars[3].height, 180.0, epsilon = 1e-9);
        assert_relative_eq!(geometry.bars[3].y, 40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bars_follow_input_order() {
        let points = transform_to_chart_data(&["Price", "Design"], &[3.5552, 3.4420]);
        let geometry = layout_bars(&points, Some((3.0, 4.0)), area());
        assert_eq!(geometry.bars[0].point.name, "Price");
        assert!(geometry.bars[0].x < geometry.bars[1].x);
        assert!(geometry.bars[0].height > geometry.bars[1].height);
    }

    #[test]
    fn test_value_below_domain_floor_has_no_height() {
        let points = transform_to_chart_data(&["Advertising"], &[2.69]);
        let geometry = layout_bars(&points, Some((3.0, 4.0)), area());
        assert_relative_eq!(geometry.bars[0].height, 0.0);
    }

    #[test]
    fn test_ticks_run_bottom_to_top() {
        let points = transform_to_chart_data(&["A"], &[3.5]);
        let geometry = layout_bars(&points, Some((3.0, 4.0)), area());
        let ys: Vec<f64> = geometry.ticks.iter().map(|t| t.y).collect();
        assert_eq!(ys, vec![220.0, 170.0, 120.0, 70.0, 20.0]);
        assert_eq!(geometry.ticks[0].label, "3");
    }

    #[test]
    fn test_empty_series() {
        let geometry = layout_bars(&[], None, area());
        assert!(geometry.bars.is_empty());
        assert_eq!(geometry.ticks.len(), 5);
    }
}
