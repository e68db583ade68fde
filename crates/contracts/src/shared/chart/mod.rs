//! Chart geometry: everything a renderer needs to draw bars and pies,
//! computed from chart points without touching the DOM.

pub mod bar;
pub mod pie;
pub mod scale;

pub use bar::{layout_bars, BarChartGeometry, BarRect, TickLine};
pub use pie::{layout_pie, PieGeometry, PieSlice, TextAnchor};
pub use scale::{Domain, Tick, ValueAxis, MAX_CHART_VALUE};

/// Rectangle inside the chart viewport where data is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Plot area left after subtracting margins from a viewport.
    pub fn inset(viewport_width: f64, viewport_height: f64, margin: Margin) -> Self {
        Self {
            x: margin.left,
            y: margin.top,
            width: (viewport_width - margin.left - margin.right).max(0.0),
            height: (viewport_height - margin.top - margin.bottom).max(0.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset() {
        let margin = Margin {
            top: 20.0,
            right: 30.0,
            bottom: 40.0,
            left: 60.0,
        };
        let area = PlotArea::inset(600.0, 256.0, margin);
        assert_eq!(area, PlotArea::new(60.0, 20.0, 510.0, 196.0));
        assert_eq!(area.right(), 570.0);
        assert_eq!(area.bottom(), 216.0);
    }

    #[test]
    fn test_inset_never_negative() {
        let margin = Margin {
            top: 100.0,
            right: 100.0,
            bottom: 100.0,
            left: 100.0,
        };
        let area = PlotArea::inset(50.0, 50.0, margin);
        assert_eq!(area.width, 0.0);
        assert_eq!(area.height, 0.0);
    }
}
