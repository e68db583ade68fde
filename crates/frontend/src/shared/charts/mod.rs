//! SVG chart components drawn from `contracts::shared::chart` geometry.

pub mod bar_chart;
pub mod palette;
pub mod pie_chart;

pub use bar_chart::BarChart;
pub use pie_chart::PieChart;

/// SVG attributes take plain strings; two decimals is plenty for pixels.
pub(crate) fn px(value: f64) -> String {
    format!("{:.2}", value)
}
