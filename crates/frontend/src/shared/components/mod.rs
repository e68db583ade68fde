pub mod chart_panel;
pub mod dashboard_section;
pub mod insight_box;

pub use chart_panel::ChartPanelView;
pub use dashboard_section::DashboardSection;
pub use insight_box::InsightBoxView;
