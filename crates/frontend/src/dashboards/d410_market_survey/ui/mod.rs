mod dashboard;
mod section;
mod summary;

pub use dashboard::SurveyDashboard;
pub use section::SectionView;
pub use summary::ExecutiveSummaryView;
