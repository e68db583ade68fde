pub mod d410_market_survey;

pub use d410_market_survey::ui::SurveyDashboard;
