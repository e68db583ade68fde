pub mod d410_market_survey;
