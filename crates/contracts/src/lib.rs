//! Survey dashboard model: series, formatting, chart geometry and the
//! immutable content the frontend renders.

pub mod dashboards;
pub mod shared;
