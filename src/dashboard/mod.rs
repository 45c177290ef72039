//! Dashboard module
//!
//! Provides the page with the transactions table and chart, and the controls
//! for selecting transactions by customer, text or date.

mod charts;
mod controls;
mod handlers;
mod query;
mod tables;

pub use handlers::{ChartResponse, get_chart_data, get_dashboard_page, get_dataset};
