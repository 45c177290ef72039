//! The API endpoints URIs.

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The dashboard page with the transactions table and chart.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route for the loaded customers and transactions as JSON.
pub const DATA: &str = "/data/data.json";
/// The route for the chart points of the filtered transactions as JSON.
pub const CHART_API: &str = "/api/chart";
