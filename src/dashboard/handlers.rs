//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - Route handlers for displaying the dashboard and its data as JSON
//! - HTML view functions for rendering the dashboard UI

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxRequest;
use maud::{Markup, html};
use serde::Serialize;

use crate::{
    AppState,
    dashboard::{
        charts::{ECHARTS_SCRIPT, chart_view, transaction_chart},
        controls::controls_view,
        query::DashboardQuery,
        tables::transactions_table,
    },
    html::{HeadElement, PAGE_CONTAINER_STYLE, base},
    selection::Selection,
    view_model::{ChartPoint, TransactionViewModel},
};

/// Display the dashboard with the transactions selected by `query`.
///
/// HTMX requests only get the contents of the `#dashboard-content` element.
pub async fn get_dashboard_page(
    State(state): State<AppState>,
    HxRequest(is_htmx_request): HxRequest,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let view_model = build_view_model(&state, &query);

    if is_htmx_request {
        dashboard_content(&view_model).into_response()
    } else {
        dashboard_view(&view_model).into_response()
    }
}

/// The chart points for a selection, as served by the chart API.
#[derive(Debug, Serialize)]
pub struct ChartResponse<'a> {
    /// The selection the points were computed for.
    pub selection: &'a Selection,
    /// One point per selected transaction.
    pub points: Vec<ChartPoint<'a>>,
}

/// Get the chart points of the transactions selected by `query` as JSON.
pub async fn get_chart_data(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let view_model = build_view_model(&state, &query);

    Json(ChartResponse {
        selection: view_model.selection(),
        points: view_model.chart_series().collect(),
    })
    .into_response()
}

/// Get the loaded customers and transactions as JSON.
pub async fn get_dataset(State(state): State<AppState>) -> Response {
    Json(state.dataset.as_ref()).into_response()
}

fn build_view_model<'a>(
    state: &'a AppState,
    query: &DashboardQuery,
) -> TransactionViewModel<'a> {
    let mut view_model = state.view_model();
    query.apply(&mut view_model);

    tracing::debug!(
        "selection {:?} matched {} of {} transactions",
        view_model.selection(),
        view_model.filtered_transactions().count(),
        view_model.transactions().len()
    );

    view_model
}

/// Renders the full dashboard page.
fn dashboard_view(view_model: &TransactionViewModel) -> Markup {
    let content = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full my-4"
            {
                h1 class="text-3xl font-bold" { "Welcome to Customer Transactions Dashboard" }
                p { "Explore customer transactions and visualize data interactively." }
            }

            div id="dashboard-content" class="flex flex-col w-full"
            {
                (dashboard_content(view_model))
            }
        }
    );

    let scripts = [HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned())];

    base("Dashboard", &scripts, &content)
}

/// Renders the controls, table and chart that change with the selection.
fn dashboard_content(view_model: &TransactionViewModel) -> Markup {
    let chart = transaction_chart(view_model.chart_series());

    html!(
        (controls_view(view_model))

        (transactions_table(view_model))

        (chart_view(&chart))
    )
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::get};
    use axum_test::TestServer;
    use scraper::{Html, Selector};

    use crate::{
        AppState, customer::Customer, dataset::Dataset, endpoints, test_utils::assert_valid_html,
        transaction::Transaction,
    };

    use super::{get_chart_data, get_dashboard_page, get_dataset};

    fn test_dataset() -> Dataset {
        Dataset {
            customers: vec![Customer::new(1, "Alice"), Customer::new(2, "Bob")],
            transactions: vec![
                Transaction::new(1, 1, "2024-01-01", 50.0),
                Transaction::new(2, 2, "2024-01-01", 75.0),
                Transaction::new(3, 1, "2024-01-02", 120.0),
                Transaction::new(4, 3, "2024-01-03", 8.0),
            ],
        }
    }

    fn get_test_server(dataset: Dataset) -> TestServer {
        let app = Router::new()
            .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
            .route(endpoints::CHART_API, get(get_chart_data))
            .route(endpoints::DATA, get(get_dataset))
            .with_state(AppState::new(dataset));

        TestServer::try_new(app).expect("Could not create test server.")
    }

    fn row_ids(html: &Html) -> Vec<String> {
        html.select(&Selector::parse("tbody tr").unwrap())
            .filter_map(|row| row.value().attr("data-transaction-id"))
            .map(str::to_owned)
            .collect()
    }

    #[track_caller]
    fn assert_chart_exists(html: &Html) {
        let selector = Selector::parse("#transaction-chart").unwrap();
        assert!(
            html.select(&selector).next().is_some(),
            "Transaction chart not found"
        );
    }

    #[tokio::test]
    async fn dashboard_page_loads_successfully() {
        let server = get_test_server(test_dataset());

        let response = server.get(endpoints::DASHBOARD_VIEW).await;

        response.assert_status_ok();
        let html = Html::parse_document(&response.text());
        assert_valid_html(&html);
        assert_chart_exists(&html);
        assert_eq!(row_ids(&html), vec!["1", "2", "3", "4"]);
    }

    #[tokio::test]
    async fn dashboard_renders_unknown_customer() {
        let server = get_test_server(test_dataset());

        let response = server
            .get(endpoints::DASHBOARD_VIEW)
            .add_query_param("date", "2024-01-03")
            .await;

        let html = Html::parse_document(&response.text());
        assert_eq!(row_ids(&html), vec!["4"]);
        let name = html
            .select(&Selector::parse("tbody tr td:nth-child(2)").unwrap())
            .next()
            .expect("No customer name found")
            .text()
            .collect::<String>();
        assert_eq!(name.trim(), "Unknown");
    }

    #[tokio::test]
    async fn dashboard_filters_by_customer() {
        let server = get_test_server(test_dataset());

        let response = server
            .get(endpoints::DASHBOARD_VIEW)
            .add_query_param("customer", "1")
            .await;

        let html = Html::parse_document(&response.text());
        assert_eq!(row_ids(&html), vec!["1", "3"]);
    }

    #[tokio::test]
    async fn clicking_row_selects_its_customer() {
        let server = get_test_server(test_dataset());

        let response = server
            .get(endpoints::DASHBOARD_VIEW)
            .add_header("HX-Request", "true")
            .add_query_param("transaction", "3")
            .await;

        let html = Html::parse_fragment(&response.text());
        assert_eq!(row_ids(&html), vec!["1", "3"]);
        let selected = html
            .select(&Selector::parse("select[name=customer] option[selected]").unwrap())
            .next()
            .and_then(|option| option.value().attr("value"));
        assert_eq!(selected, Some("1"));
    }

    #[tokio::test]
    async fn customer_zero_shows_everything() {
        let server = get_test_server(test_dataset());

        let response = server
            .get(endpoints::DASHBOARD_VIEW)
            .add_query_param("customer", "0")
            .await;

        let html = Html::parse_document(&response.text());
        assert_eq!(row_ids(&html), vec!["1", "2", "3", "4"]);
    }

    #[tokio::test]
    async fn dashboard_filters_by_text() {
        let server = get_test_server(test_dataset());

        let response = server
            .get(endpoints::DASHBOARD_VIEW)
            .add_query_param("text", "Bob")
            .await;

        let html = Html::parse_document(&response.text());
        assert_eq!(row_ids(&html), vec!["2"]);
    }

    #[tokio::test]
    async fn placeholder_customer_shows_everything() {
        let server = get_test_server(test_dataset());

        let response = server
            .get(endpoints::DASHBOARD_VIEW)
            .add_query_param("customer", "")
            .await;

        let html = Html::parse_document(&response.text());
        assert_eq!(row_ids(&html), vec!["1", "2", "3", "4"]);
    }

    #[tokio::test]
    async fn htmx_request_gets_fragment() {
        let server = get_test_server(test_dataset());

        let response = server
            .get(endpoints::DASHBOARD_VIEW)
            .add_header("HX-Request", "true")
            .add_query_param("customer", "2")
            .await;

        response.assert_status_ok();
        let text = response.text();
        assert!(!text.contains("<html"), "want fragment, got full page");

        let html = Html::parse_fragment(&text);
        assert_chart_exists(&html);
        assert_eq!(row_ids(&html), vec!["2"]);
    }

    #[tokio::test]
    async fn empty_dataset_still_renders() {
        let server = get_test_server(Dataset::default());

        let response = server.get(endpoints::DASHBOARD_VIEW).await;

        response.assert_status_ok();
        let html = Html::parse_document(&response.text());
        assert_valid_html(&html);
        assert_chart_exists(&html);
        assert!(row_ids(&html).is_empty());
        assert!(response.text().contains("No transactions"));
    }

    #[tokio::test]
    async fn chart_api_returns_points_in_order() {
        let server = get_test_server(test_dataset());

        let response = server
            .get(endpoints::CHART_API)
            .add_query_param("customer", "1")
            .await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!({
            "selection": { "mode": "by_customer", "value": 1 },
            "points": [
                { "date": "2024-01-01", "amount": 50.0 },
                { "date": "2024-01-02", "amount": 120.0 }
            ]
        }));
    }

    #[tokio::test]
    async fn chart_api_without_selection() {
        let server = get_test_server(test_dataset());

        let response = server.get(endpoints::CHART_API).await;

        let body: serde_json::Value = response.json();
        assert_eq!(body["selection"], serde_json::json!({ "mode": "none" }));
        assert_eq!(body["points"].as_array().map(Vec::len), Some(4));
    }

    #[tokio::test]
    async fn data_endpoint_returns_dataset() {
        let server = get_test_server(test_dataset());

        let response = server.get(endpoints::DATA).await;

        response.assert_status_ok();
        let dataset: Dataset = response.json();
        assert_eq!(dataset, test_dataset());
    }
}
