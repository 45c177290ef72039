//! Chart generation and rendering for the dashboard.
//!
//! The transaction chart is a line chart with one point per filtered
//! transaction. It is generated as JSON configuration for the ECharts library
//! and rendered with a HTML container and the JavaScript that initializes it.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisType, Tooltip, Trigger},
    series::Line,
};
use maud::{Markup, PreEscaped, html};

use crate::view_model::ChartPoint;

/// The HTML element ID of the transaction chart.
pub(super) const TRANSACTION_CHART_ID: &str = "transaction-chart";

/// The ECharts library, loaded in the page head.
pub(super) const ECHARTS_SCRIPT: &str =
    "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// Builds the line chart for `points`, with dates on the x-axis and amounts on the y-axis.
///
/// Points are plotted in the order given, repeated dates included.
pub(super) fn transaction_chart<'a>(points: impl Iterator<Item = ChartPoint<'a>>) -> Chart {
    let (dates, amounts): (Vec<String>, Vec<f64>) = points
        .map(|point| (point.date.to_owned(), point.amount))
        .unzip();

    Chart::new()
        .title(Title::new().text("Transaction Chart"))
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .legend(Legend::new().top("1%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(dates))
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(Line::new().name("amount").data(amounts))
}

/// Renders the chart container and the script that draws `chart` into it.
///
/// The script runs as soon as it is inserted, so the same markup works for
/// full page loads and for HTMX swaps.
pub(super) fn chart_view(chart: &Chart) -> Markup {
    // Stop data such as dates from closing the script tag early.
    let options = chart.to_string().replace("</", "<\\/");

    let script = format!(
        r#"(function() {{
            const chartDom = document.getElementById("{TRANSACTION_CHART_ID}");
            const chart = echarts.init(chartDom);
            const option = {options};
            chart.setOption(option);

            window.addEventListener('resize', chart.resize);
        }})();"#
    );

    html!(
        section
            id="charts"
            class="w-full mx-auto my-4"
        {
            div
                id=(TRANSACTION_CHART_ID)
                class="min-h-[400px] rounded bg-white dark:bg-gray-100"
            {}

            script { (PreEscaped(script)) }
        }
    )
}
