//! The form controls that change which transactions the dashboard shows.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{BUTTON_SECONDARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
    view_model::TransactionViewModel,
};

/// Renders the customer dropdown, text filter, date dropdown and reset button.
///
/// Each control is its own form that submits a single query parameter, and
/// shows the current value only if its selection mode is active.
pub(super) fn controls_view(view_model: &TransactionViewModel) -> Markup {
    let selected_customer = view_model.selected_customer();
    let filter_text = view_model.filter_text().unwrap_or_default();
    let selected_date = view_model.selected_date();

    html! {
        div class="grid grid-cols-1 md:grid-cols-3 gap-4 w-full my-4"
        {
            form
                action=(endpoints::DASHBOARD_VIEW)
                method="get"
                hx-get=(endpoints::DASHBOARD_VIEW)
                hx-target="#dashboard-content"
                hx-trigger="change"
                hx-push-url="true"
            {
                label for="customer" class=(FORM_LABEL_STYLE)
                {
                    "Select a customer to display in the chart"
                }

                select id="customer" name="customer" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" selected[selected_customer.is_none()] { "Select a customer" }

                    @for customer in view_model.customers() {
                        option
                            value=(customer.id)
                            selected[selected_customer == Some(customer.id)]
                        {
                            (customer.name)
                        }
                    }
                }
            }

            form
                action=(endpoints::DASHBOARD_VIEW)
                method="get"
                hx-get=(endpoints::DASHBOARD_VIEW)
                hx-target="#dashboard-content"
                hx-push-url="true"
            {
                label for="text" class=(FORM_LABEL_STYLE)
                {
                    "Filter by customer name or transaction amount"
                }

                input
                    type="search"
                    id="text"
                    name="text"
                    placeholder="Search..."
                    value=(filter_text)
                    hx-get=(endpoints::DASHBOARD_VIEW)
                    hx-target="#dashboard-content"
                    hx-trigger="input changed delay:300ms"
                    hx-push-url="true"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            form
                action=(endpoints::DASHBOARD_VIEW)
                method="get"
                hx-get=(endpoints::DASHBOARD_VIEW)
                hx-target="#dashboard-content"
                hx-trigger="change"
                hx-push-url="true"
            {
                label for="date" class=(FORM_LABEL_STYLE)
                {
                    "Select a date to filter transactions"
                }

                select id="date" name="date" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" selected[selected_date.is_none()] { "Select a date" }

                    @for date in view_model.date_options() {
                        option value=(date) selected[selected_date == Some(date)] { (date) }
                    }
                }
            }
        }

        div class="w-full md:w-48 self-start"
        {
            a
                id="reset"
                href=(endpoints::DASHBOARD_VIEW)
                hx-get=(endpoints::DASHBOARD_VIEW)
                hx-target="#dashboard-content"
                hx-push-url="true"
                class={(BUTTON_SECONDARY_STYLE) " block text-center"}
            {
                "Reset Form"
            }
        }
    }
}
