//! Table view of the filtered transactions.

use maud::{Markup, html};

use crate::{
    dashboard::query::transaction_url,
    html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE},
    view_model::TransactionViewModel,
};

/// The name shown for transactions whose customer is not loaded.
pub(super) const UNKNOWN_CUSTOMER: &str = "Unknown";

/// Renders a table with one row per filtered transaction.
///
/// Clicking a row selects the transactions of that row's customer.
pub(super) fn transactions_table(view_model: &TransactionViewModel) -> Markup {
    let mut rows = view_model.filtered_transactions().peekable();
    let is_empty = rows.peek().is_none();

    html! {
        div class="w-full overflow-x-auto rounded-lg shadow" {
            table
                id="transactions-table"
                class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE) {
                    tr {
                        th scope="col" class=(TABLE_CELL_STYLE) { "#" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Customer Name" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Transaction Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Transaction Amount" }
                    }
                }

                tbody {
                    @for transaction in rows {
                        @let url = transaction_url(transaction.id);
                        @let customer_name = view_model
                            .customer_name(transaction.customer_id)
                            .unwrap_or(UNKNOWN_CUSTOMER);

                        tr
                            class=(TABLE_ROW_STYLE)
                            data-transaction-id=(transaction.id)
                            hx-get=(url)
                            hx-target="#dashboard-content"
                            hx-push-url="true"
                        {
                            td class=(TABLE_CELL_STYLE) { (transaction.id) }
                            td class=(TABLE_CELL_STYLE) { (customer_name) }
                            td class=(TABLE_CELL_STYLE) { (transaction.date) }
                            td class=(TABLE_CELL_STYLE) { (transaction.amount_text()) }
                        }
                    }

                    @if is_empty {
                        tr class=(TABLE_ROW_STYLE) {
                            td colspan="4" class={(TABLE_CELL_STYLE) " text-center"} {
                                "No transactions"
                            }
                        }
                    }
                }
            }
        }
    }
}
