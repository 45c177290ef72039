//! Query parameters that select which transactions the dashboard shows.

use serde::Deserialize;

use crate::{
    customer::CustomerId, endpoints, transaction::TransactionId, view_model::TransactionViewModel,
};

/// The selection requested by the dashboard's controls and table rows.
///
/// Each control submits one parameter. Missing and empty parameters are
/// ignored, and IDs are kept as strings so that the dropdown's placeholder
/// option (an empty or non-numeric value) clears the selection instead of
/// rejecting the request.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct DashboardQuery {
    /// The ID of a transaction whose customer should be selected.
    pub transaction: Option<String>,
    /// The ID of the customer to select.
    pub customer: Option<String>,
    /// The text to search amounts and customer names for.
    pub text: Option<String>,
    /// The date to select.
    pub date: Option<String>,
}

impl DashboardQuery {
    /// Apply the requested selection to `view_model`.
    ///
    /// The selection is reset first, so a query with no parameters shows all
    /// transactions. Parameters are then applied in the order transaction,
    /// customer, text, date. Since each selection replaces the previous one,
    /// the last given parameter wins.
    pub fn apply(&self, view_model: &mut TransactionViewModel) {
        view_model.reset();

        if let Some(transaction_id) = non_empty(&self.transaction).and_then(parse_transaction_id) {
            match view_model.transaction(transaction_id).cloned() {
                Some(transaction) => view_model.select_transactions_by_customer_of(&transaction),
                None => tracing::debug!("ignoring unknown transaction ID {transaction_id}"),
            }
        }

        if let Some(customer) = non_empty(&self.customer) {
            view_model.select_by_customer(parse_customer_id(customer));
        }

        if let Some(text) = non_empty(&self.text) {
            view_model.select_by_text(text);
        }

        if let Some(date) = non_empty(&self.date) {
            view_model.select_by_date(date);
        }
    }
}

fn non_empty(param: &Option<String>) -> Option<&str> {
    param.as_deref().filter(|value| !value.is_empty())
}

fn parse_customer_id(value: &str) -> Option<CustomerId> {
    match value.trim().parse() {
        Ok(customer_id) => Some(customer_id),
        Err(error) => {
            tracing::debug!("ignoring invalid customer ID {value:?}: {error}");
            None
        }
    }
}

fn parse_transaction_id(value: &str) -> Option<TransactionId> {
    match value.trim().parse() {
        Ok(transaction_id) => Some(transaction_id),
        Err(error) => {
            tracing::debug!("ignoring invalid transaction ID {value:?}: {error}");
            None
        }
    }
}

/// The dashboard URL that selects the transactions of the customer who made
/// the transaction with `transaction_id`.
pub(crate) fn transaction_url(transaction_id: TransactionId) -> String {
    format!("{}?transaction={transaction_id}", endpoints::DASHBOARD_VIEW)
}
