//! Defines the selection modes used to filter the dashboard's transactions.

use serde::Serialize;

use crate::{
    customer::{Customer, CustomerId},
    transaction::Transaction,
};

/// The active filter criterion for the dashboard.
///
/// Only one mode can be active at a time, so selecting one mode replaces
/// whatever was selected before.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum Selection {
    /// No filter, all transactions are shown.
    #[default]
    None,
    /// Show the transactions made by one customer.
    ByCustomer(CustomerId),
    /// Show the transactions whose amount or customer name contains the text.
    ByText(String),
    /// Show the transactions made on one date.
    ByDate(String),
}

impl Selection {
    /// Select by customer, or clear the selection if `customer_id` is `None`
    /// or zero.
    ///
    /// Zero is what the customer dropdown sends when nothing is chosen, so it
    /// never selects a customer.
    pub fn customer(customer_id: Option<CustomerId>) -> Self {
        match customer_id {
            None | Some(0) => Self::None,
            Some(customer_id) => Self::ByCustomer(customer_id),
        }
    }

    /// Select by text, or clear the selection if `text` is empty.
    pub fn text(text: &str) -> Self {
        if text.is_empty() {
            Self::None
        } else {
            Self::ByText(text.to_owned())
        }
    }

    /// Select by date, or clear the selection if `date` is empty.
    pub fn date(date: &str) -> Self {
        if date.is_empty() {
            Self::None
        } else {
            Self::ByDate(date.to_owned())
        }
    }

    /// Whether `transaction` should be shown under this selection.
    ///
    /// `customer` is the customer that owns `transaction`, if there is one.
    /// Text matching is case-sensitive and only looks at the customer name
    /// when the customer exists.
    pub fn matches(&self, transaction: &Transaction, customer: Option<&Customer>) -> bool {
        match self {
            Self::None => true,
            Self::ByCustomer(customer_id) => transaction.customer_id == *customer_id,
            Self::ByText(text) => {
                transaction.amount_text().contains(text.as_str())
                    || customer.is_some_and(|customer| customer.name.contains(text.as_str()))
            }
            Self::ByDate(date) => transaction.date == *date,
        }
    }
}
