//! The state behind the dashboard: the loaded customers and transactions,
//! the active [Selection], and the views derived from them.

use std::{
    borrow::Cow,
    collections::{HashMap, HashSet},
};

use serde::Serialize;

use crate::{
    customer::{Customer, CustomerId},
    selection::Selection,
    transaction::{Transaction, TransactionId},
};

/// A point on the transaction chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint<'a> {
    /// The date label of the transaction, used for the x-axis.
    pub date: &'a str,
    /// The transaction amount, used for the y-axis.
    pub amount: f64,
}

/// Holds the full customer and transaction lists and the current selection.
///
/// The filtered transactions are always computed from the full transaction
/// list and the current selection, they are never stored.
///
/// The lists are either borrowed, e.g. from the dataset shared by the server,
/// or owned.
#[derive(Debug, Default)]
pub struct TransactionViewModel<'a> {
    customers: Cow<'a, [Customer]>,
    transactions: Cow<'a, [Transaction]>,
    /// Maps a customer ID to the index of the first customer with that ID.
    customer_index: HashMap<CustomerId, usize>,
    selection: Selection,
}

impl<'a> TransactionViewModel<'a> {
    /// Create an empty view model with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the customer and transaction lists and clear the selection.
    pub fn load(
        &mut self,
        customers: impl Into<Cow<'a, [Customer]>>,
        transactions: impl Into<Cow<'a, [Transaction]>>,
    ) {
        let customers = customers.into();
        let transactions = transactions.into();
        let mut customer_index = HashMap::with_capacity(customers.len());

        for (index, customer) in customers.iter().enumerate() {
            if customer_index.contains_key(&customer.id) {
                tracing::warn!(
                    "duplicate customer ID {}, \"{}\" will be ignored in lookups",
                    customer.id,
                    customer.name
                );
                continue;
            }

            customer_index.insert(customer.id, index);
        }

        tracing::debug!(
            "loaded {} customers and {} transactions",
            customers.len(),
            transactions.len()
        );

        self.customers = customers;
        self.transactions = transactions;
        self.customer_index = customer_index;
        self.selection = Selection::None;
    }

    /// Show only the transactions of the customer with `customer_id`, or all
    /// transactions if `customer_id` is `None` or zero.
    pub fn select_by_customer(&mut self, customer_id: Option<CustomerId>) {
        self.selection = Selection::customer(customer_id);
    }

    /// Show the transactions whose amount or customer name contains `text`,
    /// or all transactions if `text` is empty.
    pub fn select_by_text(&mut self, text: &str) {
        self.selection = Selection::text(text);
    }

    /// Show the transactions made on `date`, or all transactions if `date`
    /// is empty.
    pub fn select_by_date(&mut self, date: &str) {
        self.selection = Selection::date(date);
    }

    /// Show the transactions of the customer that made `transaction`.
    pub fn select_transactions_by_customer_of(&mut self, transaction: &Transaction) {
        self.select_by_customer(Some(transaction.customer_id));
    }

    /// Clear the selection and show all transactions.
    pub fn reset(&mut self) {
        self.selection = Selection::None;
    }

    /// The active selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selected customer ID, if selecting by customer.
    pub fn selected_customer(&self) -> Option<CustomerId> {
        match self.selection {
            Selection::ByCustomer(customer_id) => Some(customer_id),
            _ => None,
        }
    }

    /// The filter text, if selecting by text.
    pub fn filter_text(&self) -> Option<&str> {
        match &self.selection {
            Selection::ByText(text) => Some(text),
            _ => None,
        }
    }

    /// The selected date, if selecting by date.
    pub fn selected_date(&self) -> Option<&str> {
        match &self.selection {
            Selection::ByDate(date) => Some(date),
            _ => None,
        }
    }

    /// All loaded customers.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// All loaded transactions, regardless of the selection.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Find the customer with `customer_id`.
    pub fn customer(&self, customer_id: CustomerId) -> Option<&Customer> {
        self.customer_index
            .get(&customer_id)
            .map(|&index| &self.customers[index])
    }

    /// Find the transaction with `transaction_id`.
    pub fn transaction(&self, transaction_id: TransactionId) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == transaction_id)
    }

    /// The name of the customer with `customer_id`.
    pub fn customer_name(&self, customer_id: CustomerId) -> Option<&str> {
        self.customer(customer_id)
            .map(|customer| customer.name.as_str())
    }

    /// The transactions that match the current selection, in their original order.
    pub fn filtered_transactions(&self) -> impl Iterator<Item = &Transaction> + Clone + '_ {
        self.transactions.iter().filter(move |transaction| {
            self.selection
                .matches(transaction, self.customer(transaction.customer_id))
        })
    }

    /// The chart points for the filtered transactions, one per transaction
    /// and in the same order.
    ///
    /// The returned iterator is lazy and can be cloned to start over.
    pub fn chart_series(&self) -> impl Iterator<Item = ChartPoint<'_>> + Clone + '_ {
        self.filtered_transactions()
            .map(|transaction| ChartPoint {
                date: &transaction.date,
                amount: transaction.amount,
            })
    }

    /// The distinct transaction dates, in the order they first appear.
    pub fn date_options(&self) -> Vec<&str> {
        let mut seen = HashSet::new();

        self.transactions
            .iter()
            .map(|transaction| transaction.date.as_str())
            .filter(|date| seen.insert(*date))
            .collect()
    }
}
