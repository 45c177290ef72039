//! Defines the `Transaction` type and how its amount is displayed as text.

use serde::{Deserialize, Serialize};

use crate::customer::CustomerId;

/// Alias for the integer type used for transaction IDs.
pub type TransactionId = i64;

/// A single transaction made by a customer.
///
/// `customer_id` is not guaranteed to refer to a loaded customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The ID of the customer that made the transaction.
    pub customer_id: CustomerId,
    /// The calendar date label of the transaction, e.g. "2024-01-01".
    ///
    /// Dates are compared as plain strings.
    pub date: String,
    /// The amount of money in the transaction.
    pub amount: f64,
}

impl Transaction {
    /// Create a new transaction.
    pub fn new(id: TransactionId, customer_id: CustomerId, date: &str, amount: f64) -> Self {
        Self {
            id,
            customer_id,
            date: date.to_owned(),
            amount,
        }
    }

    /// The amount as it is displayed and searched, see [format_amount].
    pub fn amount_text(&self) -> String {
        format_amount(self.amount)
    }
}

/// Amounts at least this small, but not zero, are formatted with an exponent.
const EXPONENT_BELOW: f64 = 1e-6;
/// Amounts at least this large are formatted with an exponent.
const EXPONENT_FROM: f64 = 1e21;

/// Format `amount` as the shortest decimal string that round trips, e.g.
/// `50.0` is "50" and `5.25` is "5.25".
///
/// Negative zero is formatted as "0". Very small and very large magnitudes
/// use exponent notation with a signed exponent, e.g. "1e-7" and "1.5e+21",
/// the same way a browser prints numbers.
pub fn format_amount(amount: f64) -> String {
    if amount == 0.0 {
        return "0".to_owned();
    }

    if (EXPONENT_BELOW..EXPONENT_FROM).contains(&amount.abs()) {
        return amount.to_string();
    }

    let text = format!("{amount:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}
