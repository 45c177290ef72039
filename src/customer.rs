//! Defines the `Customer` type.

use serde::{Deserialize, Serialize};

/// Alias for the integer type used for customer IDs.
pub type CustomerId = i64;

/// A customer that owns zero or more transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// The ID of the customer, unique across the dataset.
    pub id: CustomerId,
    /// The display name of the customer.
    pub name: String,
}

impl Customer {
    /// Create a new customer.
    pub fn new(id: CustomerId, name: &str) -> Self {
        Self {
            id,
            name: name.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Customer;

    #[test]
    fn deserializes_from_json() {
        let customer: Customer = serde_json::from_str(r#"{"id": 3, "name": "Carol"}"#).unwrap();

        assert_eq!(customer, Customer::new(3, "Carol"));
    }
}
