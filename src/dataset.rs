//! Loading the customers and transactions shown on the dashboard.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Error, customer::Customer, transaction::Transaction};

/// The JSON document the dashboard is built from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Every known customer.
    pub customers: Vec<Customer>,
    /// Every transaction, in the order they should be listed.
    pub transactions: Vec<Transaction>,
}

impl Dataset {
    /// Parse a dataset from a JSON string.
    ///
    /// # Errors
    /// Returns [Error::DataFileParse] if `json` is not a valid dataset.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|error| Error::DataFileParse(error.to_string()))
    }

    /// Read and parse the dataset stored at `path`.
    ///
    /// # Errors
    /// Returns [Error::DataFileRead] if the file cannot be read and
    /// [Error::DataFileParse] if it does not contain a valid dataset.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let json = fs::read_to_string(path).map_err(|error| {
            Error::DataFileRead(format!("{}: {error}", path.display()))
        })?;

        Self::from_json(&json)
    }

    /// Read the dataset at `path`, falling back to an empty dataset if it
    /// cannot be loaded.
    ///
    /// Failures are logged and not retried.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(dataset) => {
                tracing::info!(
                    "Loaded {} customers and {} transactions from {}",
                    dataset.customers.len(),
                    dataset.transactions.len(),
                    path.display()
                );
                dataset
            }
            Err(error) => {
                tracing::error!("Error fetching data: {error}");
                Self::default()
            }
        }
    }
}
