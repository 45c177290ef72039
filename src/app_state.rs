//! Implements a struct that holds the state of the REST server.

use std::sync::Arc;

use crate::{dataset::Dataset, view_model::TransactionViewModel};

/// The state of the REST server.
///
/// The dataset is loaded once at startup and never changes afterwards, so it
/// is shared between requests without a lock.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The customers and transactions shown on the dashboard.
    pub dataset: Arc<Dataset>,
}

impl AppState {
    /// Create a new [AppState] that serves `dataset`.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    /// Create a view model with the full dataset loaded and nothing selected.
    ///
    /// The view model borrows the dataset, so no customers or transactions
    /// are copied.
    pub fn view_model(&self) -> TransactionViewModel<'_> {
        let mut view_model = TransactionViewModel::new();
        view_model.load(
            self.dataset.customers.as_slice(),
            self.dataset.transactions.as_slice(),
        );
        view_model
    }
}
