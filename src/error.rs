//! Defines the app level error type.

/// The errors that may occur while loading the dashboard's data.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The data file could not be read, e.g. it does not exist.
    ///
    /// Callers should include the path of the file in the error string.
    #[error("could not read the data file {0}")]
    DataFileRead(String),

    /// The data file was read but does not contain a valid dataset.
    #[error("could not parse the data file: {0}")]
    DataFileParse(String),
}
