// web_app/model/error.rs - The single error kind of the catalog fetch

use thiserror::Error;

/// Any failure while fetching the catalog: non-OK status, network failure,
/// or a body that does not parse as a product list. Only the message is
/// kept, it is what the error panel shows.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The endpoint answered with a non-success status
    pub fn status() -> Self {
        Self::new("Failed to fetch products")
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(feature = "client")]
impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        Self::new(e.to_string())
    }
}
