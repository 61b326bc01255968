//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use tracing::error;

use crate::errors::ApiError;

/// Log the underlying failure and answer with a 500 that only carries `context`.
pub(crate) trait ResultExt<T> {
    fn or_500(self, context: &'static str) -> Result<T, ApiError>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn or_500(self, context: &'static str) -> Result<T, ApiError> {
        self.map_err(|source| {
            error!(error = %source, "{context}");

            ApiError::internal(context)
        })
    }
}
