use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use uuid::Uuid;

/// Lookup failures that map to a client error instead of a 500.
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("table {0} not found in current fleet")]
    TableNotFound(Uuid),
}

/// Application error type that wraps `anyhow::Error`.
///
/// This allows using `?` on functions that return `Result<_, anyhow::Error>`
/// to automatically convert them into `Result<_, AppError>`.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(fleet_error) = self.0.downcast_ref::<FleetError>() {
            let status = match fleet_error {
                FleetError::TableNotFound(_) => StatusCode::NOT_FOUND,
            };
            tracing::warn!(status = %status, error = %fleet_error, "API error");
            return (status, fleet_error.to_string()).into_response();
        }

        tracing::error!(error = %self.0, "Application error");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong: {}", self.0),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_not_found_maps_to_404() {
        let response = AppError::from(FleetError::TableNotFound(Uuid::nil())).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_other_errors_map_to_500() {
        let response = AppError::from(anyhow::anyhow!("boom")).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
