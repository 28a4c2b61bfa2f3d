use axum::http::StatusCode;

use crate::intake::ValidationError;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    UnprocessableEntity(String),
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::UnprocessableEntity(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Internal error whose cause is logged but kept out of the response.
    pub fn internal_with_source(
        message: impl Into<String>,
        source: impl std::fmt::Display,
    ) -> Self {
        let message = message.into();
        tracing::error!(error = %source, "{message}");
        Self::Internal(message)
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(message)
            | Self::NotFound(message)
            | Self::Conflict(message)
            | Self::UnprocessableEntity(message)
            | Self::Internal(message) => message.as_str(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::bad_request(err.to_string())
    }
}

impl From<crate::db::dao::DaoLayerError> for AppError {
    fn from(err: crate::db::dao::DaoLayerError) -> Self {
        match err {
            crate::db::dao::DaoLayerError::DuplicateKey { .. } => {
                AppError::conflict(err.to_string())
            }
            crate::db::dao::DaoLayerError::ForeignKey { .. } => {
                AppError::unprocessable(err.to_string())
            }
            crate::db::dao::DaoLayerError::Db(ref source) => {
                AppError::internal_with_source("Database operation failed", source)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use sea_orm::DbErr;

    use super::AppError;
    use crate::db::dao::DaoLayerError;
    use crate::intake::ValidationError;

    #[test]
    fn dao_errors_map_to_boundary_statuses() {
        let duplicate: AppError = DaoLayerError::DuplicateKey {
            entity: "product",
            key: "A1".to_string(),
        }
        .into();
        assert_eq!(duplicate.status(), StatusCode::CONFLICT);
        assert!(duplicate.message().contains("A1"));

        let dangling: AppError = DaoLayerError::ForeignKey {
            entity: "mps entry",
            reference: "product_id=99999".to_string(),
        }
        .into();
        assert_eq!(dangling.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let db: AppError = DaoLayerError::Db(DbErr::Custom("disk full".to_string())).into();
        assert_eq!(db.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!db.message().contains("disk full"));
    }

    #[test]
    fn validation_errors_are_bad_requests() {
        let err: AppError = ValidationError::Missing { field: "sku" }.into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.message().contains("sku"));
    }
}
