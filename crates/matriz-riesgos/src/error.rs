use crate::classification::ClassificationError;
use crate::config::ConfigError;
use crate::domains::UnknownDomain;
use crate::model::ModelError;
use crate::record::EncodingError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Model(ModelError),
    UnknownDomain(UnknownDomain),
    Encoding(EncodingError),
    Classification(ClassificationError),
    Input(serde_json::Error),
    Batch(csv::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnknownDomain(_) => StatusCode::NOT_FOUND,
            AppError::Encoding(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Input(_) | AppError::Batch(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Model(_)
            | AppError::Classification(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Model(err) => write!(f, "model error: {}", err),
            AppError::UnknownDomain(err) => write!(f, "{}", err),
            AppError::Encoding(err) => write!(f, "invalid record: {}", err),
            AppError::Classification(err) => write!(f, "classification error: {}", err),
            AppError::Input(err) => write!(f, "invalid JSON input: {}", err),
            AppError::Batch(err) => write!(f, "invalid CSV input: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Model(err) => Some(err),
            AppError::UnknownDomain(err) => Some(err),
            AppError::Encoding(err) => Some(err),
            AppError::Classification(err) => Some(err),
            AppError::Input(err) => Some(err),
            AppError::Batch(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::Encoding(err) => json!({
                "error": self.to_string(),
                "field": err.field(),
            }),
            _ => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<ModelError> for AppError {
    fn from(value: ModelError) -> Self {
        Self::Model(value)
    }
}

impl From<UnknownDomain> for AppError {
    fn from(value: UnknownDomain) -> Self {
        Self::UnknownDomain(value)
    }
}

impl From<EncodingError> for AppError {
    fn from(value: EncodingError) -> Self {
        Self::Encoding(value)
    }
}

impl From<ClassificationError> for AppError {
    fn from(value: ClassificationError) -> Self {
        match value {
            ClassificationError::Encoding(err) => Self::Encoding(err),
            other => Self::Classification(other),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Input(value)
    }
}

impl From<csv::Error> for AppError {
    fn from(value: csv::Error) -> Self {
        Self::Batch(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::Domain;

    #[test]
    fn maps_request_failures_to_client_statuses() {
        let missing = AppError::from(EncodingError::MissingField {
            field: "pisos".to_string(),
        });
        assert_eq!(missing.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let unknown = AppError::from("bodega".parse::<Domain>().expect_err("unknown"));
        assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
        assert_eq!(unknown.to_string(), "unknown domain 'bodega'");
    }

    #[test]
    fn classification_encoding_failures_stay_client_errors() {
        let err = AppError::from(ClassificationError::Encoding(EncodingError::MissingField {
            field: "pisos".to_string(),
        }));
        assert!(matches!(err, AppError::Encoding(_)));

        let err = AppError::from(ClassificationError::EmptyPrediction(Domain::Health));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
