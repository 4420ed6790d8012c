use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;
use tracing::{error, warn};

/// Handler-level errors, rendered as plain-text responses
#[derive(Debug)]
pub enum AppError {
    /// Statement failed in the store; `context` says what was being attempted
    Store {
        context: String,
        source: sqlx::Error,
    },

    /// No row with the requested id
    NotFound { label: &'static str },

    /// Template failed to render
    Render(askama::Error),
}

impl AppError {
    pub fn store(context: impl Into<String>, source: sqlx::Error) -> Self {
        AppError::Store {
            context: context.into(),
            source,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Store { context, source } => write!(f, "{}: {}", context, source),
            AppError::NotFound { label } => write!(f, "{} not found.", label),
            AppError::Render(e) => write!(f, "Error rendering page: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Store { source, .. } => Some(source),
            AppError::NotFound { .. } => None,
            AppError::Render(e) => Some(e),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Store { .. } | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Store { .. } => {
                error!("{}", self);
                self.to_string()
            }
            AppError::NotFound { .. } => {
                warn!("{}", self);
                self.to_string()
            }
            AppError::Render(_) => {
                error!("{}", self);
                "Error rendering page.".to_string()
            }
        };

        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(body)
    }
}
