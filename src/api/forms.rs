use actix_web::error::{InternalError, UrlencodedError};
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use serde::{de, Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

/// Form extractor config shared by every write route
///
/// Bodies that fail to decode into the resource's form type are answered
/// with a plain-text 400 naming the problem; oversized bodies with 413.
pub fn form_config(limit: usize) -> web::FormConfig {
    web::FormConfig::default()
        .limit(limit)
        .error_handler(|err, req| {
            warn!("Rejected form submission to {}: {}", req.path(), err);

            let response = match &err {
                UrlencodedError::Overflow { .. } => HttpResponse::PayloadTooLarge()
                    .content_type(ContentType::plaintext())
                    .body("Form submission is too large."),
                UrlencodedError::Parse(de_err) => HttpResponse::BadRequest()
                    .content_type(ContentType::plaintext())
                    .body(format!("Invalid form submission: {}", de_err)),
                _ => HttpResponse::BadRequest()
                    .content_type(ContentType::plaintext())
                    .body(format!("Invalid form submission: {}", err)),
            };

            InternalError::from_response(err, response).into()
        })
}

/// Deserialize an optional form field, treating a blank value as absent
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;

    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}
