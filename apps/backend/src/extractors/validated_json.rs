//! JSON body extractor with the project's error contract.
//!
//! `actix_web::web::Json` reports parse failures in its own format; this
//! extractor routes them through [`AppError`] instead, so a malformed
//! body or a bad card/seat/strain token produces the same RFC 7807
//! response shape as every other failure, carrying the request's trace
//! id.

use std::ops::{Deref, DerefMut};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::Error as JsonError;
use tracing::debug;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::trace_ctx;

#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(_req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();

        Box::pin(async move {
            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|_| {
                    AppError::bad_request(
                        ErrorCode::BadRequest,
                        "Failed to read request body".to_string(),
                    )
                })?;
                body.extend_from_slice(&chunk);
            }

            let parsed = serde_json::from_slice::<T>(&body).map_err(|e| {
                let detail = describe_json_error(&e);
                debug!(
                    trace_id = %trace_ctx::trace_id(),
                    error = %e,
                    body_size = body.len(),
                    "rejecting request body"
                );
                AppError::bad_request(ErrorCode::BadRequest, detail)
            })?;

            Ok(ValidatedJson(parsed))
        })
    }
}

/// Turn a `serde_json` failure into a client-facing detail string.
///
/// Data errors keep serde's own message, which is where the card, seat
/// and strain deserializers report the offending token.
fn describe_json_error(error: &JsonError) -> String {
    use serde_json::error::Category;

    match error.classify() {
        Category::Syntax => format!("Invalid JSON at line {}", error.line()),
        Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        Category::Data => format!("Invalid JSON: {error}"),
        Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Body {
        name: String,
        count: u32,
    }

    #[test]
    fn syntax_errors_report_the_line() {
        let err = serde_json::from_str::<Body>("{\"name\": \"x\",\n \"count\": }").unwrap_err();
        assert_eq!(describe_json_error(&err), "Invalid JSON at line 2");
    }

    #[test]
    fn truncated_bodies_report_eof() {
        let err = serde_json::from_str::<Body>(r#"{"name": "x""#).unwrap_err();
        assert!(describe_json_error(&err).contains("unexpected end of input"));
    }

    #[test]
    fn data_errors_keep_serde_detail() {
        let err = serde_json::from_str::<Body>(r#"{"name": 1, "count": "x"}"#).unwrap_err();
        let detail = describe_json_error(&err);
        assert!(detail.starts_with("Invalid JSON:"));
        assert!(detail.contains("invalid type"));
    }

    #[test]
    fn bad_card_tokens_are_named() {
        #[derive(Debug, Deserialize)]
        struct CardBody {
            #[allow(dead_code)]
            card: dds::Card,
        }

        // Rank-first notation: the detail must name the token verbatim.
        let err = serde_json::from_str::<CardBody>(r#"{"card": "AS"}"#).unwrap_err();
        assert!(describe_json_error(&err).contains("\"AS\""));
    }

    #[test]
    fn deref_and_into_inner_expose_the_value() {
        let mut wrapped = ValidatedJson(Body {
            name: "x".to_string(),
            count: 1,
        });
        assert_eq!(wrapped.name, "x");
        wrapped.count = 2;
        assert_eq!(wrapped.into_inner().count, 2);
    }
}
