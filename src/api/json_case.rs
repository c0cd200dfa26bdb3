//! Renaming JSON property names in responses.

use axum::{
    body::{Body, HttpBody, to_bytes},
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};

use crate::casing::{CaseConverter, CasingStyle};
use crate::error::AppError;

/// Largest response body the middleware buffers; bigger or unsized bodies
/// are streamed through untouched.
pub const MAX_JSON_BODY_BYTES: usize = 1024 * 1024;

/// Renames every object key in `value`, descending into nested objects and
/// arrays. Scalars are left alone. A key that converts to nothing keeps its
/// original spelling; when two keys collide the later one wins.
pub fn convert_keys(value: Value, converter: &dyn CaseConverter) -> Value {
    match value {
        Value::Object(map) => {
            let mut renamed = Map::with_capacity(map.len());
            for (key, value) in map {
                let converted = converter.convert(&key);
                let key = if converted.is_empty() {
                    key
                } else {
                    converted.into_owned()
                };
                renamed.insert(key, convert_keys(value, converter));
            }
            Value::Object(renamed)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| convert_keys(item, converter))
                .collect(),
        ),
        scalar => scalar,
    }
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| {
            value
                .split(';')
                .next()
                .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        })
}

/// Middleware renaming the keys of `application/json` response bodies.
///
/// Bodies that are not JSON, do not parse, have no known size or exceed
/// [`MAX_JSON_BODY_BYTES`] pass through unchanged.
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/", get(handler))
///     .layer(middleware::from_fn_with_state(CasingStyle::Camel, json_case::layer));
/// ```
pub async fn layer(State(style): State<CasingStyle>, request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    if !is_json(&response) {
        return response;
    }

    let within_limit = response
        .body()
        .size_hint()
        .upper()
        .is_some_and(|upper| upper <= MAX_JSON_BODY_BYTES as u64);
    if !within_limit {
        tracing::debug!("JSON body too large or unsized, key casing skipped");
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, MAX_JSON_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return AppError::internal(
                "Failed to read response body",
                serde_json::json!({ "reason": e.to_string() }),
            )
            .into_response();
        }
    };

    let body = match serde_json::from_slice::<Value>(&bytes) {
        Ok(value) => match serde_json::to_vec(&convert_keys(value, &style)) {
            Ok(renamed) => Body::from(renamed),
            Err(_) => Body::from(bytes),
        },
        Err(_) => Body::from(bytes),
    };

    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, body)
}
