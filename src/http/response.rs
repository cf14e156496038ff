use serde::Serialize;
use serde_json::{json, Value};
use vercel_runtime::{Body, Response, StatusCode};

use crate::error::AppError;

/// Every error body has the single shape `{"error": "..."}`.
pub fn error_response(err: &AppError) -> (StatusCode, Value) {
    (err.status(), json!({ "error": err.client_message() }))
}

pub fn json_response<T: Serialize>(status: StatusCode, value: &T) -> anyhow::Result<Response<Body>> {
    let body = serde_json::to_string(value)?;
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(body.into())?)
}
