use serde_json::json;
use tracing::info;
use vercel_runtime::{Body, Response, StatusCode};

use crate::{
    clients::openai::CompletionClient,
    error::AppError,
    http::{body::decode_request, cors::add_cors, response::{error_response, json_response}},
    services::generate_prompt::generate,
};

/// Request handling for `/api/generate-prompt`, independent of the runtime glue.
pub async fn respond(
    method: &str,
    content_type: Option<&str>,
    body: &[u8],
    client: &dyn CompletionClient,
) -> anyhow::Result<Response<Body>> {
    let resp = match method {
        "OPTIONS" => Response::builder()
            .status(StatusCode::NO_CONTENT)
            .body(String::new().into())?,
        "POST" => match handle_post(content_type, body, client).await {
            Ok(resp) => resp,
            Err(err) => {
                info!(error = %err, "rejected generate-prompt request");
                let (status, value) = error_response(&err);
                json_response(status, &value)?
            }
        },
        _ => Response::builder()
            .status(StatusCode::METHOD_NOT_ALLOWED)
            .header("Allow", "POST")
            .header("Content-Type", "application/json")
            .body(json!({"error": "Use POST with a JSON or multipart/form-data body"}).to_string().into())?,
    };
    Ok(add_cors(resp))
}

async fn handle_post(
    content_type: Option<&str>,
    body: &[u8],
    client: &dyn CompletionClient,
) -> Result<Response<Body>, AppError> {
    let req = decode_request(content_type, body).await?;
    let outcome = generate(req, client).await?;
    Ok(json_response(StatusCode::OK, &outcome)?)
}
