use social_prompt_api::{clients::openai::OpenAiClient, http::handler::respond, logging::init_logging};
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    init_logging();
    run(handler).await
}

pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    let content_type = req
        .headers()
        .get("content-type")
        .and_then(|h| h.to_str().ok());
    let client = OpenAiClient::from_env();
    Ok(respond(req.method().as_str(), content_type, req.body(), &client).await?)
}
