use tracing::{info, warn};

use crate::{
    clients::openai::CompletionClient,
    error::{AppError, Result},
    models::{
        request::PromptRequest,
        response::{FallbackPrompt, GenerateOutcome, GeneratedPrompt},
    },
    services::{
        fallback::{fallback_prompt, FALLBACK_NOTE},
        prompt_builder,
    },
};

pub const GENERATED_PREFIX: &str = "Prompt Gerado: ";

pub async fn generate(req: PromptRequest, client: &dyn CompletionClient) -> Result<GenerateOutcome> {
    if let Err(missing) = req.validate() {
        return Err(AppError::Validation(format!(
            "Campos obrigatórios ausentes: {}",
            missing.join(", ")
        )));
    }

    let system = prompt_builder::system_instruction().to_string();
    let user = prompt_builder::user_content(&req);
    match client.complete(system, user).await {
        Ok(text) => {
            info!(platform = %req.platform, "prompt generated by completion service");
            Ok(GenerateOutcome::Generated(GeneratedPrompt {
                prompt: format!("{GENERATED_PREFIX}{text}"),
                success: true,
                platform: req.platform,
                logo: req.logo,
                reference_image: req.reference_image,
                custom_text: req.custom_text.is_some(),
            }))
        }
        Err(err) => {
            warn!(error = %err, platform = %req.platform, "completion failed, using fallback prompt");
            Ok(GenerateOutcome::Fallback(FallbackPrompt {
                prompt: fallback_prompt(&req),
                success: true,
                note: FALLBACK_NOTE.to_string(),
            }))
        }
    }
}
