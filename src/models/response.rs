use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPrompt {
    pub prompt: String,
    pub success: bool,
    pub platform: String,
    pub logo: bool,
    pub reference_image: bool,
    pub custom_text: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FallbackPrompt {
    pub prompt: String,
    pub success: bool,
    pub note: String,
}

/// Either body is a 200; callers tell them apart by the `note` key.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum GenerateOutcome {
    Generated(GeneratedPrompt),
    Fallback(FallbackPrompt),
}

impl GenerateOutcome {
    pub fn prompt(&self) -> &str {
        match self {
            GenerateOutcome::Generated(g) => &g.prompt,
            GenerateOutcome::Fallback(f) => &f.prompt,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, GenerateOutcome::Fallback(_))
    }
}
