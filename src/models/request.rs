use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const DEFAULT_PLATFORM: &str = "instagram";
pub const DEFAULT_QUANTITY: u32 = 1;

/// Normalized generation request, independent of the body encoding it came from.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PromptRequest {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub profession: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub color_palette: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub visual_style: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub subject: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub theme: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub art_style: Option<String>,
    #[serde(default = "default_platform", deserialize_with = "platform_or_default")]
    pub platform: String,
    #[serde(default = "default_quantity", deserialize_with = "lenient_quantity")]
    pub quantity: u32,
    /// Presence only; uploaded bytes are never inspected.
    #[serde(default, deserialize_with = "truthy")]
    pub logo: bool,
    #[serde(default, deserialize_with = "truthy")]
    pub reference_image: bool,
    #[serde(default, deserialize_with = "optional_text")]
    pub custom_text: Option<String>,
}

impl Default for PromptRequest {
    fn default() -> Self {
        Self {
            profession: String::new(),
            color_palette: String::new(),
            visual_style: String::new(),
            subject: String::new(),
            theme: String::new(),
            art_style: None,
            platform: default_platform(),
            quantity: DEFAULT_QUANTITY,
            logo: false,
            reference_image: false,
            custom_text: None,
        }
    }
}

impl PromptRequest {
    /// Returns the wire names of the required fields that are missing or blank.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let required = [
            ("profession", &self.profession),
            ("colorPalette", &self.color_palette),
            ("visualStyle", &self.visual_style),
            ("subject", &self.subject),
            ("theme", &self.theme),
        ];
        let issues: Vec<String> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name.to_string())
            .collect();
        if issues.is_empty() { Ok(()) } else { Err(issues) }
    }
}

/// Integer coercion used for form-encoded quantities: anything unparsable or
/// non-positive falls back to one post.
pub fn parse_quantity(raw: &str) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(n) if n > 0 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => DEFAULT_QUANTITY,
    }
}

/// Platform coercion shared by both encodings.
pub fn platform_or_instagram(raw: Option<String>) -> String {
    raw.map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(default_platform)
}

fn default_platform() -> String {
    DEFAULT_PLATFORM.to_string()
}

fn default_quantity() -> u32 {
    DEFAULT_QUANTITY
}

fn text_or_empty<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}

fn optional_text<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<String>::deserialize(de)?.filter(|s| !s.trim().is_empty()))
}

fn platform_or_default<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(platform_or_instagram(Option::<String>::deserialize(de)?))
}

fn lenient_quantity<'de, D: Deserializer<'de>>(de: D) -> Result<u32, D::Error> {
    let value = Value::deserialize(de)?;
    Ok(match value {
        Value::Number(n) => match n.as_i64() {
            Some(n) if n > 0 => u32::try_from(n).unwrap_or(u32::MAX),
            _ => DEFAULT_QUANTITY,
        },
        Value::String(s) => parse_quantity(&s),
        _ => DEFAULT_QUANTITY,
    })
}

fn truthy<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
    let value = Value::deserialize(de)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}
