use crate::models::{
    catalog::{platform_format, tone_for_style},
    request::PromptRequest,
};

pub const FALLBACK_NOTE: &str =
    "Prompt gerado em modo fallback: o serviço de IA está indisponível no momento.";

/// Deterministic prompt built only from local data.
pub fn fallback_prompt(req: &PromptRequest) -> String {
    let tone = tone_for_style(&req.visual_style);
    let mut prompt = format!(
        "Prompt Gerado: Crie {quantity} post(s) para {platform} voltado(s) a um(a) {profession}, \
         com tom {tone}. Use a paleta de cores {palette} e o estilo visual {visual_style}. \
         Assunto: {subject}. Tema: {theme}. Formato: {format}.",
        quantity = req.quantity,
        platform = req.platform,
        profession = req.profession,
        palette = req.color_palette,
        visual_style = req.visual_style,
        subject = req.subject,
        theme = req.theme,
        format = platform_format(&req.platform),
    );

    if let Some(art_style) = &req.art_style {
        prompt.push_str(&format!(" Inspire-se no estilo artístico {art_style}."));
    }
    if req.logo {
        prompt.push_str(" Integre o logotipo enviado de forma discreta e harmoniosa.");
    }
    if req.reference_image {
        prompt.push_str(" Use a imagem de referência enviada como inspiração visual.");
    }
    if let Some(text) = &req.custom_text {
        prompt.push_str(&format!(" Inclua o texto: \"{text}\"."));
    }
    prompt.push_str(" Finalize com uma chamada para ação e hashtags relevantes.");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dentist() -> PromptRequest {
        PromptRequest {
            profession: "Dentista".into(),
            color_palette: "Azul e Branco".into(),
            visual_style: "Minimalista".into(),
            subject: "Saúde Bucal".into(),
            theme: "Prevenção".into(),
            platform: "tiktok".into(),
            quantity: 2,
            ..PromptRequest::default()
        }
    }

    #[test]
    fn dentist_on_tiktok() {
        let prompt = fallback_prompt(&dentist());
        for needle in [
            "Dentista",
            "Azul e Branco",
            "Minimalista",
            "Saúde Bucal",
            "Prevenção",
            "tom Profissional",
            "vertical (9:16)",
            "Crie 2 post(s)",
        ] {
            assert!(prompt.contains(needle), "missing {needle} in {prompt}");
        }
        assert!(!prompt.contains("logotipo"));
        assert!(!prompt.contains("imagem de referência"));
        assert!(!prompt.contains("Inclua o texto"));
    }

    #[test]
    fn optional_clauses_only_when_present() {
        let req = PromptRequest {
            visual_style: "Vintage".into(),
            art_style: Some("Pop Art".into()),
            logo: true,
            reference_image: true,
            custom_text: Some("Sorria mais".into()),
            ..dentist()
        };
        let prompt = fallback_prompt(&req);
        assert!(prompt.contains("tom Nostálgico"));
        assert!(prompt.contains("estilo artístico Pop Art"));
        assert!(prompt.contains("logotipo enviado"));
        assert!(prompt.contains("imagem de referência enviada"));
        assert!(prompt.contains("\"Sorria mais\""));
    }

    #[test]
    fn fallback_is_deterministic() {
        assert_eq!(fallback_prompt(&dentist()), fallback_prompt(&dentist()));
    }
}
