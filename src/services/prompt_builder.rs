use crate::models::{catalog::platform_format, request::PromptRequest};

const SYSTEM_INSTRUCTION: &str = "\
Você é um especialista em marketing digital e design para redes sociais. \
Sua tarefa é criar prompts detalhados para geração de posts visuais, \
adaptados à profissão, à identidade visual e à plataforma informadas.

Responda sempre neste formato:
Título: <título curto e chamativo>
Descrição visual: <composição, cores, elementos e estilo da imagem>
Texto do post: <legenda pronta para publicação>
Hashtags: <lista de hashtags>
Especificações técnicas: <formato, proporção e resolução>

Regras:
1. Sugira de 5 a 10 hashtags relevantes para a profissão e o tema.
2. Descreva o layout indicando onde ficam título, imagem principal e textos de apoio.
3. Use a paleta de cores informada como base de toda a composição.
4. Mantenha o estilo visual consistente em todos os elementos.
5. Inclua uma chamada para ação (CTA) clara no final da legenda.
6. Sugira o melhor dia e horário para publicar na plataforma escolhida.
7. Quando houver logotipo, indique a posição e o tamanho ideais para integrá-lo sem competir com o conteúdo.
8. Quando houver imagem de referência, use-a como inspiração de composição, cores e atmosfera.
9. Quando houver texto personalizado, incorpore-o literalmente na arte ou na legenda.
10. Adapte proporção, enquadramento e linguagem ao formato da plataforma.
11. Quando houver um estilo artístico de referência, descreva como aplicá-lo.
12. Informe as especificações técnicas (proporção, resolução mínima e área segura para textos).
13. Use linguagem adequada ao público da profissão, sem jargões excessivos.
14. Quando a quantidade de posts for maior que um, descreva variações coerentes entre si.";

/// Fixed system-role instruction sent with every completion request.
pub fn system_instruction() -> &'static str {
    SYSTEM_INSTRUCTION
}

pub fn user_content(req: &PromptRequest) -> String {
    let art_style = req.art_style.as_deref().unwrap_or("Nenhum estilo artístico específico");
    format!(
        "Crie {quantity} prompt(s) de post para a plataforma {platform}.\n\
         Profissão: {profession}\n\
         Paleta de cores: {palette}\n\
         Estilo visual: {visual_style}\n\
         Estilo artístico: {art_style}\n\
         Assunto: {subject}\n\
         Tema: {theme}\n\
         Formatos da plataforma: {format}\n\
         {logo}\n\
         {reference}\n\
         {custom_text}",
        quantity = req.quantity,
        platform = req.platform,
        profession = req.profession,
        palette = req.color_palette,
        visual_style = req.visual_style,
        subject = req.subject,
        theme = req.theme,
        format = platform_format(&req.platform),
        logo = logo_instruction(req.logo),
        reference = reference_instruction(req.reference_image),
        custom_text = custom_text_instruction(req.custom_text.as_deref()),
    )
}

fn logo_instruction(present: bool) -> &'static str {
    if present {
        "Logotipo: o cliente enviou um logotipo; indique como integrá-lo ao design."
    } else {
        "Logotipo: nenhum logotipo enviado; não inclua marcas no design."
    }
}

fn reference_instruction(present: bool) -> &'static str {
    if present {
        "Imagem de referência: o cliente enviou uma imagem de referência; use-a como inspiração visual."
    } else {
        "Imagem de referência: nenhuma imagem de referência enviada."
    }
}

fn custom_text_instruction(text: Option<&str>) -> String {
    match text {
        Some(text) => format!("Texto personalizado: inclua exatamente o texto \"{text}\"."),
        None => "Texto personalizado: nenhum; crie o texto do post livremente.".to_string(),
    }
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
    fn system_instruction_has_fourteen_rules() {
        let rules = system_instruction()
            .lines()
            .filter(|line| {
                line.split_once(". ")
                    .is_some_and(|(n, _)| n.parse::<u8>().is_ok())
            })
            .count();
        assert_eq!(rules, 14);
    }

    #[test]
    fn user_content_interpolates_every_field() {
        let content = user_content(&dentist());
        for needle in [
            "Dentista",
            "Azul e Branco",
            "Minimalista",
            "Saúde Bucal",
            "Prevenção",
            "Crie 2 prompt(s)",
            "vertical (9:16)",
            "nenhum logotipo enviado",
            "nenhuma imagem de referência",
        ] {
            assert!(content.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn presence_sentences_follow_the_record() {
        let req = PromptRequest {
            logo: true,
            reference_image: true,
            custom_text: Some("Agende sua consulta".into()),
            art_style: Some("Art Déco".into()),
            ..dentist()
        };
        let content = user_content(&req);
        assert!(content.contains("enviou um logotipo"));
        assert!(content.contains("enviou uma imagem de referência"));
        assert!(content.contains("\"Agende sua consulta\""));
        assert!(content.contains("Estilo artístico: Art Déco"));
    }
}
