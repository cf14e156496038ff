//! Static lookup tables for platform formats and style tones.

use std::fmt;

pub const DEFAULT_PLATFORM_FORMAT: &str = "Formato padrão";

const PLATFORM_FORMATS: &[(&str, &str)] = &[
    (
        "instagram",
        "Feed quadrado (1:1) ou retrato (4:5), Stories e Reels em vertical (9:16)",
    ),
    (
        "facebook",
        "Feed quadrado (1:1) ou paisagem (1.91:1), Stories em vertical (9:16)",
    ),
    ("tiktok", "Vídeo em tela cheia no formato vertical (9:16)"),
    (
        "whatsapp",
        "Status em vertical (9:16) e imagens quadradas (1:1) para conversas",
    ),
];

/// Human readable aspect ratios for a platform identifier.
pub fn platform_format(platform: &str) -> &'static str {
    PLATFORM_FORMATS
        .iter()
        .find(|(id, _)| *id == platform)
        .map(|(_, format)| *format)
        .unwrap_or(DEFAULT_PLATFORM_FORMAT)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Profissional,
    Inovador,
    Nostalgico,
    Elegante,
    Contemporaneo,
    Serio,
    Divertido,
    Criativo,
}

impl Tone {
    pub fn label(self) -> &'static str {
        match self {
            Tone::Profissional => "Profissional",
            Tone::Inovador => "Inovador",
            Tone::Nostalgico => "Nostálgico",
            Tone::Elegante => "Elegante",
            Tone::Contemporaneo => "Contemporâneo",
            Tone::Serio => "Sério",
            Tone::Divertido => "Divertido",
            Tone::Criativo => "Criativo",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const STYLE_TONES: &[(&str, Tone)] = &[
    ("Minimalista", Tone::Profissional),
    ("Clean", Tone::Profissional),
    ("Profissional", Tone::Profissional),
    ("Moderno", Tone::Inovador),
    ("Futurista", Tone::Inovador),
    ("Tecnológico", Tone::Inovador),
    ("Neon", Tone::Inovador),
    ("Vintage", Tone::Nostalgico),
    ("Retrô", Tone::Nostalgico),
    ("Anos 80", Tone::Nostalgico),
    ("Clássico", Tone::Elegante),
    ("Luxuoso", Tone::Elegante),
    ("Sofisticado", Tone::Elegante),
    ("Elegante", Tone::Elegante),
    ("Contemporâneo", Tone::Contemporaneo),
    ("Urbano", Tone::Contemporaneo),
    ("Flat Design", Tone::Contemporaneo),
    ("Geométrico", Tone::Contemporaneo),
    ("Corporativo", Tone::Serio),
    ("Institucional", Tone::Serio),
    ("Formal", Tone::Serio),
    ("Divertido", Tone::Divertido),
    ("Colorido", Tone::Divertido),
    ("Infantil", Tone::Divertido),
    ("Cartoon", Tone::Divertido),
    ("Lúdico", Tone::Divertido),
    ("Artístico", Tone::Criativo),
    ("Abstrato", Tone::Criativo),
    ("Aquarela", Tone::Criativo),
    ("Ilustrado", Tone::Criativo),
    ("Pop Art", Tone::Criativo),
    ("Boho", Tone::Criativo),
];

/// Tone used to phrase the fallback prompt for a visual style.
pub fn tone_for_style(style: &str) -> Tone {
    let style = style.trim();
    STYLE_TONES
        .iter()
        .find(|(label, _)| *label == style)
        .map(|(_, tone)| *tone)
        .unwrap_or(Tone::Profissional)
}
