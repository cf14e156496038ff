use std::convert::Infallible;

use bytes::Bytes;
use futures_util::stream;
use multer::Multipart;

use crate::error::{AppError, Result};
use crate::models::request::{parse_quantity, platform_or_instagram, PromptRequest};

/// Wire encoding of an incoming request body, chosen from `Content-Type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyEncoding {
    Multipart { boundary: String },
    Json,
}

impl BodyEncoding {
    pub fn from_content_type(content_type: Option<&str>) -> Result<Self> {
        match content_type {
            Some(ct) if ct.contains("multipart/form-data") => {
                let boundary = multer::parse_boundary(ct)
                    .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?;
                Ok(Self::Multipart { boundary })
            }
            _ => Ok(Self::Json),
        }
    }

    pub async fn decode(&self, body: &[u8]) -> Result<PromptRequest> {
        match self {
            Self::Multipart { boundary } => decode_multipart(body, boundary).await,
            Self::Json => decode_json(body),
        }
    }
}

pub async fn decode_request(content_type: Option<&str>, body: &[u8]) -> Result<PromptRequest> {
    BodyEncoding::from_content_type(content_type)?.decode(body).await
}

fn decode_json(body: &[u8]) -> Result<PromptRequest> {
    if body.is_empty() {
        return Err(AppError::BadRequest("Empty body".into()));
    }
    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(format!("Invalid JSON: {e}")))
}

fn malformed(err: multer::Error) -> AppError {
    AppError::BadRequest(format!("Invalid multipart body: {err}"))
}

async fn decode_multipart(body: &[u8], boundary: &str) -> Result<PromptRequest> {
    let chunk = Bytes::copy_from_slice(body);
    let stream = stream::once(async move { Ok::<Bytes, Infallible>(chunk) });
    let mut multipart = Multipart::new(stream, boundary.to_string());

    let mut req = PromptRequest::default();
    let mut platform = None;
    while let Some(mut field) = multipart.next_field().await.map_err(malformed)? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        // file parts only need a name or a first non-empty chunk to count
        let named_file = field.file_name().map(|f| !f.is_empty());
        if let Some(named) = named_file {
            let present = named || has_content(&mut field).await?;
            match name.as_str() {
                "logo" => req.logo = present,
                "referenceImage" => req.reference_image = present,
                _ => {}
            }
            continue;
        }

        let text = field.text().await.map_err(malformed)?;
        match name.as_str() {
            "profession" => req.profession = text,
            "colorPalette" => req.color_palette = text,
            "visualStyle" => req.visual_style = text,
            "subject" => req.subject = text,
            "theme" => req.theme = text,
            "artStyle" => req.art_style = non_blank(text),
            "platform" => platform = Some(text),
            "quantity" => req.quantity = parse_quantity(&text),
            "customText" => req.custom_text = non_blank(text),
            "logo" => req.logo = !text.is_empty(),
            "referenceImage" => req.reference_image = !text.is_empty(),
            _ => {}
        }
    }
    req.platform = platform_or_instagram(platform);
    Ok(req)
}

async fn has_content(field: &mut multer::Field<'_>) -> Result<bool> {
    let chunk = field.chunk().await.map_err(malformed)?;
    Ok(chunk.is_some_and(|c| !c.is_empty()))
}

fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() { None } else { Some(text) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDARY: &str = "X-PROMPT-BOUNDARY";

    fn content_type() -> String {
        format!("multipart/form-data; boundary={BOUNDARY}")
    }

    fn form(texts: &[(&str, &str)], files: &[(&str, &str, &str)]) -> Vec<u8> {
        let mut body = String::new();
        for (name, value) in texts {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        for (name, file_name, content) in files {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n{content}\r\n"
            ));
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));
        body.into_bytes()
    }

    const REQUIRED: &[(&str, &str)] = &[
        ("profession", "Dentista"),
        ("colorPalette", "Azul e Branco"),
        ("visualStyle", "Minimalista"),
        ("subject", "Saúde Bucal"),
        ("theme", "Prevenção"),
    ];

    #[test]
    fn encoding_follows_content_type() {
        assert_eq!(
            BodyEncoding::from_content_type(Some(&content_type())).unwrap(),
            BodyEncoding::Multipart { boundary: BOUNDARY.into() }
        );
        assert_eq!(
            BodyEncoding::from_content_type(Some("application/json")).unwrap(),
            BodyEncoding::Json
        );
        assert_eq!(BodyEncoding::from_content_type(None).unwrap(), BodyEncoding::Json);
        assert!(BodyEncoding::from_content_type(Some("multipart/form-data")).is_err());
    }

    #[tokio::test]
    async fn multipart_fields_are_normalized() {
        let mut texts = REQUIRED.to_vec();
        texts.extend([("quantity", "3"), ("platform", "facebook"), ("customText", "Agende já")]);
        let body = form(&texts, &[("logo", "logo.png", "PNGDATA")]);

        let req = decode_request(Some(&content_type()), &body).await.unwrap();
        assert_eq!(req.profession, "Dentista");
        assert_eq!(req.subject, "Saúde Bucal");
        assert_eq!(req.quantity, 3);
        assert_eq!(req.platform, "facebook");
        assert_eq!(req.custom_text.as_deref(), Some("Agende já"));
        assert!(req.logo);
        assert!(!req.reference_image);
        assert_eq!(req.art_style, None);
    }

    #[tokio::test]
    async fn multipart_defaults_for_bad_quantity_and_missing_platform() {
        let mut texts = REQUIRED.to_vec();
        texts.push(("quantity", "abc"));
        let body = form(&texts, &[("referenceImage", "ref.jpg", "JPEGDATA")]);

        let req = decode_request(Some(&content_type()), &body).await.unwrap();
        assert_eq!(req.quantity, 1);
        assert_eq!(req.platform, "instagram");
        assert!(req.reference_image);
    }

    #[tokio::test]
    async fn empty_file_input_is_not_a_file() {
        // an unselected file input arrives with an empty filename
        let body = form(REQUIRED, &[("logo", "", "")]);
        let req = decode_request(Some(&content_type()), &body).await.unwrap();
        assert!(!req.logo);
    }

    #[tokio::test]
    async fn unnamed_file_with_bytes_is_present() {
        let body = form(REQUIRED, &[("logo", "", "PNGDATA"), ("referenceImage", "", "JPEGDATA")]);
        let req = decode_request(Some(&content_type()), &body).await.unwrap();
        assert!(req.logo);
        assert!(req.reference_image);
    }

    #[tokio::test]
    async fn json_bodies_decode_with_camel_case_names() {
        let body = r#"{"profession":"Nutricionista","colorPalette":"Verde","visualStyle":"Clean",
            "subject":"Dieta","theme":"Verão","platform":"whatsapp","quantity":2,"artStyle":"Aquarela"}"#.as_bytes();
        let req = decode_request(Some("application/json"), body).await.unwrap();
        assert_eq!(req.color_palette, "Verde");
        assert_eq!(req.platform, "whatsapp");
        assert_eq!(req.quantity, 2);
        assert_eq!(req.art_style.as_deref(), Some("Aquarela"));
    }

    #[tokio::test]
    async fn unreadable_bodies_are_bad_requests() {
        let err = decode_request(Some("application/json"), b"{not json").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        let err = decode_request(None, b"").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
