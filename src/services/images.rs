//! Section image intake: multipart uploads become inline data URIs, `*Url`
//! fields are taken as-is, and absent slots keep the stored value.

use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::debug;

use crate::error::{AppError, AppJson, AppResult};
use crate::models::section::{ImageSlot, SectionRow, SectionUpdateBody, SectionValues};

const DEFAULT_MIME: &str = "application/octet-stream";

/// New content for one image slot.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageInput {
    Upload { content_type: String, bytes: Bytes },
    Url(String),
}

impl ImageInput {
    /// Value to store in the column.
    pub fn into_stored(self) -> String {
        match self {
            ImageInput::Upload {
                content_type,
                bytes,
            } => data_uri(&content_type, &bytes),
            ImageInput::Url(url) => url,
        }
    }
}

/// `data:<mime>;base64,<payload>`.
pub fn data_uri(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", content_type, STANDARD.encode(bytes))
}

/// Decoded body of `PUT /api/sections/:id`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionForm {
    pub nom: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub user_id: Option<i64>,
    pub document_link: Option<String>,
    /// Indexed by `ImageSlot::index`.
    pub images: [Option<ImageInput>; 4],
}

impl SectionForm {
    /// An uploaded file always wins over a URL for the same slot.
    fn set_image(&mut self, slot: ImageSlot, input: ImageInput) {
        let current = &mut self.images[slot.index()];
        let keep_upload = matches!(current, Some(ImageInput::Upload { .. }))
            && matches!(input, ImageInput::Url(_));
        if !keep_upload {
            *current = Some(input);
        }
    }

    pub fn image(&self, slot: ImageSlot) -> Option<&ImageInput> {
        self.images[slot.index()].as_ref()
    }

    /// Apply the form over the stored row; anything not supplied keeps its stored value.
    pub fn merge(self, existing: &SectionRow) -> SectionValues {
        let [background, first_picture, second_picture, uniforme] =
            ImageSlot::ALL.map(|slot| {
                match self.images[slot.index()].clone() {
                    Some(input) => Some(input.into_stored()),
                    None => slot.stored(existing).cloned(),
                }
            });

        SectionValues {
            nom: self.nom.or_else(|| existing.nom.clone()),
            description: self.description.or_else(|| existing.description.clone()),
            email: self.email.or_else(|| existing.email.clone()),
            user_id: self.user_id.or(existing.user_id),
            document_link: self.document_link.or_else(|| existing.document_link.clone()),
            background,
            first_picture,
            second_picture,
            uniforme,
        }
    }

    pub async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = SectionForm::default();
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            let is_file = field.file_name().is_some();
            let content_type = field
                .content_type()
                .unwrap_or(DEFAULT_MIME)
                .to_string();

            if let Some(slot) = ImageSlot::from_field(&name) {
                let bytes = field.bytes().await?;
                if bytes.is_empty() {
                    continue;
                }
                if is_file {
                    debug!(field = %name, size = bytes.len(), %content_type, "image upload");
                    form.set_image(slot, ImageInput::Upload { content_type, bytes });
                } else {
                    let url = String::from_utf8_lossy(&bytes).trim().to_string();
                    if !url.is_empty() {
                        form.set_image(slot, ImageInput::Url(url));
                    }
                }
                continue;
            }

            let text = field.text().await?;
            if let Some(slot) = ImageSlot::from_url_field(&name) {
                let url = text.trim();
                if !url.is_empty() {
                    form.set_image(slot, ImageInput::Url(url.to_string()));
                }
                continue;
            }
            match name.as_str() {
                "nom" => form.nom = Some(text),
                "description" => form.description = Some(text),
                "email" => form.email = Some(text),
                "document_link" => form.document_link = Some(text),
                "user_id" => form.user_id = parse_user_id(&text)?,
                other => debug!(field = %other, "ignoring unknown section field"),
            }
        }
        Ok(form)
    }
}

fn parse_user_id(text: &str) -> AppResult<Option<i64>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse()
        .map(Some)
        .map_err(|_| AppError::Validation(format!("user_id must be an integer, got {:?}", text)))
}

impl From<SectionUpdateBody> for SectionForm {
    fn from(body: SectionUpdateBody) -> Self {
        let mut form = SectionForm {
            nom: body.nom,
            description: body.description,
            email: body.email,
            user_id: body.user_id,
            document_link: body.document_link,
            images: Default::default(),
        };
        let urls = [
            (ImageSlot::Background, body.background_url),
            (ImageSlot::FirstPicture, body.first_picture_url),
            (ImageSlot::SecondPicture, body.second_picture_url),
            (ImageSlot::Uniforme, body.uniforme_url),
        ];
        for (slot, url) in urls {
            if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
                form.set_image(slot, ImageInput::Url(url));
            }
        }
        form
    }
}

#[axum::async_trait]
impl<S> FromRequest<S> for SectionForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state).await?;
            Self::from_multipart(multipart).await
        } else if content_type.starts_with("application/json") {
            let AppJson(body) = AppJson::<SectionUpdateBody>::from_request(req, state).await?;
            Ok(body.into())
        } else {
            Ok(SectionForm::default())
        }
    }
}
