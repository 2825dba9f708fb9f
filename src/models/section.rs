//! Sections and their images.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct SectionRow {
    pub id: i64,
    pub nom: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    /// Account owning the section.
    pub user_id: Option<i64>,
    pub document_link: Option<String>,
    pub background: Option<String>,
    pub first_picture: Option<String>,
    pub second_picture: Option<String>,
    pub uniforme: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SectionBackgroundRow {
    pub id: i64,
    pub nom: Option<String>,
    pub background: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SectionDescriptionRow {
    pub id: i64,
    pub nom: Option<String>,
    pub first_picture: Option<String>,
    pub second_picture: Option<String>,
}

/// The four image slots of a section, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    Background,
    FirstPicture,
    SecondPicture,
    Uniforme,
}

impl ImageSlot {
    pub const ALL: [ImageSlot; 4] = [
        ImageSlot::Background,
        ImageSlot::FirstPicture,
        ImageSlot::SecondPicture,
        ImageSlot::Uniforme,
    ];

    /// Column name, also the multipart file field name.
    pub fn field(self) -> &'static str {
        match self {
            ImageSlot::Background => "background",
            ImageSlot::FirstPicture => "first_picture",
            ImageSlot::SecondPicture => "second_picture",
            ImageSlot::Uniforme => "uniforme",
        }
    }

    /// Name of the text field carrying a plain URL for this slot.
    pub fn url_field(self) -> &'static str {
        match self {
            ImageSlot::Background => "backgroundUrl",
            ImageSlot::FirstPicture => "first_pictureUrl",
            ImageSlot::SecondPicture => "second_pictureUrl",
            ImageSlot::Uniforme => "uniformeUrl",
        }
    }

    pub fn from_field(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.field() == name)
    }

    pub fn from_url_field(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.url_field() == name)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Stored value of this slot on an existing row.
    pub fn stored(self, row: &SectionRow) -> Option<&String> {
        match self {
            ImageSlot::Background => row.background.as_ref(),
            ImageSlot::FirstPicture => row.first_picture.as_ref(),
            ImageSlot::SecondPicture => row.second_picture.as_ref(),
            ImageSlot::Uniforme => row.uniforme.as_ref(),
        }
    }
}

/// JSON form of a section update: text fields and `*Url` image fields only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionUpdateBody {
    pub nom: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub user_id: Option<i64>,
    pub document_link: Option<String>,
    #[serde(rename = "backgroundUrl")]
    pub background_url: Option<String>,
    #[serde(rename = "first_pictureUrl")]
    pub first_picture_url: Option<String>,
    #[serde(rename = "second_pictureUrl")]
    pub second_picture_url: Option<String>,
    #[serde(rename = "uniformeUrl")]
    pub uniforme_url: Option<String>,
}

/// Values written by `PUT /api/sections/:id`, after merging with the stored row.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionValues {
    pub nom: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub user_id: Option<i64>,
    pub document_link: Option<String>,
    pub background: Option<String>,
    pub first_picture: Option<String>,
    pub second_picture: Option<String>,
    pub uniforme: Option<String>,
}
