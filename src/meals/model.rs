use crate::error::{Result, ValidationError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::Path;

/// Image bytes attached to a meal.
///
/// The bytes are stored as-is; nothing here decodes or resizes the image.
/// On disk a photo is a base64 string field inside the meal record.
#[derive(Clone, PartialEq, Eq)]
pub struct Photo(Vec<u8>);

/// Image container detected from a photo's leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoFormat {
    Png,
    Jpeg,
    Gif,
    Unknown,
}

impl PhotoFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            PhotoFormat::Png => "png",
            PhotoFormat::Jpeg => "jpg",
            PhotoFormat::Gif => "gif",
            PhotoFormat::Unknown => "bin",
        }
    }
}

impl fmt::Display for PhotoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoFormat::Png => write!(f, "PNG"),
            PhotoFormat::Jpeg => write!(f, "JPEG"),
            PhotoFormat::Gif => write!(f, "GIF"),
            PhotoFormat::Unknown => write!(f, "unknown"),
        }
    }
}

impl Photo {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Reads a photo from an image file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn format(&self) -> PhotoFormat {
        let b = self.0.as_slice();
        if b.starts_with(b"\x89PNG\r\n\x1a\n") {
            PhotoFormat::Png
        } else if b.starts_with(&[0xff, 0xd8, 0xff]) {
            PhotoFormat::Jpeg
        } else if b.starts_with(b"GIF87a") || b.starts_with(b"GIF89a") {
            PhotoFormat::Gif
        } else {
            PhotoFormat::Unknown
        }
    }
}

// Photos can be large; keep Debug output to a summary.
impl fmt::Debug for Photo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Photo({}, {} bytes)", self.format(), self.0.len())
    }
}

impl Serialize for Photo {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for Photo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map(Photo)
            .map_err(serde::de::Error::custom)
    }
}

/// A single meal entry.
///
/// A `Meal` can only be obtained through [`Meal::new`] (or by decoding, which
/// goes through the same checks), so every value in the program has a
/// non-empty name and a non-negative rating. Edits build a new `Meal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MealRecord")]
pub struct Meal {
    name: String,
    photo: Option<Photo>,
    rating: i32,
}

impl Meal {
    /// Builds a meal, rejecting an empty name or a negative rating.
    ///
    /// The name is not trimmed: `" "` is a valid name. There is no upper bound
    /// on the rating here; callers that present a fixed star scale clamp
    /// input before calling.
    pub fn new(
        name: impl Into<String>,
        photo: Option<Photo>,
        rating: i32,
    ) -> std::result::Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if rating < 0 {
            return Err(ValidationError::NegativeRating(rating));
        }
        Ok(Self {
            name,
            photo,
            rating,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn photo(&self) -> Option<&Photo> {
        self.photo.as_ref()
    }

    pub fn has_photo(&self) -> bool {
        self.photo.is_some()
    }

    pub fn rating(&self) -> i32 {
        self.rating
    }
}

/// Unvalidated shape of a meal as it appears on disk.
#[derive(Deserialize)]
struct MealRecord {
    name: String,
    #[serde(default)]
    photo: Option<Photo>,
    rating: i32,
}

impl TryFrom<MealRecord> for Meal {
    type Error = ValidationError;

    fn try_from(record: MealRecord) -> std::result::Result<Self, Self::Error> {
        Meal::new(record.name, record.photo, record.rating)
    }
}
