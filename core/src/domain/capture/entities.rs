use base64::{Engine as _, engine::general_purpose};

use crate::domain::common::entities::app_errors::CoreError;

pub const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";

pub const SUPPORTED_IMAGE_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// A single encoded still image taken from the capture surface.
///
/// Frames are immutable once built: the payload is never empty and the MIME
/// type is always one of [`SUPPORTED_IMAGE_MIME_TYPES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFrame {
    data: Vec<u8>,
    mime_type: String,
}

impl ImageFrame {
    pub fn new(data: Vec<u8>, mime_type: &str) -> Result<Self, CoreError> {
        let mime_type = normalize_mime_type(mime_type)?;

        if data.is_empty() {
            return Err(CoreError::InvalidImage("image payload is empty".to_string()));
        }

        Ok(Self { data, mime_type })
    }

    /// Decodes a `data:<mime>;base64,<payload>` URL as produced by
    /// `canvas.toDataURL`. A missing MIME type falls back to JPEG.
    pub fn from_data_url(data_url: &str) -> Result<Self, CoreError> {
        let rest = data_url
            .trim()
            .strip_prefix("data:")
            .ok_or_else(|| CoreError::InvalidImage("expected a data: URL".to_string()))?;

        let (header, payload) = rest.split_once(',').ok_or_else(|| {
            CoreError::InvalidImage("data URL is missing its payload".to_string())
        })?;

        let mut params = header.split(';');
        let mime_type = params.next().map(str::trim).unwrap_or_default();
        let is_base64 = params.any(|param| param.trim().eq_ignore_ascii_case("base64"));

        if !is_base64 {
            return Err(CoreError::InvalidImage(
                "data URL must be base64 encoded".to_string(),
            ));
        }

        let mime_type = if mime_type.is_empty() {
            DEFAULT_IMAGE_MIME_TYPE
        } else {
            mime_type
        };

        let data = general_purpose::STANDARD
            .decode(payload.trim())
            .map_err(|e| CoreError::InvalidImage(format!("invalid base64 payload: {}", e)))?;

        Self::new(data, mime_type)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.data)
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.to_base64())
    }

    pub fn ensure_within(&self, max_bytes: usize) -> Result<(), CoreError> {
        if self.data.len() > max_bytes {
            return Err(CoreError::ImageTooLarge {
                size: self.data.len(),
                max: max_bytes,
            });
        }

        Ok(())
    }
}

/// Strips parameters, lowercases, and maps the non-standard `image/jpg`
/// alias before checking against the supported list.
fn normalize_mime_type(raw: &str) -> Result<String, CoreError> {
    let essence = raw.split(';').next().unwrap_or_default().trim();
    let essence = essence.to_ascii_lowercase();
    let essence = if essence == "image/jpg" {
        DEFAULT_IMAGE_MIME_TYPE.to_string()
    } else {
        essence
    };

    if SUPPORTED_IMAGE_MIME_TYPES.contains(&essence.as_str()) {
        Ok(essence)
    } else {
        Err(CoreError::UnsupportedMediaType(raw.trim().to_string()))
    }
}
