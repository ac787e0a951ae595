use std::fmt;

use base64::{Engine as _, engine::general_purpose};

pub const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";

/// Number of base64 characters decoded to recognise the image format.
const SNIFF_PREFIX_LEN: usize = 16;

/// A meal photo ready to be sent to the vision model as a data URL.
///
/// `Debug` never prints the payload itself.
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePayload {
    mime_type: String,
    data_url: String,
}

impl ImagePayload {
    /// Wraps raw base64 image data. Input that already is a `data:` URL is kept as is.
    pub fn from_base64(encoded: String) -> Self {
        if let Some(header) = encoded.strip_prefix("data:")
            && let Some((mime_type, _)) = header.split_once(';')
        {
            return Self {
                mime_type: mime_type.to_string(),
                data_url: encoded,
            };
        }

        let mime_type = sniff_mime_type(&encoded);

        Self {
            mime_type: mime_type.to_string(),
            data_url: format!("data:{};base64,{}", mime_type, encoded),
        }
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    pub fn len(&self) -> usize {
        self.data_url.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_url.is_empty()
    }
}

impl fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImagePayload")
            .field("mime_type", &self.mime_type)
            .field("len", &self.data_url.len())
            .finish()
    }
}

/// Recognises JPEG, PNG, GIF and WebP from their magic bytes.
pub fn sniff_mime_type(encoded: &str) -> &'static str {
    let prefix = match encoded.get(..SNIFF_PREFIX_LEN) {
        Some(prefix) => prefix,
        None => return DEFAULT_IMAGE_MIME_TYPE,
    };

    match general_purpose::STANDARD.decode(prefix).as_deref() {
        Ok([0xFF, 0xD8, 0xFF, ..]) => "image/jpeg",
        Ok([0x89, b'P', b'N', b'G', ..]) => "image/png",
        Ok([b'G', b'I', b'F', b'8', ..]) => "image/gif",
        Ok([b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..]) => "image/webp",
        _ => DEFAULT_IMAGE_MIME_TYPE,
    }
}
