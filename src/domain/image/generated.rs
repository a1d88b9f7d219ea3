use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static DATA_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^data:(?P<media>image/[A-Za-z0-9.+-]+)(?:;[^,]*)?;base64,(?P<data>.*)$")
        .expect("data URL pattern is valid")
});

const DEFAULT_MEDIA_TYPE: &str = "image/png";

/// An image returned by an image provider.
///
/// Providers answer either with a hosted URL or with the image bytes inline
/// as base64; both forms are kept apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeneratedImage {
    Url { url: String },
    Inline { media_type: String, data: String },
    /// Non-base64 `data:image/...` URL, kept verbatim
    DataUrl { url: String },
}

impl GeneratedImage {
    /// Classify a raw image field from a provider response.
    ///
    /// Base64 `data:image/...` URLs and bare base64 become
    /// [`GeneratedImage::Inline`], other `data:image` URLs are kept as
    /// [`GeneratedImage::DataUrl`], `http(s)://` links become
    /// [`GeneratedImage::Url`].
    pub fn from_provider_field(raw: &str) -> Option<Self> {
        let raw = raw.trim();

        if raw.is_empty() {
            return None;
        }

        if let Some(caps) = DATA_URL.captures(raw) {
            return Some(Self::Inline {
                media_type: caps["media"].to_string(),
                data: caps["data"].to_string(),
            });
        }

        let lower = raw.to_ascii_lowercase();
        if lower.starts_with("data:image") {
            return Some(Self::DataUrl {
                url: raw.to_string(),
            });
        }

        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Some(Self::Url {
                url: raw.to_string(),
            });
        }

        Some(Self::Inline {
            media_type: DEFAULT_MEDIA_TYPE.to_string(),
            data: raw.to_string(),
        })
    }

    /// Short tag for the image form
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Url { .. } => "url",
            Self::Inline { .. } | Self::DataUrl { .. } => "inline",
        }
    }

    /// Value usable directly as an `<img src>`
    pub fn to_src(&self) -> String {
        match self {
            Self::Url { url } | Self::DataUrl { url } => url.clone(),
            Self::Inline { media_type, data } => format!("data:{};base64,{}", media_type, data),
        }
    }
}
