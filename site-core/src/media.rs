use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Document,
}

impl MediaKind {
    pub const ALL: [MediaKind; 4] = [MediaKind::Image, MediaKind::Video, MediaKind::Audio, MediaKind::Document];

    /// Classify by MIME type prefix; anything unrecognised is a document.
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            Self::Image
        } else if mime.starts_with("video/") {
            Self::Video
        } else if mime.starts_with("audio/") {
            Self::Audio
        } else {
            Self::Document
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Document => "document",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.slug() == slug)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MediaFile {
    pub id: String,
    pub name: String,
    pub kind: MediaKind,
    pub size: String,
    pub upload_date: String,
    pub url: String,
    pub thumbnail: Option<String>,
}

/// `0 Bytes`, `512 Bytes`, `1.5 KB`, `2.34 MB`, ...
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let k = 1024f64;
    let bytes_f = bytes as f64;
    let i = ((bytes_f.ln() / k.ln()).floor() as usize).min(UNITS.len() - 1);
    let value = bytes_f / k.powi(i as i32);
    // Two decimals, trailing zeros dropped
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[i])
}

/// Short content-derived id for an uploaded file.
pub fn content_id(name: &str, bytes: &[u8]) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(name.as_bytes());
    hasher.update(&[0]);
    hasher.update(bytes);
    let hex = hasher.finalize().to_hex();
    hex.as_str()[..16].to_string()
}

/// Case-insensitive name search combined with an optional kind filter.
pub fn filter_media<'a>(files: &'a [MediaFile], search: &str, kind: Option<MediaKind>) -> Vec<&'a MediaFile> {
    let needle = search.to_lowercase();
    files
        .iter()
        .filter(|f| f.name.to_lowercase().contains(&needle))
        .filter(|f| kind.is_none_or(|k| f.kind == k))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, kind: MediaKind) -> MediaFile {
        MediaFile {
            id: name.to_string(),
            name: name.to_string(),
            kind,
            size: "1 KB".to_string(),
            upload_date: "2024-01-15".to_string(),
            url: format!("/{name}"),
            thumbnail: None,
        }
    }

    #[test]
    fn test_kind_from_mime() {
        assert_eq!(MediaKind::from_mime("image/png"), MediaKind::Image);
        assert_eq!(MediaKind::from_mime("video/mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_mime("audio/mpeg"), MediaKind::Audio);
        assert_eq!(MediaKind::from_mime("application/pdf"), MediaKind::Document);
        assert_eq!(MediaKind::from_mime(""), MediaKind::Document);
    }

    #[test]
    fn test_file_sizes() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2_621_440), "2.5 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024), "5 GB");
    }

    #[test]
    fn test_content_id_is_stable_and_distinct() {
        let a = content_id("a.jpg", b"hello");
        assert_eq!(a.len(), 16);
        assert_eq!(a, content_id("a.jpg", b"hello"));
        assert_ne!(a, content_id("b.jpg", b"hello"));
        assert_ne!(a, content_id("a.jpg", b"hellp"));
    }

    #[test]
    fn test_filter_media() {
        let files = vec![
            file("church-building.jpg", MediaKind::Image),
            file("sermon-video.mp4", MediaKind::Video),
            file("testimony-audio.mp3", MediaKind::Audio),
        ];
        assert_eq!(filter_media(&files, "", None).len(), 3);
        assert_eq!(filter_media(&files, "SERMON", None).len(), 1);
        assert_eq!(filter_media(&files, "", Some(MediaKind::Audio)).len(), 1);
        assert!(filter_media(&files, "church", Some(MediaKind::Video)).is_empty());
    }
}
