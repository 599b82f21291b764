//! Image payloads read from disk or drag-and-drop.
//!
//! Nothing here validates that the bytes are really an image: the picker's
//! extension filter is only a hint, and whatever file the user hands over is
//! forwarded as-is. The sniffed kind is used for the multipart MIME type and
//! to pick a preview decoder.

use anyhow::Context;
use std::path::Path;
use std::sync::Arc;

use crate::preview::PreviewHandle;

/// Extensions offered by the file picker filter.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Webp,
    Unknown,
}

impl ImageKind {
    /// Detect the kind from magic bytes, falling back to the file extension.
    pub fn sniff(bytes: &[u8], file_name: &str) -> Self {
        if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Self::Png;
        }
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Self::Jpeg;
        }
        if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            return Self::Gif;
        }
        if bytes.starts_with(b"BM") {
            return Self::Bmp;
        }
        if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            return Self::Webp;
        }
        Self::from_extension(file_name)
    }

    fn from_extension(file_name: &str) -> Self {
        let ext = Path::new(file_name)
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" => Self::Png,
            "jpg" | "jpeg" => Self::Jpeg,
            "gif" => Self::Gif,
            "bmp" => Self::Bmp,
            "webp" => Self::Webp,
            _ => Self::Unknown,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Bmp => "image/bmp",
            Self::Webp => "image/webp",
            Self::Unknown => "application/octet-stream",
        }
    }
}

/// Raw file contents plus the metadata sent alongside them.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub file_name: String,
    pub kind: ImageKind,
    pub bytes: Arc<[u8]>,
}

impl ImagePayload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        let file_name = file_name.into();
        let bytes = bytes.into();
        let kind = ImageKind::sniff(&bytes, &file_name);
        Self { file_name, kind, bytes }
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let bytes = std::fs::read(path).with_context(|| format!("Cannot read image file {:?}", path))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        Ok(Self::new(file_name, bytes))
    }

    pub fn mime(&self) -> &'static str {
        self.kind.mime()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// The image currently shown by the upload widget.
#[derive(Debug, Clone)]
pub struct SelectedImage {
    pub payload: ImagePayload,
    pub preview: PreviewHandle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_magic_bytes_beats_extension() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];
        assert_eq!(ImageKind::sniff(&png, "photo.jpg"), ImageKind::Png);
        assert_eq!(ImageKind::sniff(&[0xFF, 0xD8, 0xFF, 0xE0], "upload"), ImageKind::Jpeg);
        assert_eq!(ImageKind::sniff(b"RIFF\0\0\0\0WEBPVP8 ", "x.bin"), ImageKind::Webp);
    }

    #[test]
    fn test_sniff_falls_back_to_extension() {
        assert_eq!(ImageKind::sniff(b"??", "Goal.JPEG"), ImageKind::Jpeg);
        assert_eq!(ImageKind::sniff(b"??", "notes.txt"), ImageKind::Unknown);
        assert_eq!(ImageKind::Unknown.mime(), "application/octet-stream");
    }

    #[test]
    fn test_from_path_accepts_any_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("match.txt");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let payload = ImagePayload::from_path(&path).unwrap();
        assert_eq!(payload.file_name, "match.txt");
        assert_eq!(payload.kind, ImageKind::Unknown);
        assert_eq!(payload.len(), 23);
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ImagePayload::from_path(&dir.path().join("gone.png")).is_err());
    }
}
