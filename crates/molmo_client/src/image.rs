/// Image reference resolution for multimodal queries
use crate::error::Result;
use base64::{engine::general_purpose, Engine as _};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// An image reference as accepted by the multimodal endpoint.
///
/// The endpoint takes either a remote URL or a base64-encoded image.
/// Local files are re-encoded as PNG and base64-encoded before
/// transmission; the other two variants pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Url(String),
    LocalPath(PathBuf),
    InlineBase64(String),
}

impl ImageSource {
    /// Classify a raw string once, at the boundary.
    ///
    /// Strings starting with `http` are URLs. Anything else naming an
    /// existing file is a local path. Everything else is assumed to be
    /// already-encoded image data and is sent literally.
    pub fn detect(raw: &str) -> Self {
        if raw.starts_with("http") {
            Self::Url(raw.to_string())
        } else if Path::new(raw).exists() {
            Self::LocalPath(PathBuf::from(raw))
        } else {
            Self::InlineBase64(raw.to_string())
        }
    }

    /// Resolve the reference to the wire string.
    ///
    /// Only the `LocalPath` arm touches the filesystem.
    pub fn resolve(self) -> Result<String> {
        match self {
            Self::Url(url) => Ok(url),
            Self::InlineBase64(data) => Ok(data),
            Self::LocalPath(path) => png_base64(&path),
        }
    }
}

/// Load an image file, re-encode it as PNG, and base64-encode the result
fn png_base64(path: &Path) -> Result<String> {
    let img = image::open(path)?;

    let mut buffer = Vec::new();
    let mut cursor = Cursor::new(&mut buffer);
    img.write_to(&mut cursor, image::ImageFormat::Png)?;

    Ok(general_purpose::STANDARD.encode(&buffer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    #[test]
    fn test_detect_url() {
        assert!(matches!(
            ImageSource::detect("https://example.com/trees.jpg"),
            ImageSource::Url(_)
        ));
        assert!(matches!(
            ImageSource::detect("http://example.com/trees.jpg"),
            ImageSource::Url(_)
        ));
    }

    #[test]
    fn test_detect_existing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img.png");
        std::fs::write(&path, b"stub").unwrap();

        let source = ImageSource::detect(path.to_str().unwrap());
        assert_eq!(source, ImageSource::LocalPath(path));
    }

    #[test]
    fn test_detect_falls_through_to_inline() {
        // Nonexistent paths are sent literally, matching the endpoint's
        // acceptance of pre-encoded data.
        let source = ImageSource::detect("iVBORw0KGgoAAAANSUhEUg==");
        assert_eq!(
            source,
            ImageSource::InlineBase64("iVBORw0KGgoAAAANSUhEUg==".to_string())
        );
    }

    #[test]
    fn test_url_and_inline_pass_through() {
        let url = ImageSource::Url("https://example.com/a.png".to_string());
        assert_eq!(url.resolve().unwrap(), "https://example.com/a.png");

        let inline = ImageSource::InlineBase64("aGVsbG8=".to_string());
        assert_eq!(inline.resolve().unwrap(), "aGVsbG8=");
    }

    #[test]
    fn test_local_path_resolves_to_png_base64() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("src.png");

        let img: image::RgbImage = image::ImageBuffer::from_fn(4, 4, |x, y| {
            image::Rgb([x as u8 * 10, y as u8 * 20, 7])
        });
        img.save(&path).unwrap();

        let encoded = ImageSource::LocalPath(path).resolve().unwrap();
        let bytes = general_purpose::STANDARD.decode(encoded).unwrap();

        assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Png);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.to_rgb8(), img);
    }

    #[test]
    fn test_resolve_fails_on_unreadable_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-an-image.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = ImageSource::LocalPath(path).resolve().unwrap_err();
        assert!(matches!(err, crate::error::ApiError::Image(_)));
    }
}
