use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// A file dropped on the image area, turned into a display-only preview
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedImage {
    pub content_type: String,
    pub preview_url: String,
}

impl DroppedImage {
    /// Build a preview from dropped file contents. Files whose declared
    /// content type is not an image are refused.
    pub fn from_bytes(content_type: Option<&str>, bytes: &[u8]) -> Option<Self> {
        let content_type = content_type.filter(|ct| is_image_type(ct))?;

        Some(Self {
            content_type: content_type.to_string(),
            preview_url: format!("data:{content_type};base64,{}", STANDARD.encode(bytes)),
        })
    }

    pub fn is_image(&self) -> bool {
        is_image_type(&self.content_type)
    }
}

/// Declared content type names an image (`image/png`, `image/svg+xml`, ...)
pub fn is_image_type(content_type: &str) -> bool {
    content_type.contains("image")
}

/// Guess a content type from a file name for platforms that report none
pub fn content_type_for_name(name: &str) -> Option<&'static str> {
    let extension = name.rsplit_once('.')?.1.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "bmp" => Some("image/bmp"),
        "yaml" | "yml" => Some("application/yaml"),
        "txt" => Some("text/plain"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_image_bytes_become_data_url() {
        let image = DroppedImage::from_bytes(Some("image/png"), b"png").unwrap();

        assert_eq!(image.preview_url, "data:image/png;base64,cG5n");
        assert!(image.is_image());
    }

    #[rstest]
    #[case(Some("text/plain"))]
    #[case(Some("application/pdf"))]
    #[case(Some(""))]
    #[case(None)]
    fn test_non_images_are_refused(#[case] content_type: Option<&str>) {
        assert_eq!(DroppedImage::from_bytes(content_type, b"data"), None);
    }

    #[rstest]
    #[case("floorplan.PNG", Some("image/png"))]
    #[case("photo.jpeg", Some("image/jpeg"))]
    #[case("card.yaml", Some("application/yaml"))]
    #[case("README", None)]
    fn test_content_type_for_name(#[case] name: &str, #[case] expected: Option<&str>) {
        assert_eq!(content_type_for_name(name), expected);
    }
}
