//! Read model for the preview surface
//!
//! The UI never inspects the card directly. The controller hands it a
//! [`PreviewSnapshot`]: the image to show plus, for every element in card
//! order, what to draw and the inline CSS that positions it.

use relative_path::RelativePathBuf;

use crate::models::{Document, Element, ElementKind, Style};

/// Icon namespace the bundled icon set understands
pub const ICON_NAMESPACE: &str = "mdi:";
/// URL path bundled icon assets are served from
pub const ICON_ASSET_ROOT: &str = "/assets";
const ICON_ASSET_EXTENSION: &str = "svg";

/// How a single element is drawn
#[derive(Debug, Clone, PartialEq)]
pub enum ElementVisual {
    Icon { src: String },
    Image { src: String },
    /// Fallback: the element's type tag as text
    Label(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderElement {
    /// Position in the card's element list
    pub index: usize,
    pub tag: String,
    pub css: String,
    pub visual: ElementVisual,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreviewSnapshot {
    pub image_url: String,
    pub elements: Vec<RenderElement>,
}

impl PreviewSnapshot {
    pub fn build(document: Option<&Document>, host: &str, image_url: &str) -> Self {
        let elements = document
            .map(|doc| {
                doc.elements
                    .iter()
                    .enumerate()
                    .map(|(index, element)| RenderElement {
                        index,
                        tag: element.kind.to_string(),
                        css: element.style.as_ref().map(css_declarations).unwrap_or_default(),
                        visual: visual_for(element, host),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            image_url: image_url.to_string(),
            elements,
        }
    }
}

/// Pick the visual for an element, falling back to its tag
pub fn visual_for(element: &Element, host: &str) -> ElementVisual {
    match &element.kind {
        kind if kind.shows_icon() => {
            if let Some(src) = element.icon.as_deref().and_then(icon_asset_path) {
                return ElementVisual::Icon { src };
            }
        }
        ElementKind::Image => {
            if let Some(image) = element.image.as_deref() {
                return ElementVisual::Image {
                    src: resolve_url(host, image),
                };
            }
        }
        _ => {}
    }

    ElementVisual::Label(element.kind.to_string())
}

/// Asset path for a namespaced icon, e.g. `mdi:fan` -> `/assets/mdi/fan.svg`
pub fn icon_asset_path(icon: &str) -> Option<String> {
    let name = icon.strip_prefix(ICON_NAMESPACE)?;
    if name.is_empty() {
        return None;
    }

    let namespace = ICON_NAMESPACE.trim_end_matches(':');
    let relative = RelativePathBuf::from(namespace).join(format!("{name}.{ICON_ASSET_EXTENSION}"));
    Some(format!("{ICON_ASSET_ROOT}/{relative}"))
}

/// Prefix a (possibly relative) reference with the host address
pub fn resolve_url(host: &str, reference: &str) -> String {
    format!("{host}{reference}")
}

/// Inline CSS for a style record, attributes in card order
pub fn css_declarations(style: &Style) -> String {
    style
        .iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("mdi:fan", Some("/assets/mdi/fan.svg"))]
    #[case("mdi:ceiling-light", Some("/assets/mdi/ceiling-light.svg"))]
    #[case("hass:fan", None)]
    #[case("mdi:", None)]
    #[case("fan", None)]
    fn test_icon_asset_path(#[case] icon: &str, #[case] expected: Option<&str>) {
        assert_eq!(icon_asset_path(icon).as_deref(), expected);
    }

    #[test]
    fn test_icon_elements_use_asset_path() {
        let element = Element::new(ElementKind::StateIcon).with_icon("mdi:lamp");

        assert_eq!(
            visual_for(&element, "http://ha.local"),
            ElementVisual::Icon {
                src: "/assets/mdi/lamp.svg".to_string()
            }
        );
    }

    #[test]
    fn test_image_elements_resolve_against_host() {
        let element = Element::new(ElementKind::Image).with_image("/local/camera.jpg");

        assert_eq!(
            visual_for(&element, "http://ha.local"),
            ElementVisual::Image {
                src: "http://ha.local/local/camera.jpg".to_string()
            }
        );
    }

    #[rstest]
    #[case(Element::new(ElementKind::Icon))]
    #[case(Element::new(ElementKind::Icon).with_icon("hass:lamp"))]
    #[case(Element::new(ElementKind::Image))]
    #[case(Element::new(ElementKind::StateBadge).with_icon("mdi:lamp"))]
    #[case(Element::new("custom:button-card"))]
    fn test_everything_else_falls_back_to_tag(#[case] element: Element) {
        let tag = element.kind.to_string();

        assert_eq!(visual_for(&element, ""), ElementVisual::Label(tag));
    }

    #[test]
    fn test_css_declarations_follow_style_order() {
        let style = Style::new()
            .with("top", "10%")
            .with("left", "20%")
            .with("border-radius", "50%");

        assert_eq!(
            css_declarations(&style),
            "top: 10%; left: 20%; border-radius: 50%"
        );
    }

    #[test]
    fn test_snapshot_keeps_element_order() {
        let doc = Document::new("/local/plan.png")
            .with_element(Element::new(ElementKind::StateLabel))
            .with_element(
                Element::new(ElementKind::Icon)
                    .with_icon("mdi:fan")
                    .with_style(Style::new().with("left", "5%")),
            );

        let snapshot = PreviewSnapshot::build(Some(&doc), "", "/local/plan.png");

        assert_eq!(snapshot.image_url, "/local/plan.png");
        let tags: Vec<_> = snapshot.elements.iter().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, vec!["state-label", "icon"]);
        assert_eq!(snapshot.elements[1].index, 1);
        assert_eq!(snapshot.elements[1].css, "left: 5%");
        assert_eq!(snapshot.elements[0].css, "");
    }

    #[test]
    fn test_snapshot_without_document_is_empty() {
        let snapshot = PreviewSnapshot::build(None, "http://ha.local", "");

        assert!(snapshot.elements.is_empty());
    }
}
