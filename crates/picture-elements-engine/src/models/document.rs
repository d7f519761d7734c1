use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use super::{Element, append_extra, put, take, take_text};

/// Discriminant every accepted card must carry in its `type` field
pub const CARD_TYPE: &str = "picture-elements";

/// A picture-elements card: a background image with overlay elements
///
/// Keys the model does not know about are kept in `extra` and written back
/// on encode, so editing positions never drops unrelated card options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Mapping", into = "Mapping")]
pub struct Document {
    pub kind: String,
    pub image: String,
    pub elements: Vec<Element>,
    pub extra: Mapping,
}

impl Document {
    /// Create an empty card pointing at the given background image
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            kind: CARD_TYPE.to_string(),
            image: image.into(),
            elements: Vec::new(),
            extra: Mapping::new(),
        }
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    pub fn element(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    pub fn element_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.elements.get_mut(index)
    }
}

impl From<Mapping> for Document {
    fn from(mut card: Mapping) -> Self {
        Self {
            kind: take_text(&mut card, "type").unwrap_or_default(),
            image: take_text(&mut card, "image").unwrap_or_default(),
            elements: take(&mut card, "elements", read_elements).unwrap_or_default(),
            extra: card,
        }
    }
}

/// Elements are only editable when every entry is a mapping; any other
/// list stays raw so nothing in it is lost.
fn read_elements(value: &Value) -> Option<Vec<Element>> {
    value
        .as_sequence()?
        .iter()
        .map(|entry| entry.as_mapping().cloned().map(Element::from))
        .collect()
}

impl From<Document> for Mapping {
    fn from(doc: Document) -> Self {
        let mut card = Mapping::new();
        if !doc.kind.is_empty() {
            put(&mut card, "type", Value::String(doc.kind));
        }
        if !doc.image.is_empty() || !doc.extra.contains_key("image") {
            put(&mut card, "image", Value::String(doc.image));
        }
        if !doc.elements.is_empty() || !doc.extra.contains_key("elements") {
            let elements = doc
                .elements
                .into_iter()
                .map(|element| Value::Mapping(element.into()))
                .collect();
            put(&mut card, "elements", Value::Sequence(elements));
        }
        append_extra(&mut card, doc.extra);
        card
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ElementKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_document_has_card_type() {
        let doc = Document::new("/local/floorplan.png");

        assert_eq!(doc.kind, CARD_TYPE);
        assert_eq!(doc.image, "/local/floorplan.png");
        assert!(doc.elements.is_empty());
    }

    #[test]
    fn test_missing_image_and_elements_default_to_empty() {
        let doc: Document = serde_yaml::from_str("type: picture-elements").unwrap();

        assert_eq!(doc.image, "");
        assert!(doc.elements.is_empty());
        assert!(doc.extra.is_empty());
    }

    #[test]
    fn test_unknown_card_keys_are_kept() {
        let yaml = "type: picture-elements\nimage: /a.png\nelements: []\ntitle: Ground floor\n";
        let doc: Document = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(
            doc.extra.get("title").and_then(|v| v.as_str()),
            Some("Ground floor")
        );
    }

    #[test]
    fn test_image_without_value_stays_raw() {
        let doc: Document = serde_yaml::from_str("type: picture-elements\nimage:\n").unwrap();

        assert_eq!(doc.image, "");
        assert_eq!(doc.extra.get("image"), Some(&Value::Null));

        let card = Mapping::from(doc);
        assert_eq!(card.get("image"), Some(&Value::Null));
    }

    #[test]
    fn test_elements_with_non_mapping_entry_stay_raw() {
        let yaml = "type: picture-elements\nelements:\n  - type: icon\n  - just text\n";
        let doc: Document = serde_yaml::from_str(yaml).unwrap();

        assert!(doc.elements.is_empty());
        assert_eq!(
            doc.extra.get("elements").and_then(|v| v.as_sequence()).map(Vec::len),
            Some(2)
        );

        let card = Mapping::from(doc);
        assert_eq!(
            card.get("elements").and_then(|v| v.as_sequence()).map(Vec::len),
            Some(2)
        );
    }

    #[test]
    fn test_element_lookup_by_index() {
        let doc = Document::new("/a.png")
            .with_element(Element::new(ElementKind::Icon))
            .with_element(Element::new(ElementKind::StateLabel));

        assert_eq!(doc.element(1).map(|e| &e.kind), Some(&ElementKind::StateLabel));
        assert!(doc.element(2).is_none());
    }
}
