use serde_yaml::Value;

use crate::models::{CARD_TYPE, Document};

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("{0}")]
    Syntax(serde_yaml::Error),
    #[error("Invalid configuration: must be an object.")]
    NotAnObject,
    #[error("Invalid configuration: \"type\" must be \"picture-elements\".")]
    WrongType,
}

/// Parse card YAML.
///
/// Blank input, or input that parses to a falsy scalar (`null`, `false`,
/// `0`, `""`), means "no configuration" and yields `Ok(None)` rather than
/// an error. Beyond YAML syntax the only checks are that the card is a
/// mapping with the right `type`; fields of an unexpected shape are carried
/// through raw.
pub fn decode(text: &str) -> Result<Option<Document>, DecodeError> {
    if text.trim().is_empty() {
        return Ok(None);
    }

    let value: Value = serde_yaml::from_str(text).map_err(DecodeError::Syntax)?;
    if is_falsy(&value) {
        return Ok(None);
    }

    let Value::Mapping(card) = value else {
        return Err(DecodeError::NotAnObject);
    };

    match card.get("type") {
        Some(Value::String(kind)) if kind == CARD_TYPE => {}
        _ => return Err(DecodeError::WrongType),
    }

    Ok(Some(Document::from(card)))
}

/// Serialize a card back to YAML
pub fn encode(document: &Document) -> String {
    match serde_yaml::to_string(document) {
        Ok(text) => text,
        Err(e) => {
            log::error!("Failed to encode picture-elements card: {e}");
            String::new()
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n == 0.0 || n.is_nan()),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Element, ElementKind, Style};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   \n\t\n")]
    #[case("null")]
    #[case("~")]
    #[case("false")]
    #[case("0")]
    #[case("''")]
    fn test_empty_or_falsy_is_no_configuration(#[case] text: &str) {
        assert!(matches!(decode(text), Ok(None)));
    }

    #[rstest]
    #[case("42")]
    #[case("just some text")]
    #[case("true")]
    #[case("- type: picture-elements")]
    fn test_non_object_is_rejected(#[case] text: &str) {
        let err = decode(text).unwrap_err();

        assert!(matches!(err, DecodeError::NotAnObject));
        assert_eq!(err.to_string(), "Invalid configuration: must be an object.");
    }

    #[rstest]
    #[case("image: /local/a.png\nelements: []")]
    #[case("type: entities\nentities: []")]
    #[case("type: 7")]
    fn test_wrong_or_missing_type_is_rejected(#[case] text: &str) {
        let err = decode(text).unwrap_err();

        assert!(matches!(err, DecodeError::WrongType));
        assert_eq!(
            err.to_string(),
            "Invalid configuration: \"type\" must be \"picture-elements\"."
        );
    }

    #[test]
    fn test_syntax_error_is_reported() {
        let err = decode("type: picture-elements\nelements: [\n").unwrap_err();

        assert!(matches!(err, DecodeError::Syntax(_)));
        assert!(!err.to_string().is_empty());
    }

    #[rstest]
    #[case::numeric_title("type: picture-elements\ntitle: 2024\nelements: []\n")]
    #[case::image_without_value("type: picture-elements\nimage:\nelements: []\n")]
    #[case::elements_not_a_list("type: picture-elements\nelements: nope\n")]
    #[case::element_without_type("type: picture-elements\nelements:\n  - icon: mdi:fan\n")]
    #[case::numeric_entity("type: picture-elements\nelements:\n  - type: state-icon\n    entity: 42\n")]
    #[case::action_shorthand("type: picture-elements\nelements:\n  - type: icon\n    tap_action: none\n")]
    #[case::style_as_text("type: picture-elements\nelements:\n  - type: icon\n    style: 'left: 1%'\n")]
    #[case::numeric_keys("type: picture-elements\n1: one\nelements:\n  - type: icon\n    2: two\n")]
    #[case::null_fields("type: picture-elements\nelements:\n  - type: icon\n    title: null\n    icon: ~\n")]
    fn test_oddly_shaped_fields_are_accepted(#[case] text: &str) {
        let doc = decode(text).unwrap().unwrap();

        assert_eq!(decode(&encode(&doc)).unwrap().unwrap(), doc);
    }

    #[test]
    fn test_explicit_nulls_survive_round_trip() {
        let text = "type: picture-elements\nimage: /a.png\nelements:\n  - type: icon\n    title: null\n";
        let doc = decode(text).unwrap().unwrap();

        assert_eq!(doc.elements[0].title, None);
        let reencoded = encode(&doc);
        assert!(reencoded.contains("title: null"), "{reencoded}");
    }

    #[test]
    fn test_decode_minimal_card() {
        let doc = decode(
            "type: picture-elements\nimage: /img.png\nelements:\n  - type: icon\n    icon: mdi:fan\n",
        )
        .unwrap()
        .unwrap();

        assert_eq!(
            doc,
            Document::new("/img.png").with_element(Element::new(ElementKind::Icon).with_icon("mdi:fan"))
        );
    }

    #[test]
    fn test_encode_then_decode_reproduces_document() {
        let doc = Document::new("/local/plan.png")
            .with_element(
                Element::new(ElementKind::StateIcon)
                    .with_icon("mdi:lamp")
                    .with_style(Style::new().with("left", "10%").with("top", "20.5%")),
            )
            .with_element(Element::new("custom:thing"));

        let decoded = decode(&encode(&doc)).unwrap().unwrap();

        assert_eq!(decoded, doc);
    }
}
