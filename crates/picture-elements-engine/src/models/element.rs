use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use super::{Style, append_extra, put, put_some, take, take_mapping, take_text};

/// Element type tag
///
/// Tags this editor has no special handling for are kept verbatim in
/// `Other` so they survive a round trip and still render as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementKind {
    StateBadge,
    StateIcon,
    StateLabel,
    StateImage,
    ServiceButton,
    Icon,
    Image,
    Conditional,
    Other(String),
}

impl ElementKind {
    pub fn as_str(&self) -> &str {
        match self {
            ElementKind::StateBadge => "state-badge",
            ElementKind::StateIcon => "state-icon",
            ElementKind::StateLabel => "state-label",
            ElementKind::StateImage => "state-image",
            ElementKind::ServiceButton => "service-button",
            ElementKind::Icon => "icon",
            ElementKind::Image => "image",
            ElementKind::Conditional => "conditional",
            ElementKind::Other(tag) => tag,
        }
    }

    /// Whether the element draws a single icon
    pub fn shows_icon(&self) -> bool {
        matches!(self, ElementKind::Icon | ElementKind::StateIcon)
    }
}

impl From<String> for ElementKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "state-badge" => ElementKind::StateBadge,
            "state-icon" => ElementKind::StateIcon,
            "state-label" => ElementKind::StateLabel,
            "state-image" => ElementKind::StateImage,
            "service-button" => ElementKind::ServiceButton,
            "icon" => ElementKind::Icon,
            "image" => ElementKind::Image,
            "conditional" => ElementKind::Conditional,
            _ => ElementKind::Other(tag),
        }
    }
}

impl From<&str> for ElementKind {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<ElementKind> for String {
    fn from(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tap/hold/double-tap behaviour. Carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Mapping", into = "Mapping")]
pub struct Action {
    pub action: Option<String>,
    pub entity: Option<String>,
    pub service: Option<String>,
    pub service_data: Option<Value>,
    pub navigation_path: Option<String>,
    pub extra: Mapping,
}

impl From<Mapping> for Action {
    fn from(mut fields: Mapping) -> Self {
        Self {
            action: take_text(&mut fields, "action"),
            entity: take_text(&mut fields, "entity"),
            service: take_text(&mut fields, "service"),
            service_data: take(&mut fields, "service_data", |value| Some(value.clone())),
            navigation_path: take_text(&mut fields, "navigation_path"),
            extra: fields,
        }
    }
}

impl From<Action> for Mapping {
    fn from(action: Action) -> Self {
        let mut fields = Mapping::new();
        put_some(&mut fields, "action", action.action.map(Value::String));
        put_some(&mut fields, "entity", action.entity.map(Value::String));
        put_some(&mut fields, "service", action.service.map(Value::String));
        put_some(&mut fields, "service_data", action.service_data);
        put_some(&mut fields, "navigation_path", action.navigation_path.map(Value::String));
        append_extra(&mut fields, action.extra);
        fields
    }
}

/// One overlay item on the card
///
/// An element without a string `type` gets an empty `Other` tag, which is
/// not written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Mapping", into = "Mapping")]
pub struct Element {
    pub kind: ElementKind,
    pub entity: Option<String>,
    pub title: Option<String>,
    pub icon: Option<String>,
    pub tap_action: Option<Action>,
    pub hold_action: Option<Action>,
    pub double_tap_action: Option<Action>,
    /// Absent until the element is first dragged
    pub style: Option<Style>,
    pub image: Option<String>,
    pub state_image: Option<Value>,
    pub extra: Mapping,
}

impl From<Mapping> for Element {
    fn from(mut fields: Mapping) -> Self {
        Self {
            kind: take_text(&mut fields, "type")
                .map(ElementKind::from)
                .unwrap_or_else(|| ElementKind::Other(String::new())),
            entity: take_text(&mut fields, "entity"),
            title: take_text(&mut fields, "title"),
            icon: take_text(&mut fields, "icon"),
            tap_action: take_mapping(&mut fields, "tap_action").map(Action::from),
            hold_action: take_mapping(&mut fields, "hold_action").map(Action::from),
            double_tap_action: take_mapping(&mut fields, "double_tap_action").map(Action::from),
            style: take_mapping(&mut fields, "style").map(Style::from),
            image: take_text(&mut fields, "image"),
            state_image: take(&mut fields, "state_image", |value| Some(value.clone())),
            extra: fields,
        }
    }
}

impl From<Element> for Mapping {
    fn from(element: Element) -> Self {
        let mut fields = Mapping::new();
        if !element.kind.as_str().is_empty() {
            put(&mut fields, "type", Value::String(element.kind.into()));
        }
        put_some(&mut fields, "entity", element.entity.map(Value::String));
        put_some(&mut fields, "title", element.title.map(Value::String));
        put_some(&mut fields, "icon", element.icon.map(Value::String));
        put_some(&mut fields, "tap_action", element.tap_action.map(action_value));
        put_some(&mut fields, "hold_action", element.hold_action.map(action_value));
        put_some(
            &mut fields,
            "double_tap_action",
            element.double_tap_action.map(action_value),
        );
        put_some(&mut fields, "style", element.style.map(|s| Value::Mapping(s.into())));
        put_some(&mut fields, "image", element.image.map(Value::String));
        put_some(&mut fields, "state_image", element.state_image);
        append_extra(&mut fields, element.extra);
        fields
    }
}

fn action_value(action: Action) -> Value {
    Value::Mapping(action.into())
}

impl Element {
    pub fn new(kind: impl Into<ElementKind>) -> Self {
        Self {
            kind: kind.into(),
            entity: None,
            title: None,
            icon: None,
            tap_action: None,
            hold_action: None,
            double_tap_action: None,
            style: None,
            image: None,
            state_image: None,
            extra: Mapping::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Style record, created empty on first access. A raw `style` value of
    /// another shape is replaced.
    pub fn style_mut(&mut self) -> &mut Style {
        if self.style.is_none() {
            self.extra.shift_remove("style");
        }
        self.style.get_or_insert_with(Style::default)
    }
}
