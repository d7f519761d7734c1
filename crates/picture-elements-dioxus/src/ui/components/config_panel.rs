use dioxus::html::{Key, Modifiers};
use dioxus::prelude::*;
use picture_elements_engine::DroppedImage;

use super::DropZone;

/// Left column: host field, drop target and the card text
#[component]
pub fn ConfigPanel(
    host: String,
    text: String,
    error: String,
    on_host_change: EventHandler<String>,
    on_text_change: EventHandler<String>,
    on_commit: EventHandler<()>,
    on_image_drop: EventHandler<DroppedImage>,
) -> Element {
    let border = if error.is_empty() {
        "1px solid #ccc"
    } else {
        "1px solid red"
    };

    rsx! {
        div {
            class: "column config-column",
            h2 { "Configuration" }
            input {
                class: "host-input",
                r#type: "text",
                placeholder: "Home Assistant Host (optional to load image)",
                value: "{host}",
                oninput: move |event: FormEvent| on_host_change.call(event.value()),
            }
            DropZone { on_drop: on_image_drop }
            textarea {
                class: "config-input",
                spellcheck: "false",
                placeholder: "Paste your picture-elements card YAML here",
                style: "border: {border}",
                value: "{text}",
                oninput: move |event: FormEvent| on_text_change.call(event.value()),
                onkeydown: move |event: KeyboardEvent| {
                    if is_commit_chord(&event.key(), event.modifiers()) {
                        event.prevent_default();
                        on_commit.call(());
                    }
                },
            }
            if !error.is_empty() {
                p { class: "config-error", "{error}" }
            }
        }
    }
}

/// Ctrl+S, or Cmd+S on macOS
fn is_commit_chord(key: &Key, modifiers: Modifiers) -> bool {
    let save = matches!(key, Key::Character(c) if c.eq_ignore_ascii_case("s"));
    save && (modifiers.ctrl() || modifiers.meta())
}
