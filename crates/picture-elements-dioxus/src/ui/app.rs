use dioxus::prelude::*;
use picture_elements_engine::{
    ContainerRect, DroppedImage, FileStore, GestureId, PointerPosition, SyncController,
};
use std::path::PathBuf;

use super::components::{ConfigPanel, Preview};

const EDITOR_CSS: &str = include_str!("../assets/editor.css");

#[component]
pub fn App(state_dir: PathBuf) -> Element {
    let mut controller = use_signal(move || {
        log::info!("Restoring editor state from {}", state_dir.display());
        SyncController::restored(FileStore::new(state_dir))
    });

    let (snapshot, text, host, error, gesture) = {
        let controller = controller.read();
        (
            controller.snapshot(),
            controller.text().to_string(),
            controller.host().to_string(),
            controller.error().to_string(),
            controller.gesture().map(|g| g.id),
        )
    };

    rsx! {
        style { {EDITOR_CSS} }
        h1 { "Picture Elements Card Editor" }
        div {
            class: "columns",
            ConfigPanel {
                host,
                text,
                error,
                on_host_change: move |host: String| controller.write().host_changed(&host),
                on_text_change: move |text: String| {
                    controller.write().text_changed(&text);
                },
                on_commit: move |_| {
                    controller.write().commit();
                },
                on_image_drop: move |image: DroppedImage| {
                    controller.write().image_dropped(image);
                },
            }
            div {
                class: "column preview-column",
                h2 { "Preview" }
                Preview {
                    snapshot,
                    gesture,
                    on_pointer_down: move |(index, pointer): (usize, PointerPosition)| {
                        controller.write().pointer_down(index, pointer);
                    },
                    on_pointer_move: move |(id, pointer, container): (GestureId, PointerPosition, Option<ContainerRect>)| {
                        controller.write().pointer_move_for(id, pointer, container);
                    },
                    on_pointer_up: move |_| controller.write().pointer_up(),
                }
            }
        }
    }
}
