use dioxus::prelude::*;
use dioxus::html::HasFileData;
use picture_elements_engine::{DroppedImage, content_type_for_name, is_image_type};

/// Drop target for replacing the background with a local picture
#[component]
pub fn DropZone(on_drop: EventHandler<DroppedImage>) -> Element {
    rsx! {
        div {
            class: "drag-drop",
            ondragover: move |event: DragEvent| event.prevent_default(),
            ondrop: move |event: DragEvent| {
                event.prevent_default();
                event.stop_propagation();

                // Only the first file counts
                let Some(file) = event.files().into_iter().next() else {
                    return;
                };

                spawn(async move {
                    let name = file.name();
                    let content_type = file
                        .content_type()
                        .or_else(|| content_type_for_name(&name).map(str::to_string));

                    if !content_type.as_deref().is_some_and(is_image_type) {
                        log::debug!("Ignoring dropped file {name}: not an image");
                        return;
                    }

                    match file.read_bytes().await {
                        Ok(bytes) => {
                            if let Some(image) =
                                DroppedImage::from_bytes(content_type.as_deref(), &bytes)
                            {
                                on_drop.call(image);
                            }
                        }
                        Err(e) => log::warn!("Failed to read dropped file {name}: {e}"),
                    }
                });
            },
            p { "Drop Image here to overwrite current image" }
        }
    }
}
