use dioxus::prelude::*;
use picture_elements_engine::{ContainerRect, GestureId, PointerPosition, PreviewSnapshot};
use std::rc::Rc;

use super::element_view::{ElementView, client_position};

/// Background picture with the card's elements laid over it
///
/// Move and release are bound on the container rather than on each element
/// so a fast drag that outruns the element keeps tracking. `gesture` is the
/// drag in progress; each move is reported with it.
#[component]
pub fn Preview(
    snapshot: PreviewSnapshot,
    gesture: Option<GestureId>,
    on_pointer_down: EventHandler<(usize, PointerPosition)>,
    on_pointer_move: EventHandler<(GestureId, PointerPosition, Option<ContainerRect>)>,
    on_pointer_up: EventHandler<()>,
) -> Element {
    let mut container = use_signal(|| None::<Rc<MountedData>>);
    let image_url = snapshot.image_url.clone();

    rsx! {
        div {
            class: "editor",
            onmounted: move |event: MountedEvent| container.set(Some(event.data())),
            onmousemove: move |event: MouseEvent| {
                let Some(gesture) = gesture else {
                    return;
                };
                let pointer = client_position(&event);
                spawn(async move {
                    // The container scales with the window, so measure it per move
                    let rect = measure(container()).await;
                    on_pointer_move.call((gesture, pointer, rect));
                });
            },
            onmouseup: move |_| on_pointer_up.call(()),
            onmouseleave: move |_| on_pointer_up.call(()),
            img {
                class: "picture",
                src: "{image_url}",
                alt: "",
                draggable: "false",
            }
            div {
                class: "elements",
                for element in snapshot.elements.iter().cloned() {
                    ElementView {
                        key: "{element.index}",
                        element,
                        on_pointer_down,
                    }
                }
            }
        }
    }
}

async fn measure(container: Option<Rc<MountedData>>) -> Option<ContainerRect> {
    let mounted = container?;
    let rect = mounted.get_client_rect().await.ok()?;
    Some(ContainerRect::new(
        rect.origin.x,
        rect.origin.y,
        rect.size.width,
        rect.size.height,
    ))
}
