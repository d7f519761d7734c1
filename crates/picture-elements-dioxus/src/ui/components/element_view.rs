use dioxus::prelude::*;
use picture_elements_engine::{ElementVisual, PointerPosition, RenderElement};

/// One positioned overlay box. Pressing it starts a drag.
#[component]
pub fn ElementView(
    element: RenderElement,
    on_pointer_down: EventHandler<(usize, PointerPosition)>,
) -> Element {
    let index = element.index;
    let css = element.css.clone();
    let tag = element.tag.clone();

    rsx! {
        div {
            class: "element",
            style: "{css}",
            "data-type": "{tag}",
            onmousedown: move |event: MouseEvent| {
                event.prevent_default();
                on_pointer_down.call((index, client_position(&event)));
            },
            ElementContent { visual: element.visual.clone() }
        }
    }
}

/// What is drawn inside an element box
#[component]
pub fn ElementContent(visual: ElementVisual) -> Element {
    match visual {
        ElementVisual::Icon { src } => rsx! {
            img { class: "icon", src: "{src}", alt: "", draggable: "false" }
        },
        ElementVisual::Image { src } => rsx! {
            img { src: "{src}", alt: "", draggable: "false" }
        },
        ElementVisual::Label(tag) => rsx! { "{tag}" },
    }
}

pub(crate) fn client_position(event: &MouseEvent) -> PointerPosition {
    let point = event.client_coordinates();
    PointerPosition::new(point.x, point.y)
}
