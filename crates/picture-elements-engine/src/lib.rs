pub mod codec;
pub mod controller;
pub mod image_drop;
pub mod io;
pub mod models;
pub mod position;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use codec::{DecodeError, decode, encode};
pub use controller::{SyncController, TextOutcome};
pub use image_drop::{DroppedImage, content_type_for_name, is_image_type};
pub use io::*;
pub use models::{Action, CARD_TYPE, Document, Element, ElementKind, Style};
pub use position::{ContainerRect, Gesture, GestureId, Offset, PointerPosition};
pub use render::{ElementVisual, PreviewSnapshot, RenderElement};
