//! Canonical card state and the transitions that keep text, model and
//! preview in step.
//!
//! Every user event maps to exactly one method on [`SyncController`]. The
//! controller owns the only copy of the card; the YAML text and the
//! [`PreviewSnapshot`] are views derived from it. A text edit that fails to
//! decode records an error and leaves the card alone, so the preview keeps
//! showing the last good state while the user fixes a typo.

use std::sync::Arc;

use crate::codec::{self, DecodeError};
use crate::image_drop::DroppedImage;
use crate::io::{CONFIG_KEY, HOST_KEY, KeyValueStore};
use crate::models::Document;
use crate::models::style::{LEFT, TOP};
use crate::position::{
    ContainerRect, Gesture, GestureId, PointerPosition, format_percent, percent_offset,
};
use crate::render::{PreviewSnapshot, resolve_url};

/// Result of feeding text to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOutcome {
    /// The card was replaced by the decoded text
    Replaced,
    /// Blank or falsy text; nothing changed
    Empty,
    /// Decoding failed; the previous card is still active
    Rejected,
}

pub struct SyncController<S: KeyValueStore> {
    store: S,
    document: Option<Arc<Document>>,
    revision: u64,
    text: String,
    host: String,
    image_url: String,
    preview: Option<DroppedImage>,
    error: String,
    gesture: Option<Gesture>,
    gestures_started: u64,
}

impl<S: KeyValueStore> SyncController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            document: None,
            revision: 0,
            text: String::new(),
            host: String::new(),
            image_url: String::new(),
            preview: None,
            error: String::new(),
            gesture: None,
            gestures_started: 0,
        }
    }

    /// Create a controller and load the previous session from `store`
    pub fn restored(store: S) -> Self {
        let mut controller = Self::new(store);
        controller.restore();
        controller
    }

    /// Re-apply the persisted host and card as if the user had typed them
    pub fn restore(&mut self) {
        match self.store.get(HOST_KEY) {
            Ok(Some(host)) => self.host_changed(&host),
            Ok(None) => {}
            Err(e) => log::warn!("Failed to read saved host: {e}"),
        }

        match self.store.get(CONFIG_KEY) {
            Ok(Some(text)) => {
                let outcome = self.text_changed(&text);
                log::info!("Restored saved card: {outcome:?}");
            }
            Ok(None) => log::info!("No saved card to restore"),
            Err(e) => log::warn!("Failed to read saved card: {e}"),
        }
    }

    /// The editor text changed
    pub fn text_changed(&mut self, text: &str) -> TextOutcome {
        self.text = text.to_string();
        self.apply_text()
    }

    /// Explicit commit (Ctrl+S): decode the current text again
    pub fn commit(&mut self) -> TextOutcome {
        self.apply_text()
    }

    fn apply_text(&mut self) -> TextOutcome {
        match codec::decode(&self.text) {
            Ok(Some(document)) => {
                self.error.clear();
                self.replace_document(document);
                TextOutcome::Replaced
            }
            Ok(None) => {
                self.error.clear();
                TextOutcome::Empty
            }
            Err(e) => {
                self.reject(&e);
                TextOutcome::Rejected
            }
        }
    }

    fn reject(&mut self, error: &DecodeError) {
        log::warn!("Card text rejected: {error}");
        self.error = error.to_string();
    }

    fn replace_document(&mut self, document: Document) {
        let image_changed = self
            .document
            .as_ref()
            .is_none_or(|current| current.image != document.image);
        if image_changed {
            self.preview = None;
        }

        // A gesture started on the old card must not move an element of the new one
        self.gesture = None;
        self.document = Some(Arc::new(document));
        self.revision += 1;
        self.refresh_image_url();
        self.persist();
    }

    /// The Home Assistant host address changed
    pub fn host_changed(&mut self, host: &str) {
        self.host = host.to_string();
        self.preview = None;
        self.refresh_image_url();

        if let Err(e) = self.store.set(HOST_KEY, &self.host) {
            log::warn!("Failed to save host: {e}");
        }
    }

    fn refresh_image_url(&mut self) {
        if let Some(document) = &self.document {
            self.image_url = resolve_url(&self.host, &document.image);
        }
    }

    /// Pointer pressed on the element at `index`. Returns whether a gesture
    /// started.
    pub fn pointer_down(&mut self, index: usize, pointer: PointerPosition) -> bool {
        let Some(element) = self.document.as_ref().and_then(|doc| doc.element(index)) else {
            self.gesture = None;
            return false;
        };

        let start_offset = element.style.as_ref().map(|s| s.offset()).unwrap_or_default();
        self.gestures_started += 1;
        let id = GestureId(self.gestures_started);
        log::debug!("Drag {id:?} start on element {index} at {pointer:?}, offset {start_offset:?}");
        self.gesture = Some(Gesture::new(id, index, pointer, start_offset));
        true
    }

    /// Like [`Self::pointer_move`], for a move that belongs to gesture `id`.
    /// Ignored unless that gesture is still the active one.
    pub fn pointer_move_for(
        &mut self,
        id: GestureId,
        pointer: PointerPosition,
        container: Option<ContainerRect>,
    ) -> bool {
        if self.gesture.map(|g| g.id) != Some(id) {
            log::debug!("Ignoring move for finished drag {id:?}");
            return false;
        }
        self.pointer_move(pointer, container)
    }

    /// Pointer moved while possibly dragging. `container` is the current
    /// client rect of the preview, `None` if it has not been laid out.
    /// Returns whether the card changed.
    pub fn pointer_move(&mut self, pointer: PointerPosition, container: Option<ContainerRect>) -> bool {
        let Some(gesture) = self.gesture else {
            return false;
        };
        let Some(offset) = container.and_then(|rect| percent_offset(pointer, rect)) else {
            return false;
        };
        let Some(document) = self.document.as_mut() else {
            self.gesture = None;
            return false;
        };

        let Some(element) = Arc::make_mut(document).element_mut(gesture.element) else {
            self.gesture = None;
            return false;
        };

        let style = element.style_mut();
        if style.get(LEFT) == Some(format_percent(offset.left))
            && style.get(TOP) == Some(format_percent(offset.top))
        {
            return false;
        }
        style.set_offset(offset);

        self.revision += 1;
        self.text = codec::encode(document);
        self.persist();
        true
    }

    /// Pointer released: the gesture ends
    pub fn pointer_up(&mut self) {
        if let Some(gesture) = self.gesture.take() {
            log::debug!("Drag end on element {}", gesture.element);
        }
    }

    /// A file was dropped on the image area. Only images replace the
    /// displayed picture, and only for display.
    pub fn image_dropped(&mut self, image: DroppedImage) -> bool {
        if !image.is_image() {
            return false;
        }
        self.preview = Some(image);
        true
    }

    fn persist(&mut self) {
        let Some(document) = &self.document else {
            return;
        };

        let text = codec::encode(document);
        if let Err(e) = self.store.set(CONFIG_KEY, &text) {
            log::warn!("Failed to save card: {e}");
        }
        if let Err(e) = self.store.set(HOST_KEY, &self.host) {
            log::warn!("Failed to save host: {e}");
        }
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_deref()
    }

    /// Increments on every change of the card
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Last decode error, empty when the text is valid
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Picture currently displayed: a dropped preview wins over the card image
    pub fn image_url(&self) -> &str {
        self.preview
            .as_ref()
            .map(|p| p.preview_url.as_str())
            .unwrap_or(&self.image_url)
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> PreviewSnapshot {
        PreviewSnapshot::build(self.document(), &self.host, self.image_url())
    }
}
