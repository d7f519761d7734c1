use tempfile::TempDir;

use crate::controller::{SyncController, TextOutcome};
use crate::io::MemoryStore;

/// Card with an unpositioned icon and a state label
pub const FAN_CARD: &str = r#"type: picture-elements
image: /img.png
elements:
  - type: icon
    icon: mdi:fan
  - type: state-label
    entity: sensor.living_room_temperature
    tap_action:
      action: more-info
"#;

/// Create a temporary directory for a file-backed store
pub fn create_test_state_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Controller over an in-memory store with `card` already decoded
pub fn controller_with_card(card: &str) -> SyncController<MemoryStore> {
    let mut controller = SyncController::new(MemoryStore::new());
    assert_eq!(controller.text_changed(card), TextOutcome::Replaced);
    controller
}
