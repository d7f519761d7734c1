pub mod config_panel;
pub mod drop_zone;
pub mod element_view;
pub mod preview;

pub use config_panel::ConfigPanel;
pub use drop_zone::DropZone;
pub use element_view::{ElementContent, ElementView};
pub use preview::Preview;
