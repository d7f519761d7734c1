//! Pointer to percentage conversion for dragging elements over the image
//!
//! Elements are placed by `left`/`top` percentages of the preview container,
//! which scales with the window. A drag therefore never stores pixels: each
//! pointer position is re-expressed as a fraction of the container's current
//! client rectangle, rounded to two decimal places.

use regex::Regex;
use std::sync::OnceLock;

fn leading_number() -> &'static Regex {
    static LEADING_NUMBER: OnceLock<Regex> = OnceLock::new();
    LEADING_NUMBER.get_or_init(|| {
        Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
            .expect("Invalid leading number regex")
    })
}

/// Pointer position in client (viewport) pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Client rectangle of the scaling container the percentages refer to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A rect with no area has not been laid out yet
    pub fn is_measurable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Element offset in percent of the container
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub left: f64,
    pub top: f64,
}

/// Identifies one gesture. Moves measured asynchronously carry the id of the
/// gesture they were started in so a late result cannot move a newer drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GestureId(pub u64);

/// One pointer-down to pointer-up interaction on a single element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gesture {
    pub id: GestureId,
    pub element: usize,
    pub start_pointer: PointerPosition,
    pub start_offset: Offset,
}

impl Gesture {
    pub fn new(
        id: GestureId,
        element: usize,
        start_pointer: PointerPosition,
        start_offset: Offset,
    ) -> Self {
        Self {
            id,
            element,
            start_pointer,
            start_offset,
        }
    }
}

/// Offset of `pointer` inside `container`, or `None` while the container
/// has no measurable size. Values outside 0..=100 are kept.
pub fn percent_offset(pointer: PointerPosition, container: ContainerRect) -> Option<Offset> {
    if !container.is_measurable() {
        return None;
    }

    Some(Offset {
        left: round_percent((pointer.x - container.left) / container.width),
        top: round_percent((pointer.y - container.top) / container.height),
    })
}

/// Fraction to percent with two decimal places, halves rounded up
pub fn round_percent(fraction: f64) -> f64 {
    let rounded = (fraction * 10000.0 + 0.5).floor() / 100.0;
    // -0.0 would print as "-0"
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Render a percentage for a style value, e.g. `12.5%`
pub fn format_percent(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}%")
}

/// Read the leading number of a style value (`"12.5%"`, `"7px"`); anything
/// without one reads as 0
pub fn parse_percent(value: &str) -> f64 {
    leading_number()
        .captures(value)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
