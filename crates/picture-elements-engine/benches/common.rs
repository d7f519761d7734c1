// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_card(elements: usize) -> String {
    let mut card = String::from("type: picture-elements\nimage: /local/floorplan.png\nelements:\n");

    for i in 0..elements {
        card.push_str(&format!(
            "  - type: state-icon\n    entity: light.room_{i}\n    icon: mdi:lightbulb\n    tap_action:\n      action: toggle\n    style:\n      left: {}%\n      top: {}%\n",
            i % 100,
            (i * 7) % 100
        ));
    }

    card
}
