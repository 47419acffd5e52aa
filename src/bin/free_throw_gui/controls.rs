use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{FEET_SLIDER, INCHES_SLIDER, SIDEBAR_H, SIDEBAR_W, SIDEBAR_X, SIDEBAR_Y};
use crate::state::AppRuntime;

pub(crate) fn hotkey_reset() -> bool {
    is_key_pressed(KeyCode::R)
}

/// Height sliders. Returns true when the reset button was clicked.
pub(crate) fn draw_height_sidebar(state: &mut AppRuntime) -> bool {
    let mut reset = false;
    let court = state.court;
    widgets::Window::new(
        hash!(),
        vec2(SIDEBAR_X, SIDEBAR_Y),
        vec2(SIDEBAR_W, SIDEBAR_H),
    )
    .label("Enter your Height Information")
    .ui(&mut *root_ui(), |ui| {
        ui.label(None, "Use the sliders to enter your height in feet");
        ui.label(None, "and inches. The release angle and velocity");
        ui.label(None, "for a successful free throw update live.");
        ui.separator();
        ui.slider(
            hash!(),
            "Your height in feet",
            FEET_SLIDER,
            &mut state.height_feet,
        );
        ui.slider(
            hash!(),
            "Your height in inches",
            INCHES_SLIDER,
            &mut state.height_inches,
        );
        ui.separator();
        ui.label(None, &format!("Release height: {}", state.height_label()));
        ui.label(
            None,
            &format!(
                "Rim {:.1} ft | line {:.1} ft | g = {:.3} ft/s^2",
                court.rim_height_ft, court.distance_ft, court.gravity_fps2
            ),
        );
        if ui.button(None, "Reset (R)") {
            reset = true;
        }
    });

    reset
}
