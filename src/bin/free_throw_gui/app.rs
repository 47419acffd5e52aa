use std::path::Path;

use free_throw::core::court::Court;
use free_throw::core::window::trajectory_window;
use macroquad::prelude::*;

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, COURT_ENV_VAR, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH,
    LEFT_MARGIN, MSAA_SAMPLES, RIGHT_MARGIN, TOP_MARGIN, UI_FONT_PATH,
};
use crate::controls::{draw_height_sidebar, hotkey_reset};
use crate::hud::{draw_gauges, draw_header, draw_status_line, draw_validation_message};
use crate::render::{
    PlotArea, draw_axis_tick_labels, draw_grid, draw_markers, draw_rim, draw_shooter,
};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Free Throw Trajectory".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn load_court() -> Court {
    let Ok(path) = std::env::var(COURT_ENV_VAR) else {
        return Court::default();
    };
    match Court::load(Path::new(&path)) {
        Ok(court) => court,
        Err(err) => {
            log::warn!("Could not load court from '{path}': {err}. Using regulation court.");
            Court::default()
        }
    }
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            log::warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new(load_court());
    log::info!("Free throw window started at {}", state.height_label());

    loop {
        let screen_w = screen_width();
        let screen_h = screen_height();

        clear_background(BACKGROUND);

        if draw_height_sidebar(&mut state) || hotkey_reset() {
            state.reset_height();
        }

        let left = LEFT_MARGIN;
        let right = screen_w - RIGHT_MARGIN;
        let top = TOP_MARGIN;
        let bottom = screen_h - BOTTOM_MARGIN;

        draw_header(left, ui_font.as_ref());

        match state.solve() {
            Ok(solution) => {
                let (world_max_x, world_max_y) = trajectory_window(&solution, &state.court);
                let area = PlotArea {
                    left,
                    right,
                    top,
                    bottom,
                    world_max_x: world_max_x as f32,
                    world_max_y: world_max_y as f32,
                };

                draw_gauges(&solution, left, right, ui_font.as_ref());
                draw_grid(area, Color::from_rgba(227, 231, 236, 255));
                draw_axis_tick_labels(area, ui_font.as_ref());
                draw_shooter(solution.shooter_height_ft, area);
                draw_rim(&state.court, area);
                draw_markers(&solution.path, area);
                draw_status_line(&solution, left, screen_h, ui_font.as_ref());
            }
            Err(err) => draw_validation_message(&err, left, top, ui_font.as_ref()),
        }

        next_frame().await;
    }
}
