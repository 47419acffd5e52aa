use std::ops::Range;

use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 1000;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";
pub const COURT_ENV_VAR: &str = "FREE_THROW_COURT";

pub const SIDEBAR_X: f32 = 18.0;
pub const SIDEBAR_Y: f32 = 120.0;
pub const SIDEBAR_W: f32 = 380.0;
pub const SIDEBAR_H: f32 = 300.0;

pub const LEFT_MARGIN: f32 = 500.0;
pub const RIGHT_MARGIN: f32 = 40.0;
pub const TOP_MARGIN: f32 = 530.0;
pub const BOTTOM_MARGIN: f32 = 90.0;

pub const TITLE_Y: f32 = 46.0;
pub const OVERVIEW_Y: f32 = 84.0;
pub const GAUGE_CENTER_Y: f32 = 320.0;
pub const GAUGE_RADIUS: f32 = 95.0;
pub const GAUGE_SEGMENTS: usize = 48;
pub const GAUGE_THICKNESS: f32 = 14.0;
pub const GAUGE_TEXT_SIZE: u16 = 16;
pub const GAUGE_TEXT_LINE_H: f32 = 19.0;

pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;
pub const MARKER_RADIUS: f32 = 7.0;
pub const RIM_HALF_WIDTH_FT: f32 = 0.75; // 18 inch hoop

pub const FEET_SLIDER: Range<f32> = 4.0..7.0;
pub const INCHES_SLIDER: Range<f32> = 0.0..12.0;
pub const DEFAULT_FEET: f32 = 5.0;
pub const DEFAULT_INCHES: f32 = 6.0;

pub const BACKGROUND: Color = Color::new(0.98, 0.98, 0.99, 1.0);
pub const HEADER_COLOR: Color = Color::new(0.12, 0.12, 0.14, 1.0);
pub const ACCENT_COLOR: Color = Color::new(0.21, 0.48, 0.96, 1.0);
pub const TRACK_COLOR: Color = Color::new(0.89, 0.91, 0.93, 1.0);
pub const RIM_COLOR: Color = Color::new(0.93, 0.42, 0.13, 1.0);
