use free_throw::core::chart::{X_AXIS_LABEL, Y_AXIS_LABEL};
use free_throw::core::court::Court;
use free_throw::core::free_throw::PathPoint;
use macroquad::prelude::*;

use crate::constants::{
    ACCENT_COLOR, MARKER_RADIUS, RIM_COLOR, RIM_HALF_WIDTH_FT, X_GRID_LINES, Y_GRID_LINES,
};

/// Plot rectangle in screen pixels.
#[derive(Clone, Copy)]
pub(crate) struct PlotArea {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
    pub(crate) world_max_x: f32,
    pub(crate) world_max_y: f32,
}

impl PlotArea {
    pub(crate) fn world_to_screen(&self, world: Vec2) -> Vec2 {
        let plot_w = (self.right - self.left).max(1.0);
        let plot_h = (self.bottom - self.top).max(1.0);
        let x = self.left + (world.x / self.world_max_x.max(1.0)) * plot_w;
        let y = self.bottom - (world.y / self.world_max_y.max(1.0)) * plot_h;
        vec2(x, y)
    }
}

fn format_axis_value(value: f32, axis_max: f32) -> String {
    if axis_max >= 100.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_grid(area: PlotArea, color: Color) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * (area.right - area.left);
        draw_line(x, area.top, x, area.bottom, 1.0, color);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.bottom - t * (area.bottom - area.top);
        draw_line(area.left, y, area.right, y, 1.0, color);
    }
    draw_line(area.left, area.bottom, area.right, area.bottom, 2.0, DARKGRAY);
    draw_line(area.left, area.top, area.left, area.bottom, 2.0, DARKGRAY);
}

pub(crate) fn draw_axis_tick_labels(area: PlotArea, font: Option<&Font>) {
    let label_color = Color::from_rgba(105, 113, 124, 255);
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * (area.right - area.left);
        let label = format_axis_value(t * area.world_max_x, area.world_max_x);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            area.bottom + 22.0,
            tick_font_size,
            label_color,
            font,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.bottom - t * (area.bottom - area.top);
        let label = format_axis_value(t * area.world_max_y, area.world_max_y);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (area.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            label_color,
            font,
        );
    }

    let x_label_size = measure_text(X_AXIS_LABEL, font, 18, 1.0);
    draw_ui_text(
        X_AXIS_LABEL,
        area.right - x_label_size.width,
        area.bottom + 48.0,
        18,
        label_color,
        font,
    );
    draw_ui_text(
        Y_AXIS_LABEL,
        area.left + 10.0,
        area.top - 8.0,
        18,
        label_color,
        font,
    );
}

pub(crate) fn draw_markers(points: &[PathPoint], area: PlotArea) {
    for point in points {
        let p = area.world_to_screen(vec2(point.distance_ft as f32, point.height_ft as f32));
        draw_circle(p.x, p.y, MARKER_RADIUS, ACCENT_COLOR);
        draw_circle_lines(p.x, p.y, MARKER_RADIUS, 1.5, WHITE);
    }
}

pub(crate) fn draw_rim(court: &Court, area: PlotArea) {
    let rim_x = court.distance_ft as f32;
    let rim_y = court.rim_height_ft as f32;
    let front = area.world_to_screen(vec2(rim_x - RIM_HALF_WIDTH_FT, rim_y));
    let back = area.world_to_screen(vec2(rim_x + RIM_HALF_WIDTH_FT, rim_y));
    let floor = area.world_to_screen(vec2(rim_x + RIM_HALF_WIDTH_FT, 0.0));
    draw_line(back.x, back.y, floor.x, floor.y, 3.0, GRAY);
    draw_line(front.x, front.y, back.x, back.y, 4.0, RIM_COLOR);
}

pub(crate) fn draw_shooter(height_ft: f64, area: PlotArea) {
    let foot = area.world_to_screen(vec2(0.0, 0.0));
    let hand = area.world_to_screen(vec2(0.0, height_ft as f32));
    draw_line(foot.x, foot.y, hand.x, hand.y, 4.0, Color::from_rgba(92, 99, 112, 255));
}
