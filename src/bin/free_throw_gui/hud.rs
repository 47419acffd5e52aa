use std::f32::consts::PI;

use free_throw::core::error::FreeThrowError;
use free_throw::core::free_throw::TrajectorySolution;
use free_throw::core::gauges::{Gauge, gauges};
use macroquad::prelude::*;

use crate::constants::{
    ACCENT_COLOR, GAUGE_CENTER_Y, GAUGE_RADIUS, GAUGE_SEGMENTS, GAUGE_TEXT_LINE_H, GAUGE_TEXT_SIZE,
    GAUGE_THICKNESS, HEADER_COLOR, OVERVIEW_Y, TITLE_Y, TRACK_COLOR,
};
use crate::render::draw_ui_text;

const OVERVIEW: [&str; 3] = [
    "The free throw line is 15 feet from the basket. Once released, the ball follows a curved path",
    "towards the rim. The two factors the shooter controls are the release angle and the release",
    "velocity; taller players need a smaller angle and a lower velocity for a successful shot.",
];

pub(crate) fn draw_header(left: f32, font: Option<&Font>) {
    draw_ui_text(
        "The Perfect Basketball Free Throw",
        left,
        TITLE_Y,
        34,
        HEADER_COLOR,
        font,
    );
    for (i, line) in OVERVIEW.iter().enumerate() {
        draw_ui_text(
            line,
            left,
            OVERVIEW_Y + i as f32 * 24.0,
            20,
            DARKGRAY,
            font,
        );
    }
}

/// Point on the dial for a needle fraction in `[0, 1]`, sweeping left to right over the top.
fn dial_point(center: Vec2, radius: f32, fraction: f32) -> Vec2 {
    let theta = PI * (1.0 - fraction);
    vec2(
        center.x + radius * theta.cos(),
        center.y - radius * theta.sin(),
    )
}

fn draw_arc_band(center: Vec2, radius: f32, from: f32, to: f32, color: Color) {
    let steps = ((to - from) * GAUGE_SEGMENTS as f32).ceil().max(1.0) as usize;
    let mut prev = dial_point(center, radius, from);
    for i in 1..=steps {
        let t = from + (to - from) * (i as f32 / steps as f32);
        let cur = dial_point(center, radius, t);
        draw_line(prev.x, prev.y, cur.x, cur.y, GAUGE_THICKNESS, color);
        prev = cur;
    }
}

fn draw_gauge(gauge: &Gauge, center: Vec2, font: Option<&Font>) {
    let fraction = gauge.fraction() as f32;
    draw_arc_band(center, GAUGE_RADIUS, 0.0, 1.0, TRACK_COLOR);
    if fraction > 0.0 {
        draw_arc_band(center, GAUGE_RADIUS, 0.0, fraction, ACCENT_COLOR);
    }

    let tip = dial_point(center, GAUGE_RADIUS * 0.8, fraction);
    draw_line(center.x, center.y, tip.x, tip.y, 3.0, HEADER_COLOR);
    draw_circle(center.x, center.y, 6.0, HEADER_COLOR);

    let value = format!("{:.2}", gauge.value);
    let value_size = measure_text(&value, font, 30, 1.0);
    draw_ui_text(
        &value,
        center.x - value_size.width * 0.5,
        center.y + 36.0,
        30,
        HEADER_COLOR,
        font,
    );

    let title_size = measure_text(gauge.title, font, 18, 1.0);
    draw_ui_text(
        gauge.title,
        center.x - title_size.width * 0.5,
        center.y - GAUGE_RADIUS - 24.0,
        18,
        DARKGRAY,
        font,
    );

    let max_label = format!("{}", gauge.max);
    let max_pos = dial_point(center, GAUGE_RADIUS, 1.0);
    draw_ui_text(
        "0",
        center.x - GAUGE_RADIUS - 4.0,
        center.y + 20.0,
        16,
        GRAY,
        font,
    );
    draw_ui_text(&max_label, max_pos.x - 10.0, max_pos.y + 20.0, 16, GRAY, font);
}

/// Greedy word wrap; `measure` returns the rendered width of a candidate line.
pub(crate) fn wrap_words(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if measure(&candidate) > max_width && !line.is_empty() {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn draw_gauge_description(gauge: &Gauge, center: Vec2, slot_w: f32, font: Option<&Font>) {
    let max_width = (slot_w - 24.0).max(60.0);
    let lines = wrap_words(gauge.description, max_width, |s| {
        measure_text(s, font, GAUGE_TEXT_SIZE, 1.0).width
    });
    for (i, line) in lines.iter().enumerate() {
        draw_ui_text(
            line,
            center.x - max_width * 0.5,
            center.y + 66.0 + i as f32 * GAUGE_TEXT_LINE_H,
            GAUGE_TEXT_SIZE,
            DARKGRAY,
            font,
        );
    }
}

pub(crate) fn draw_gauges(
    solution: &TrajectorySolution,
    left: f32,
    right: f32,
    font: Option<&Font>,
) {
    let readings = gauges(solution);
    let slot_w = (right - left) / readings.len() as f32;
    for (i, gauge) in readings.iter().enumerate() {
        let center = vec2(left + slot_w * (i as f32 + 0.5), GAUGE_CENTER_Y);
        draw_gauge(gauge, center, font);
        draw_gauge_description(gauge, center, slot_w, font);
    }
}

pub(crate) fn draw_status_line(
    solution: &TrajectorySolution,
    left: f32,
    screen_h: f32,
    font: Option<&Font>,
) {
    draw_ui_text(
        &format!(
            "Release from {:.2} ft | apex {:.2} ft above the floor | {} samples",
            solution.shooter_height_ft,
            solution.apex_height_ft(),
            solution.path.len()
        ),
        left,
        screen_h - 20.0,
        20,
        ACCENT_COLOR,
        font,
    );
}

pub(crate) fn draw_validation_message(
    err: &FreeThrowError,
    left: f32,
    top: f32,
    font: Option<&Font>,
) {
    draw_ui_text(
        "Cannot compute a free throw for this height",
        left,
        top,
        28,
        MAROON,
        font,
    );
    draw_ui_text(&err.to_string(), left, top + 34.0, 20, DARKGRAY, font);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn char_width(s: &str) -> f32 {
        s.chars().count() as f32
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = wrap_words("taller players need a smaller angle", 14.0, char_width);
        assert_eq!(lines, vec!["taller players", "need a smaller", "angle"]);
    }

    #[test]
    fn overlong_word_gets_its_own_line() {
        let lines = wrap_words("a basketball b", 5.0, char_width);
        assert_eq!(lines, vec!["a", "basketball", "b"]);
    }

    #[test]
    fn blank_text_has_no_lines() {
        assert!(wrap_words("   ", 10.0, char_width).is_empty());
    }
}
