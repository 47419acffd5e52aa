use crate::core::court::Court;
use crate::core::free_throw::TrajectorySolution;

pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 1.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

pub fn fixed_ratio_axis_window(raw_max_x: f64, raw_max_y: f64) -> (f64, f64) {
    let raw_x_span = raw_max_x.max(1.0);
    let raw_y_span = raw_max_y.max(1.0);
    let x_pad = raw_x_span * X_PADDING_RATIO;
    let y_pad = raw_y_span * Y_PADDING_RATIO;

    let mut x_span = (raw_max_x + x_pad).max(1.0);
    let mut y_span = (raw_max_y + y_pad).max(1.0);

    if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
        x_span = y_span * DISTANCE_TO_HEIGHT_RATIO;
    } else {
        y_span = x_span / DISTANCE_TO_HEIGHT_RATIO;
    }

    (x_span, y_span)
}

/// Axis extents that fit the whole arc, the shooter and the rim.
pub fn trajectory_window(solution: &TrajectorySolution, court: &Court) -> (f64, f64) {
    let raw_max_x = solution
        .path
        .iter()
        .fold(court.distance_ft, |acc, p| acc.max(p.distance_ft));
    let raw_max_y = solution
        .path
        .iter()
        .fold(court.rim_height_ft, |acc, p| acc.max(p.height_ft))
        .max(solution.apex_height_ft());
    fixed_ratio_axis_window(raw_max_x, raw_max_y)
}
