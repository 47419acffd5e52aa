//! Scatter chart of a free throw's path, rendered with plotters.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::core::court::Court;
use crate::core::error::FreeThrowError;
use crate::core::free_throw::TrajectorySolution;
use crate::core::window::trajectory_window;

pub const CHART_SIZE: (u32, u32) = (960, 720);
pub const CHART_TITLE: &str = "Journey of the Basketball";
pub const X_AXIS_LABEL: &str = "Horizontal Distance (feet)";
pub const Y_AXIS_LABEL: &str = "Height of Basketball (feet)";

const MARKER_RADIUS: i32 = 6;
const RIM_MARKER_SIZE: i32 = 10;

/// `free_throw_<timestamp>.svg` inside `dir`.
pub fn timestamped_chart_path(dir: &Path, now: DateTime<Local>) -> PathBuf {
    dir.join(format!("free_throw_{}.svg", now.format("%Y%m%d_%H%M%S")))
}

pub fn write_svg(
    solution: &TrajectorySolution,
    court: &Court,
    path: &Path,
) -> Result<(), FreeThrowError> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    draw_chart(&root, solution, court).map_err(|e| FreeThrowError::Chart(e.to_string()))?;
    root.present().map_err(|e| FreeThrowError::Chart(e.to_string()))?;
    log::info!("Wrote trajectory chart to {}", path.display());
    Ok(())
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    solution: &TrajectorySolution,
    court: &Court,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let (max_x, max_y) = trajectory_window(solution, court);

    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(root)
        .caption(CHART_TITLE, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_x, 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .draw()?;

    chart.draw_series(solution.path.iter().map(|p| {
        Circle::new(
            (p.distance_ft, p.height_ft),
            MARKER_RADIUS,
            RGBColor(54, 123, 245).filled(),
        )
    }))?;

    chart.draw_series(std::iter::once(Cross::new(
        (court.distance_ft, court.rim_height_ft),
        RIM_MARKER_SIZE,
        RED.stroke_width(3),
    )))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn timestamped_name_uses_local_clock() {
        let now = Local
            .with_ymd_and_hms(2026, 3, 9, 14, 5, 7)
            .single()
            .expect("unambiguous local time");
        let path = timestamped_chart_path(Path::new("charts"), now);
        assert_eq!(path, Path::new("charts").join("free_throw_20260309_140507.svg"));
    }
}
