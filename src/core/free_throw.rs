use serde::Serialize;

use crate::core::court::Court;
use crate::core::error::FreeThrowError;

pub const INCHES_PER_FOOT: f64 = 12.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShotParameters {
    /// Height of the release point above the floor.
    pub shooter_height_ft: f64,
}

impl ShotParameters {
    pub fn new(shooter_height_ft: f64) -> Self {
        Self { shooter_height_ft }
    }

    pub fn from_feet_inches(feet: u32, inches: u32) -> Self {
        Self::new(f64::from(feet) + f64::from(inches) / INCHES_PER_FOOT)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PathPoint {
    pub distance_ft: f64,
    pub height_ft: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrajectorySolution {
    pub shooter_height_ft: f64,
    pub release_angle_deg: f64,
    pub release_velocity_fps: f64,
    pub time_to_basket_s: f64,
    /// Rise of the ball above its release point at the top of the arc.
    pub max_height_ft: f64,
    pub path: Vec<PathPoint>,
}

impl TrajectorySolution {
    /// Top of the arc measured from the floor.
    pub fn apex_height_ft(&self) -> f64 {
        self.shooter_height_ft + self.max_height_ft
    }
}

/// Height of the ball once it has travelled `distance_ft` horizontally.
pub fn height_at_distance(
    release_height_ft: f64,
    angle_rad: f64,
    velocity_fps: f64,
    gravity_fps2: f64,
    distance_ft: f64,
) -> f64 {
    let horizontal_speed = velocity_fps * angle_rad.cos();
    release_height_ft + distance_ft * angle_rad.tan()
        - (gravity_fps2 * distance_ft.powi(2)) / (2.0 * horizontal_speed.powi(2))
}

/// Evenly spaced samples from the release line to the basket, both ends included.
pub fn sample_path(
    release_height_ft: f64,
    angle_rad: f64,
    velocity_fps: f64,
    court: &Court,
) -> Vec<PathPoint> {
    let sample_count = court.path_samples.max(2);
    let last = sample_count - 1;
    let step = court.distance_ft / last as f64;
    (0..sample_count)
        .map(|i| {
            let distance_ft = if i == last {
                court.distance_ft
            } else {
                i as f64 * step
            };
            PathPoint {
                distance_ft,
                height_ft: height_at_distance(
                    release_height_ft,
                    angle_rad,
                    velocity_fps,
                    court.gravity_fps2,
                    distance_ft,
                ),
            }
        })
        .collect()
}

/// Solves for the minimum-speed shot that passes through the rim.
///
/// The release point sits at `shot.shooter_height_ft` on the free throw line and
/// the target is `(court.distance_ft, court.rim_height_ft)`. Releasing at or
/// above the rim is outside the model and is rejected.
pub fn solve(shot: ShotParameters, court: &Court) -> Result<TrajectorySolution, FreeThrowError> {
    court.validate()?;

    let h = shot.shooter_height_ft;
    if !h.is_finite() {
        return Err(FreeThrowError::InvalidInput {
            height_ft: h,
            reason: "height must be a finite number".to_string(),
        });
    }

    let rise_ft = court.rim_height_ft - h;
    if rise_ft <= 0.0 {
        return Err(FreeThrowError::InvalidInput {
            height_ft: h,
            reason: format!(
                "release point must be below the rim at {} ft",
                court.rim_height_ft
            ),
        });
    }

    let x = court.distance_ft;
    let g = court.gravity_fps2;

    let num_angle = rise_ft + (rise_ft.powi(2) + x.powi(2)).sqrt();
    let angle_rad = (num_angle / x).atan();
    let velocity_fps = (g * num_angle).sqrt();
    let time_to_basket_s = x / (velocity_fps * angle_rad.cos());
    let max_height_ft = (velocity_fps.powi(2) * angle_rad.sin().powi(2)) / (2.0 * g);
    let release_angle_deg = angle_rad.to_degrees();

    let finite = [num_angle, velocity_fps, time_to_basket_s, max_height_ft]
        .iter()
        .all(|v| v.is_finite());
    if !finite || release_angle_deg >= 90.0 || time_to_basket_s <= 0.0 {
        return Err(FreeThrowError::InvalidInput {
            height_ft: h,
            reason: "release point is too far below the rim for a finite shot".to_string(),
        });
    }

    log::debug!(
        "h = {h:.4} ft -> angle {release_angle_deg:.3} deg, velocity {velocity_fps:.3} ft/s, \
         t {time_to_basket_s:.4} s"
    );

    Ok(TrajectorySolution {
        shooter_height_ft: h,
        release_angle_deg,
        release_velocity_fps: velocity_fps,
        time_to_basket_s,
        max_height_ft,
        path: sample_path(h, angle_rad, velocity_fps, court),
    })
}
