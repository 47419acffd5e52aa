use free_throw::core::court::Court;
use free_throw::core::error::FreeThrowError;
use free_throw::core::free_throw::{ShotParameters, TrajectorySolution, solve};

use crate::constants::{DEFAULT_FEET, DEFAULT_INCHES, FEET_SLIDER, INCHES_SLIDER};

pub(crate) struct AppRuntime {
    pub(crate) court: Court,
    pub(crate) height_feet: f32,
    pub(crate) height_inches: f32,
}

impl AppRuntime {
    pub(crate) fn new(court: Court) -> Self {
        Self {
            court,
            height_feet: DEFAULT_FEET,
            height_inches: DEFAULT_INCHES,
        }
    }

    pub(crate) fn reset_height(&mut self) {
        self.height_feet = DEFAULT_FEET;
        self.height_inches = DEFAULT_INCHES;
    }

    /// Slider positions snapped to whole feet and inches.
    pub(crate) fn feet_and_inches(&self) -> (u32, u32) {
        let feet = self
            .height_feet
            .round()
            .clamp(FEET_SLIDER.start, FEET_SLIDER.end);
        let inches = self
            .height_inches
            .round()
            .clamp(INCHES_SLIDER.start, INCHES_SLIDER.end);
        (feet as u32, inches as u32)
    }

    pub(crate) fn shot(&self) -> ShotParameters {
        let (feet, inches) = self.feet_and_inches();
        ShotParameters::from_feet_inches(feet, inches)
    }

    pub(crate) fn solve(&self) -> Result<TrajectorySolution, FreeThrowError> {
        solve(self.shot(), &self.court)
    }

    pub(crate) fn height_label(&self) -> String {
        let (feet, inches) = self.feet_and_inches();
        format!("{feet} ft {inches} in")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_five_foot_six() {
        let state = AppRuntime::new(Court::default());
        assert_eq!(state.feet_and_inches(), (5, 6));
        assert_eq!(state.height_label(), "5 ft 6 in");
        assert!((state.shot().shooter_height_ft - 5.5).abs() < 1e-12);
    }

    #[test]
    fn slider_values_snap_to_whole_units() {
        let mut state = AppRuntime::new(Court::default());
        state.height_feet = 6.6;
        state.height_inches = 11.7;
        assert_eq!(state.feet_and_inches(), (7, 12));
        state.reset_height();
        assert_eq!(state.feet_and_inches(), (5, 6));
    }

    #[test]
    fn low_rim_court_surfaces_validation_error() {
        let court = Court {
            rim_height_ft: 5.0,
            ..Court::default()
        };
        let state = AppRuntime::new(court);
        assert!(state.solve().is_err());
    }
}
