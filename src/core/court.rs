use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::FreeThrowError;

pub const GRAVITY_FPS2: f64 = 32.174;
pub const RIM_HEIGHT_FT: f64 = 10.0;
pub const FREE_THROW_DISTANCE_FT: f64 = 15.0; // release line to basket
pub const PATH_SAMPLES: usize = 25;
pub const MAX_PATH_SAMPLES: usize = 10_000;

/// Fixed geometry of a free throw: gravity, rim height and shooting distance.
///
/// `Court::default()` is a regulation court. Any field missing from a court
/// file falls back to its regulation value; unknown keys are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Court {
    pub gravity_fps2: f64,
    pub rim_height_ft: f64,
    pub distance_ft: f64,
    pub path_samples: usize,
}

impl Default for Court {
    fn default() -> Self {
        Self {
            gravity_fps2: GRAVITY_FPS2,
            rim_height_ft: RIM_HEIGHT_FT,
            distance_ft: FREE_THROW_DISTANCE_FT,
            path_samples: PATH_SAMPLES,
        }
    }
}

impl Court {
    pub fn from_json(json: &str) -> Result<Self, FreeThrowError> {
        let court: Self = serde_json::from_str(json)?;
        court.validate()?;
        Ok(court)
    }

    pub fn load(path: &Path) -> Result<Self, FreeThrowError> {
        let json = fs::read_to_string(path)?;
        let court = Self::from_json(&json)?;
        log::info!(
            "Loaded court from {}: g = {} ft/s^2, rim = {} ft, distance = {} ft",
            path.display(),
            court.gravity_fps2,
            court.rim_height_ft,
            court.distance_ft
        );
        Ok(court)
    }

    pub fn validate(&self) -> Result<(), FreeThrowError> {
        let positive = [
            ("gravity_fps2", self.gravity_fps2),
            ("rim_height_ft", self.rim_height_ft),
            ("distance_ft", self.distance_ft),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(FreeThrowError::InvalidCourt(format!(
                    "{name} must be a positive finite number, got {value}"
                )));
            }
        }
        if !(2..=MAX_PATH_SAMPLES).contains(&self.path_samples) {
            return Err(FreeThrowError::InvalidCourt(format!(
                "path_samples must be between 2 and {MAX_PATH_SAMPLES}, got {}",
                self.path_samples
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_regulation() {
        let court = Court::default();
        assert_eq!(court.gravity_fps2, 32.174);
        assert_eq!(court.rim_height_ft, 10.0);
        assert_eq!(court.distance_ft, 15.0);
        assert_eq!(court.path_samples, 25);
        assert!(court.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_regulation_values() {
        let court = Court::from_json(r#"{ "rim_height_ft": 8.0 }"#).expect("court should parse");
        assert_eq!(court.rim_height_ft, 8.0);
        assert_eq!(court.distance_ft, FREE_THROW_DISTANCE_FT);
        assert_eq!(court.path_samples, PATH_SAMPLES);
    }

    #[test]
    fn rejects_non_positive_gravity() {
        let err = Court::from_json(r#"{ "gravity_fps2": 0.0 }"#).expect_err("should fail");
        assert!(matches!(err, FreeThrowError::InvalidCourt(_)));
        assert!(err.to_string().contains("gravity_fps2"));
    }

    #[test]
    fn rejects_single_sample() {
        let err = Court::from_json(r#"{ "path_samples": 1 }"#).expect_err("should fail");
        assert!(err.to_string().contains("path_samples"));
    }

    #[test]
    fn rejects_oversized_sample_count() {
        let err = Court::from_json(r#"{ "path_samples": 18446744073709551615 }"#)
            .expect_err("should fail");
        assert!(matches!(err, FreeThrowError::InvalidCourt(_)));
        assert!(err.to_string().contains("path_samples"));

        let largest = Court::from_json(r#"{ "path_samples": 10000 }"#).expect("court");
        assert_eq!(largest.path_samples, MAX_PATH_SAMPLES);
    }

    #[test]
    fn misspelled_key_is_rejected() {
        let err = Court::from_json(r#"{ "gravity": 5.0 }"#).expect_err("should fail");
        assert!(matches!(err, FreeThrowError::Json(_)));
        assert!(err.to_string().contains("gravity"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Court::from_json("{ gravity").expect_err("should fail");
        assert!(matches!(err, FreeThrowError::Json(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Court::load(Path::new("/definitely/not/a/court.json")).expect_err("should fail");
        assert!(matches!(err, FreeThrowError::Io(_)));
    }
}
