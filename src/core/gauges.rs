//! Dial readings shown for a solved free throw.

use crate::core::free_throw::TrajectorySolution;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gauge {
    pub title: &'static str,
    /// What the reading means for the shooter.
    pub description: &'static str,
    pub value: f64,
    /// Top of the dial; readings above it pin the needle at the end stop.
    pub max: f64,
}

impl Gauge {
    /// Needle position in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        if self.max <= 0.0 || !self.value.is_finite() {
            return 0.0;
        }
        (self.value / self.max).clamp(0.0, 1.0)
    }
}

pub fn gauges(solution: &TrajectorySolution) -> [Gauge; 4] {
    [
        Gauge {
            title: "Release Angle (degrees)",
            description: "Gravity pulls the ball down once it leaves the hand, so the right \
                angle is what carries it all the way into the basket. Taller players \
                need a smaller release angle.",
            value: solution.release_angle_deg,
            max: 90.0,
        },
        Gauge {
            title: "Release Velocity (feet/second)",
            description: "The right release speed, combined with the right release angle, is \
                essential for a successful free throw. Taller players need a lower \
                release velocity.",
            value: solution.release_velocity_fps,
            max: 90.0,
        },
        Gauge {
            title: "Time to basket (seconds)",
            description: "How long the ball travels from the free throw line to the basket. For \
                most players it takes less than one second.",
            value: solution.time_to_basket_s,
            max: 3.0,
        },
        Gauge {
            title: "Max Height after Release (feet)",
            description: "How far the ball rises above the release point. It depends on both the \
                release velocity and the release angle.",
            value: solution.max_height_ft,
            max: 10.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::court::Court;
    use crate::core::free_throw::{ShotParameters, solve};

    #[test]
    fn gauges_follow_solution_order() {
        let solution = solve(ShotParameters::new(5.0), &Court::default()).expect("solve");
        let [angle, velocity, time, height] = gauges(&solution);
        assert_eq!(angle.value, solution.release_angle_deg);
        assert_eq!(velocity.value, solution.release_velocity_fps);
        assert_eq!(time.value, solution.time_to_basket_s);
        assert_eq!(height.value, solution.max_height_ft);
        assert_eq!(time.max, 3.0);
    }

    #[test]
    fn every_gauge_explains_itself() {
        let solution = solve(ShotParameters::new(6.0), &Court::default()).expect("solve");
        let readings = gauges(&solution);
        assert!(readings.iter().all(|g| !g.description.is_empty()));
        assert!(readings[0].description.contains("release angle"));
        assert!(readings[1].description.contains("release velocity"));
        assert!(readings[2].description.contains("basket"));
        assert!(readings[3].description.contains("release point"));
    }

    #[test]
    fn fraction_is_clamped() {
        let over = Gauge {
            title: "t",
            description: "d",
            value: 12.0,
            max: 10.0,
        };
        let under = Gauge {
            value: -1.0,
            ..over
        };
        let half = Gauge { value: 5.0, ..over };
        assert_eq!(over.fraction(), 1.0);
        assert_eq!(under.fraction(), 0.0);
        assert_eq!(half.fraction(), 0.5);
    }
}
