use approx::{assert_abs_diff_eq, assert_relative_eq};
use free_throw::core::court::Court;
use free_throw::core::error::FreeThrowError;
use free_throw::core::free_throw::{ShotParameters, solve};
use free_throw::core::gauges::gauges;

#[test]
fn every_slider_setting_scores() {
    let court = Court::default();
    for feet in 4..=7 {
        for inches in 0..=12 {
            let solution = solve(ShotParameters::from_feet_inches(feet, inches), &court)
                .expect("slider heights are always below the rim");
            let last = solution.path.last().expect("path is never empty");
            assert_abs_diff_eq!(last.distance_ft, court.distance_ft);
            assert_abs_diff_eq!(last.height_ft, court.rim_height_ft, epsilon = 1e-9);
            assert!(solution.time_to_basket_s < 1.1);
        }
    }
}

#[test]
fn time_to_basket_matches_horizontal_speed() {
    let solution = solve(ShotParameters::new(6.0), &Court::default()).expect("solve");
    let horizontal_speed =
        solution.release_velocity_fps * solution.release_angle_deg.to_radians().cos();
    assert_relative_eq!(
        solution.time_to_basket_s * horizontal_speed,
        15.0,
        max_relative = 1e-12
    );
}

#[test]
fn reference_readings_for_five_and_seven_feet() {
    let court = Court::default();
    let five = solve(ShotParameters::from_feet_inches(5, 0), &court).expect("solve");
    let seven = solve(ShotParameters::from_feet_inches(7, 0), &court).expect("solve");

    assert_abs_diff_eq!(five.time_to_basket_s, 0.991, epsilon = 0.001);
    assert_abs_diff_eq!(five.max_height_ft, 6.85, epsilon = 0.01);
    assert_abs_diff_eq!(seven.time_to_basket_s, 0.975, epsilon = 0.001);
    assert_abs_diff_eq!(seven.max_height_ft, 5.47, epsilon = 0.01);
}

#[test]
fn solution_serializes_for_json_output() {
    let solution = solve(ShotParameters::new(5.5), &Court::default()).expect("solve");
    let value = serde_json::to_value(&solution).expect("serialize");
    assert_eq!(value["path"].as_array().map(Vec::len), Some(25));
    assert!(value["release_angle_deg"].as_f64().is_some());
    assert_eq!(value["path"][0]["distance_ft"].as_f64(), Some(0.0));
}

#[test]
fn moon_court_needs_a_softer_shot() {
    let moon = Court::from_json(r#"{ "gravity_fps2": 5.32 }"#).expect("court");
    let earth = solve(ShotParameters::new(6.0), &Court::default()).expect("solve");
    let lunar = solve(ShotParameters::new(6.0), &moon).expect("solve");
    assert_relative_eq!(lunar.release_angle_deg, earth.release_angle_deg, epsilon = 1e-12);
    assert!(lunar.release_velocity_fps < earth.release_velocity_fps);
    assert!(lunar.time_to_basket_s > earth.time_to_basket_s);
}

#[test]
fn rim_height_release_is_invalid_input() {
    let err = solve(ShotParameters::new(10.0), &Court::default()).expect_err("must fail");
    match err {
        FreeThrowError::InvalidInput { height_ft, .. } => assert_eq!(height_ft, 10.0),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn gauges_stay_on_their_dials_for_slider_heights() {
    let solution = solve(ShotParameters::from_feet_inches(4, 0), &Court::default()).expect("solve");
    for gauge in gauges(&solution) {
        assert!(gauge.value < gauge.max, "{} overflows its dial", gauge.title);
        assert!(gauge.fraction() > 0.0);
    }
}
