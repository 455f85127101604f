#![allow(clippy::cast_precision_loss)]

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use euler_projectile::core::euler::integrate;
use euler_projectile::core::{
    ANALYTIC_CURVE_SAMPLES, Comparison, ConvergenceStudy, Recommendation, SimulationParameters,
};
use proptest::prelude::*;

fn launch() -> impl Strategy<Value = SimulationParameters> {
    (
        0.5f64..60.0,
        0.05f64..(FRAC_PI_2 - 0.05),
        1.0f64..25.0,
        0.005f64..0.2,
        0.5f64..15.0,
    )
        .prop_map(|(speed, angle, gravity, step, max_time)| {
            SimulationParameters::new(speed, angle, gravity, step, max_time)
                .expect("strategy only yields valid parameters")
        })
}

// =============================================================================
// Euler trajectory invariants
// =============================================================================

proptest! {
    #[test]
    fn first_sample_is_the_launch(params in launch()) {
        let (vx0, vy0) = params.velocity_components();
        let first = integrate(&params).initial_sample();

        prop_assert_eq!(first.time_s, 0.0);
        prop_assert_eq!(first.x_m, 0.0);
        prop_assert_eq!(first.y_m, 0.0);
        prop_assert_eq!(first.vx_mps, vx0);
        prop_assert_eq!(first.vy_mps, vy0);
    }

    #[test]
    fn horizontal_velocity_is_invariant(params in launch()) {
        let trajectory = integrate(&params);
        let vx0 = trajectory.initial_sample().vx_mps;

        for sample in trajectory.samples() {
            prop_assert_eq!(sample.vx_mps, vx0);
        }
    }

    #[test]
    fn vertical_velocity_is_linear_in_step_index(params in launch()) {
        let trajectory = integrate(&params);
        let vy0 = trajectory.initial_sample().vy_mps;
        let dv = params.step_s() * params.gravity_mps2();

        for (i, sample) in trajectory.samples().iter().enumerate() {
            let expected = vy0 - i as f64 * dv;
            let tolerance = 1e-9 * (1.0 + vy0.abs() + i as f64 * dv);
            prop_assert!(
                (sample.vy_mps - expected).abs() <= tolerance,
                "step {}: vy={}, expected={}", i, sample.vy_mps, expected
            );
        }
    }

    #[test]
    fn time_strictly_increases(params in launch()) {
        let trajectory = integrate(&params);

        for pair in trajectory.samples().windows(2) {
            prop_assert!(pair[1].time_s > pair[0].time_s);
        }
    }

    #[test]
    fn stops_on_first_ground_crossing_or_time_cap(params in launch()) {
        let trajectory = integrate(&params);
        let samples = trajectory.samples();
        let (last, earlier) = samples.split_last().expect("never empty");

        for sample in earlier {
            prop_assert!(sample.y_m >= 0.0 && sample.time_s < params.max_time_s());
        }
        prop_assert!(last.y_m < 0.0 || last.time_s >= params.max_time_s());
    }

    #[test]
    fn analytic_curve_spans_numeric_extent(params in launch()) {
        let comparison = Comparison::run(params);
        let points = comparison.analytic.curve.points();

        prop_assert_eq!(points.len(), ANALYTIC_CURVE_SAMPLES);
        prop_assert_eq!(points[0], (0.0, 0.0));
        let (last_x, last_y) = points[ANALYTIC_CURVE_SAMPLES - 1];
        prop_assert_eq!(last_x, comparison.trajectory.max_x_m());
        prop_assert_eq!(last_y, params.analytic_height_at(last_x));
    }

    #[test]
    fn report_matches_its_inputs(params in launch()) {
        let report = Comparison::run(params).report;
        let pct = report.relative_error_pct.expect("angle keeps the range positive");

        prop_assert!(report.absolute_error_m >= 0.0);
        prop_assert!(pct.is_finite() && pct >= 0.0);
        prop_assert_eq!(
            report.needs_smaller_step(),
            pct > report.threshold_pct
        );
    }
}

// =============================================================================
// Worked example from the classroom exercise
// =============================================================================

#[test]
fn classroom_example_matches_closed_form() {
    let params = SimulationParameters::new(20.0, FRAC_PI_4, 9.81, 0.1, 3.0)
        .expect("parameters should be valid");
    let comparison = Comparison::run(params);

    assert!((comparison.analytic.range_m - 40.77).abs() < 0.01);
    assert!((comparison.analytic.max_height_m - 10.19).abs() < 0.01);
    assert!(
        comparison.trajectory.overshoot_m().is_some(),
        "Euler run should end below ground"
    );

    let pct = comparison
        .report
        .relative_error_pct
        .expect("range is non-zero");
    assert!(pct.is_finite() && pct > 1.0);
    assert!(matches!(
        comparison.report.recommendation,
        Recommendation::ReduceStep { .. }
    ));
}

#[test]
fn smaller_steps_strictly_reduce_error() {
    let study = ConvergenceStudy::run(SimulationParameters::default(), &[0.1, 0.01, 0.001])
        .expect("steps are valid");
    let errors: Vec<f64> = study
        .rows
        .iter()
        .map(|row| row.relative_error_pct.expect("range is non-zero"))
        .collect();

    assert!(errors[0] > errors[1], "{errors:?}");
    assert!(errors[1] > errors[2], "{errors:?}");
    assert!(study.is_monotonically_decreasing());
}
