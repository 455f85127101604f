use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::error::SimulationError;

pub const STANDARD_GRAVITY_MPS2: f64 = 9.81;

pub const DEFAULT_SPEED_MPS: f64 = 20.0;
pub const DEFAULT_ANGLE_RAD: f64 = FRAC_PI_4;
pub const DEFAULT_STEP_S: f64 = 0.1;
pub const DEFAULT_MAX_TIME_S: f64 = 3.0;

/// Launch and integration settings for one run.
///
/// Fields are private so a value can only exist after [`SimulationParameters::new`]
/// has checked it; the Euler loop relies on that to terminate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    speed_mps: f64,
    angle_rad: f64,
    gravity_mps2: f64,
    step_s: f64,
    max_time_s: f64,
}

fn require(
    name: &'static str,
    value: f64,
    holds: bool,
    constraint: &'static str,
) -> Result<(), SimulationError> {
    if value.is_finite() && holds {
        Ok(())
    } else {
        Err(SimulationError::InvalidParameter {
            name,
            value,
            constraint,
        })
    }
}

impl SimulationParameters {
    pub fn new(
        speed_mps: f64,
        angle_rad: f64,
        gravity_mps2: f64,
        step_s: f64,
        max_time_s: f64,
    ) -> Result<Self, SimulationError> {
        require(
            "speed",
            speed_mps,
            speed_mps >= 0.0,
            "must be a finite number >= 0 m/s",
        )?;
        require(
            "angle",
            angle_rad,
            (0.0..=FRAC_PI_2).contains(&angle_rad),
            "must lie in [0, pi/2] radians",
        )?;
        require(
            "gravity",
            gravity_mps2,
            gravity_mps2 > 0.0,
            "must be a finite number > 0 m/s^2",
        )?;
        require("step", step_s, step_s > 0.0, "must be a finite number > 0 s")?;
        require(
            "max time",
            max_time_s,
            max_time_s > 0.0,
            "must be a finite number > 0 s",
        )?;

        Ok(Self {
            speed_mps,
            angle_rad,
            gravity_mps2,
            step_s,
            max_time_s,
        })
    }

    /// Same launch, different step size.
    pub fn with_step(self, step_s: f64) -> Result<Self, SimulationError> {
        Self::new(
            self.speed_mps,
            self.angle_rad,
            self.gravity_mps2,
            step_s,
            self.max_time_s,
        )
    }

    pub fn speed_mps(&self) -> f64 {
        self.speed_mps
    }

    pub fn angle_rad(&self) -> f64 {
        self.angle_rad
    }

    pub fn angle_deg(&self) -> f64 {
        self.angle_rad.to_degrees()
    }

    pub fn gravity_mps2(&self) -> f64 {
        self.gravity_mps2
    }

    pub fn step_s(&self) -> f64 {
        self.step_s
    }

    pub fn max_time_s(&self) -> f64 {
        self.max_time_s
    }

    pub fn velocity_components(&self) -> (f64, f64) {
        let vx = self.speed_mps * self.angle_rad.cos();
        let vy = self.speed_mps * self.angle_rad.sin();
        (vx, vy)
    }

    /// Exact range on flat ground: v0^2 sin(2 theta) / g.
    pub fn analytic_range_m(&self) -> f64 {
        self.speed_mps * self.speed_mps * (2.0 * self.angle_rad).sin() / self.gravity_mps2
    }

    /// Exact apex height: v0^2 sin^2(theta) / (2 g).
    pub fn analytic_max_height_m(&self) -> f64 {
        let sin_theta = self.angle_rad.sin();
        self.speed_mps * self.speed_mps * sin_theta * sin_theta / (2.0 * self.gravity_mps2)
    }

    /// Height of the exact trajectory above horizontal distance `x_m`,
    /// with time eliminated: y = x tan(theta) - g x^2 / (2 v0^2 cos^2(theta)).
    ///
    /// At theta = pi/2 the tangent is huge and the result is whatever IEEE
    /// arithmetic produces.
    pub fn analytic_height_at(&self, x_m: f64) -> f64 {
        // The parabola always passes through the launch point; avoids 0/0 when v0 = 0.
        if x_m == 0.0 {
            return 0.0;
        }
        let cos_theta = self.angle_rad.cos();
        let denominator = 2.0 * self.speed_mps * self.speed_mps * cos_theta * cos_theta;
        x_m * self.angle_rad.tan() - (self.gravity_mps2 * x_m * x_m) / denominator
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            speed_mps: DEFAULT_SPEED_MPS,
            angle_rad: DEFAULT_ANGLE_RAD,
            gravity_mps2: STANDARD_GRAVITY_MPS2,
            step_s: DEFAULT_STEP_S,
            max_time_s: DEFAULT_MAX_TIME_S,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn computes_known_range_and_height() {
        let params = SimulationParameters::default();

        assert_close(params.analytic_range_m(), 40.77, 0.01);
        assert_close(params.analytic_max_height_m(), 10.19, 0.01);
    }

    #[test]
    fn splits_speed_into_components() {
        let params = SimulationParameters::new(10.0, FRAC_PI_2 / 3.0, 9.81, 0.1, 3.0)
            .expect("parameters should be valid");
        let (vx, vy) = params.velocity_components();

        assert_close(vx, 10.0 * (30.0f64).to_radians().cos(), 1e-12);
        assert_close(vy, 5.0, 1e-12);
    }

    #[test]
    fn analytic_height_is_zero_at_launch_and_at_range() {
        let params = SimulationParameters::default();

        assert_close(params.analytic_height_at(0.0), 0.0, 0.0);
        assert_close(params.analytic_height_at(params.analytic_range_m()), 0.0, 1e-9);
        assert_close(
            params.analytic_height_at(params.analytic_range_m() / 2.0),
            params.analytic_max_height_m(),
            1e-9,
        );
    }

    #[test]
    fn accepts_zero_speed_and_boundary_angles() {
        assert!(SimulationParameters::new(0.0, 0.0, 9.81, 0.1, 3.0).is_ok());
        assert!(SimulationParameters::new(5.0, FRAC_PI_2, 9.81, 0.1, 3.0).is_ok());
    }

    #[test]
    fn rejects_non_positive_step() {
        let err = SimulationParameters::new(20.0, FRAC_PI_4, 9.81, 0.0, 3.0)
            .expect_err("zero step should be rejected");

        assert!(matches!(
            err,
            SimulationError::InvalidParameter { name: "step", .. }
        ));
    }

    #[test]
    fn rejects_non_positive_gravity() {
        let err = SimulationParameters::new(20.0, FRAC_PI_4, -9.81, 0.1, 3.0)
            .expect_err("negative gravity should be rejected");

        assert!(err.to_string().contains("invalid gravity"));
    }

    #[test]
    fn rejects_non_finite_inputs() {
        assert!(SimulationParameters::new(f64::NAN, FRAC_PI_4, 9.81, 0.1, 3.0).is_err());
        assert!(SimulationParameters::new(20.0, FRAC_PI_4, 9.81, 0.1, f64::INFINITY).is_err());
        assert!(SimulationParameters::new(20.0, f64::NAN, 9.81, 0.1, 3.0).is_err());
    }

    #[test]
    fn rejects_angle_outside_quarter_turn() {
        assert!(SimulationParameters::new(20.0, -0.1, 9.81, 0.1, 3.0).is_err());
        assert!(SimulationParameters::new(20.0, FRAC_PI_2 + 0.01, 9.81, 0.1, 3.0).is_err());
    }

    #[test]
    fn with_step_keeps_launch_and_revalidates() {
        let params = SimulationParameters::default();
        let finer = params.with_step(0.01).expect("0.01 is a valid step");

        assert_eq!(finer.speed_mps(), params.speed_mps());
        assert_eq!(finer.angle_rad(), params.angle_rad());
        assert_close(finer.step_s(), 0.01, 0.0);
        assert!(params.with_step(-1.0).is_err());
    }
}
