//! Explicit (forward) Euler integration of the launch.
//!
//! Each step uses the state at the start of the interval:
//!
//! ```text
//! x(t+h)  = x(t)  + h * vx(t)
//! y(t+h)  = y(t)  + h * vy(t)
//! vx(t+h) = vx(t)
//! vy(t+h) = vy(t) - h * g
//! ```
//!
//! The loop checks the last stored sample, so the final sample usually sits
//! a little below ground. That overshoot is left in place; it is part of the
//! first-order error being demonstrated.

use tracing::{debug, trace};

use super::ballistics::SimulationParameters;

/// Progress is traced every this many steps.
const TRACE_EVERY_STEPS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectorySample {
    pub time_s: f64,
    pub x_m: f64,
    pub y_m: f64,
    pub vx_mps: f64,
    pub vy_mps: f64,
}

impl TrajectorySample {
    pub fn launch(vx_mps: f64, vy_mps: f64) -> Self {
        Self {
            time_s: 0.0,
            x_m: 0.0,
            y_m: 0.0,
            vx_mps,
            vy_mps,
        }
    }

    /// One Euler step. Position moves with the old velocity.
    pub fn advance(&self, step_s: f64, gravity_mps2: f64) -> Self {
        Self {
            time_s: self.time_s + step_s,
            x_m: self.x_m + step_s * self.vx_mps,
            y_m: self.y_m + step_s * self.vy_mps,
            vx_mps: self.vx_mps,
            vy_mps: self.vy_mps - step_s * gravity_mps2,
        }
    }
}

/// Samples of one Euler run in increasing time order. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    samples: Vec<TrajectorySample>,
    step_s: f64,
}

impl Trajectory {
    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn step_s(&self) -> f64 {
        self.step_s
    }

    pub fn initial_sample(&self) -> TrajectorySample {
        self.samples[0]
    }

    pub fn final_sample(&self) -> TrajectorySample {
        self.samples[self.samples.len() - 1]
    }

    /// Number of Euler updates taken (samples minus the launch sample).
    pub fn step_count(&self) -> usize {
        self.samples.len() - 1
    }

    pub fn flight_time_s(&self) -> f64 {
        self.final_sample().time_s
    }

    /// Horizontal position of the last sample, used as the numeric range.
    pub fn numeric_range_m(&self) -> f64 {
        self.final_sample().x_m
    }

    pub fn max_x_m(&self) -> f64 {
        self.samples.iter().fold(0.0f64, |acc, s| acc.max(s.x_m))
    }

    pub fn apex_height_m(&self) -> f64 {
        self.samples.iter().fold(0.0f64, |acc, s| acc.max(s.y_m))
    }

    /// Depth below ground of the final sample, if the run ended underground.
    pub fn overshoot_m(&self) -> Option<f64> {
        let last = self.final_sample();
        (last.y_m < 0.0).then_some(-last.y_m)
    }

    pub fn points(&self) -> Vec<(f64, f64)> {
        self.samples.iter().map(|s| (s.x_m, s.y_m)).collect()
    }
}

pub fn integrate(params: &SimulationParameters) -> Trajectory {
    let (vx0, vy0) = params.velocity_components();
    let step_s = params.step_s();
    let gravity = params.gravity_mps2();

    debug!(
        speed_mps = params.speed_mps(),
        angle_deg = params.angle_deg(),
        step_s,
        max_time_s = params.max_time_s(),
        "starting Euler integration"
    );

    let mut current = TrajectorySample::launch(vx0, vy0);
    let mut samples = vec![current];

    while current.y_m >= 0.0 && current.time_s < params.max_time_s() {
        current = current.advance(step_s, gravity);
        samples.push(current);

        let step = samples.len() - 1;
        if step % TRACE_EVERY_STEPS == 0 {
            trace!(step, t = current.time_s, x = current.x_m, y = current.y_m, "progress");
        }
    }

    let trajectory = Trajectory { samples, step_s };
    debug!(
        steps = trajectory.step_count(),
        final_time_s = trajectory.flight_time_s(),
        numeric_range_m = trajectory.numeric_range_m(),
        "Euler integration finished"
    );
    trajectory
}
