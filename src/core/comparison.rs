use super::accuracy::{ErrorReport, RELATIVE_ERROR_THRESHOLD_PCT};
use super::analytic::AnalyticSolution;
use super::ballistics::SimulationParameters;
use super::euler::{Trajectory, integrate};
use crate::error::SimulationError;

/// Everything one run produces. Presentation code only reads from it.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub params: SimulationParameters,
    pub trajectory: Trajectory,
    pub analytic: AnalyticSolution,
    pub report: ErrorReport,
}

impl Comparison {
    /// Integrates, solves exactly over the same horizontal extent, then
    /// measures the range error against the default 1% threshold.
    pub fn run(params: SimulationParameters) -> Self {
        Self::build(params, RELATIVE_ERROR_THRESHOLD_PCT)
    }

    pub fn with_threshold(
        params: SimulationParameters,
        threshold_pct: f64,
    ) -> Result<Self, SimulationError> {
        if !threshold_pct.is_finite() || threshold_pct <= 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "threshold",
                value: threshold_pct,
                constraint: "must be a finite percentage > 0",
            });
        }
        Ok(Self::build(params, threshold_pct))
    }

    fn build(params: SimulationParameters, threshold_pct: f64) -> Self {
        let trajectory = integrate(&params);
        let analytic = AnalyticSolution::solve(&params, trajectory.max_x_m());
        let report = ErrorReport::assess(
            trajectory.numeric_range_m(),
            analytic.range_m,
            params.step_s(),
            threshold_pct,
        );

        Self {
            params,
            trajectory,
            analytic,
            report,
        }
    }
}
