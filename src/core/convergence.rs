//! Repeats one launch at several step sizes to show the first-order error
//! shrinking as h does.

use super::ballistics::SimulationParameters;
use super::comparison::Comparison;
use crate::error::SimulationError;

pub const DEFAULT_CONVERGENCE_STEPS_S: [f64; 3] = [0.1, 0.01, 0.001];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvergenceRow {
    pub step_s: f64,
    pub step_count: usize,
    pub numeric_range_m: f64,
    pub absolute_error_m: f64,
    pub relative_error_pct: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConvergenceStudy {
    pub analytic_range_m: f64,
    /// Ordered from the coarsest step to the finest.
    pub rows: Vec<ConvergenceRow>,
}

impl ConvergenceStudy {
    pub fn run(params: SimulationParameters, steps_s: &[f64]) -> Result<Self, SimulationError> {
        if steps_s.is_empty() {
            return Err(SimulationError::NoStepSizes);
        }

        let mut ordered = steps_s.to_vec();
        ordered.sort_by(|a, b| b.total_cmp(a));

        let rows = ordered
            .into_iter()
            .map(|step_s| -> Result<ConvergenceRow, SimulationError> {
                let comparison = Comparison::run(params.with_step(step_s)?);
                Ok(ConvergenceRow {
                    step_s,
                    step_count: comparison.trajectory.step_count(),
                    numeric_range_m: comparison.report.numeric_range_m,
                    absolute_error_m: comparison.report.absolute_error_m,
                    relative_error_pct: comparison.report.relative_error_pct,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            analytic_range_m: params.analytic_range_m(),
            rows,
        })
    }

    /// True when every finer step gives a strictly smaller relative error.
    /// An undefined error anywhere makes the answer false.
    pub fn is_monotonically_decreasing(&self) -> bool {
        self.rows.windows(2).all(|pair| {
            match (pair[0].relative_error_pct, pair[1].relative_error_pct) {
                (Some(coarse), Some(fine)) => fine < coarse,
                _ => false,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_shrinks_with_step_size() {
        let study = ConvergenceStudy::run(
            SimulationParameters::default(),
            &DEFAULT_CONVERGENCE_STEPS_S,
        )
        .expect("default steps are valid");

        assert_eq!(study.rows.len(), 3);
        assert!(study.is_monotonically_decreasing());
        let finest = study.rows[2]
            .relative_error_pct
            .expect("range is non-zero");
        assert!(finest < 0.1, "finest={finest}");
    }

    #[test]
    fn rows_are_sorted_coarse_to_fine() {
        let study = ConvergenceStudy::run(SimulationParameters::default(), &[0.001, 0.1, 0.01])
            .expect("steps are valid");
        let steps: Vec<f64> = study.rows.iter().map(|r| r.step_s).collect();

        assert_eq!(steps, vec![0.1, 0.01, 0.001]);
    }

    #[test]
    fn rejects_empty_and_invalid_steps() {
        let params = SimulationParameters::default();

        assert_eq!(
            ConvergenceStudy::run(params, &[]),
            Err(SimulationError::NoStepSizes)
        );
        assert!(ConvergenceStudy::run(params, &[0.1, -0.01]).is_err());
    }

    #[test]
    fn undefined_errors_are_not_monotonic() {
        let flat = SimulationParameters::new(20.0, 0.0, 9.81, 0.1, 3.0)
            .expect("parameters should be valid");
        let study = ConvergenceStudy::run(flat, &DEFAULT_CONVERGENCE_STEPS_S)
            .expect("steps are valid");

        assert!(!study.is_monotonically_decreasing());
    }
}
