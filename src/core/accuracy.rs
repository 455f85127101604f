use std::fmt;

use tracing::warn;

/// Relative error (percent) above which a smaller step is recommended.
pub const RELATIVE_ERROR_THRESHOLD_PCT: f64 = 1.0;

/// Analytic ranges below this are treated as zero. Covers theta = pi/2,
/// where sin(2 theta) comes out around 1e-16 instead of exactly 0.
const MIN_REFERENCE_RANGE_M: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Recommendation {
    /// Error is above the threshold; carries two smaller steps to try.
    ReduceStep { suggested_steps_s: [f64; 2] },
    AcceptableAccuracy,
    /// The analytic range is zero, so no relative error exists.
    Undefined,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReduceStep {
                suggested_steps_s: [finer, finest],
            } => write!(
                f,
                "Reduce the step h for higher precision (try h = {finer} or h = {finest})"
            ),
            Self::AcceptableAccuracy => {
                write!(f, "Good precision: the Euler method works well for this step h")
            }
            Self::Undefined => write!(
                f,
                "Relative error is undefined: the analytic range is zero"
            ),
        }
    }
}

/// Numeric range measured against the exact range. Built once per run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErrorReport {
    pub numeric_range_m: f64,
    pub analytic_range_m: f64,
    pub absolute_error_m: f64,
    /// `None` when the analytic range is zero.
    pub relative_error_pct: Option<f64>,
    pub threshold_pct: f64,
    pub recommendation: Recommendation,
}

impl ErrorReport {
    pub fn assess(
        numeric_range_m: f64,
        analytic_range_m: f64,
        step_s: f64,
        threshold_pct: f64,
    ) -> Self {
        let absolute_error_m = (numeric_range_m - analytic_range_m).abs();
        let relative_error_pct = (analytic_range_m.abs() >= MIN_REFERENCE_RANGE_M)
            .then(|| absolute_error_m / analytic_range_m * 100.0);

        let recommendation = match relative_error_pct {
            None => {
                warn!(analytic_range_m, "analytic range is zero; relative error undefined");
                Recommendation::Undefined
            }
            Some(pct) if pct > threshold_pct => Recommendation::ReduceStep {
                suggested_steps_s: [step_s / 10.0, step_s / 100.0],
            },
            Some(_) => Recommendation::AcceptableAccuracy,
        };

        Self {
            numeric_range_m,
            analytic_range_m,
            absolute_error_m,
            relative_error_pct,
            threshold_pct,
            recommendation,
        }
    }

    pub fn needs_smaller_step(&self) -> bool {
        matches!(self.recommendation, Recommendation::ReduceStep { .. })
    }
}
