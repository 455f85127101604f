pub mod accuracy;
pub mod analytic;
pub mod ballistics;
pub mod comparison;
pub mod convergence;
pub mod euler;
pub mod window;

pub use accuracy::{ErrorReport, Recommendation, RELATIVE_ERROR_THRESHOLD_PCT};
pub use analytic::{ANALYTIC_CURVE_SAMPLES, AnalyticCurve, AnalyticSolution};
pub use ballistics::SimulationParameters;
pub use comparison::Comparison;
pub use convergence::{ConvergenceRow, ConvergenceStudy, DEFAULT_CONVERGENCE_STEPS_S};
pub use euler::{Trajectory, TrajectorySample};
