use super::ballistics::SimulationParameters;

/// Resolution of the exact curve drawn next to the Euler samples.
pub const ANALYTIC_CURVE_SAMPLES: usize = 200;

/// The exact trajectory y(x) sampled uniformly over a horizontal extent.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalyticCurve {
    points: Vec<(f64, f64)>,
}

impl AnalyticCurve {
    /// Samples `samples` points on `[0, extent_m]`, both ends included.
    pub fn sample(params: &SimulationParameters, extent_m: f64, samples: usize) -> Self {
        let sample_count = samples.max(2);
        let last = (sample_count - 1) as f64;
        let points = (0..sample_count)
            .map(|i| {
                let x = extent_m * (i as f64 / last);
                (x, params.analytic_height_at(x))
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnalyticSolution {
    pub curve: AnalyticCurve,
    pub range_m: f64,
    pub max_height_m: f64,
}

impl AnalyticSolution {
    /// Exact range, apex and curve over `[0, extent_m]`; `extent_m` is
    /// normally the furthest x the Euler run reached.
    pub fn solve(params: &SimulationParameters, extent_m: f64) -> Self {
        Self {
            curve: AnalyticCurve::sample(params, extent_m, ANALYTIC_CURVE_SAMPLES),
            range_m: params.analytic_range_m(),
            max_height_m: params.analytic_max_height_m(),
        }
    }
}
