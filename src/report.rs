//! Console text for a run. Everything is built from the stored results, so
//! the core never prints.

use crate::core::{
    AnalyticSolution, Comparison, ConvergenceStudy, ErrorReport, SimulationParameters, Trajectory,
};

pub const PROGRESS_EVERY_STEPS: usize = 10;

const RULE_WIDTH: usize = 50;

pub fn initial_conditions(params: &SimulationParameters) -> String {
    let (vx0, vy0) = params.velocity_components();
    [
        "Initial conditions:".to_string(),
        format!("Initial speed: {:.2} m/s", params.speed_mps()),
        format!("Angle: {:.1}°", params.angle_deg()),
        format!("vx0: {vx0:.2} m/s, vy0: {vy0:.2} m/s"),
    ]
    .join("\n")
}

/// One line per `every` steps, e.g. `Step 10: t = 1.00s, x = 14.14m, y = 9.23m`.
pub fn progress_lines(trajectory: &Trajectory, every: usize) -> Vec<String> {
    let every = every.max(1);
    trajectory
        .samples()
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(step, _)| step % every == 0)
        .map(|(step, s)| {
            format!(
                "Step {step}: t = {:.2}s, x = {:.2}m, y = {:.2}m",
                s.time_s, s.x_m, s.y_m
            )
        })
        .collect()
}

pub fn completion(trajectory: &Trajectory) -> String {
    let mut lines = vec![
        format!(
            "Simulation finished: {} steps, final time = {:.2}s",
            trajectory.step_count(),
            trajectory.flight_time_s()
        ),
        format!("Numeric range: {:.2} m", trajectory.numeric_range_m()),
        format!("Numeric apex: {:.2} m", trajectory.apex_height_m()),
    ];
    if let Some(depth) = trajectory.overshoot_m() {
        lines.push(format!("Last sample is {depth:.4} m below ground"));
    }
    lines.join("\n")
}

pub fn analytic_summary(solution: &AnalyticSolution) -> String {
    format!(
        "Analytic range: {:.2} m\nAnalytic max height: {:.2} m",
        solution.range_m, solution.max_height_m
    )
}

pub fn precision_analysis(report: &ErrorReport) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let relative = match report.relative_error_pct {
        Some(pct) => format!("{pct:.2}%"),
        None => "undefined".to_string(),
    };
    [
        rule.clone(),
        "PRECISION ANALYSIS".to_string(),
        rule,
        format!("Numeric range:  {:.4} m", report.numeric_range_m),
        format!("Analytic range: {:.4} m", report.analytic_range_m),
        format!("Absolute error: {:.4} m", report.absolute_error_m),
        format!(
            "Relative error: {relative} (threshold {}%)",
            report.threshold_pct
        ),
        String::new(),
        format!("Recommendation: {}", report.recommendation),
    ]
    .join("\n")
}

/// The full console report for one comparison.
pub fn render_run(comparison: &Comparison) -> String {
    let mut sections = vec![initial_conditions(&comparison.params)];

    let mut integration = vec!["Running Euler integration...".to_string()];
    integration.extend(progress_lines(&comparison.trajectory, PROGRESS_EVERY_STEPS));
    integration.push(completion(&comparison.trajectory));
    sections.push(integration.join("\n"));

    sections.push(analytic_summary(&comparison.analytic));
    sections.push(precision_analysis(&comparison.report));
    sections.join("\n\n")
}

pub fn convergence_table(study: &ConvergenceStudy) -> String {
    let mut lines = vec![
        format!("Analytic range: {:.4} m", study.analytic_range_m),
        format!(
            "{:>10}  {:>7}  {:>12}  {:>12}  {:>10}",
            "h [s]", "steps", "range [m]", "abs err [m]", "rel err"
        ),
    ];
    for row in &study.rows {
        let relative = row
            .relative_error_pct
            .map_or_else(|| "undefined".to_string(), |pct| format!("{pct:.4}%"));
        lines.push(format!(
            "{:>10}  {:>7}  {:>12.4}  {:>12.4}  {:>10}",
            row.step_s, row.step_count, row.numeric_range_m, row.absolute_error_m, relative
        ));
    }
    let verdict = if study.is_monotonically_decreasing() {
        "yes"
    } else {
        "no"
    };
    lines.push(format!("Relative error decreases monotonically: {verdict}"));
    lines.join("\n")
}
