//! Static chart of the Euler samples against the exact curve.

use std::path::{Path, PathBuf};

use chrono::Local;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::core::Comparison;
use crate::core::window::equal_aspect_window_f64;
use crate::error::PlotError;

pub const DEFAULT_PLOT_WIDTH: u32 = 1000;
pub const DEFAULT_PLOT_HEIGHT: u32 = 600;

const MARGIN_PX: u32 = 16;
const CAPTION_PX: u32 = 40;
const X_LABEL_AREA_PX: u32 = 48;
const Y_LABEL_AREA_PX: u32 = 60;
const FONT: &str = "sans-serif";
const WHEAT: RGBColor = RGBColor(245, 222, 179);

/// `trajectory_YYYYmmdd_HHMMSS.png` in the working directory.
pub fn default_plot_path() -> PathBuf {
    PathBuf::from(format!(
        "trajectory_{}.png",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

pub fn euler_series_label(step_s: f64) -> String {
    format!("Euler (h={step_s}s)")
}

pub fn launch_annotation(speed_mps: f64, angle_deg: f64) -> String {
    format!("v0 = {speed_mps} m/s, θ = {angle_deg:.0}°")
}

/// Writes the chart to `path`; the backend follows the extension
/// (`.png` or `.svg`).
pub fn render_comparison(
    comparison: &Comparison,
    path: &Path,
    size: (u32, u32),
) -> Result<(), PlotError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "png" => draw(BitMapBackend::new(path, size).into_drawing_area(), comparison, size)?,
        "svg" => draw(SVGBackend::new(path, size).into_drawing_area(), comparison, size)?,
        _ => return Err(PlotError::UnsupportedFormat(path.display().to_string())),
    }

    info!(path = %path.display(), "plot written");
    Ok(())
}

fn plot_area_ratio((width, height): (u32, u32)) -> f64 {
    let plot_w = width.saturating_sub(Y_LABEL_AREA_PX + 2 * MARGIN_PX).max(1);
    let plot_h = height
        .saturating_sub(X_LABEL_AREA_PX + CAPTION_PX + 2 * MARGIN_PX)
        .max(1);
    f64::from(plot_w) / f64::from(plot_h)
}

fn draw<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    comparison: &Comparison,
    size: (u32, u32),
) -> Result<(), PlotError> {
    let trajectory = &comparison.trajectory;
    let curve = comparison.analytic.curve.points();

    let min_y = trajectory
        .samples()
        .iter()
        .map(|s| s.y_m)
        .chain(curve.iter().map(|&(_, y)| y))
        .fold(0.0f64, f64::min);
    let max_y = trajectory
        .apex_height_m()
        .max(comparison.analytic.max_height_m);
    let window = equal_aspect_window_f64(trajectory.max_x_m(), min_y, max_y, plot_area_ratio(size));

    root.fill(&WHITE).map_err(PlotError::render)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Projectile trajectory: Euler method vs analytic solution",
            (FONT, 22),
        )
        .margin(MARGIN_PX)
        .x_label_area_size(X_LABEL_AREA_PX)
        .y_label_area_size(Y_LABEL_AREA_PX)
        .build_cartesian_2d(window.x_min..window.x_max, window.y_min..window.y_max)
        .map_err(PlotError::render)?;

    chart
        .configure_mesh()
        .x_desc("Horizontal distance, x [m]")
        .y_desc("Height, y [m]")
        .bold_line_style(BLACK.mix(0.12))
        .light_line_style(BLACK.mix(0.04))
        .draw()
        .map_err(PlotError::render)?;

    chart
        .draw_series(LineSeries::new(trajectory.points(), BLUE.stroke_width(1)))
        .map_err(PlotError::render)?
        .label(euler_series_label(trajectory.step_s()))
        .legend(|(x, y)| {
            EmptyElement::at((x, y))
                + PathElement::new(vec![(0, 0), (20, 0)], BLUE.stroke_width(1))
                + Circle::new((10, 0), 3, BLUE.filled())
        });
    chart
        .draw_series(
            trajectory
                .points()
                .into_iter()
                .map(|point| Circle::new(point, 3, BLUE.filled())),
        )
        .map_err(PlotError::render)?;

    chart
        .draw_series(LineSeries::new(curve.iter().copied(), RED.stroke_width(2)))
        .map_err(PlotError::render)?
        .label("Analytic solution")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.4))
        .label_font((FONT, 15))
        .draw()
        .map_err(PlotError::render)?;

    let annotation = launch_annotation(
        comparison.params.speed_mps(),
        comparison.params.angle_deg(),
    );
    let (area_x, area_y) = chart.plotting_area().get_base_pixel();
    let top_left = (area_x + 10, area_y + 10);
    let bottom_right = (top_left.0 + 190, top_left.1 + 28);
    root.draw(&Rectangle::new(
        [top_left, bottom_right],
        WHEAT.mix(0.8).filled(),
    ))
    .map_err(PlotError::render)?;
    root.draw(&Rectangle::new(
        [top_left, bottom_right],
        BLACK.mix(0.5).stroke_width(1),
    ))
        .map_err(PlotError::render)?;
    root.draw(&Text::new(
        annotation,
        (top_left.0 + 8, top_left.1 + 7),
        (FONT, 15).into_font(),
    ))
    .map_err(PlotError::render)?;

    root.present().map_err(PlotError::render)?;
    Ok(())
}
