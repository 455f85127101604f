use euler_projectile::core::Comparison;
use euler_projectile::core::window::AxisWindow;
use euler_projectile::plot::{euler_series_label, launch_annotation};
use macroquad::prelude::*;

use crate::constants::{
    ANALYTIC_COLOR, ANNOTATION_FILL, EULER_COLOR, EULER_MARKER_RADIUS, GRID_COLOR, GROUND_COLOR,
    LABEL_COLOR, TEXT_COLOR, TITLE_Y, X_GRID_LINES, Y_GRID_LINES,
};

/// Screen-space rectangle the chart is drawn into.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PlotRect {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub(crate) fn pixel_ratio(&self) -> f32 {
        (self.right - self.left).max(1.0) / (self.bottom - self.top).max(1.0)
    }
}

pub(crate) fn world_to_screen(world: (f64, f64), window: &AxisWindow<f32>, rect: &PlotRect) -> Vec2 {
    let x_span = (window.x_max - window.x_min).max(f32::EPSILON);
    let y_span = (window.y_max - window.y_min).max(f32::EPSILON);
    let plot_w = (rect.right - rect.left).max(1.0);
    let plot_h = (rect.bottom - rect.top).max(1.0);
    let x = rect.left + ((world.0 as f32 - window.x_min) / x_span) * plot_w;
    let y = rect.bottom - ((world.1 as f32 - window.y_min) / y_span) * plot_h;
    vec2(x, y)
}

fn format_axis_value(value: f32, axis_span: f32) -> String {
    if axis_span >= 1000.0 {
        format!("{value:.0}")
    } else if axis_span >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn draw_ui_text(text: &str, x: f32, y: f32, font_size: u16, color: Color) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_grid(window: &AxisWindow<f32>, rect: &PlotRect) {
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = rect.left + t * (rect.right - rect.left);
        draw_line(x, rect.top, x, rect.bottom, 1.0, GRID_COLOR);

        let span = window.x_max - window.x_min;
        let label = format_axis_value(window.x_min + t * span, span);
        let size = measure_text(&label, None, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            rect.bottom + 22.0,
            tick_font_size,
            LABEL_COLOR,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = rect.bottom - t * (rect.bottom - rect.top);
        draw_line(rect.left, y, rect.right, y, 1.0, GRID_COLOR);

        let span = window.y_max - window.y_min;
        let label = format_axis_value(window.y_min + t * span, span);
        let size = measure_text(&label, None, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (rect.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            LABEL_COLOR,
        );
    }

    let ground_left = world_to_screen((f64::from(window.x_min), 0.0), window, rect);
    let ground_right = world_to_screen((f64::from(window.x_max), 0.0), window, rect);
    draw_line(
        ground_left.x,
        ground_left.y,
        ground_right.x,
        ground_right.y,
        2.0,
        GROUND_COLOR,
    );

    draw_ui_text(
        "Horizontal distance, x [m]",
        rect.right - 230.0,
        rect.bottom + 50.0,
        18,
        LABEL_COLOR,
    );
    draw_ui_text("Height, y [m]", rect.left + 10.0, rect.top - 10.0, 18, LABEL_COLOR);
}

pub(crate) fn draw_path(
    points: &[(f64, f64)],
    window: &AxisWindow<f32>,
    rect: &PlotRect,
    thickness: f32,
    color: Color,
) {
    let mut screen = points.iter().map(|&p| world_to_screen(p, window, rect));
    let Some(mut prev) = screen.next() else {
        return;
    };
    for cur in screen {
        draw_line(prev.x, prev.y, cur.x, cur.y, thickness, color);
        prev = cur;
    }
}

pub(crate) fn draw_comparison(comparison: &Comparison, window: &AxisWindow<f32>, rect: &PlotRect) {
    let euler_points = comparison.trajectory.points();

    draw_path(
        comparison.analytic.curve.points(),
        window,
        rect,
        3.0,
        ANALYTIC_COLOR,
    );
    draw_path(&euler_points, window, rect, 1.5, EULER_COLOR);
    for point in &euler_points {
        let screen = world_to_screen(*point, window, rect);
        draw_circle(screen.x, screen.y, EULER_MARKER_RADIUS, EULER_COLOR);
    }
}

pub(crate) fn draw_legend(comparison: &Comparison, rect: &PlotRect) {
    let entries = [
        (euler_series_label(comparison.trajectory.step_s()), EULER_COLOR),
        ("Analytic solution".to_string(), ANALYTIC_COLOR),
    ];
    let width = 230.0;
    let x = rect.right - width - 12.0;
    let y = rect.top + 12.0;

    draw_rectangle(x, y, width, 64.0, Color::new(1.0, 1.0, 1.0, 0.85));
    draw_rectangle_lines(x, y, width, 64.0, 1.0, LABEL_COLOR);
    for (i, (label, color)) in entries.iter().enumerate() {
        let row_y = y + 22.0 + i as f32 * 24.0;
        draw_line(x + 10.0, row_y - 5.0, x + 40.0, row_y - 5.0, 3.0, *color);
        draw_ui_text(label, x + 50.0, row_y, 18, TEXT_COLOR);
    }
}

pub(crate) fn draw_annotation(comparison: &Comparison, rect: &PlotRect) {
    let text = launch_annotation(
        comparison.params.speed_mps(),
        comparison.params.angle_deg(),
    );
    let size = measure_text(&text, None, 18, 1.0);
    let x = rect.left + 12.0;
    let y = rect.top + 12.0;

    draw_rectangle(x, y, size.width + 20.0, 32.0, ANNOTATION_FILL);
    draw_rectangle_lines(x, y, size.width + 20.0, 32.0, 1.0, LABEL_COLOR);
    draw_ui_text(&text, x + 10.0, y + 22.0, 18, TEXT_COLOR);
}

pub(crate) fn draw_header(comparison: &Comparison, left: f32, screen_h: f32) {
    draw_ui_text(
        "Projectile trajectory: Euler method vs analytic solution",
        left,
        TITLE_Y,
        28,
        TEXT_COLOR,
    );

    let report = &comparison.report;
    let relative = report
        .relative_error_pct
        .map_or_else(|| "undefined".to_string(), |pct| format!("{pct:.2}%"));
    let status = format!(
        "Numeric range {:.2} m | analytic range {:.2} m | relative error {relative} | {}",
        report.numeric_range_m, report.analytic_range_m, report.recommendation
    );
    draw_ui_text(&status, left, screen_h - 20.0, 18, LABEL_COLOR);
}
