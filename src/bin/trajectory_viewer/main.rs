//! Window showing the same comparison as the plot file. Esc closes it.
//!
//! Usage: `trajectory_viewer [config.toml]`

use std::env;
use std::path::Path;

use euler_projectile::config::AppConfig;
use euler_projectile::core::Comparison;
use euler_projectile::core::window::equal_aspect_window_f32;
use euler_projectile::logging::init_tracing;
use macroquad::prelude::*;

mod constants;
mod render;

use constants::{
    BACKGROUND, BOTTOM_MARGIN, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, LEFT_MARGIN,
    MSAA_SAMPLES, RIGHT_MARGIN, TOP_MARGIN,
};
use render::{PlotRect, draw_annotation, draw_comparison, draw_grid, draw_header, draw_legend};

fn window_conf() -> Conf {
    Conf {
        window_title: "Euler vs analytic trajectory".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn load_comparison() -> anyhow::Result<Comparison> {
    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => AppConfig::load(Path::new(path))?,
        None => AppConfig::default(),
    };
    let params = config.simulation.to_parameters()?;
    Ok(Comparison::with_threshold(
        params,
        config.simulation.threshold_pct,
    )?)
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing("warn");

    let comparison = match load_comparison() {
        Ok(comparison) => comparison,
        Err(err) => {
            tracing::error!("{err:#}");
            eprintln!("Error: {err:#}");
            return;
        }
    };

    let trajectory = &comparison.trajectory;
    let min_y = trajectory
        .samples()
        .iter()
        .map(|s| s.y_m)
        .chain(comparison.analytic.curve.points().iter().map(|&(_, y)| y))
        .fold(0.0f64, f64::min) as f32;
    let max_y = trajectory
        .apex_height_m()
        .max(comparison.analytic.max_height_m) as f32;
    let max_x = trajectory.max_x_m() as f32;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        let screen_w = screen_width();
        let screen_h = screen_height();
        let rect = PlotRect {
            left: LEFT_MARGIN,
            right: screen_w - RIGHT_MARGIN,
            top: TOP_MARGIN,
            bottom: screen_h - BOTTOM_MARGIN,
        };
        let window = equal_aspect_window_f32(max_x, min_y, max_y, rect.pixel_ratio());

        clear_background(BACKGROUND);
        draw_grid(&window, &rect);
        draw_comparison(&comparison, &window, &rect);
        draw_legend(&comparison, &rect);
        draw_annotation(&comparison, &rect);
        draw_header(&comparison, rect.left, screen_h);

        next_frame().await;
    }
}
