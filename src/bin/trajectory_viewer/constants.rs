use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1280;
pub const INITIAL_WINDOW_HEIGHT: i32 = 800;
pub const MSAA_SAMPLES: i32 = 4;

pub const LEFT_MARGIN: f32 = 90.0;
pub const RIGHT_MARGIN: f32 = 30.0;
pub const TOP_MARGIN: f32 = 90.0;
pub const BOTTOM_MARGIN: f32 = 110.0;

pub const TITLE_Y: f32 = 42.0;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 6;
pub const EULER_MARKER_RADIUS: f32 = 3.0;

pub const BACKGROUND: Color = Color::new(0.97, 0.97, 0.98, 1.0);
pub const GRID_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.08);
pub const GROUND_COLOR: Color = Color::new(0.35, 0.35, 0.38, 1.0);
pub const EULER_COLOR: Color = Color::new(0.14, 0.35, 0.90, 1.0);
pub const ANALYTIC_COLOR: Color = Color::new(0.86, 0.15, 0.15, 1.0);
pub const ANNOTATION_FILL: Color = Color::new(0.96, 0.87, 0.70, 0.8);
pub const LABEL_COLOR: Color = Color::new(0.41, 0.44, 0.49, 1.0);
pub const TEXT_COLOR: Color = Color::new(0.10, 0.10, 0.12, 1.0);
