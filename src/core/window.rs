//! Axis ranges for drawing a trajectory with equal metres per pixel on both
//! axes.

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

/// World-space rectangle shown on a chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisWindow<T> {
    pub x_min: T,
    pub x_max: T,
    pub y_min: T,
    pub y_max: T,
}

/// Pads the data extent, then grows one axis so that
/// `x_span / y_span == pixel_ratio` (plot width over plot height in pixels).
///
/// `raw_min_y` may be negative when the last Euler sample dips below
/// ground; the window extends down to show it.
pub fn equal_aspect_window_f64(
    raw_max_x: f64,
    raw_min_y: f64,
    raw_max_y: f64,
    pixel_ratio: f64,
) -> AxisWindow<f64> {
    let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
        pixel_ratio
    } else {
        1.0
    };
    let floor = raw_min_y.min(0.0);
    let raw_x_span = raw_max_x.max(1.0);
    let raw_y_span = (raw_max_y - floor).max(1.0);
    let x_pad = raw_x_span * X_PADDING_RATIO;
    let y_pad = raw_y_span * Y_PADDING_RATIO;

    let y_min = floor - if floor < 0.0 { y_pad } else { 0.0 };
    let mut x_span = (raw_max_x + x_pad).max(1.0);
    let mut y_span = (raw_max_y + y_pad - y_min).max(1.0);

    if x_span / y_span < ratio {
        x_span = y_span * ratio;
    } else {
        y_span = x_span / ratio;
    }

    AxisWindow {
        x_min: 0.0,
        x_max: x_span,
        y_min,
        y_max: y_min + y_span,
    }
}

/// `f32` variant for the macroquad viewer.
pub fn equal_aspect_window_f32(
    raw_max_x: f32,
    raw_min_y: f32,
    raw_max_y: f32,
    pixel_ratio: f32,
) -> AxisWindow<f32> {
    let window = equal_aspect_window_f64(
        f64::from(raw_max_x),
        f64::from(raw_min_y),
        f64::from(raw_max_y),
        f64::from(pixel_ratio),
    );
    AxisWindow {
        x_min: window.x_min as f32,
        x_max: window.x_max as f32,
        y_min: window.y_min as f32,
        y_max: window.y_max as f32,
    }
}
