//! Explicit Euler integration of projectile motion, compared against the
//! closed-form trajectory.
//!
//! The numeric work lives in [`core`]; everything else consumes a
//! [`core::Comparison`] and turns it into text, a chart or a window.

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod plot;
pub mod report;
