//! Segment interpolation kernels.
//!
//! Hold and linear segments are trivial; eased segments invert a 2D cubic
//! bezier (normalized time on X, value on Y) with a fixed-budget
//! Newton-Raphson solve.

pub mod functions;

pub use functions::{
    bezier_control_points, bezier_ease_value, cubic_bezier, cubic_bezier_derivative, lerp_f32,
    solve_bezier_x, NEWTON_ITERATIONS,
};
