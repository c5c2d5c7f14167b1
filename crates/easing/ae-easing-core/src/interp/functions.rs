//! Interpolation helpers:
//! - lerp_f32 (linear segments)
//! - cubic_bezier / cubic_bezier_derivative (1D cubic basis)
//! - solve_bezier_x (time -> curve parameter inversion)
//! - bezier_ease_value (influence/speed eased segment)

use crate::data::EaseParams;

/// Fixed Newton-Raphson budget used when inverting the time curve.
///
/// Output must stay bit-identical with the exporter's reference curves, so
/// there is no convergence test and no adaptive fallback.
pub const NEWTON_ITERATIONS: usize = 5;

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Cubic Bezier basis function
#[inline]
pub fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

#[inline]
pub fn cubic_bezier_derivative(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    3.0 * (1.0 - t) * (1.0 - t) * (p1 - p0)
        + 6.0 * (1.0 - t) * t * (p2 - p1)
        + 3.0 * t * t * (p3 - p2)
}

/// Find the curve parameter `u` whose X ordinate equals `x`.
///
/// Seeds with `u = x`, runs [`NEWTON_ITERATIONS`] steps, stops early only when
/// the derivative is exactly zero, and clamps `u` into `[0, 1]` after every
/// step.
#[inline]
pub fn solve_bezier_x(p0x: f32, p1x: f32, p2x: f32, p3x: f32, x: f32) -> f32 {
    let mut guess = x;
    for _ in 0..NEWTON_ITERATIONS {
        let bez_x = cubic_bezier(p0x, p1x, p2x, p3x, guess);
        let bez_dx = cubic_bezier_derivative(p0x, p1x, p2x, p3x, guess);
        if bez_dx == 0.0 {
            break;
        }
        guess -= (bez_x - x) / bez_dx;
        guess = guess.clamp(0.0, 1.0);
    }
    guess
}

/// Control points of an eased segment, as `[(x, y); 4]`.
///
/// X is normalized segment time, Y is output value. `dt` scales the speeds
/// (units per second) into value offsets.
#[inline]
pub fn bezier_control_points(
    dt: f32,
    v0: f32,
    ease_out: EaseParams,
    v1: f32,
    ease_in: EaseParams,
) -> [(f32, f32); 4] {
    let out_frac = ease_out.influence_fraction();
    let in_frac = ease_in.influence_fraction();
    [
        (0.0, v0),
        (out_frac, v0 + ease_out.speed * dt * out_frac),
        (1.0 - in_frac, v1 - ease_in.speed * dt * in_frac),
        (1.0, v1),
    ]
}

/// Eased value at time `t` for a segment `(t0, v0) -> (t1, v1)`.
///
/// `ease_out` belongs to the left key, `ease_in` to the right key. A
/// zero-length or reversed segment yields `v0`.
pub fn bezier_ease_value(
    t: f32,
    t0: f32,
    v0: f32,
    ease_out: EaseParams,
    t1: f32,
    v1: f32,
    ease_in: EaseParams,
) -> f32 {
    let dt = t1 - t0;
    if dt <= 0.0 {
        return v0;
    }
    let x = (t - t0) / dt;
    let [(p0x, p0y), (p1x, p1y), (p2x, p2y), (p3x, p3y)] =
        bezier_control_points(dt, v0, ease_out, v1, ease_in);
    let u = solve_bezier_x(p0x, p1x, p2x, p3x, x);
    cubic_bezier(p0y, p1y, p2y, p3y, u)
}
