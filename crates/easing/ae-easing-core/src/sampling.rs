//! Keyframe sampling.
//!
//! Model:
//! - A track is an ordered run of keyframes with non-decreasing times.
//! - Times at or before the first key return the first key's value; times at
//!   or after the last key return the last key's value. No extrapolation.
//! - Between keys, segment [k0 -> k1] is interpolated per component using
//!   `k0.interpolation_out` only:
//!   Hold   -> k0 value
//!   Linear -> lerp over normalized segment time
//!   Bezier -> eased curve from `k0.ease_out` and `k1.ease_in`
//! - `interpolation_in` on either key is never consulted. This mirrors the
//!   exporter's reference player and must not be made symmetric.
//!
//! API:
//! - sample_keyframes(&[Keyframe], t) -> value vector
//! - sample_keyframes_into(&[Keyframe], t, &Config, &mut [f32]) for fixed-width reads

use crate::config::{Config, SegmentSearch};
use crate::data::{InterpolationKind, Keyframe, Track};
use crate::error::EasingError;
use crate::interp::functions::{bezier_ease_value, lerp_f32};

/// Where a query time lands on a keyframe sequence.
#[derive(Clone, Copy, Debug)]
enum Segment<'a> {
    /// Outside or on the boundary of the keyed range.
    Clamped(&'a Keyframe),
    /// Strictly inside `[k0.time, k1.time)`.
    Between(&'a Keyframe, &'a Keyframe),
}

/// Index `i` of the right key such that `keys[i - 1].time <= t < keys[i].time`.
///
/// Caller guarantees `keys[0].time < t < keys[last].time`, so `i` lands in
/// `1..keys.len()`. Linear and binary search return the same index.
pub fn find_segment(keyframes: &[Keyframe], t: f32, search: SegmentSearch) -> usize {
    match search {
        SegmentSearch::Linear => keyframes
            .iter()
            .skip(1)
            .position(|k| k.time > t)
            .map_or(keyframes.len() - 1, |p| p + 1),
        SegmentSearch::Binary | SegmentSearch::Auto => keyframes
            .partition_point(|k| k.time <= t)
            .clamp(1, keyframes.len() - 1),
    }
}

fn locate<'a>(
    keyframes: &'a [Keyframe],
    t: f32,
    config: &Config,
) -> Result<Segment<'a>, EasingError> {
    let (first, last) = match (keyframes.first(), keyframes.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(EasingError::EmptyTrack),
    };
    // NaN compares false against both bounds; pin it to the first key.
    if t.is_nan() || t <= first.time {
        return Ok(Segment::Clamped(first));
    }
    if t >= last.time {
        return Ok(Segment::Clamped(last));
    }
    let i = find_segment(keyframes, t, config.search_for(keyframes.len()));
    Ok(Segment::Between(&keyframes[i - 1], &keyframes[i]))
}

/// Interpolate one component of the segment `k0 -> k1` at time `t`.
///
/// `v0`/`v1` are that component's values on `k0`/`k1`.
#[inline]
pub fn interpolate_component(k0: &Keyframe, k1: &Keyframe, v0: f32, v1: f32, t: f32) -> f32 {
    let dt = k1.time - k0.time;
    if dt <= 0.0 {
        return v0;
    }
    match k0.interpolation_out {
        InterpolationKind::Hold => v0,
        InterpolationKind::Linear => lerp_f32(v0, v1, (t - k0.time) / dt),
        InterpolationKind::Bezier => {
            bezier_ease_value(t, k0.time, v0, k0.ease_out, k1.time, v1, k1.ease_in)
        }
    }
}

/// Sample a keyframe sequence at time `t` with default configuration.
pub fn sample_keyframes(keyframes: &[Keyframe], t: f32) -> Result<Vec<f32>, EasingError> {
    sample_keyframes_with(keyframes, t, &Config::default())
}

/// Sample a keyframe sequence at time `t`.
///
/// Returns `EmptyTrack` for an empty sequence; validated tracks never hit it.
pub fn sample_keyframes_with(
    keyframes: &[Keyframe],
    t: f32,
    config: &Config,
) -> Result<Vec<f32>, EasingError> {
    Ok(match locate(keyframes, t, config)? {
        Segment::Clamped(k) => k.value.clone(),
        Segment::Between(k0, k1) => k0
            .value
            .iter()
            .zip(&k1.value)
            .map(|(&v0, &v1)| interpolate_component(k0, k1, v0, v1, t))
            .collect(),
    })
}

/// Sample into a caller-provided buffer without allocating.
///
/// Writes the first `out.len()` components, zero-filling any slot past the
/// track's component count. Returns the track's component count.
pub fn sample_keyframes_into(
    keyframes: &[Keyframe],
    t: f32,
    config: &Config,
    out: &mut [f32],
) -> Result<usize, EasingError> {
    out.fill(0.0);
    match locate(keyframes, t, config)? {
        Segment::Clamped(k) => {
            for (slot, &v) in out.iter_mut().zip(&k.value) {
                *slot = v;
            }
            Ok(k.value.len())
        }
        Segment::Between(k0, k1) => {
            for (slot, (&v0, &v1)) in out.iter_mut().zip(k0.value.iter().zip(&k1.value)) {
                *slot = interpolate_component(k0, k1, v0, v1, t);
            }
            Ok(k0.value.len())
        }
    }
}

/// Sample a whole track at time `t`.
pub fn sample_track(track: &Track, t: f32) -> Result<Vec<f32>, EasingError> {
    sample_keyframes(&track.keyframes, t)
}
