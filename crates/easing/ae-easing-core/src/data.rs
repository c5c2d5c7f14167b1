//! Keyframe track data model.
//!
//! Tracks mirror what the motion-graphics exporter writes: one track per
//! animated property, each an ordered run of keyframes carrying a value
//! vector plus per-side interpolation kinds and eases.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Tangent shaping for one side of a keyframe.
///
/// `influence` is a percentage (0..100) of the segment duration that places
/// the bezier handle horizontally; `speed` is the value rate (units per
/// second) at that end of the segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EaseParams {
    pub influence: f32,
    pub speed: f32,
}

impl EaseParams {
    pub const fn new(influence: f32, speed: f32) -> Self {
        Self { influence, speed }
    }

    /// Influence as a fraction of the segment duration.
    #[inline]
    pub fn influence_fraction(&self) -> f32 {
        self.influence / 100.0
    }
}

/// How a segment moves from its left key to its right key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationKind {
    Bezier,
    Linear,
    Hold,
}

impl InterpolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bezier => "bezier",
            Self::Linear => "linear",
            Self::Hold => "hold",
        }
    }
}

impl fmt::Display for InterpolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterpolationKind {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bezier" => Ok(Self::Bezier),
            "linear" => Ok(Self::Linear),
            "hold" => Ok(Self::Hold),
            other => Err(LoadError::UnknownInterpolation {
                kind: other.to_string(),
            }),
        }
    }
}

/// A single authored keyframe.
///
/// Only `interpolation_out` selects the segment kind during sampling;
/// `interpolation_in` is carried for fidelity with the export.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Time in seconds.
    pub time: f32,
    pub value: Vec<f32>,
    pub interpolation_out: InterpolationKind,
    pub interpolation_in: InterpolationKind,
    #[serde(default)]
    pub ease_out: EaseParams,
    #[serde(default)]
    pub ease_in: EaseParams,
}

impl Keyframe {
    /// Keyframe with the same kind on both sides and neutral eases.
    pub fn new(time: f32, value: impl Into<Vec<f32>>, kind: InterpolationKind) -> Self {
        Self {
            time,
            value: value.into(),
            interpolation_out: kind,
            interpolation_in: kind,
            ease_out: EaseParams::default(),
            ease_in: EaseParams::default(),
        }
    }

    pub fn with_eases(mut self, ease_in: EaseParams, ease_out: EaseParams) -> Self {
        self.ease_in = ease_in;
        self.ease_out = ease_out;
        self
    }

    pub fn with_interpolation(
        mut self,
        incoming: InterpolationKind,
        outgoing: InterpolationKind,
    ) -> Self {
        self.interpolation_in = incoming;
        self.interpolation_out = outgoing;
        self
    }

    #[inline]
    pub fn component_count(&self) -> usize {
        self.value.len()
    }
}

/// All keyframes for one animated property.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Display name of the property (e.g. "Position").
    pub property_name: String,
    /// Stable internal name of the property (e.g. "ADBE Position").
    pub match_name: String,
    /// Grouping identifier such as the owning layer.
    #[serde(default)]
    pub container_name: Option<String>,
    #[serde(default)]
    pub parent_name: Option<String>,
    pub keyframes: Vec<Keyframe>,
}

impl Track {
    pub fn new(property_name: impl Into<String>, match_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            match_name: match_name.into(),
            container_name: None,
            parent_name: None,
            keyframes: Vec::new(),
        }
    }

    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container_name = Some(container.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent_name = Some(parent.into());
        self
    }

    pub fn with_keyframes(mut self, keyframes: Vec<Keyframe>) -> Self {
        self.keyframes = keyframes;
        self
    }

    /// True if `name` equals either the property name or the match name.
    #[inline]
    pub fn matches_name(&self, name: &str) -> bool {
        self.property_name == name || self.match_name == name
    }

    /// Number of value components per keyframe (0 for an empty track).
    pub fn component_count(&self) -> usize {
        self.keyframes.first().map_or(0, Keyframe::component_count)
    }

    /// First and last keyframe times.
    pub fn time_range(&self) -> Option<(f32, f32)> {
        match (self.keyframes.first(), self.keyframes.last()) {
            (Some(first), Some(last)) => Some((first.time, last.time)),
            _ => None,
        }
    }

    /// Check the invariants sampling relies on: at least one key, finite
    /// non-decreasing times, and non-empty value vectors of uniform length.
    pub fn validate(&self) -> Result<(), LoadError> {
        self.validate_keys().map_err(|e| e.in_track(&self.property_name))
    }

    fn validate_keys(&self) -> Result<(), LoadError> {
        let first = self.keyframes.first().ok_or(LoadError::EmptyTrack)?;
        let expected = first.component_count();
        let mut previous = f32::NEG_INFINITY;
        for (key, kf) in self.keyframes.iter().enumerate() {
            if !kf.time.is_finite() {
                return Err(LoadError::NonFiniteTime { key });
            }
            if kf.time < previous {
                return Err(LoadError::UnorderedKeyframes {
                    key,
                    time: kf.time,
                    previous,
                });
            }
            previous = kf.time;

            if kf.value.is_empty() {
                return Err(LoadError::EmptyValue { key });
            }
            if kf.component_count() != expected {
                return Err(LoadError::ComponentMismatch {
                    key,
                    expected,
                    actual: kf.component_count(),
                });
            }
        }
        Ok(())
    }
}
