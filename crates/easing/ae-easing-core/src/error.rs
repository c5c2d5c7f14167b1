//! Error types for track lookup, sampling and ingestion.

use thiserror::Error;

/// Errors surfaced while resolving or sampling tracks.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EasingError {
    /// No track matched the lookup key.
    #[error("track not found: '{property}' (container: {container:?}, parent: {parent:?})")]
    TrackNotFound {
        property: String,
        container: Option<String>,
        parent: Option<String>,
    },

    /// Sampling was requested on a keyframe sequence with no keys.
    #[error("cannot sample an empty keyframe sequence")]
    EmptyTrack,

    /// The handle does not address a track in this store.
    #[error("track handle {index} out of range (store holds {len} tracks)")]
    InvalidHandle { index: usize, len: usize },
}

impl EasingError {
    /// Lookup misses are expected at runtime; everything else is a caller bug.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::TrackNotFound { .. })
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::TrackNotFound { .. } => "lookup",
            Self::EmptyTrack => "data",
            Self::InvalidHandle { .. } => "handle",
        }
    }
}

/// Errors raised while turning an export into validated tracks.
///
/// A track that fails any of these checks never reaches a [`crate::TrackStore`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadError {
    #[error("failed to read track export: {0}")]
    Io(#[from] std::io::Error),

    #[error("track export parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown interpolation kind '{kind}'")]
    UnknownInterpolation { kind: String },

    #[error("track '{track}': {source}")]
    InTrack {
        track: String,
        #[source]
        source: Box<LoadError>,
    },

    #[error("track has no keyframes")]
    EmptyTrack,

    #[error("keyframe {key} has an empty value")]
    EmptyValue { key: usize },

    #[error("keyframe {key} has a non-numeric value component")]
    InvalidValue { key: usize },

    #[error("keyframe {key} has {actual} components, expected {expected}")]
    ComponentMismatch {
        key: usize,
        expected: usize,
        actual: usize,
    },

    #[error("keyframe {key} at time {time} precedes previous key at {previous}")]
    UnorderedKeyframes { key: usize, time: f32, previous: f32 },

    #[error("keyframe {key} has a non-finite time")]
    NonFiniteTime { key: usize },
}

impl LoadError {
    /// Attach the offending track's name.
    pub fn in_track(self, track: impl Into<String>) -> Self {
        Self::InTrack {
            track: track.into(),
            source: Box::new(self),
        }
    }
}
