use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::data::{EaseParams, InterpolationKind, Keyframe, Track};
use crate::error::LoadError;

/// Public API: parse the exporter's keyframe JSON into validated tracks.
///
/// Notes:
/// - The document is an array of tracks; `layerName` becomes `container_name`.
/// - Scalar values become one-component vectors.
/// - Only the first entry of `outEase`/`inEase` is used. Missing eases or
///   missing `influence`/`speed` fields default to zero.
/// - Interpolation kinds must be `bezier`, `linear` or `hold`.
/// - Every track is validated (see [`Track::validate`]) before returning.
pub fn parse_tracks_json(s: &str) -> Result<Vec<Track>, LoadError> {
    let exported: Vec<ExportedTrack> = serde_json::from_str(s)?;

    let mut tracks = Vec::with_capacity(exported.len());
    for et in exported {
        let track = to_core_track(et)?;
        track.validate()?;
        tracks.push(track);
    }
    log::debug!("parsed {} tracks from export", tracks.len());
    Ok(tracks)
}

/// Read an export from disk and parse it with [`parse_tracks_json`].
pub fn load_tracks_file(path: impl AsRef<Path>) -> Result<Vec<Track>, LoadError> {
    let path = path.as_ref();
    log::debug!("loading track export from {}", path.display());
    let text = fs::read_to_string(path)?;
    parse_tracks_json(&text)
}

fn to_core_track(et: ExportedTrack) -> Result<Track, LoadError> {
    let mut keyframes = Vec::with_capacity(et.keys.len());
    for (key, ek) in et.keys.into_iter().enumerate() {
        keyframes.push(to_core_keyframe(key, ek).map_err(|e| e.in_track(&et.property_name))?);
    }
    Ok(Track {
        property_name: et.property_name,
        match_name: et.match_name,
        container_name: et.layer_name,
        parent_name: et.parent_name,
        keyframes,
    })
}

fn to_core_keyframe(key: usize, ek: ExportedKey) -> Result<Keyframe, LoadError> {
    let value = match ek.value {
        RawValue::Number(n) => vec![n as f32],
        RawValue::Array(items) => items
            .iter()
            .map(|v| v.as_f64().map(|n| n as f32))
            .collect::<Option<Vec<f32>>>()
            .ok_or(LoadError::InvalidValue { key })?,
    };
    Ok(Keyframe {
        time: ek.time as f32,
        value,
        interpolation_out: ek.interpolation_out.parse::<InterpolationKind>()?,
        interpolation_in: ek.interpolation_in.parse::<InterpolationKind>()?,
        ease_out: first_ease(&ek.out_ease),
        ease_in: first_ease(&ek.in_ease),
    })
}

fn first_ease(eases: &[ExportedEase]) -> EaseParams {
    eases
        .first()
        .map(|e| EaseParams::new(e.influence as f32, e.speed as f32))
        .unwrap_or_default()
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportedTrack {
    pub property_name: String,
    pub match_name: String,
    #[serde(default)]
    pub layer_name: Option<String>,
    #[serde(default)]
    pub parent_name: Option<String>,
    pub keys: Vec<ExportedKey>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportedKey {
    pub time: f64, // seconds
    pub value: RawValue,
    pub interpolation_out: String,
    pub interpolation_in: String,
    #[serde(default)]
    pub out_ease: Vec<ExportedEase>,
    #[serde(default)]
    pub in_ease: Vec<ExportedEase>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ExportedEase {
    pub influence: f64,
    pub speed: f64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f64),
    Array(Vec<serde_json::Value>),
}
