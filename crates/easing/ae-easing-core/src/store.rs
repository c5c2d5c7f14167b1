//! Track store: owns loaded tracks and resolves names to handles.
//!
//! The store is immutable once built. Callers resolve a track once with
//! [`TrackStore::find_index`] and reuse the returned [`TrackHandle`] for
//! per-frame sampling.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::data::Track;
use crate::error::{EasingError, LoadError};
use crate::loader;
use crate::sampling::{sample_keyframes_into, sample_keyframes_with};

/// Opaque handle to a track inside one [`TrackStore`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TrackHandle(usize);

impl TrackHandle {
    /// Position of the track in load order.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Ordered, validated collection of tracks.
#[derive(Clone, Debug, Default)]
pub struct TrackStore {
    tracks: Vec<Track>,
    config: Config,
}

fn non_empty(name: Option<&str>) -> Option<&str> {
    name.filter(|s| !s.is_empty())
}

impl TrackStore {
    /// Build a store from tracks, validating each one.
    pub fn new(tracks: Vec<Track>) -> Result<Self, LoadError> {
        Self::with_config(tracks, Config::default())
    }

    pub fn with_config(tracks: Vec<Track>, config: Config) -> Result<Self, LoadError> {
        for track in &tracks {
            track.validate()?;
        }
        Ok(Self::from_validated(tracks, config))
    }

    fn from_validated(tracks: Vec<Track>, config: Config) -> Self {
        log::debug!("track store built with {} tracks", tracks.len());
        Self { tracks, config }
    }

    /// Parse an exported JSON document into a store.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let tracks = loader::parse_tracks_json(json)?;
        Ok(Self::from_validated(tracks, Config::default()))
    }

    /// Read and parse an exported JSON file into a store.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let tracks = loader::load_tracks_file(path)?;
        Ok(Self::from_validated(tracks, Config::default()))
    }

    /// Replace the sampling configuration.
    pub fn configure(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    #[inline]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    #[inline]
    pub fn track(&self, handle: TrackHandle) -> Option<&Track> {
        self.tracks.get(handle.0)
    }

    /// Tracks paired with their handles, in load order.
    pub fn iter(&self) -> impl Iterator<Item = (TrackHandle, &Track)> + '_ {
        self.tracks
            .iter()
            .enumerate()
            .map(|(i, track)| (TrackHandle(i), track))
    }

    /// Resolve a property to the first matching track in load order.
    ///
    /// `property` matches either the property name or the match name.
    /// `container` and `parent` constrain the match only when given; empty
    /// strings count as not given.
    pub fn find_index(
        &self,
        property: &str,
        container: Option<&str>,
        parent: Option<&str>,
    ) -> Result<TrackHandle, EasingError> {
        let container = non_empty(container);
        let parent = non_empty(parent);
        self.tracks
            .iter()
            .position(|track| {
                track.matches_name(property)
                    && container.map_or(true, |c| track.container_name.as_deref() == Some(c))
                    && parent.map_or(true, |p| track.parent_name.as_deref() == Some(p))
            })
            .map(TrackHandle)
            .ok_or_else(|| {
                log::trace!(
                    "no track for '{property}' (container: {container:?}, parent: {parent:?})"
                );
                EasingError::TrackNotFound {
                    property: property.to_string(),
                    container: container.map(str::to_string),
                    parent: parent.map(str::to_string),
                }
            })
    }

    fn checked(&self, handle: TrackHandle) -> Result<&Track, EasingError> {
        self.track(handle).ok_or(EasingError::InvalidHandle {
            index: handle.0,
            len: self.tracks.len(),
        })
    }

    /// Full value vector of a track at time `t`.
    pub fn sample(&self, handle: TrackHandle, t: f32) -> Result<Vec<f32>, EasingError> {
        let track = self.checked(handle)?;
        sample_keyframes_with(&track.keyframes, t, &self.config)
    }

    /// First `N` components at time `t`, zero-filled past the track's width.
    pub fn sample_fixed<const N: usize>(
        &self,
        handle: TrackHandle,
        t: f32,
    ) -> Result<[f32; N], EasingError> {
        let track = self.checked(handle)?;
        let mut out = [0.0; N];
        sample_keyframes_into(&track.keyframes, t, &self.config, &mut out)?;
        Ok(out)
    }

    fn fixed_or_zero<const N: usize>(&self, handle: TrackHandle, t: f32) -> [f32; N] {
        self.sample_fixed(handle, t).unwrap_or_else(|err| {
            log::debug!("sampling {handle:?} failed: {err}; returning zeros");
            [0.0; N]
        })
    }

    fn by_name<const N: usize>(
        &self,
        t: f32,
        property: &str,
        container: Option<&str>,
        parent: Option<&str>,
    ) -> [f32; N] {
        match self.find_index(property, container, parent) {
            Ok(handle) => self.fixed_or_zero(handle, t),
            Err(_) => [0.0; N],
        }
    }

    /// First component at time `t`.
    pub fn get(&self, t: f32, handle: TrackHandle) -> f32 {
        let [x] = self.fixed_or_zero::<1>(handle, t);
        x
    }

    pub fn get2(&self, t: f32, handle: TrackHandle) -> (f32, f32) {
        let [x, y] = self.fixed_or_zero::<2>(handle, t);
        (x, y)
    }

    pub fn get3(&self, t: f32, handle: TrackHandle) -> (f32, f32, f32) {
        let [x, y, z] = self.fixed_or_zero::<3>(handle, t);
        (x, y, z)
    }

    pub fn get4(&self, t: f32, handle: TrackHandle) -> (f32, f32, f32, f32) {
        let [x, y, z, w] = self.fixed_or_zero::<4>(handle, t);
        (x, y, z, w)
    }

    /// All components at time `t`; empty for a handle from another store.
    pub fn get_vec(&self, t: f32, handle: TrackHandle) -> Vec<f32> {
        self.sample(handle, t).unwrap_or_default()
    }

    /// First component of the named track, or `0.0` if it cannot be resolved.
    pub fn get_by_name(
        &self,
        t: f32,
        property: &str,
        container: Option<&str>,
        parent: Option<&str>,
    ) -> f32 {
        let [x] = self.by_name::<1>(t, property, container, parent);
        x
    }

    pub fn get2_by_name(
        &self,
        t: f32,
        property: &str,
        container: Option<&str>,
        parent: Option<&str>,
    ) -> (f32, f32) {
        let [x, y] = self.by_name::<2>(t, property, container, parent);
        (x, y)
    }

    pub fn get3_by_name(
        &self,
        t: f32,
        property: &str,
        container: Option<&str>,
        parent: Option<&str>,
    ) -> (f32, f32, f32) {
        let [x, y, z] = self.by_name::<3>(t, property, container, parent);
        (x, y, z)
    }

    pub fn get4_by_name(
        &self,
        t: f32,
        property: &str,
        container: Option<&str>,
        parent: Option<&str>,
    ) -> (f32, f32, f32, f32) {
        let [x, y, z, w] = self.by_name::<4>(t, property, container, parent);
        (x, y, z, w)
    }

    /// All components of the named track, or an empty vector if unresolved.
    pub fn get_vec_by_name(
        &self,
        t: f32,
        property: &str,
        container: Option<&str>,
        parent: Option<&str>,
    ) -> Vec<f32> {
        self.find_index(property, container, parent)
            .map(|handle| self.get_vec(t, handle))
            .unwrap_or_default()
    }
}
