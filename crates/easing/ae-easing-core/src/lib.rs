//! AE Easing Core
//!
//! Evaluates keyframe tracks exported from a motion-graphics tool with the
//! tool's own easing rules: hold, linear and influence/speed bezier
//! segments. Tracks are loaded once into a [`TrackStore`], resolved by name
//! to a [`TrackHandle`], and sampled at arbitrary times.
//!
//! ```
//! use ae_easing_core::TrackStore;
//!
//! let json = r#"[{
//!     "propertyName": "Opacity", "matchName": "ADBE Opacity", "layerName": "Title",
//!     "keys": [
//!         { "time": 0, "value": 0, "interpolationOut": "linear", "interpolationIn": "linear" },
//!         { "time": 2, "value": 100, "interpolationOut": "linear", "interpolationIn": "linear" }
//!     ]
//! }]"#;
//! let store = TrackStore::from_json_str(json)?;
//! let opacity = store.find_index("Opacity", Some("Title"), None)?;
//! assert_eq!(store.get(1.0, opacity), 50.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod interp;
pub mod loader;
pub mod sampling;
pub mod store;

// Re-exports for consumers
pub use config::{Config, SegmentSearch};
pub use data::{EaseParams, InterpolationKind, Keyframe, Track};
pub use error::{EasingError, LoadError};
pub use loader::{load_tracks_file, parse_tracks_json};
pub use sampling::{sample_keyframes, sample_keyframes_into, sample_keyframes_with, sample_track};
pub use store::{TrackHandle, TrackStore};
