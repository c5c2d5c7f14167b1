//! Print sampled values of one exported track.
//!
//! cargo run -p ae-easing-core --example sample_curve -- [file.json] [property] [container]
//!
//! Without arguments the `position-2d` fixture's Position track is used.

use std::path::PathBuf;

use ae_easing_core::TrackStore;
use ae_easing_test_fixtures::tracks;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let path = match args.next() {
        Some(p) => PathBuf::from(p),
        None => tracks::path("position-2d")?,
    };
    let property = args.next().unwrap_or_else(|| "Position".to_string());
    let container = args.next();

    let store = TrackStore::from_json_file(&path)?;
    log::info!("loaded {} tracks from {}", store.len(), path.display());

    let handle = store.find_index(&property, container.as_deref(), None)?;
    let track = store
        .track(handle)
        .ok_or_else(|| anyhow::anyhow!("handle {} out of range", handle.index()))?;
    let (start, end) = track
        .time_range()
        .ok_or_else(|| anyhow::anyhow!("track '{property}' has no keyframes"))?;

    let steps = 24;
    for i in 0..=steps {
        let t = start + (end - start) * i as f32 / steps as f32;
        let values = store.sample(handle, t)?;
        println!("{t:>8.3}  {values:?}");
    }
    Ok(())
}
