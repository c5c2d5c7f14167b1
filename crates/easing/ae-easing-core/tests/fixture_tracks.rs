use ae_easing_core::{load_tracks_file, InterpolationKind, TrackStore};
use ae_easing_test_fixtures::tracks;

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn store(name: &str) -> TrackStore {
    let path = tracks::path(name).expect("fixture path");
    TrackStore::from_json_file(path).expect("fixture loads")
}

#[test]
fn every_fixture_loads() {
    for name in tracks::keys() {
        let json = tracks::json(&name).expect("fixture json");
        let store = TrackStore::from_json_str(&json)
            .unwrap_or_else(|e| panic!("fixture {name} failed to load: {e}"));
        assert!(!store.is_empty(), "{name}");
    }
}

#[test]
fn position_2d_preserves_export_fields() {
    let parsed = load_tracks_file(tracks::path("position-2d").unwrap()).unwrap();
    assert_eq!(parsed.len(), 2);

    let pos = &parsed[0];
    assert_eq!(pos.property_name, "Position");
    assert_eq!(pos.match_name, "ADBE Position");
    assert_eq!(pos.container_name.as_deref(), Some("Square"));
    assert_eq!(pos.parent_name.as_deref(), Some("Main Comp"));
    assert_eq!(pos.component_count(), 2);
    assert_eq!(pos.time_range(), Some((0.0, 6.0)));

    let k0 = &pos.keyframes[0];
    assert_eq!(k0.interpolation_in, InterpolationKind::Linear);
    assert_eq!(k0.interpolation_out, InterpolationKind::Bezier);
    approx(k0.ease_out.influence, 33.333_332, 1e-4);
    approx(k0.ease_in.influence, 16.666_666, 1e-4);
}

#[test]
fn position_2d_eases_in_and_out() {
    let store = store("position-2d");
    let pos = store.find_index("Position", Some("Square"), None).unwrap();

    assert_eq!(store.get2(0.0, pos), (400.0, 100.0));
    assert_eq!(store.get2(2.0, pos), (600.0, 300.0));

    // One-third influences on both sides give a smoothstep-shaped segment.
    let (x, y) = store.get2(0.5, pos);
    approx(x, 431.25, 1e-2);
    approx(y, 131.25, 1e-2);
    let (x, y) = store.get2(1.0, pos);
    approx(x, 500.0, 1e-2);
    approx(y, 200.0, 1e-2);

    // Second segment: x holds still while y eases toward 500.
    for t in [2.5f32, 3.0, 3.5] {
        let (x, y) = store.get2(t, pos);
        approx(x, 600.0, 1e-2);
        assert!(y > 300.0 && y < 500.0, "t={t} y={y}");
    }

    // Past the end: clamped to the final key.
    assert_eq!(store.get2(60.0, pos), (400.0, 100.0));
}

#[test]
fn rotation_is_linear_by_match_name() {
    let store = store("position-2d");
    approx(
        store.get_by_name(1.5, "ADBE Rotate Z", Some("Square"), Some("Main Comp")),
        90.0,
        1e-4,
    );
    assert_eq!(store.get_by_name(3.0, "Rotation", None, None), 180.0);
}

#[test]
fn mixed_interpolation_follows_outgoing_kinds() {
    let store = store("mixed-interpolation");
    let opacity = store.find_index("Opacity", Some("Title"), None).unwrap();

    assert_eq!(store.get(0.5, opacity), 50.0);
    // Hold from t=1 until the next key.
    assert_eq!(store.get(1.0, opacity), 100.0);
    assert_eq!(store.get(1.999, opacity), 100.0);
    // Bezier segment starts exactly on its key value.
    assert_eq!(store.get(2.0, opacity), 50.0);
    approx(store.get(2.5, opacity), 25.0, 1e-3);
    // Right key declares a hold incoming kind; the left key's linear out wins.
    approx(store.get(3.5, opacity), 40.0, 1e-4);
    assert_eq!(store.get(4.0, opacity), 80.0);
}

#[test]
fn zero_influence_slider_tracks_linear() {
    let store = store("mixed-interpolation");
    let slider = store
        .find_index("ADBE Slider Control-0001", None, Some("Speed"))
        .unwrap();
    for (t, expected) in [(0.2f32, 12.0f32), (0.5, 15.0), (1.0, 20.0), (1.5, 25.0), (1.8, 28.0)] {
        approx(store.get(t, slider), expected, 1e-4);
    }
}

#[test]
fn scale_overshoots_with_speed() {
    let store = store("mixed-interpolation");
    let scale = store.find_index("Scale", None, None).unwrap();
    assert_eq!(store.get3(0.0, scale), (100.0, 100.0, 100.0));
    assert_eq!(store.get3(1.0, scale), (200.0, 150.0, 100.0));

    let (x, _, z) = store.get3(0.5, scale);
    approx(x, 206.25, 1e-2);
    approx(z, 156.25, 1e-2);
}
