use ae_easing_core::{EasingError, InterpolationKind, Keyframe, Track, TrackStore};

fn constant_track(name: &str, container: &str, value: &[f32]) -> Track {
    Track::new(name, format!("ADBE {name}"))
        .with_container(container)
        .with_keyframes(vec![
            Keyframe::new(0.0, value.to_vec(), InterpolationKind::Linear),
            Keyframe::new(1.0, value.to_vec(), InterpolationKind::Linear),
        ])
}

fn two_layer_store() -> TrackStore {
    TrackStore::new(vec![
        constant_track("Position", "A", &[1.0, 2.0]),
        constant_track("Rotation", "B", &[45.0]),
    ])
    .expect("valid tracks")
}

fn layered_store() -> TrackStore {
    let json = ae_easing_test_fixtures::tracks::json("layered-lookup").expect("fixture");
    TrackStore::from_json_str(&json).expect("layered-lookup parses")
}

#[test]
fn container_constrains_lookup() {
    let store = two_layer_store();
    assert_eq!(store.find_index("Position", Some("A"), Some("")).unwrap().index(), 0);
    assert_eq!(store.find_index("Position", None, None).unwrap().index(), 0);
    assert_eq!(
        store.find_index("Position", Some("C"), None),
        Err(EasingError::TrackNotFound {
            property: "Position".into(),
            container: Some("C".into()),
            parent: None,
        })
    );
}

#[test]
fn match_name_is_an_alias() {
    let store = two_layer_store();
    assert_eq!(store.find_index("ADBE Rotation", None, None).unwrap().index(), 1);
    assert_eq!(store.find_index("ADBE Rotation", Some("B"), None).unwrap().index(), 1);
    assert!(store.find_index("ADBE Rotation", Some("A"), None).is_err());
}

#[test]
fn parent_and_container_combine() {
    let store = layered_store();
    let idx = |c: Option<&str>, p: Option<&str>| {
        store.find_index("Position", c, p).map(|h| h.index())
    };

    // Name only: first in load order.
    assert_eq!(idx(None, None), Ok(0));
    // Container only.
    assert_eq!(idx(Some("B"), None), Ok(2));
    assert_eq!(idx(Some("C"), None), Ok(4));
    // Parent only.
    assert_eq!(idx(None, Some("Comp 2")), Ok(3));
    // Both.
    assert_eq!(idx(Some("A"), Some("Comp 2")), Ok(3));
    assert_eq!(idx(Some("B"), Some("Comp 1")), Ok(2));
    assert!(idx(Some("B"), Some("Comp 2")).is_err());
    // A track without a parent never matches a parent constraint.
    assert!(idx(Some("C"), Some("Comp 1")).is_err());
}

#[test]
fn fixed_width_accessors_zero_fill() {
    let store = layered_store();
    let rotation = store.find_index("Rotation", None, None).unwrap();
    assert_eq!(store.get3(0.0, rotation), (10.0, 0.0, 0.0));
    assert_eq!(store.get(5.0, rotation), 10.0);

    let c = store.find_index("Position", Some("C"), None).unwrap();
    assert_eq!(store.get2(0.0, c), (40.0, 40.0));
    assert_eq!(store.get4(0.0, c), (40.0, 40.0, 40.0, 0.0));
    assert_eq!(store.get_vec(0.0, c), vec![40.0, 40.0, 40.0]);
}

#[test]
fn by_name_accessors_fall_back_to_zero() {
    let store = layered_store();
    assert_eq!(store.get_by_name(0.0, "Opacity", None, None), 0.0);
    assert_eq!(store.get2_by_name(0.0, "Opacity", None, None), (0.0, 0.0));
    assert_eq!(store.get3_by_name(0.0, "Position", Some("Z"), None), (0.0, 0.0, 0.0));
    assert_eq!(store.get4_by_name(0.0, "Position", None, Some("Nope")), (0.0, 0.0, 0.0, 0.0));
    assert!(store.get_vec_by_name(0.0, "Opacity", None, None).is_empty());

    assert_eq!(store.get_by_name(0.0, "ADBE Rotate Z", Some("B"), None), 10.0);
    assert_eq!(
        store.get2_by_name(0.0, "Position", Some("A"), Some("Comp 2")),
        (30.0, 30.0)
    );
    assert_eq!(
        store.get_vec_by_name(0.0, "Position", Some("B"), None),
        vec![20.0, 20.0]
    );
}

#[test]
fn store_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TrackStore>();

    let store = std::sync::Arc::new(layered_store());
    let handle = store.find_index("Position", Some("B"), None).unwrap();
    let workers: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            std::thread::spawn(move || store.get2(0.5, handle))
        })
        .collect();
    for w in workers {
        assert_eq!(w.join().unwrap(), (20.0, 20.0));
    }
}
