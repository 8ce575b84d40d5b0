use approx::assert_relative_eq;
use arc_flow::{generate_path, ArcError, GeoPoint, PathOptions};

fn guangzhou() -> GeoPoint {
    GeoPoint::new(113.17, 23.8)
}

fn hong_kong() -> GeoPoint {
    GeoPoint::new(114.0, 22.5)
}

#[test]
fn five_point_example_matches_hand_computation() {
    let opts = PathOptions::default().with_height(50_000.0).with_points_count(5);
    let path = generate_path(guangzhou(), hong_kong(), &opts).unwrap();

    assert_eq!(path.len(), 5);
    assert_relative_eq!(path[0].lon, 113.17);
    assert_relative_eq!(path[0].lat, 23.8);
    assert_eq!(path[0].height, 0.0);

    assert_relative_eq!(path[2].lon, 113.585, epsilon = 1e-9);
    assert_relative_eq!(path[2].lat, 23.15, epsilon = 1e-9);
    assert_relative_eq!(path[2].height, 50_000.0, epsilon = 1e-9);

    assert_relative_eq!(path[4].lon, 114.0, epsilon = 1e-9);
    assert_relative_eq!(path[4].lat, 22.5, epsilon = 1e-9);
    assert_eq!(path[4].height, 0.0);
}

#[test]
fn length_endpoints_and_positivity_hold_for_many_counts() {
    for count in 2..=257 {
        let opts = PathOptions::default().with_points_count(count);
        let path = generate_path(guangzhou(), hong_kong(), &opts).unwrap();
        assert_eq!(path.len(), count);

        let first = path.first().unwrap();
        let last = path.last().unwrap();
        assert_relative_eq!(first.lon, 113.17);
        assert_relative_eq!(first.lat, 23.8);
        assert_relative_eq!(last.lon, 114.0, epsilon = 1e-9);
        assert_relative_eq!(last.lat, 22.5, epsilon = 1e-9);
        assert!(first.height.abs() < 1e-9);
        assert!(last.height.abs() < 1e-9);

        for p in &path.points()[1..count - 1] {
            assert!(p.height > 0.0, "interior height must be positive for count {}", count);
        }
    }
}

#[test]
fn heights_are_symmetric_and_peak_in_the_middle() {
    let peak = 120_000.0;
    for count in [3usize, 11, 101, 999] {
        let opts = PathOptions::default().with_height(peak).with_points_count(count);
        let path = generate_path(guangzhou(), hong_kong(), &opts).unwrap();

        for i in 0..count {
            assert_relative_eq!(path[i].height, path[count - 1 - i].height, epsilon = 1e-6);
        }

        let mid = count / 2;
        assert_relative_eq!(path[mid].height, peak, epsilon = 1e-6);
        let max = path.points().iter().map(|p| p.height).fold(f64::MIN, f64::max);
        assert_relative_eq!(max, peak, epsilon = 1e-6);
    }
}

#[test]
fn even_counts_never_exceed_peak() {
    let opts = PathOptions::default().with_points_count(100);
    let path = generate_path(guangzhou(), hong_kong(), &opts).unwrap();
    assert!(path.points().iter().all(|p| p.height <= opts.height));
}

#[test]
fn generation_is_bit_identical_across_calls() {
    let opts = PathOptions::default().with_height(73_123.5).with_points_count(333);
    let a = generate_path(GeoPoint::new(-122.4, 37.7), GeoPoint::new(139.7, 35.6), &opts).unwrap();
    let b = generate_path(GeoPoint::new(-122.4, 37.7), GeoPoint::new(139.7, 35.6), &opts).unwrap();
    for (p, q) in a.points().iter().zip(b.points()) {
        assert_eq!(p.lon.to_bits(), q.lon.to_bits());
        assert_eq!(p.lat.to_bits(), q.lat.to_bits());
        assert_eq!(p.height.to_bits(), q.height.to_bits());
    }
}

#[test]
fn interpolation_stays_in_degree_space() {
    // A great circle between these would bend north; linear interpolation keeps the latitude.
    let opts = PathOptions::default().with_points_count(3);
    let path = generate_path(GeoPoint::new(-60.0, 45.0), GeoPoint::new(60.0, 45.0), &opts).unwrap();
    assert_relative_eq!(path[1].lon, 0.0);
    assert_relative_eq!(path[1].lat, 45.0);
}

#[test]
fn too_few_points_is_an_invalid_argument() {
    for count in [0usize, 1] {
        let opts = PathOptions::default().with_points_count(count);
        let err = generate_path(guangzhou(), hong_kong(), &opts).unwrap_err();
        assert!(matches!(err, ArcError::InvalidArgument(_)), "count {} gave {:?}", count, err);
    }
}

#[test]
fn non_finite_inputs_are_rejected() {
    let opts = PathOptions::default();
    let bad_points = [
        GeoPoint::new(f64::NAN, 0.0),
        GeoPoint::new(0.0, f64::INFINITY),
        GeoPoint::new(f64::NEG_INFINITY, 1.0),
    ];
    for bad in bad_points {
        assert!(matches!(generate_path(bad, hong_kong(), &opts), Err(ArcError::InvalidArgument(_))));
        assert!(matches!(generate_path(guangzhou(), bad, &opts), Err(ArcError::InvalidArgument(_))));
    }

    for height in [f64::NAN, f64::INFINITY, 0.0, -10.0] {
        let opts = PathOptions::default().with_height(height);
        assert!(matches!(generate_path(guangzhou(), hong_kong(), &opts), Err(ArcError::InvalidArgument(_))));
    }
}

#[test]
fn defaults_match_the_documented_values() {
    let opts = PathOptions::default();
    assert_eq!(opts.height, 50_000.0);
    assert_eq!(opts.points_count, 100);
}
