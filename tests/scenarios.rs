use dbclump::{Cluster, Dbscan, Error, GridIndex, Neighborhood, Point, PointKind};

/// Eight hand-placed points: a tight triple near (1, 1) and scattered outliers.
fn sample_points_to_cluster() -> Vec<Point> {
    vec![
        Point::new(1.0, 1.0),
        Point::new(1.1, 1.1),
        Point::new(3.5, 5.0),
        Point::new(3.5, 10.0),
        Point::new(3.5, 12.0),
        Point::new(1.2, 1.2),
        Point::new(5.0, 5.0),
        Point::new(10.0, 1.5),
    ]
}

/// A coarse ring and a dense blob with a few stragglers.
fn ring_and_blob() -> Vec<Point> {
    let mut points = Vec::new();
    for i in 0..40 {
        let t = i as f64 / 40.0 * std::f64::consts::TAU;
        points.push(Point::new(5.0 * t.cos(), 5.0 * t.sin()));
    }
    for i in 0..5 {
        for j in 0..5 {
            points.push(Point::new(i as f64 * 0.2 - 0.4, j as f64 * 0.2 - 0.4));
        }
    }
    points.push(Point::new(20.0, 20.0));
    points.push(Point::new(-20.0, 3.0));
    points
}

#[test]
fn three_points_should_be_in_one_cluster() {
    let mut dbscan = Dbscan::new(1.0, 3);
    let clusters = dbscan.run(&sample_points_to_cluster());

    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].size(), 3);
    for idx in [0, 1, 5] {
        assert!(clusters[0].contains(idx));
    }

    let internals = dbscan.clustering_internals().unwrap();
    assert_eq!(internals.number_of_found_clusters, 1);
    for idx in [2, 3, 4, 6, 7] {
        assert!(internals.noise_points[idx]);
    }
    assert!(internals
        .core_points
        .iter()
        .zip(internals.noise_points)
        .all(|(&c, &n)| !(c && n)));
}

#[test]
fn all_points_are_noise_if_epsilon_is_too_small() {
    let mut dbscan = Dbscan::new(0.1, 3);
    let clusters = dbscan.run(&sample_points_to_cluster());

    assert!(clusters.is_empty());
    let internals = dbscan.clustering_internals().unwrap();
    assert!(internals.noise_points.iter().all(|&n| n));
    assert_eq!(internals.number_of_found_clusters, 0);
}

#[test]
fn empty_input() {
    let mut dbscan = Dbscan::new(1.0, 3);
    let clusters = dbscan.run::<Point>(&[]);
    assert!(clusters.is_empty());
    assert_eq!(
        dbscan.clustering_internals().unwrap().number_of_found_clusters,
        0
    );
}

#[test]
fn min_pts_larger_than_input_is_all_noise() {
    let points = sample_points_to_cluster();
    let mut dbscan = Dbscan::new(100.0, points.len() + 1);
    assert!(dbscan.run(&points).is_empty());
    assert_eq!(
        dbscan.clustering_internals().unwrap().noise_count(),
        points.len()
    );

    // One fewer and everything is a single cluster.
    let mut dbscan = Dbscan::new(100.0, points.len());
    let clusters = dbscan.run(&points);
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].len(), points.len());
}

#[test]
fn ring_blob_and_outliers() {
    let points = ring_and_blob();
    let mut dbscan = Dbscan::new(1.0, 3);
    let clusters = dbscan.run(&points);

    // Ring points are ~0.785 apart, so the ring is one non-convex cluster.
    assert_eq!(clusters.len(), 2);
    let ring: Cluster = (0..40).collect();
    assert!(ring.iter().all(|i| clusters[0].contains(i)));
    assert_eq!(clusters[0].len(), 40);
    assert_eq!(clusters[1].len(), 25);
    assert!(clusters[1].iter().all(|i| (40..65).contains(&i)));

    let internals = dbscan.clustering_internals().unwrap();
    assert_eq!(internals.kind(65), PointKind::Noise);
    assert_eq!(internals.kind(66), PointKind::Noise);

    let grid = GridIndex::new(&points, 1.0);
    assert_eq!(dbscan.run_with(&grid), clusters);
}

#[test]
fn cluster_members_follow_assignment_order() {
    // A chain discovered from its middle: the seed comes first, then its
    // neighborhood in index order, then what the expansion reaches.
    let points: Vec<Point> = [2.0f64, 1.0, 0.0, 3.0, 4.0]
        .iter()
        .map(|&x| Point::new(x * 0.5, 0.0))
        .collect();
    let mut dbscan = Dbscan::new(0.6, 2);
    let clusters = dbscan.run(&points);

    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].as_slice(), &[0, 1, 3, 2, 4]);
    assert_eq!(clusters[0].get(4), Ok(4));
    assert_eq!(
        clusters[0].get(5),
        Err(Error::OutOfRange {
            position: 5,
            len: 5
        })
    );
}

#[test]
fn neighborhood_boundary() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert!(!a.is_in_neighborhood(&b, 5.0));
    assert!(a.is_in_neighborhood(&b, 5.000_000_001));

    let mut dbscan = Dbscan::new(5.0, 2);
    assert!(dbscan.run(&[a, b]).is_empty());
}

#[test]
fn works_with_fixed_size_arrays() {
    let points: Vec<[f64; 3]> = vec![
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 0.5],
        [0.0, 0.5, 0.0],
        [9.0, 9.0, 9.0],
    ];
    let mut dbscan = Dbscan::new(0.8, 3);
    let clusters = dbscan.run(&points);
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].as_slice(), &[0, 1, 2]);
}
