use std::collections::HashSet;

use dbclump::{Dbscan, GridIndex, Point};
use proptest::prelude::*;

fn points_strategy() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), 0..80)
        .prop_map(|coords| coords.into_iter().map(Point::from).collect())
}

proptest! {
    #[test]
    fn prop_every_point_visited_and_classified(
        points in points_strategy(),
        epsilon in 0.1f64..3.0,
        min_pts in 1usize..8,
    ) {
        let mut dbscan = Dbscan::new(epsilon, min_pts);
        let clusters = dbscan.run(&points);
        let internals = dbscan.clustering_internals().unwrap();

        prop_assert_eq!(internals.points_processed.len(), points.len());
        prop_assert!(internals.points_processed.iter().all(|&v| v));

        let clustered: HashSet<usize> = clusters.iter().flat_map(|c| c.iter()).collect();
        for i in 0..points.len() {
            // Exactly one of: in a cluster, noise.
            prop_assert_ne!(clustered.contains(&i), internals.noise_points[i]);
            prop_assert!(!(internals.core_points[i] && internals.noise_points[i]));
        }
    }

    #[test]
    fn prop_membership_is_unique(
        points in points_strategy(),
        epsilon in 0.1f64..3.0,
        min_pts in 1usize..8,
    ) {
        let mut dbscan = Dbscan::new(epsilon, min_pts);
        let clusters = dbscan.run(&points);

        let mut seen = HashSet::new();
        for cluster in &clusters {
            prop_assert!(!cluster.is_empty());
            for idx in cluster {
                prop_assert!(seen.insert(idx), "point {} in two clusters", idx);
            }
        }
        prop_assert_eq!(
            clusters.len(),
            dbscan.clustering_internals().unwrap().number_of_found_clusters
        );
    }

    #[test]
    fn prop_runs_are_deterministic(
        points in points_strategy(),
        epsilon in 0.1f64..3.0,
        min_pts in 1usize..8,
    ) {
        let mut dbscan = Dbscan::new(epsilon, min_pts);
        let first = dbscan.run(&points);
        let second = dbscan.run(&points);
        prop_assert_eq!(&first, &second);

        let mut fresh = Dbscan::new(epsilon, min_pts);
        prop_assert_eq!(&first, &fresh.run(&points));
    }

    #[test]
    fn prop_grid_index_is_transparent(
        points in points_strategy(),
        epsilon in 0.1f64..3.0,
        min_pts in 1usize..8,
    ) {
        let mut dbscan = Dbscan::new(epsilon, min_pts);
        let linear = dbscan.run(&points);
        let linear_core = dbscan.clustering_internals().unwrap().core_points.to_vec();

        let grid = dbscan.run_with(&GridIndex::new(&points, epsilon));
        prop_assert_eq!(linear, grid);
        prop_assert_eq!(linear_core, dbscan.clustering_internals().unwrap().core_points.to_vec());
    }

    #[test]
    fn prop_clusters_have_a_core_member(
        points in points_strategy(),
        epsilon in 0.1f64..3.0,
        min_pts in 1usize..8,
    ) {
        let mut dbscan = Dbscan::new(epsilon, min_pts);
        let clusters = dbscan.run(&points);
        let internals = dbscan.clustering_internals().unwrap();
        for cluster in &clusters {
            // The seed comes first and is always core.
            prop_assert!(internals.core_points[cluster[0]]);
        }
    }
}
