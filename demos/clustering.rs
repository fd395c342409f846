//! DBSCAN on a small 2-D dataset.
//!
//! Run with `RUST_LOG=dbclump=trace` to see the engine's log output.

use dbclump::{Dbscan, DbscanConfig, Point, PointKind};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Three well-separated groups in 2D plus two outliers.
    let data: Vec<Point> = vec![
        // Group A (near origin)
        Point::new(0.0, 0.0),
        Point::new(0.1, 0.2),
        Point::new(0.2, 0.1),
        Point::new(-0.1, 0.1),
        // Group B (near (5, 5))
        Point::new(5.0, 5.0),
        Point::new(5.1, 4.9),
        Point::new(4.9, 5.1),
        Point::new(5.2, 5.2),
        // Group C (near (10, 0))
        Point::new(10.0, 0.0),
        Point::new(10.1, 0.1),
        Point::new(9.9, -0.1),
        Point::new(10.2, 0.2),
        // Outliers
        Point::new(2.5, 8.0),
        Point::new(-6.0, -6.0),
    ];

    let config = DbscanConfig::default().with_epsilon(1.0).with_min_pts(3);
    let mut dbscan = Dbscan::from_config(config);
    let clusters = dbscan.run(&data);

    println!(
        "=== DBSCAN (eps={}, min_pts={}) ===",
        config.epsilon, config.min_pts
    );
    for (id, cluster) in clusters.iter().enumerate() {
        println!("  cluster {id}: {cluster}");
    }

    let Some(internals) = dbscan.clustering_internals() else {
        return;
    };
    for (i, p) in data.iter().enumerate() {
        let tag = match internals.kind(i) {
            PointKind::Core => "core",
            PointKind::Border => "border",
            PointKind::Noise => "NOISE",
        };
        println!("  point {i:2} {p} => {tag}");
    }
}
