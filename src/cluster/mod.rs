//! Density-based clustering.
//!
//! ## DBSCAN
//!
//! Density-based clustering that discovers clusters of arbitrary shape and
//! identifies outliers (noise points). It does not need the number of
//! clusters in advance; instead it takes a radius `epsilon` and a density
//! threshold `min_pts`.
//!
//! [`Dbscan::run`] returns the clusters as [`Cluster`]s, each an ordered list
//! of indices into the input. Points that belong to no cluster are noise;
//! [`Dbscan::clustering_internals`] exposes the per-point classification.
//!
//! ## Region queries
//!
//! The engine asks one question over and over: which points are within
//! `epsilon` of point `i`? [`LinearScan`] answers it by brute force;
//! [`GridIndex`] buckets 2-D points into cells first. Both give identical
//! answers, so the choice only affects speed.
//!
//! ## Usage
//!
//! ```rust
//! use dbclump::cluster::{Dbscan, GridIndex};
//! use dbclump::Point;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.1, 0.1),
//!     Point::new(0.2, 0.0),
//!     Point::new(10.0, 10.0),
//! ];
//!
//! let mut dbscan = Dbscan::new(0.5, 3);
//! let clusters = dbscan.run(&points);
//! assert_eq!(clusters.len(), 1);
//! assert_eq!(clusters[0].as_slice(), &[0, 1, 2]);
//!
//! let internals = dbscan.clustering_internals().unwrap();
//! assert!(internals.noise_points[3]);
//!
//! // Same result through a grid index.
//! let grid = GridIndex::new(&points, 0.5);
//! assert_eq!(dbscan.run_with(&grid), clusters);
//! ```

mod dbscan;
mod group;
mod index;
mod traits;
pub(crate) mod util;

pub use dbscan::{ClusteringInternals, Dbscan, DbscanConfig, DbscanExt, PointKind, NOISE};
pub use group::{Cluster, Iter};
pub use index::{GridIndex, LinearScan, RegionQuery};
pub use traits::Clustering;
