//! Density-based clustering of points.
//!
//! `dbclump` implements DBSCAN over 2-D points (and any type that can answer
//! "is this point within epsilon of that one?"). It finds clusters of
//! mutually density-reachable points and labels the rest as noise, without
//! being told how many clusters to look for.
//!
//! The primary public API is under [`cluster`], which provides:
//! - [`Dbscan`], the clustering engine
//! - [`Cluster`], one group of point indices
//! - region-query strategies ([`LinearScan`], [`GridIndex`])
//!
//! Points live in [`point`]: the [`Neighborhood`] adjacency trait and a 2-D [`Point`].
//!
//! The crate logs through `tracing` and never installs a subscriber. Enable the
//! `serde` feature to (de)serialize [`DbscanConfig`], [`Point`] and [`Cluster`].

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod point;

pub use cluster::{
    Cluster, Clustering, ClusteringInternals, Dbscan, DbscanConfig, DbscanExt, GridIndex,
    LinearScan, PointKind, RegionQuery, NOISE,
};
pub use error::{Error, Result};
pub use point::{Neighborhood, Point};
