//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN groups points by neighborhood density. Unlike k-means, it:
//!
//! - Discovers clusters of arbitrary shape
//! - Automatically determines the number of clusters
//! - Identifies noise points (outliers)
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: Points strictly closer than ε are neighbors.
//! - **MinPts**: Minimum neighborhood size, the point itself included, for a
//!   point to be "core".
//! - **Core point**: Has at least MinPts neighbors within ε.
//! - **Border point**: Not core, but within ε of a core point.
//! - **Noise point**: Neither core nor border.
//!
//! ## Algorithm Steps
//!
//! 1. Scan points in input order. For each unvisited point P:
//!    - Find its neighborhood
//!    - If it has fewer than MinPts members, mark P as noise (may change later)
//!    - Else P seeds a new cluster, grown from its neighborhood
//!
//! 2. Expansion walks a frontier that grows while it is being walked. Each
//!    unvisited frontier point is queried; if it is core, its whole
//!    neighborhood is appended to the frontier. Every frontier point not yet
//!    in a cluster joins this one.
//!
//! ## Complexity
//!
//! - **Time**: O(n²) with [`LinearScan`], less with a [`GridIndex`](super::index::GridIndex).
//! - **Space**: O(n) for the per-point state.
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use tracing::{debug, trace};

use super::group::Cluster;
use super::index::{LinearScan, RegionQuery};
use super::traits::Clustering;
use crate::error::{Error, Result};
use crate::point::Neighborhood;

/// Label used for noise points by [`Clustering::fit_predict`].
pub const NOISE: usize = usize::MAX;

/// DBSCAN parameters.
///
/// No combination is rejected by [`Dbscan::new`]: a non-positive `epsilon`
/// makes every point noise, and a `min_pts` of 0 or 1 makes every point core.
/// Use [`DbscanConfig::validate`] to opt into stricter checks.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DbscanConfig {
    /// Neighborhood radius (exclusive).
    pub epsilon: f64,
    /// Minimum neighborhood size, the point itself included, for a core point.
    pub min_pts: usize,
}

impl DbscanConfig {
    /// Create a configuration.
    pub fn new(epsilon: f64, min_pts: usize) -> Self {
        Self { epsilon, min_pts }
    }

    /// Set epsilon (neighborhood radius).
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set minimum points for core classification.
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    /// Reject degenerate parameters.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if `epsilon` is not positive and finite, or
    /// `min_pts` is zero.
    pub fn validate(&self) -> Result<()> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(Error::InvalidParameter {
                name: "epsilon",
                message: "must be positive and finite",
            });
        }

        if self.min_pts == 0 {
            return Err(Error::InvalidParameter {
                name: "min_pts",
                message: "must be at least 1",
            });
        }

        Ok(())
    }
}

impl Default for DbscanConfig {
    fn default() -> Self {
        Self::new(0.5, 5)
    }
}

/// How a point ended up after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointKind {
    /// Neighborhood reached `min_pts`.
    Core,
    /// In a cluster without being core.
    Border,
    /// In no cluster.
    Noise,
}

/// Per-point state for one run.
#[derive(Debug, Clone, Default)]
struct RunState {
    visited: Vec<bool>,
    noise: Vec<bool>,
    core: Vec<bool>,
    /// Cluster id of each assigned point.
    assigned: Vec<Option<usize>>,
    n_clusters: usize,
}

impl RunState {
    fn new(n: usize) -> Self {
        Self {
            visited: vec![false; n],
            noise: vec![false; n],
            core: vec![false; n],
            assigned: vec![None; n],
            n_clusters: 0,
        }
    }

    #[inline]
    fn assign(&mut self, point_idx: usize, cluster_id: usize, cluster: &mut Cluster) {
        cluster.add(point_idx);
        // A point visited earlier as noise can still be reached as a border point.
        self.noise[point_idx] = false;
        self.assigned[point_idx] = Some(cluster_id);
    }
}

/// Read-only view of the per-point state left by the last run.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClusteringInternals<'a> {
    /// Whether each point's neighborhood was queried (all true after a run).
    pub points_processed: &'a [bool],
    /// Whether each point ended as noise.
    pub noise_points: &'a [bool],
    /// Whether each point is a core point.
    pub core_points: &'a [bool],
    /// Number of clusters formed.
    pub number_of_found_clusters: usize,
}

impl ClusteringInternals<'_> {
    /// Classification of point `idx`.
    ///
    /// # Panics
    ///
    /// If `idx` is not an index into the last run's input.
    pub fn kind(&self, idx: usize) -> PointKind {
        if self.core_points[idx] {
            PointKind::Core
        } else if self.noise_points[idx] {
            PointKind::Noise
        } else {
            PointKind::Border
        }
    }

    /// Number of noise points.
    pub fn noise_count(&self) -> usize {
        self.noise_points.iter().filter(|&&n| n).count()
    }

    /// Number of core points.
    pub fn core_count(&self) -> usize {
        self.core_points.iter().filter(|&&c| c).count()
    }
}

/// DBSCAN clustering engine.
///
/// Parameters are fixed at construction. Each call to [`Dbscan::run`] resets
/// the per-point state, so one engine can cluster many datasets in turn.
#[derive(Debug, Clone)]
pub struct Dbscan {
    config: DbscanConfig,
    state: Option<RunState>,
}

impl Dbscan {
    /// Create a new DBSCAN clusterer.
    ///
    /// # Arguments
    ///
    /// * `epsilon` - Points strictly closer than this are neighbors.
    /// * `min_pts` - Minimum neighborhood size (self included) for a core point.
    ///
    /// # Typical Values
    ///
    /// - `epsilon`: Often determined by k-distance plot (k = min_pts - 1).
    /// - `min_pts`: 2 * dimension is a common heuristic. Minimum is 3.
    pub fn new(epsilon: f64, min_pts: usize) -> Self {
        Self::from_config(DbscanConfig::new(epsilon, min_pts))
    }

    /// Create a clusterer, rejecting degenerate parameters.
    ///
    /// # Errors
    ///
    /// See [`DbscanConfig::validate`].
    pub fn try_new(epsilon: f64, min_pts: usize) -> Result<Self> {
        let config = DbscanConfig::new(epsilon, min_pts);
        config.validate()?;
        Ok(Self::from_config(config))
    }

    /// Create a clusterer from a configuration.
    pub fn from_config(config: DbscanConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// The parameters this engine was built with.
    pub fn config(&self) -> DbscanConfig {
        self.config
    }

    /// Cluster `points` with a linear-scan region query.
    ///
    /// Returns the clusters in the order their seeds were found. Points in no
    /// cluster are noise; see [`Dbscan::clustering_internals`].
    pub fn run<P: Neighborhood>(&mut self, points: &[P]) -> Vec<Cluster> {
        self.run_with(&LinearScan::new(points))
    }

    /// Cluster the points behind `query`.
    pub fn run_with<Q: RegionQuery + ?Sized>(&mut self, query: &Q) -> Vec<Cluster> {
        let n = query.len();
        let mut state = RunState::new(n);
        let mut clusters: Vec<Cluster> = Vec::new();

        for point_idx in 0..n {
            if state.visited[point_idx] {
                continue;
            }
            state.visited[point_idx] = true;

            let neighborhood = query.region_query(point_idx, self.config.epsilon);
            if neighborhood.len() < self.config.min_pts {
                // Not dense enough: noise, unless a later expansion reaches it.
                state.noise[point_idx] = true;
                continue;
            }
            state.core[point_idx] = true;

            let cluster_id = clusters.len();
            let cluster =
                self.expand_cluster(query, point_idx, neighborhood, cluster_id, &mut state);
            trace!(cluster_id, seed = point_idx, size = cluster.len(), "formed cluster");
            clusters.push(cluster);
        }

        state.n_clusters = clusters.len();
        debug!(
            points = n,
            clusters = clusters.len(),
            noise = state.noise.iter().filter(|&&x| x).count(),
            epsilon = self.config.epsilon,
            min_pts = self.config.min_pts,
            "dbscan run complete"
        );

        self.state = Some(state);
        clusters
    }

    /// Grow one cluster from a core seed.
    fn expand_cluster<Q: RegionQuery + ?Sized>(
        &self,
        query: &Q,
        seed: usize,
        mut frontier: Vec<usize>,
        cluster_id: usize,
        state: &mut RunState,
    ) -> Cluster {
        let mut cluster = Cluster::new();
        state.assign(seed, cluster_id, &mut cluster);

        // `frontier` is appended to while it is walked; its length must be
        // re-read on every step.
        let mut pos = 0;
        while pos < frontier.len() {
            let point_idx = frontier[pos];

            if !state.visited[point_idx] {
                state.visited[point_idx] = true;
                let neighborhood = query.region_query(point_idx, self.config.epsilon);
                if neighborhood.len() >= self.config.min_pts {
                    state.core[point_idx] = true;
                    // Duplicates are fine: assigned points are skipped below.
                    frontier.extend(neighborhood);
                }
            }

            if state.assigned[point_idx].is_none() {
                state.assign(point_idx, cluster_id, &mut cluster);
            }

            pos += 1;
        }

        cluster
    }

    /// Per-point state of the last run, or `None` before the first run.
    pub fn clustering_internals(&self) -> Option<ClusteringInternals<'_>> {
        self.state.as_ref().map(|s| ClusteringInternals {
            points_processed: &s.visited,
            noise_points: &s.noise,
            core_points: &s.core,
            number_of_found_clusters: s.n_clusters,
        })
    }

    /// Cluster id of every point from the last run (`None` for noise).
    ///
    /// Ids index the `Vec<Cluster>` that run returned.
    pub fn labels(&self) -> Option<&[Option<usize>]> {
        self.state.as_ref().map(|s| s.assigned.as_slice())
    }
}

impl Default for Dbscan {
    fn default() -> Self {
        Self::from_config(DbscanConfig::default())
    }
}

fn check_dimensions<P: Neighborhood>(data: &[P]) -> Result<()> {
    let mut dims = data.iter().filter_map(Neighborhood::dimension);
    if let Some(expected) = dims.next() {
        if let Some(found) = dims.find(|&d| d != expected) {
            return Err(Error::DimensionMismatch { expected, found });
        }
    }
    Ok(())
}

impl<P: Neighborhood> Clustering<P> for Dbscan {
    fn fit_predict(&mut self, data: &[P]) -> Result<Vec<usize>> {
        Ok(self
            .fit_predict_with_noise(data)?
            .into_iter()
            .map(|l| l.unwrap_or(NOISE))
            .collect())
    }

    /// Clusters found by the last run; 0 before any run.
    fn n_clusters(&self) -> usize {
        self.state.as_ref().map_or(0, |s| s.n_clusters)
    }
}

/// Extended DBSCAN interface with noise detection.
pub trait DbscanExt<P> {
    /// Fit and predict, returning labels where noise is marked as `None`.
    fn fit_predict_with_noise(&mut self, data: &[P]) -> Result<Vec<Option<usize>>>;

    /// Check if a label represents noise.
    fn is_noise(label: usize) -> bool {
        label == NOISE
    }
}

impl<P: Neighborhood> DbscanExt<P> for Dbscan {
    fn fit_predict_with_noise(&mut self, data: &[P]) -> Result<Vec<Option<usize>>> {
        check_dimensions(data)?;
        self.run(data);
        Ok(self.labels().map(<[_]>::to_vec).unwrap_or_default())
    }
}
