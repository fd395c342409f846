use crate::error::Result;

/// Common interface for hard clustering algorithms (one label per point).
pub trait Clustering<P> {
    /// Fit the model and return one cluster label per input point.
    fn fit_predict(&mut self, data: &[P]) -> Result<Vec<usize>>;

    /// The number of clusters.
    ///
    /// For algorithms that discover the number of clusters dynamically (e.g. DBSCAN),
    /// this is the count from the most recent fit, and 0 before any fit.
    fn n_clusters(&self) -> usize;
}
