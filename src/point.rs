//! Points and the adjacency predicate DBSCAN consumes.
//!
//! The clustering engine never looks at coordinates directly. All it needs is
//! the answer to "is `b` within `epsilon` of `a`?", expressed by the
//! [`Neighborhood`] trait.
//!
//! # Boundary semantics
//!
//! Adjacency is strict: two points exactly `epsilon` apart are **not**
//! neighbors. A point is always its own neighbor for any positive `epsilon`,
//! so `min_pts` counts the point itself.
//!
//! # Non-finite input
//!
//! Coordinates are not validated. A NaN or infinite coordinate yields a NaN
//! or infinite distance, and every comparison against `epsilon` is then
//! false: such a point is never adjacent to anything, including itself.

use std::fmt;

use crate::cluster::util;

/// Adjacency predicate used by region queries.
///
/// Implementations must be symmetric, and reflexive for every positive
/// `epsilon` whenever the point is well-formed.
pub trait Neighborhood {
    /// Whether `other` lies strictly within `epsilon` of `self`.
    fn is_in_neighborhood(&self, other: &Self, epsilon: f64) -> bool;

    /// Dimensionality, for representations whose length is only known at runtime.
    ///
    /// Fixed-size points return `None`.
    fn dimension(&self) -> Option<usize> {
        None
    }
}

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// x-coordinate.
    pub x: f64,
    /// y-coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        util::euclidean(&[self.x, self.y], &[other.x, other.y])
    }

    /// Whether both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Neighborhood for Point {
    #[inline]
    fn is_in_neighborhood(&self, other: &Self, epsilon: f64) -> bool {
        self.distance(other) < epsilon
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<const D: usize> Neighborhood for [f64; D] {
    #[inline]
    fn is_in_neighborhood(&self, other: &Self, epsilon: f64) -> bool {
        util::euclidean(self, other) < epsilon
    }
}

/// Dense vectors, as used throughout the label-based [`Clustering`](crate::Clustering) API.
///
/// Vectors of different lengths are never adjacent.
impl Neighborhood for Vec<f32> {
    #[inline]
    fn is_in_neighborhood(&self, other: &Self, epsilon: f64) -> bool {
        self.len() == other.len() && util::euclidean_f32(self, other) < epsilon
    }

    fn dimension(&self) -> Option<usize> {
        Some(self.len())
    }
}
