//! The `Cluster` container: point indices in order of assignment.

use std::fmt;
use std::ops::Index;

use crate::error::{Error, Result};

/// One density-connected group of points, stored as indices into the input.
///
/// Members are kept in the order they were assigned during expansion, which
/// is generally not input order. `Cluster` does not deduplicate; the engine
/// guarantees each index is added at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Cluster {
    members: Vec<usize>,
}

/// Iterator over the members of a [`Cluster`], in insertion order.
pub type Iter<'a> = std::iter::Copied<std::slice::Iter<'a, usize>>;

impl Cluster {
    /// Create an empty cluster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point index.
    #[inline]
    pub fn add(&mut self, point_index: usize) {
        self.members.push(point_index);
    }

    /// Number of member points.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Alias for [`Cluster::len`].
    #[inline]
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Whether no point has been assigned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The point index at `position` (0-based, insertion order).
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `position >= self.len()`.
    pub fn get(&self, position: usize) -> Result<usize> {
        self.members
            .get(position)
            .copied()
            .ok_or(Error::OutOfRange {
                position,
                len: self.members.len(),
            })
    }

    /// Whether `point_index` is a member. Linear in the cluster size.
    pub fn contains(&self, point_index: usize) -> bool {
        self.members.contains(&point_index)
    }

    /// Members in insertion order. Each call starts a fresh pass.
    pub fn iter(&self) -> Iter<'_> {
        self.members.iter().copied()
    }

    /// Members as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.members
    }

    /// Consume the cluster, returning its members.
    pub fn into_vec(self) -> Vec<usize> {
        self.members
    }
}

impl Index<usize> for Cluster {
    type Output = usize;

    fn index(&self, position: usize) -> &usize {
        &self.members[position]
    }
}

impl<'a> IntoIterator for &'a Cluster {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Cluster {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl FromIterator<usize> for Cluster {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "Cluster: (empty)")
        } else {
            write!(f, "Cluster: {:?}", self.members)
        }
    }
}
