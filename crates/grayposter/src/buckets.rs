//! Value buckets.
//!
//! The 0-255 range is cut into one bucket per target value. Bucket `i`
//! covers `edge[i] <= v < edge[i + 1]`; the last bucket also takes 255.
//! Edges are either spread evenly over 0-255 or given as interior
//! breakpoints, with 0 and 255 as the implicit outer edges.

use crate::{PosterizeError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Edges {
    /// `edge[i] = 255 * i / n`
    Even,
    /// Sorted, distinct interior edges in 1..=254
    Breakpoints(Vec<u8>),
}

/// Mapping from intensity buckets to target values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketMap {
    values: Vec<u8>,
    edges: Edges,
}

impl BucketMap {
    /// Build a bucket map.
    ///
    /// `values` are sorted and de-duplicated. Without `breakpoints` the
    /// buckets are evenly sized; with them, the distinct breakpoints must
    /// number exactly one less than the distinct values.
    pub fn new(values: &[u8], breakpoints: Option<&[u8]>) -> Result<Self> {
        let values = sorted_distinct(values);
        if values.is_empty() {
            return Err(PosterizeError::EmptyValues);
        }

        let edges = match breakpoints {
            None => Edges::Even,
            Some(points) => {
                if let Some(&bad) = points.iter().find(|&&b| b == 0 || b == 255) {
                    return Err(PosterizeError::BreakpointOutOfRange(bad));
                }
                let points = sorted_distinct(points);
                if points.len() != values.len() - 1 {
                    return Err(PosterizeError::BreakpointCountMismatch {
                        expected: values.len() - 1,
                        actual: points.len(),
                    });
                }
                Edges::Breakpoints(points)
            }
        };

        log::debug!("bucket map values={:?} edges={:?}", values, edges);
        Ok(Self { values, edges })
    }

    /// Sorted distinct target values, one per bucket.
    #[inline]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Number of buckets.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; a bucket map holds at least one value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// User-supplied interior edges, or `None` for evenly spaced buckets.
    pub fn breakpoints(&self) -> Option<&[u8]> {
        match &self.edges {
            Edges::Even => None,
            Edges::Breakpoints(points) => Some(points),
        }
    }

    /// Index of the bucket that `v` falls into.
    pub fn classify(&self, v: u8) -> usize {
        let last = self.values.len() - 1;
        match &self.edges {
            Edges::Even => {
                let n = self.values.len();
                (usize::from(v) * n / 255).min(last)
            }
            Edges::Breakpoints(points) => points.partition_point(|&b| b <= v).min(last),
        }
    }

    /// Target value for intensity `v`.
    #[inline]
    pub fn map(&self, v: u8) -> u8 {
        self.values[self.classify(v)]
    }
}

fn sorted_distinct(items: &[u8]) -> Vec<u8> {
    let mut items = items.to_vec();
    items.sort_unstable();
    items.dedup();
    items
}
