//! Edges, queries and the discretized timeline they live on.

use crate::error::ConnectivityError;

pub use crate::rollback_dsu::Node;

/// A point on the timeline. Time starts at 0.
pub type Time = usize;

/// Largest edge end or query time accepted, so that the timeline bound still fits in a [`Time`].
pub const MAX_TIME: Time = Time::MAX - 1;

/// Undirected edge usable at every `t` with `valid_from <= t < valid_until`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub u: Node,
    pub v: Node,
    pub valid_from: Time,
    pub valid_until: Time,
}

impl Edge {
    pub fn new(u: Node, v: Node, valid_from: Time, valid_until: Time) -> Self {
        Self {
            u,
            v,
            valid_from,
            valid_until,
        }
    }
    pub fn is_active_at(&self, t: Time) -> bool {
        self.valid_from <= t && t < self.valid_until
    }
    /// Is the edge active during the whole segment?
    pub fn spans(&self, seg: Segment) -> bool {
        self.valid_from <= seg.lo && self.valid_until >= seg.hi
    }
    /// Is the edge active at some time of the segment?
    pub fn overlaps(&self, seg: Segment) -> bool {
        self.valid_from < seg.hi && seg.lo < self.valid_until
    }
}

/// Are `u` and `v` connected at time `t`? Answers are stored at index `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    pub u: Node,
    pub v: Node,
    pub time: Time,
    pub id: usize,
}

/// Half-open range `[lo, hi)` of the timeline, never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub lo: Time,
    pub hi: Time,
}

impl Segment {
    pub fn new(lo: Time, hi: Time) -> Self {
        assert!(lo < hi, "empty segment [{lo}, {hi})");
        Self { lo, hi }
    }
    pub fn len(&self) -> usize {
        self.hi - self.lo
    }
    pub fn is_unit(&self) -> bool {
        self.len() == 1
    }
    /// Left and right halves, split at `lo + len / 2`. Panics on unit segments.
    pub fn split(&self) -> (Segment, Segment) {
        let mid = self.lo + self.len() / 2;
        (Segment::new(self.lo, mid), Segment::new(mid, self.hi))
    }
}

/// Exclusive upper bound of the timeline: one past every edge end and every query time.
pub fn horizon(edges: &[Edge], queries: &[Query]) -> Time {
    let last_edge = edges.iter().map(|e| e.valid_until);
    let last_query = queries.iter().map(|q| q.time);
    let last = last_edge.chain(last_query).max().unwrap_or(0);
    // Validated inputs never reach MAX_TIME + 1.
    last.checked_add(1).unwrap_or(Time::MAX)
}

pub(crate) fn check_time(time: Time) -> Result<(), ConnectivityError> {
    if time <= MAX_TIME {
        Ok(())
    } else {
        Err(ConnectivityError::TimeOutOfRange {
            time,
            max_time: MAX_TIME,
        })
    }
}

pub(crate) fn check_node(node: Node, node_count: usize) -> Result<(), ConnectivityError> {
    if node < node_count {
        Ok(())
    } else {
        Err(ConnectivityError::NodeOutOfRange { node, node_count })
    }
}

pub(crate) fn check_edge(edge: &Edge, node_count: usize) -> Result<(), ConnectivityError> {
    check_node(edge.u, node_count)?;
    check_node(edge.v, node_count)?;
    check_time(edge.valid_until)?;
    if edge.valid_from >= edge.valid_until {
        return Err(ConnectivityError::EmptyInterval {
            valid_from: edge.valid_from,
            valid_until: edge.valid_until,
        });
    }
    Ok(())
}

/// Checks every precondition of a batch: node ids in range, non-empty intervals, times up to
/// [`MAX_TIME`], and query ids forming a permutation of `0..queries.len()`.
pub fn validate(
    node_count: usize,
    edges: &[Edge],
    queries: &[Query],
) -> Result<(), ConnectivityError> {
    for e in edges {
        check_edge(e, node_count)?;
    }
    let mut seen = vec![false; queries.len()];
    for q in queries {
        check_node(q.u, node_count)?;
        check_node(q.v, node_count)?;
        check_time(q.time)?;
        match seen.get_mut(q.id) {
            None => {
                return Err(ConnectivityError::QueryIdOutOfRange {
                    id: q.id,
                    query_count: queries.len(),
                })
            }
            Some(true) => return Err(ConnectivityError::DuplicateQueryId(q.id)),
            Some(s) => *s = true,
        }
    }
    Ok(())
}
