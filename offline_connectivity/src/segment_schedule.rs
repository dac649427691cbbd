//! Segment tree over the timeline.
//!
//! Every edge is stored once in each of the O(log T) canonical nodes whose segment it spans, so a
//! node only ever merges its own edges and nothing is re-examined on the way down.
//!
//! The tree is built over compressed time: only edge endpoints and query times start a new
//! position, so its size depends on the input size and not on how far the timeline reaches.

use crate::rollback_dsu::{Node, UndoUnionFind};
use crate::timeline::{Edge, Query, Segment, Time};

struct SegmentTree {
    /// 1-indexed, children of `i` are `2i` and `2i + 1`.
    edges: Vec<Vec<(Node, Node)>>,
    /// Query indices by compressed time.
    by_time: Vec<Vec<usize>>,
    /// `queries_before[i]` is the number of queries with compressed time `< i`.
    queries_before: Vec<usize>,
}

/// Sorted distinct times where the set of active edges may change, ending with `horizon`.
/// Position `i` of the compressed timeline stands for `points[i]..points[i + 1]`.
fn breakpoints(edges: &[Edge], queries: &[Query], horizon: Time) -> Vec<Time> {
    let mut points: Vec<Time> = edges
        .iter()
        .flat_map(|e| [e.valid_from, e.valid_until])
        .chain(queries.iter().map(|q| q.time))
        .chain([horizon])
        .collect();
    points.sort_unstable();
    points.dedup();
    points
}

fn compress(points: &[Time], t: Time) -> usize {
    // Every time passed in is one of the points.
    points.partition_point(|&p| p < t)
}

impl SegmentTree {
    fn build(edges: &[Edge], queries: &[Query], horizon: Time) -> Self {
        let points = breakpoints(edges, queries, horizon);
        let len = points.len() - 1;
        let mut by_time = vec![vec![]; len];
        for (qi, q) in queries.iter().enumerate() {
            by_time[compress(&points, q.time)].push(qi);
        }
        let mut queries_before = Vec::with_capacity(len + 1);
        queries_before.push(0);
        for at_t in &by_time {
            queries_before.push(queries_before.last().copied().unwrap_or(0) + at_t.len());
        }
        let mut tree = Self {
            edges: vec![vec![]; 4 * len],
            by_time,
            queries_before,
        };
        let root = tree.root();
        for e in edges {
            let compressed = Edge::new(
                e.u,
                e.v,
                compress(&points, e.valid_from),
                compress(&points, e.valid_until),
            );
            tree.insert(1, root, &compressed);
        }
        tree
    }

    fn root(&self) -> Segment {
        Segment::new(0, self.by_time.len())
    }

    fn insert(&mut self, i: usize, seg: Segment, e: &Edge) {
        if !e.overlaps(seg) {
            return;
        }
        if e.spans(seg) {
            self.edges[i].push((e.u, e.v));
            return;
        }
        let (left, right) = seg.split();
        self.insert(2 * i, left, e);
        self.insert(2 * i + 1, right, e);
    }

    fn has_queries(&self, seg: Segment) -> bool {
        self.queries_before[seg.hi] > self.queries_before[seg.lo]
    }

    fn visit<D: UndoUnionFind>(
        &self,
        i: usize,
        seg: Segment,
        dsu: &mut D,
        queries: &[Query],
        answers: &mut [bool],
    ) {
        if !self.has_queries(seg) {
            return;
        }
        let checkpoint = dsu.checkpoint();
        for &(u, v) in &self.edges[i] {
            dsu.merge(u, v);
        }
        if seg.is_unit() {
            for &qi in &self.by_time[seg.lo] {
                let q = &queries[qi];
                answers[q.id] = dsu.connected(q.u, q.v);
            }
        } else {
            let (left, right) = seg.split();
            self.visit(2 * i, left, dsu, queries, answers);
            self.visit(2 * i + 1, right, dsu, queries, answers);
        }
        dsu.rollback_to(checkpoint);
    }
}

/// Same contract as [`crate::divide_and_conquer::answer_queries`].
pub fn answer_queries<D: UndoUnionFind>(
    dsu: &mut D,
    edges: &[Edge],
    queries: &[Query],
    horizon: Time,
) -> Vec<bool> {
    if queries.is_empty() {
        return vec![];
    }
    let tree = SegmentTree::build(edges, queries, horizon);
    log::trace!(
        "segment tree over {} positions holds {} edge copies",
        tree.by_time.len(),
        tree.edges.iter().map(Vec::len).sum::<usize>()
    );
    let mut answers = vec![false; queries.len()];
    tree.visit(1, tree.root(), dsu, queries, &mut answers);
    answers
}
