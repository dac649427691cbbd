use std::marker::PhantomData;

use derivative::Derivative;

use crate::error::ConnectivityError;
use crate::rollback_dsu::{RollbackDsu, UndoUnionFind};
use crate::timeline::{self, horizon, Edge, Node, Query, Time};
use crate::{divide_and_conquer, segment_schedule};

/// Strategy deciding which edges are merged at which point of the timeline.
pub trait Scheduler {
    /// Answers every query, indexed by [`Query::id`].
    /// Inputs must be validated, with every query time below `horizon`.
    /// The log length of `dsu` is the same on return as on entry.
    fn answer<D: UndoUnionFind>(
        dsu: &mut D,
        edges: &[Edge],
        queries: &[Query],
        horizon: Time,
    ) -> Vec<bool>;
}

/// Recursive halving, filtering the candidate edges at every level.
#[derive(Debug, Clone, Copy, Default)]
pub struct DivideAndConquer;

impl Scheduler for DivideAndConquer {
    fn answer<D: UndoUnionFind>(
        dsu: &mut D,
        edges: &[Edge],
        queries: &[Query],
        horizon: Time,
    ) -> Vec<bool> {
        divide_and_conquer::answer_queries(dsu, edges, queries, horizon)
    }
}

/// Each edge assigned upfront to the segment tree nodes it spans.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentSchedule;

impl Scheduler for SegmentSchedule {
    fn answer<D: UndoUnionFind>(
        dsu: &mut D,
        edges: &[Edge],
        queries: &[Query],
        horizon: Time,
    ) -> Vec<bool> {
        segment_schedule::answer_queries(dsu, edges, queries, horizon)
    }
}

/// Collects edges and queries, then answers all queries at once.
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""))]
pub struct OfflineConnectivity<S: Scheduler = DivideAndConquer> {
    node_count: usize,
    edges: Vec<Edge>,
    queries: Vec<Query>,
    #[derivative(Debug = "ignore")]
    _scheduler: PhantomData<S>,
}

impl<S: Scheduler> OfflineConnectivity<S> {
    /// New instance for a graph on n nodes, without edges or queries.
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edges: Vec::new(),
            queries: Vec::new(),
            _scheduler: PhantomData,
        }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn queries(&self) -> &[Query] {
        &self.queries
    }

    /// Adds an edge between u and v, usable at times `valid_from..valid_until`.
    pub fn add_edge(
        &mut self,
        u: Node,
        v: Node,
        valid_from: Time,
        valid_until: Time,
    ) -> Result<(), ConnectivityError> {
        let edge = Edge::new(u, v, valid_from, valid_until);
        timeline::check_edge(&edge, self.node_count)?;
        self.edges.push(edge);
        Ok(())
    }

    /// Asks whether u and v are connected at time t. Returns the index of the answer in
    /// [`OfflineConnectivity::solve`].
    pub fn add_query(&mut self, u: Node, v: Node, time: Time) -> Result<usize, ConnectivityError> {
        timeline::check_node(u, self.node_count)?;
        timeline::check_node(v, self.node_count)?;
        timeline::check_time(time)?;
        let id = self.queries.len();
        self.queries.push(Query { u, v, time, id });
        Ok(id)
    }

    /// Answers all queries, in the order they were added.
    pub fn solve(&self) -> Vec<bool> {
        let mut dsu = RollbackDsu::new(self.node_count);
        self.solve_with(&mut dsu)
    }

    /// Same as [`OfflineConnectivity::solve`], on a caller-provided disjoint-set over the same nodes.
    pub fn solve_with<D: UndoUnionFind>(&self, dsu: &mut D) -> Vec<bool> {
        run::<S, D>(dsu, &self.edges, &self.queries)
    }
}

fn run<S: Scheduler, D: UndoUnionFind>(dsu: &mut D, edges: &[Edge], queries: &[Query]) -> Vec<bool> {
    if queries.is_empty() {
        return vec![];
    }
    let horizon = horizon(edges, queries);
    log::debug!(
        "answering {} queries over {} edges, horizon {}",
        queries.len(),
        edges.len(),
        horizon
    );
    S::answer(dsu, edges, queries, horizon)
}

/// Answers `queries` in slice order, ignoring their ids.
pub fn solve(
    node_count: usize,
    edges: &[Edge],
    queries: &[Query],
) -> Result<Vec<bool>, ConnectivityError> {
    let queries: Vec<Query> = queries
        .iter()
        .enumerate()
        .map(|(id, q)| Query { id, ..*q })
        .collect();
    solve_with_ids(node_count, edges, &queries)
}

/// Answers `queries` by their ids, which must be a permutation of `0..queries.len()`.
pub fn solve_with_ids(
    node_count: usize,
    edges: &[Edge],
    queries: &[Query],
) -> Result<Vec<bool>, ConnectivityError> {
    timeline::validate(node_count, edges, queries)?;
    let mut dsu = RollbackDsu::new(node_count);
    Ok(run::<DivideAndConquer, _>(&mut dsu, edges, queries))
}
