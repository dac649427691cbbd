//! Divide and conquer over the timeline.
//!
//! Each call receives the edges that may still matter inside its segment. It merges the ones active
//! during the whole segment, passes the rest down to both halves and rolls its merges back before
//! returning, so a leaf at time `t` sees exactly the edges active at `t`.

use crate::rollback_dsu::UndoUnionFind;
use crate::timeline::{Edge, Query, Segment, Time};

/// State shared by every level of the recursion. Accessed in strict call/return order.
struct Context<'a, D> {
    dsu: &'a mut D,
    queries: &'a [Query],
    answers: &'a mut [bool],
}

fn recurse<D: UndoUnionFind>(
    ctx: &mut Context<'_, D>,
    candidates: &[Edge],
    pending: &[usize],
    seg: Segment,
) {
    if pending.is_empty() {
        return;
    }
    log::trace!(
        "[{}, {}): {} candidates, {} queries",
        seg.lo,
        seg.hi,
        candidates.len(),
        pending.len()
    );
    let checkpoint = ctx.dsu.checkpoint();
    let mut remaining = Vec::new();
    for e in candidates {
        if e.spans(seg) {
            ctx.dsu.merge(e.u, e.v);
        } else if e.overlaps(seg) {
            remaining.push(*e);
        }
    }
    if seg.is_unit() {
        for &qi in pending {
            let q = &ctx.queries[qi];
            if q.time == seg.lo {
                ctx.answers[q.id] = ctx.dsu.connected(q.u, q.v);
            }
        }
    } else {
        let (left, right) = seg.split();
        let (left_queries, right_queries): (Vec<usize>, Vec<usize>) = pending
            .iter()
            .partition(|&&qi| ctx.queries[qi].time < right.lo);
        recurse(ctx, &remaining, &left_queries, left);
        recurse(ctx, &remaining, &right_queries, right);
    }
    ctx.dsu.rollback_to(checkpoint);
}

/// Answers every query, indexed by [`Query::id`]. Inputs must already be validated and every query
/// time must be below `horizon`. `dsu` is left with the log length it had on entry.
pub fn answer_queries<D: UndoUnionFind>(
    dsu: &mut D,
    edges: &[Edge],
    queries: &[Query],
    horizon: Time,
) -> Vec<bool> {
    let mut answers = vec![false; queries.len()];
    let pending: Vec<usize> = (0..queries.len()).collect();
    let mut ctx = Context {
        dsu,
        queries,
        answers: &mut answers,
    };
    recurse(&mut ctx, edges, &pending, Segment::new(0, horizon));
    answers
}
