use std::collections::BTreeSet;
use std::sync::{LazyLock, Mutex};

use flexi_logger::{Logger, LoggerHandle};
use offline_connectivity::timeline::{Edge, Query};
use rand::Rng;

pub mod slow_dsu;

#[allow(dead_code)]
pub static LOGGER: LazyLock<Mutex<LoggerHandle>> = LazyLock::new(|| {
    Mutex::new(
        Logger::try_with_env_or_str("info")
            .unwrap()
            .write_mode(flexi_logger::WriteMode::SupportCapture)
            .log_to_stdout()
            .set_palette("196;208;3;7;8".to_owned())
            .format(|w, now, record| {
                let style = flexi_logger::style(record.level());
                write!(
                    w,
                    "{} {pref}[{}] {}{suf}",
                    now.format("%H:%M:%S"),
                    &record.level().as_str()[0..1],
                    record.args(),
                    pref = style.prefix(),
                    suf = style.suffix(),
                )
            })
            .start()
            .unwrap(),
    )
});

#[allow(dead_code)]
pub fn init_logger() {
    let _ = &*LOGGER;
}

/// Answers each query with a DFS over the edges active at its time.
#[allow(dead_code)]
pub fn brute_force(n: usize, edges: &[Edge], queries: &[Query]) -> Vec<bool> {
    let mut answers = vec![false; queries.len()];
    for q in queries {
        let mut adj = vec![BTreeSet::new(); n];
        for e in edges.iter().filter(|e| e.is_active_at(q.time)) {
            adj[e.u].insert(e.v);
            adj[e.v].insert(e.u);
        }
        let mut seen = BTreeSet::new();
        let mut stack = vec![q.u];
        while let Some(u) = stack.pop() {
            if seen.insert(u) {
                stack.extend(adj[u].iter().copied());
            }
        }
        answers[q.id] = seen.contains(&q.v);
    }
    answers
}

/// Random batch with times in `0..max_time`. Query ids follow slice order.
#[allow(dead_code)]
pub fn random_input(
    rng: &mut impl Rng,
    n: usize,
    edge_count: usize,
    query_count: usize,
    max_time: usize,
) -> (Vec<Edge>, Vec<Query>) {
    let edges = (0..edge_count)
        .map(|_| {
            let valid_from = rng.gen_range(0..max_time);
            let valid_until = rng.gen_range(valid_from + 1..=max_time);
            Edge::new(rng.gen_range(0..n), rng.gen_range(0..n), valid_from, valid_until)
        })
        .collect();
    let queries = (0..query_count)
        .map(|id| Query {
            u: rng.gen_range(0..n),
            v: rng.gen_range(0..n),
            time: rng.gen_range(0..max_time),
            id,
        })
        .collect();
    (edges, queries)
}
