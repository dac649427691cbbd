use thiserror::Error;

use crate::timeline::{Node, Time};

/// Malformed input, reported before any scheduling work is done.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectivityError {
    #[error("Node {node} out of range for a graph of {node_count} nodes")]
    NodeOutOfRange { node: Node, node_count: usize },
    #[error("Empty validity interval [{valid_from}, {valid_until})")]
    EmptyInterval { valid_from: Time, valid_until: Time },
    #[error("Time {time} is past the last supported time {max_time}")]
    TimeOutOfRange { time: Time, max_time: Time },
    #[error("Query id {id} out of range for a batch of {query_count} queries")]
    QueryIdOutOfRange { id: usize, query_count: usize },
    #[error("Query id {0} used more than once")]
    DuplicateQueryId(usize),
}
