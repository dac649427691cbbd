pub mod divide_and_conquer;
pub mod error;
pub mod offline_connectivity;
pub mod rollback_dsu;
pub mod segment_schedule;
pub mod timeline;
pub use error::ConnectivityError;
pub use offline_connectivity::{
    solve, solve_with_ids, DivideAndConquer, OfflineConnectivity, Scheduler, SegmentSchedule,
};
pub use rollback_dsu::{RollbackDsu, UndoUnionFind};
pub use timeline::{Edge, Query};

/// The fastest implemented scheduler on this crate.
pub type FastOfflineConnectivity = OfflineConnectivity<SegmentSchedule>;
