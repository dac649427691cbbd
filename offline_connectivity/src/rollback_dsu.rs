//! Disjoint-set union with exact undo.
//!
//! There is no path compression: `find` never writes, so every mutation is a merge and every merge
//! is described completely by one [`LogEntry`].

use std::fmt::{Debug, Formatter};

use debug_tree::{add_branch_to, AsTree, TreeBuilder};

pub type Node = usize;

/// Interface of a union-find that can undo its merges in LIFO order.
pub trait UndoUnionFind {
    /// New structure with n singleton groups.
    fn new(n: usize) -> Self;
    /// Representative of the group containing x. Panics if x is out of range.
    fn find(&self, x: Node) -> Node;
    /// Joins the groups of x and y. Returns false if they were already joined.
    /// Always records exactly one log entry, even when nothing changes.
    fn merge(&mut self, x: Node, y: Node) -> bool;
    /// Are x and y in the same group?
    fn connected(&self, x: Node, y: Node) -> bool {
        self.find(x) == self.find(y)
    }
    /// Current log length. Can be passed to [`UndoUnionFind::rollback_to`] later.
    fn checkpoint(&self) -> usize;
    /// Undoes the last merge call. Does nothing if there is none.
    fn rollback_one(&mut self);
    /// Undoes merge calls until the log length is `checkpoint`.
    /// Panics if `checkpoint` is greater than the current log length.
    fn rollback_to(&mut self, checkpoint: usize) {
        assert!(
            checkpoint <= self.checkpoint(),
            "rollback target {checkpoint} is past the current log length {}",
            self.checkpoint()
        );
        while self.checkpoint() > checkpoint {
            self.rollback_one();
        }
    }
}

/// One entry per merge call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogEntry {
    /// Both arguments already had the same root.
    NoOp,
    Merge {
        /// Was a root before the merge, now points to `surviving_root`.
        absorbed_root: Node,
        surviving_root: Node,
        /// Size of `surviving_root` before the merge.
        surviving_old_size: usize,
    },
}

/// Union by size, no path compression, with an operation log.
#[derive(Clone, PartialEq, Eq)]
pub struct RollbackDsu {
    parent: Vec<Node>,
    /// Only meaningful at roots.
    size: Vec<usize>,
    log: Vec<LogEntry>,
    components: usize,
}

impl RollbackDsu {
    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint groups.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Number of elements in the group containing x.
    pub fn component_size(&self, x: Node) -> usize {
        self.size[self.find(x)]
    }

    /// Entries recorded since creation, oldest first.
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    fn check(&self, x: Node) {
        assert!(
            x < self.len(),
            "element {x} out of range for a disjoint-set of {} elements",
            self.len()
        );
    }

    fn forest_dbg<T: AsTree>(&self, u: Node, children: &[Vec<Node>], tree: &T) {
        if children[u].is_empty() {
            add_branch_to!(*tree, "{u}");
            return;
        }
        add_branch_to!(*tree, "{u} (size {})", self.size[u]);
        for &c in &children[u] {
            self.forest_dbg(c, children, tree);
        }
    }
}

impl Debug for RollbackDsu {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut children = vec![vec![]; self.len()];
        for (u, &p) in self.parent.iter().enumerate() {
            if p != u {
                children[p].push(u);
            }
        }
        let builder = TreeBuilder::new();
        let _b = builder.add_branch(&format!(
            "RollbackDsu ({} components, log length {})",
            self.components,
            self.log.len()
        ));
        for u in 0..self.len() {
            if self.parent[u] == u {
                self.forest_dbg(u, &children, &builder);
            }
        }
        writeln!(f, "{}", builder.string())
    }
}

impl UndoUnionFind for RollbackDsu {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            log: Vec::new(),
            components: n,
        }
    }

    fn find(&self, mut x: Node) -> Node {
        self.check(x);
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    fn merge(&mut self, x: Node, y: Node) -> bool {
        let (rx, ry) = (self.find(x), self.find(y));
        if rx == ry {
            self.log.push(LogEntry::NoOp);
            return false;
        }
        // On ties the second root is absorbed.
        let (surviving_root, absorbed_root) = if self.size[rx] < self.size[ry] {
            (ry, rx)
        } else {
            (rx, ry)
        };
        self.log.push(LogEntry::Merge {
            absorbed_root,
            surviving_root,
            surviving_old_size: self.size[surviving_root],
        });
        self.parent[absorbed_root] = surviving_root;
        self.size[surviving_root] += self.size[absorbed_root];
        self.components -= 1;
        true
    }

    fn checkpoint(&self) -> usize {
        self.log.len()
    }

    fn rollback_one(&mut self) {
        match self.log.pop() {
            None | Some(LogEntry::NoOp) => {}
            Some(LogEntry::Merge {
                absorbed_root,
                surviving_root,
                surviving_old_size,
            }) => {
                self.parent[absorbed_root] = absorbed_root;
                self.size[surviving_root] = surviving_old_size;
                self.components += 1;
            }
        }
    }
}
