use offline_connectivity::rollback_dsu::*;

/// Group labels with a full copy per merge call. Everything is linear time.
#[derive(Debug, Clone)]
pub struct SlowDsu {
    group: Vec<usize>,
    history: Vec<Vec<usize>>,
}

impl UndoUnionFind for SlowDsu {
    fn new(n: usize) -> Self {
        Self {
            group: (0..n).collect(),
            history: vec![],
        }
    }

    fn find(&self, x: Node) -> Node {
        self.group[x]
    }

    fn merge(&mut self, x: Node, y: Node) -> bool {
        self.history.push(self.group.clone());
        let (gx, gy) = (self.group[x], self.group[y]);
        if gx == gy {
            return false;
        }
        for g in self.group.iter_mut() {
            if *g == gy {
                *g = gx;
            }
        }
        true
    }

    fn checkpoint(&self) -> usize {
        self.history.len()
    }

    fn rollback_one(&mut self) {
        if let Some(group) = self.history.pop() {
            self.group = group;
        }
    }
}

/// Wraps another structure and counts what goes through it.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct CountingDsu<D> {
    pub inner: D,
    pub merges: usize,
    pub undone: usize,
}

impl<D: UndoUnionFind> UndoUnionFind for CountingDsu<D> {
    fn new(n: usize) -> Self {
        Self {
            inner: D::new(n),
            merges: 0,
            undone: 0,
        }
    }

    fn find(&self, x: Node) -> Node {
        self.inner.find(x)
    }

    fn merge(&mut self, x: Node, y: Node) -> bool {
        self.merges += 1;
        self.inner.merge(x, y)
    }

    fn checkpoint(&self) -> usize {
        self.inner.checkpoint()
    }

    fn rollback_one(&mut self) {
        if self.inner.checkpoint() > 0 {
            self.undone += 1;
        }
        self.inner.rollback_one()
    }
}
