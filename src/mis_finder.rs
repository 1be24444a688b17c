//! Maximum independent set of a tree in `O(n)`.
//!
//! The set is computed with a two-state dynamic program over the tree rooted at a given vertex:
//! * `include[u]`: size of a largest independent set in the subtree of `u` that contains `u`.
//! * `exclude[u]`: size of a largest independent set in the subtree of `u` that does not contain
//!   `u`.
//!
//! ```text
//! include[u] = 1 + Σ exclude[c]
//! exclude[u] =     Σ max(include[c], exclude[c])
//! ```
//! where `c` ranges over the children of `u`. Taking `u` forbids its children, and `exclude[c]`
//! already accounts for the best choice among the grandchildren of `u`.
//!
//! A second, top-down pass rebuilds one optimal set from the two arrays. Both passes run on an
//! explicit stack, so the depth of the tree is only bounded by memory.

use crate::cust_error::ProcessingError;
use crate::tree::{Tree, NO_PARENT};
use log::{info, trace};
use std::cmp::max;
use std::io::{self, Write};

/// The size of a maximum independent set and one set of that size, in ascending order.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct MisResult {
    max_size: usize,
    set: Vec<usize>,
}

impl MisResult {

    pub fn new(max_size: usize, set: Vec<usize>) -> Self {
        MisResult { max_size, set }
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn set(&self) -> &[usize] {
        &self.set
    }

    pub fn into_set(self) -> Vec<usize> {
        self.set
    }

    /// Writes the result as
    /// ```text
    /// MIS_size=<k>
    /// MIS_nodes=[v_1, v_2, ...]
    /// ```
    pub fn write_result<W: Write>(&self, mut out: W) -> Result<(), io::Error> {
        writeln!(out, "MIS_size={}", self.max_size)?;
        writeln!(out, "MIS_nodes={:?}", self.set)?;
        Ok(())
    }
}

/// The `include`/`exclude` arrays of the dynamic program, indexed by vertex. Entry 0 is unused.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct DpTable {
    include: Vec<usize>,
    exclude: Vec<usize>,
}

impl DpTable {

    pub fn include(&self) -> &[usize] {
        &self.include
    }

    pub fn exclude(&self) -> &[usize] {
        &self.exclude
    }

    /// Size of a largest independent set in the subtree of `node`.
    pub fn best(&self, node: usize) -> usize {
        max(self.include[node], self.exclude[node])
    }

    /// Whether `node` is taken when its parent is not. Ties take the vertex.
    pub fn prefers_include(&self, node: usize) -> bool {
        self.include[node] >= self.exclude[node]
    }
}

/// One frame of the explicit DFS stack.
struct Frame {
    node: usize,
    parent: usize,
    /// Index of the next neighbor of `node` to look at.
    next: usize,
}

/// Solver for a fixed tree and root.
#[derive(Debug, Clone)]
pub struct MisFinder<'a> {
    tree: &'a Tree,
    root: usize,
}

impl<'a> MisFinder<'a> {

    /// Returns a `ProcessingError` if `root` is not a vertex of `tree`.
    pub fn new(tree: &'a Tree, root: usize) -> Result<Self, ProcessingError> {
        if root < 1 || root > tree.size() {
            return Err(ProcessingError::InvalidParameter(
                format!("root {} is not in [1, {}]", root, tree.size())))
        }
        Ok(MisFinder { tree, root })
    }

    /// Computes the size of a maximum independent set and one witnessing set.
    pub fn solve(&self) -> MisResult {
        info!("Searching a maximum independent set, root = {}.", self.root);
        let dp = self.dp_table();
        let best = dp.best(self.root);
        info!("DP done: include[root]={}, exclude[root]={}, best={}.",
            dp.include[self.root], dp.exclude[self.root], best);

        let set = reconstruct(self.tree, self.root, &dp.include, &dp.exclude);
        info!("Set reconstructed, |S| = {}.", set.len());
        debug_assert_eq!(set.len(), best);
        MisResult::new(best, set)
    }

    /// Runs the bottom-up pass and returns both arrays.
    ///
    /// Children are folded into their parent in neighbor order when their frame is popped, i.e.
    /// in post-order.
    pub fn dp_table(&self) -> DpTable {
        let n = self.tree.size();
        let mut include = vec![0; n + 1];
        let mut exclude = vec![0; n + 1];

        include[self.root] = 1;
        trace!("DFS u={} (parent={})", self.root, NO_PARENT);
        let mut stack = vec![Frame { node: self.root, parent: NO_PARENT, next: 0 }];
        while let Some(frame) = stack.last_mut() {
            let neighbors = self.tree.neighbors(frame.node);
            if frame.next < neighbors.len() {
                let child = neighbors[frame.next];
                frame.next += 1;
                if child == frame.parent {
                    continue
                }
                let node = frame.node;
                trace!("DFS u={} (parent={})", child, node);
                include[child] = 1;
                exclude[child] = 0;
                stack.push(Frame { node: child, parent: node, next: 0 });
            } else {
                let (node, parent) = (frame.node, frame.parent);
                stack.pop();
                trace!("DP[u={}]: include={}, exclude={}", node, include[node], exclude[node]);
                if parent != NO_PARENT {
                    include[parent] += exclude[node];
                    exclude[parent] += max(include[node], exclude[node]);
                }
            }
        }
        DpTable { include, exclude }
    }
}

/// Computes a maximum independent set of `tree` rooted at `root`.
pub fn solve(tree: &Tree, root: usize) -> Result<MisResult, ProcessingError> {
    Ok(MisFinder::new(tree, root)?.solve())
}

/// Rebuilds one optimal set from the DP arrays, top-down from `root`.
///
/// The root is taken iff `include[root] >= exclude[root]`. A taken vertex forces all its
/// children out; a vertex that is not taken lets each child `v` decide on its own, taking it iff
/// `include[v] >= exclude[v]`. The returned set is sorted ascending.
pub fn reconstruct(tree: &Tree, root: usize, include: &[usize], exclude: &[usize]) -> Vec<usize> {
    let mut set = Vec::with_capacity(max(include[root], exclude[root]));
    // (node, parent, take)
    let mut stack = vec![(root, NO_PARENT, include[root] >= exclude[root])];
    while let Some((node, parent, take)) = stack.pop() {
        if take {
            set.push(node);
            trace!("Taking u={}, its children are left out.", node);
        } else {
            trace!("Leaving out u={}, children pick their best state.", node);
        }
        // reversed, so children are popped in neighbor order
        for &child in tree.neighbors(node).iter().rev() {
            if child == parent {
                continue
            }
            let take_child = !take && include[child] >= exclude[child];
            stack.push((child, node, take_child));
        }
    }
    set.sort_unstable();
    info!("S = {:?}", set);
    set
}
