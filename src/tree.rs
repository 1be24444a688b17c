//! Implementation of a simple, undirected tree data structure: a vertex-indexed adjacency list
//! that is built once and read-only afterwards.

use crate::cust_error::{ImportError, ProcessingError};
use crate::scanner::Scanner;
use fxhash::FxHashSet;
use log::{debug, warn};
use rand::Rng;

/// Parent of the root during rooted traversals. Vertex ids start at 1.
pub const NO_PARENT: usize = 0;

/// An undirected tree on the vertices `1..=n`. Index 0 is reserved and has no neighbors.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Tree {
    n: usize,
    adj_list: Vec<Vec<usize>>,
    num_edges: usize,
}

/// A tree read from an input stream together with the requested root.
#[derive(Debug)]
pub struct TreeInput {
    pub tree: Tree,
    pub root: usize,
    /// Number of tokens found after the root; they are ignored.
    pub trailing_tokens: usize,
}

// Static functions
impl Tree {

    /// Creates a tree of `n` vertices without edges.
    pub fn new(n: usize) -> Result<Self, ProcessingError> {
        if n < 1 {
            return Err(ProcessingError::InvalidParameter("A tree needs at least one vertex.".to_owned()))
        }
        Ok(Tree {
            n,
            adj_list: vec![Vec::new(); n + 1],
            num_edges: 0,
        })
    }

    /// Creates a tree of `n` vertices and inserts `edges` in the given order.
    pub fn with_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, ProcessingError> {
        let mut tree = Tree::new(n)?;
        for &(u, v) in edges {
            tree.add_edge(u, v);
        }
        Ok(tree)
    }

    /// Returns the number of vertices of `self`.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Returns the number of inserted edges.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns the neighbors of `node` in insertion order.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adj_list[node]
    }

    pub fn degree(&self, node: usize) -> usize {
        self.adj_list[node].len()
    }

    /// Returns an `Iterator` over all vertices `1..=n`.
    pub fn nodes(&self) -> impl Iterator<Item=usize> {
        1..=self.n
    }

    /// Returns an iterator over all inserted edges as `(u, v)` with `u <= v`. Parallel edges are
    /// reported once per insertion.
    pub fn edges(&self) -> impl Iterator<Item=(usize, usize)> + '_ {
        self.adj_list
            .iter()
            .enumerate()
            .flat_map(|(u, adj)| {
                let mut loop_seen = false;
                adj.iter().filter_map(move |&v| {
                    if u < v {
                        Some((u, v))
                    } else if u == v {
                        // a self-loop shows up twice in its own list
                        loop_seen = !loop_seen;
                        if loop_seen { Some((u, v)) } else { None }
                    } else {
                        None
                    }
                })
            })
    }

    /// Checks that `self` is a tree: no self-loops, no parallel edges, exactly `n - 1` edges and
    /// every vertex reachable from vertex 1.
    pub fn validate(&self) -> Result<(), ProcessingError> {
        let mut seen: FxHashSet<(usize, usize)> = FxHashSet::default();
        for (u, v) in self.edges() {
            if u == v {
                return Err(ProcessingError::GraphError(format!("self-loop at vertex {}", u)))
            }
            if !seen.insert((u, v)) {
                return Err(ProcessingError::GraphError(format!("duplicate edge {} {}", u, v)))
            }
        }
        if self.num_edges != self.n - 1 {
            return Err(ProcessingError::GraphError(
                format!("expected {} edges, found {}", self.n - 1, self.num_edges)))
        }
        let reached = self.reachable(1);
        if reached != self.n {
            return Err(ProcessingError::GraphError(
                format!("only {} of {} vertices are reachable from vertex 1", reached, self.n)))
        }
        Ok(())
    }

    /// Returns the number of vertices reachable from `node`, including `node`.
    pub fn reachable(&self, node: usize) -> usize {
        let mut marked = vec![false; self.n + 1];
        let mut queue = vec![node];
        let mut count = 0;
        while let Some(next) = queue.pop() {
            if marked[next] {
                continue
            }
            marked[next] = true;
            count += 1;
            queue.extend(self.adj_list[next].iter().filter(|&&v| !marked[v]));
        }
        count
    }

    /// Checks if `set` is an independent set of `self`: all vertices exist, none is repeated and
    /// no edge has both endpoints in `set`.
    pub fn validate_independent_set(&self, set: &[usize]) -> bool {
        let mut members: FxHashSet<usize> = FxHashSet::default();
        for &node in set {
            if node < 1 || node > self.n || !members.insert(node) {
                return false
            }
        }
        self.edges().all(|(u, v)| !(members.contains(&u) && members.contains(&v)))
    }
}

// Construction
impl Tree {

    /// Inserts the undirected edge `{u, v}`. Both vertices must be in `1..=n`; no check for
    /// parallel edges or self-loops is done.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        self.adj_list[u].push(v);
        self.adj_list[v].push(u);
        self.num_edges += 1;
    }

    /// Reads a tree in the format
    /// ```text
    /// N
    /// u_1 v_1
    /// ...
    /// u_{N-1} v_{N-1}
    /// [root]
    /// ```
    /// from `scanner`. The root defaults to 1. Every vertex, including the root, must lie in
    /// `1..=N`.
    pub fn read_input(scanner: &mut Scanner) -> Result<TreeInput, ImportError> {
        let n_raw = scanner.next_int("number of vertices")?;
        if n_raw < 1 {
            return Err(ImportError::InvalidNodeCount(n_raw))
        }
        let n = usize::try_from(n_raw).map_err(|_| ImportError::InvalidNodeCount(n_raw))?;
        // every edge takes at least 4 bytes: two separators and two one-digit vertices
        if n - 1 > scanner.remaining_bytes() / 4 {
            return Err(ImportError::UnexpectedEof("edge endpoint"))
        }
        let mut tree = Tree::new(n).map_err(|_| ImportError::InvalidNodeCount(n_raw))?;
        for _ in 1..n {
            // <u> <v>
            let u = Self::vertex(scanner.next_int("edge endpoint")?, n)?;
            let v = Self::vertex(scanner.next_int("edge endpoint")?, n)?;
            tree.add_edge(u, v);
        }
        let root = match scanner.try_next_int()? {
            Some(r) => Self::vertex(r, n)?,
            None => 1,
        };
        let trailing_tokens = scanner.skip_remaining();
        if trailing_tokens > 0 {
            warn!("Ignoring {} token(s) after the root.", trailing_tokens);
        }
        debug!("Read tree with {} vertices and {} edges, root {}.", n, tree.num_edges(), root);
        Ok(TreeInput { tree, root, trailing_tokens })
    }

    fn vertex(raw: i64, n: usize) -> Result<usize, ImportError> {
        match usize::try_from(raw) {
            Ok(v) if v >= 1 && v <= n => Ok(v),
            _ => Err(ImportError::VertexOutOfRange { vertex: raw, n }),
        }
    }
}

// Generators
impl Tree {

    /// The path `1 - 2 - ... - n`.
    pub fn path(n: usize) -> Result<Self, ProcessingError> {
        let mut tree = Tree::new(n)?;
        for v in 2..=n {
            tree.add_edge(v - 1, v);
        }
        Ok(tree)
    }

    /// The star with center 1 and leaves `2..=n`.
    pub fn star(n: usize) -> Result<Self, ProcessingError> {
        let mut tree = Tree::new(n)?;
        for v in 2..=n {
            tree.add_edge(1, v);
        }
        Ok(tree)
    }

    /// A random recursive tree: every vertex `v > 1` is attached to a vertex drawn uniformly from
    /// `1..v`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Result<Self, ProcessingError> {
        let mut tree = Tree::new(n)?;
        for v in 2..=n {
            let parent = rng.gen_range(1..v);
            tree.add_edge(parent, v);
        }
        Ok(tree)
    }

    /// A path `1 - ... - s` with `s = ceil(n / 2)` and the remaining vertices hung on random
    /// path vertices.
    pub fn random_caterpillar<R: Rng>(n: usize, rng: &mut R) -> Result<Self, ProcessingError> {
        let mut tree = Tree::new(n)?;
        let spine = (n + 1) / 2;
        for v in 2..=spine {
            tree.add_edge(v - 1, v);
        }
        for v in spine + 1..=n {
            let anchor = rng.gen_range(1..=spine);
            tree.add_edge(anchor, v);
        }
        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn read(input: &str) -> Result<TreeInput, ImportError> {
        Tree::read_input(&mut Scanner::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn new_test() {
        assert!(Tree::new(0).is_err());
        let tree = Tree::new(1).unwrap();
        assert_eq!(tree.size(), 1);
        assert!(tree.neighbors(0).is_empty());
        assert!(tree.neighbors(1).is_empty());
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn neighbor_order_test() {
        let tree = Tree::with_edges(5, &[(3, 1), (1, 5), (1, 2), (4, 1)]).unwrap();
        assert_eq!(tree.neighbors(1), &[3, 5, 2, 4]);
        assert_eq!(tree.neighbors(5), &[1]);
        assert!(tree.neighbors(0).is_empty());
        let degree_sum: usize = tree.nodes().map(|v| tree.degree(v)).sum();
        assert_eq!(degree_sum, 2 * (tree.size() - 1));
        let mut edges: Vec<_> = tree.edges().collect();
        edges.sort();
        assert_eq!(edges, vec![(1, 2), (1, 3), (1, 4), (1, 5)]);
    }

    #[test]
    fn read_input_test() {
        let input = read("5\n1 2\n2 3\n3 4\n4 5\n").unwrap();
        assert_eq!(input.tree.size(), 5);
        assert_eq!(input.tree.num_edges(), 4);
        assert_eq!(input.root, 1);
        assert_eq!(input.trailing_tokens, 0);

        let input = read("3 1 2 2 3 2 7 7").unwrap();
        assert_eq!(input.root, 2);
        assert_eq!(input.trailing_tokens, 2);
    }

    #[test]
    fn read_input_errors_test() {
        assert!(matches!(read(""), Err(ImportError::UnexpectedEof(_))));
        assert!(matches!(read("3\n1 2\n2"), Err(ImportError::UnexpectedEof(_))));
        assert!(matches!(read("0\n"), Err(ImportError::InvalidNodeCount(0))));
        assert!(matches!(read("-3\n"), Err(ImportError::InvalidNodeCount(-3))));
        assert!(matches!(read("2\n1 x\n"), Err(ImportError::BadIntError(_))));
        assert!(matches!(read("2\n1 3\n"), Err(ImportError::VertexOutOfRange { vertex: 3, n: 2 })));
        assert!(matches!(read("2\n0 1\n"), Err(ImportError::VertexOutOfRange { vertex: 0, .. })));
        assert!(matches!(read("2\n1 2\n5\n"), Err(ImportError::VertexOutOfRange { vertex: 5, .. })));
        // the count is checked against the input length before anything is allocated
        assert!(matches!(read("9223372036854775807\n"), Err(ImportError::UnexpectedEof(_))));
        assert!(matches!(read("4000000000\n1 2\n"), Err(ImportError::UnexpectedEof(_))));
        assert!(matches!(read("3\n1 2\n2"), Err(ImportError::UnexpectedEof(_))));
        assert!(read("3\n1 2 2 3").is_ok());
    }

    #[test]
    fn validate_test() {
        assert!(Tree::path(6).unwrap().validate().is_ok());
        // cycle 1-2-3 plus isolated 4
        let cyclic = Tree::with_edges(4, &[(1, 2), (2, 3), (3, 1)]).unwrap();
        assert!(matches!(cyclic.validate(), Err(ProcessingError::GraphError(_))));
        let parallel = Tree::with_edges(3, &[(1, 2), (2, 1)]).unwrap();
        assert!(matches!(parallel.validate(), Err(ProcessingError::GraphError(_))));
        let self_loop = Tree::with_edges(2, &[(2, 2)]).unwrap();
        assert!(matches!(self_loop.validate(), Err(ProcessingError::GraphError(_))));
        let too_few = Tree::with_edges(3, &[(1, 2)]).unwrap();
        assert!(matches!(too_few.validate(), Err(ProcessingError::GraphError(_))));
    }

    #[test]
    fn validate_independent_set_test() {
        let tree = Tree::path(5).unwrap();
        assert!(tree.validate_independent_set(&[1, 3, 5]));
        assert!(tree.validate_independent_set(&[]));
        assert!(!tree.validate_independent_set(&[1, 2]));
        assert!(!tree.validate_independent_set(&[1, 1]));
        assert!(!tree.validate_independent_set(&[0]));
        assert!(!tree.validate_independent_set(&[6]));
    }

    #[test]
    fn generators_test() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 1..40 {
            assert!(Tree::path(n).unwrap().validate().is_ok());
            assert!(Tree::star(n).unwrap().validate().is_ok());
            assert!(Tree::random(n, &mut rng).unwrap().validate().is_ok());
            assert!(Tree::random_caterpillar(n, &mut rng).unwrap().validate().is_ok());
        }
        assert_eq!(Tree::star(5).unwrap().degree(1), 4);
    }
}
