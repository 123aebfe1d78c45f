//! The Kuhn-Munkres (Hungarian) algorithm, adapted for the square,
//! non-negative integer benefit matrices produced by
//! [`crate::cost_model`].
//!
//! The solver performs `n` outer phases, each of which augments the
//! matching by exactly one edge via a BFS over tight edges, interleaved
//! with dual-label relaxation whenever the BFS queue drains without
//! finding an augmenting path. See the module-level items below for the
//! named pieces of state the phase loop manipulates: [`DualLabels`],
//! [`Matching`], the internal alternating tree, and the internal slack
//! vector.

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Dual labels `lu` (left, i.e. duplicated-well labels) and `lv` (right,
/// i.e. house labels).
///
/// Feasibility holds throughout a solve: `lu[i] + lv[j] >= C[i][j]` for
/// every `i, j`. At termination, every matched edge is additionally tight
/// (`lu[i] + lv[Mu[i]] == C[i][Mu[i]]`), which certifies that the matching
/// is optimal.
#[derive(Clone, Debug)]
pub struct DualLabels {
    /// Labels of the left (duplicated-well) vertices.
    pub lu: Vec<i64>,
    /// Labels of the right (house) vertices.
    pub lv: Vec<i64>,
}

/// A bijection between left vertices (duplicated wells) and right vertices
/// (houses), represented as a pair of inverse arrays so that membership
/// and lookup are both O(1).
#[derive(Clone, Debug)]
pub struct Matching {
    mu: Vec<Option<usize>>,
    mv: Vec<Option<usize>>,
    matched_count: usize,
}

impl Matching {
    fn new(n: usize) -> Self {
        Matching {
            mu: vec![None; n],
            mv: vec![None; n],
            matched_count: 0,
        }
    }

    /// Smallest-index left vertex with no assigned right vertex, if any.
    /// Root selection for the next phase always picks this vertex, which
    /// makes phase order deterministic.
    fn first_unmatched(&self) -> Option<usize> {
        self.mu.iter().position(Option::is_none)
    }

    fn is_perfect(&self) -> bool {
        self.matched_count == self.mu.len()
    }

    /// Flip the matching along the alternating path that ends at the tight
    /// edge `(x_end, y_end)`, walking back to the phase root via `prev`.
    fn augment(&mut self, prev: &[Option<usize>], x_end: usize, y_end: usize) {
        let mut cur_left = x_end;
        let mut cur_right = y_end;
        loop {
            let previously_matched_right = self.mu[cur_left];
            self.mv[cur_right] = Some(cur_left);
            self.mu[cur_left] = Some(cur_right);
            match prev[cur_left] {
                Some(parent) => {
                    cur_left = parent;
                    cur_right = previously_matched_right
                        .expect("interior alternating-path vertex must have a prior match");
                }
                None => break,
            }
        }
        self.matched_count += 1;
    }

    /// The final permutation `Mu`, once the matching is perfect.
    fn into_permutation(self) -> Vec<usize> {
        self.mu
            .into_iter()
            .map(|m| m.expect("matching must be perfect before extraction"))
            .collect()
    }
}

/// Alternating-tree membership and parent pointers, rebuilt from scratch at
/// the start of every phase.
struct AlternatingTree {
    /// Left vertices currently in the tree.
    in_s: Vec<bool>,
    /// Right vertices currently in the tree.
    in_t: Vec<bool>,
    /// Parent left-vertex on the path back to the root. `None` for the
    /// root itself and for vertices not (yet) in `S`.
    prev: Vec<Option<usize>>,
}

impl AlternatingTree {
    fn new(n: usize) -> Self {
        AlternatingTree {
            in_s: vec![false; n],
            in_t: vec![false; n],
            prev: vec![None; n],
        }
    }

    fn reset(&mut self) {
        self.in_s.iter_mut().for_each(|b| *b = false);
        self.in_t.iter_mut().for_each(|b| *b = false);
        self.prev.iter_mut().for_each(|p| *p = None);
    }
}

/// `slack[j] = min_{i in S} (lu[i] + lv[j] - C[i][j])` for every right
/// vertex `j` not yet in `T`, plus `src[j]`, the `i` realising that
/// minimum. Rebuilt at root selection, then updated incrementally as left
/// vertices enter `S`.
struct Slack {
    slack: Vec<i64>,
    src: Vec<usize>,
}

impl Slack {
    fn new(n: usize) -> Self {
        Slack {
            slack: vec![0; n],
            src: vec![0; n],
        }
    }

    fn init_from_root(&mut self, root: usize, labels: &DualLabels, matrix: &Matrix<i64>) {
        for j in 0..self.slack.len() {
            self.slack[j] = labels.lu[root] + labels.lv[j] - matrix[&(root, j)];
            self.src[j] = root;
        }
    }

    /// Reduce slack against a newly added left vertex `x`.
    fn update_against(
        &mut self,
        x: usize,
        labels: &DualLabels,
        matrix: &Matrix<i64>,
        tree: &AlternatingTree,
    ) {
        for j in 0..self.slack.len() {
            if tree.in_t[j] {
                continue;
            }
            let candidate = labels.lu[x] + labels.lv[j] - matrix[&(x, j)];
            if candidate < self.slack[j] {
                self.slack[j] = candidate;
                self.src[j] = x;
            }
        }
    }
}

/// FIFO queue of left-vertex indices awaiting BFS expansion. Implemented as
/// a flat buffer with read/write cursors rather than a ring buffer proper,
/// since no phase ever enqueues more than `n` vertices (each left vertex
/// joins `S`, and hence the queue, at most once per phase).
struct BfsQueue {
    buf: Vec<usize>,
    read: usize,
    write: usize,
}

impl BfsQueue {
    fn new(n: usize) -> Self {
        BfsQueue {
            buf: vec![0; n],
            read: 0,
            write: 0,
        }
    }

    fn clear(&mut self) {
        self.read = 0;
        self.write = 0;
    }

    fn push(&mut self, x: usize) {
        self.buf[self.write] = x;
        self.write += 1;
    }

    fn pop(&mut self) -> Option<usize> {
        if self.read < self.write {
            let x = self.buf[self.read];
            self.read += 1;
            Some(x)
        } else {
            None
        }
    }
}

/// Result of a successful solve: the matching and the dual certificate of
/// its optimality.
#[derive(Clone, Debug)]
pub struct Solution {
    /// `Mu`: for each left vertex (duplicated well) `i`, the house it was
    /// matched to.
    pub matching: Vec<usize>,
    /// `sum_i C[i][Mu[i]]`.
    pub total_benefit: i64,
    /// Dual labels at termination; exposed so callers (and property tests)
    /// can independently verify feasibility and tightness.
    pub labels: DualLabels,
}

/// Solve the assignment problem for `matrix`, returning the permutation
/// that maximises total benefit.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if `matrix` is not square.
/// Returns [`Error::InvariantViolation`] if an internal invariant of the
/// algorithm is violated; this indicates a bug in the solver, not in the
/// caller's input, and is never expected to trigger.
pub fn solve(matrix: &Matrix<i64>) -> Result<Solution> {
    if !matrix.is_square() {
        return Err(Error::DimensionMismatch {
            expected: matrix.rows,
            got: matrix.columns,
        });
    }
    let n = matrix.rows;

    let mut labels = DualLabels {
        lu: (0..n)
            .map(|i| (0..n).map(|j| matrix[&(i, j)]).max().unwrap_or(0))
            .collect(),
        lv: vec![0; n],
    };
    let mut matching = Matching::new(n);
    let mut tree = AlternatingTree::new(n);
    let mut slack = Slack::new(n);
    let mut queue = BfsQueue::new(n);

    for _phase in 0..n {
        tree.reset();
        queue.clear();

        let root = matching
            .first_unmatched()
            .expect("a perfect matching must have an unmatched root on every non-final phase");
        tree.in_s[root] = true;
        tree.prev[root] = None;
        queue.push(root);
        slack.init_from_root(root, &labels, matrix);

        let (x_end, y_end) = loop {
            if let Some(endpoints) = bfs_expand(matrix, &labels, &mut tree, &mut slack, &mut queue, &matching) {
                break endpoints;
            }

            let delta = (0..n)
                .filter(|&j| !tree.in_t[j])
                .map(|j| slack.slack[j])
                .min()
                .expect("at least one right vertex is always outside T mid-phase");
            if delta == 0 {
                return Err(Error::InvariantViolation(
                    "zero slack remained after the BFS queue drained; a tight edge from S was \
                     not discovered during BFS expansion"
                        .to_string(),
                ));
            }

            for i in 0..n {
                if tree.in_s[i] {
                    labels.lu[i] -= delta;
                }
            }
            for j in 0..n {
                if tree.in_t[j] {
                    labels.lv[j] += delta;
                } else {
                    slack.slack[j] -= delta;
                }
            }

            if let Some(endpoints) = extend_tree(matrix, &labels, &mut tree, &mut slack, &mut queue, &matching) {
                break endpoints;
            }
        };

        matching.augment(&tree.prev, x_end, y_end);
    }

    debug_assert!(matching.is_perfect());
    for i in 0..n {
        for j in 0..n {
            debug_assert!(
                labels.lu[i] + labels.lv[j] >= matrix[&(i, j)],
                "feasibility lost at ({i}, {j})"
            );
        }
    }

    let total_benefit = (0..n)
        .map(|i| matrix[&(i, matching.mu[i].unwrap())])
        .sum();
    let permutation = matching.into_permutation();

    Ok(Solution {
        matching: permutation,
        total_benefit,
        labels,
    })
}

/// Step (a): drain the BFS queue across tight edges, growing `S`/`T` and
/// the slack vector as matched right vertices pull their partners in.
/// Returns the terminal `(x, y)` edge of an augmenting path if one is
/// found.
fn bfs_expand(
    matrix: &Matrix<i64>,
    labels: &DualLabels,
    tree: &mut AlternatingTree,
    slack: &mut Slack,
    queue: &mut BfsQueue,
    matching: &Matching,
) -> Option<(usize, usize)> {
    let n = matrix.rows;
    while let Some(x) = queue.pop() {
        for y in 0..n {
            if tree.in_t[y] || labels.lu[x] + labels.lv[y] != matrix[&(x, y)] {
                continue;
            }
            match matching.mv[y] {
                None => return Some((x, y)),
                Some(z) => {
                    tree.in_t[y] = true;
                    tree.in_s[z] = true;
                    tree.prev[z] = Some(x);
                    slack.update_against(z, labels, matrix, tree);
                    queue.push(z);
                }
            }
        }
    }
    None
}

/// Step (c): after a label relaxation, pull every right vertex whose slack
/// just hit zero into `T`, extending `S` with its match (or, if it is
/// exposed, returning it as the augmenting path's terminal edge).
fn extend_tree(
    matrix: &Matrix<i64>,
    labels: &DualLabels,
    tree: &mut AlternatingTree,
    slack: &mut Slack,
    queue: &mut BfsQueue,
    matching: &Matching,
) -> Option<(usize, usize)> {
    let n = matrix.rows;
    for y in 0..n {
        if tree.in_t[y] || slack.slack[y] != 0 {
            continue;
        }
        let x = slack.src[y];
        match matching.mv[y] {
            None => return Some((x, y)),
            Some(z) => {
                tree.in_t[y] = true;
                if !tree.in_s[z] {
                    tree.in_s[z] = true;
                    tree.prev[z] = Some(x);
                    slack.update_against(z, labels, matrix, tree);
                    queue.push(z);
                }
            }
        }
    }
    None
}
