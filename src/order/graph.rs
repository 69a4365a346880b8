//! Constraint graph and topological ordering
//!
//! The sweep emits pairwise paint-order constraints; this module collects
//! them into a directed graph and linearizes it. Everything here is
//! per-call scratch state, created for one traversal and dropped with it.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::warn;

/// Directed graph of paint-order constraints.
///
/// Nodes are indices into the caller's item list. An edge `a -> b` records
/// that `a` lies behind `b` and must be painted before it.
#[derive(Debug)]
pub(crate) struct ConstraintGraph {
    successors: Vec<Vec<usize>>,
    in_degree: Vec<usize>,
}

impl ConstraintGraph {
    pub fn new(node_count: usize) -> Self {
        Self {
            successors: vec![Vec::new(); node_count],
            in_degree: vec![0; node_count],
        }
    }

    /// Record that `behind` must be painted before `front`
    pub fn add_order(&mut self, behind: usize, front: usize) {
        self.successors[behind].push(front);
        self.in_degree[front] += 1;
    }

    /// Linearize the graph so every edge source precedes its target.
    ///
    /// Kahn's algorithm; among ready nodes the lowest index (declaration
    /// order) is emitted first, making the result deterministic. Malformed
    /// input can produce cycles; when no node is ready, the unemitted node
    /// with the lowest index is released anyway, discarding the constraints
    /// that would have closed the cycle. The result is always a complete
    /// permutation of the nodes.
    pub fn topological(mut self) -> Vec<usize> {
        let node_count = self.successors.len();
        let mut order = Vec::with_capacity(node_count);
        let mut emitted = vec![false; node_count];
        let mut ready: BinaryHeap<Reverse<usize>> = self
            .in_degree
            .iter()
            .enumerate()
            .filter(|(_, &degree)| degree == 0)
            .map(|(node, _)| Reverse(node))
            .collect();

        while order.len() < node_count {
            let node = match ready.pop() {
                Some(Reverse(node)) => node,
                None => {
                    // Cycle: release the earliest-declared remaining node.
                    let node = (0..node_count)
                        .find(|&candidate| !emitted[candidate])
                        .unwrap_or(0);
                    warn!(
                        "paint-order constraints contain a cycle; releasing node {} in declaration order",
                        node
                    );
                    self.in_degree[node] = 0;
                    node
                }
            };
            emitted[node] = true;
            order.push(node);
            for &next in &self.successors[node] {
                if emitted[next] {
                    continue;
                }
                self.in_degree[next] -= 1;
                if self.in_degree[next] == 0 {
                    ready.push(Reverse(next));
                }
            }
        }

        order
    }
}
