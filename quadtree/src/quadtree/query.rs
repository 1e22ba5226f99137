use super::*;
use std::iter::FusedIterator;
use std::slice;

/// Work done by a [`RegionQuery`] so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryStats {
    /// Nodes whose region met the query and whose residents and children were walked.
    pub node_visits: u64,
    /// Nodes rejected by the region test; nothing below them was touched.
    pub pruned_nodes: u64,
    /// Residents whose location was tested against the query.
    pub entity_visits: u64,
}

/// Lazy depth-first walk over the residents inside a query region.
///
/// Nodes are entered in pre-order with children in NW, NE, SW, SE order. A node whose
/// region misses the query is skipped together with its subtree. The walk holds a
/// shared borrow of the tree, so the tree cannot change underneath it.
pub struct RegionQuery<'a, T> {
    nodes: &'a [Node<T>],
    query: Extent,
    stack: NodeStack,
    residents: slice::Iter<'a, Resident<T>>,
    stats: QueryStats,
}

impl<'a, T> RegionQuery<'a, T> {
    pub(crate) fn new(tree: &'a QuadTree<T>, region: &Region) -> Self {
        let mut stack = NodeStack::new();
        stack.push(ROOT);
        Self {
            nodes: &tree.nodes,
            query: Extent::from_region(region),
            stack,
            residents: (&[]).iter(),
            stats: QueryStats::default(),
        }
    }

    pub fn stats(&self) -> QueryStats {
        self.stats
    }
}

impl<'a, T> Iterator for RegionQuery<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            for resident in self.residents.by_ref() {
                self.stats.entity_visits += 1;
                if self.query.contains_point(&resident.location) {
                    return Some(&resident.payload);
                }
            }

            let idx = self.stack.pop()?;
            let nodes = self.nodes;
            let node = &nodes[idx as usize];
            if !node.extent.intersects(&self.query) {
                self.stats.pruned_nodes += 1;
                continue;
            }
            self.stats.node_visits += 1;
            self.residents = node.residents.iter();
            if !node.is_leaf() {
                self.stack.extend(node.children().rev());
            }
        }
    }
}

impl<'a, T> FusedIterator for RegionQuery<'a, T> {}
