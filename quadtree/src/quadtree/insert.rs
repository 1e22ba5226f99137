use super::*;
use log::{trace, warn};

impl<T> QuadTree<T> {
    /// Stores `resident` in the leaf owning its location, splitting full leaves on the
    /// way down. The location must already be known to lie inside the root extent.
    pub(crate) fn insert_resident(&mut self, resident: Resident<T>) {
        let mut idx = self.leaf_for_point(&resident.location);
        loop {
            let node = self.node(idx);
            if node.residents.len() < self.node_capacity {
                break;
            }
            if node.depth >= self.max_depth || !node.extent.can_split() {
                warn!(
                    "leaf {} at depth {} cannot split, grows past capacity {} ({} residents)",
                    idx,
                    node.depth,
                    self.node_capacity,
                    node.residents.len() + 1
                );
                break;
            }
            self.subdivide(idx);
            idx = self.child_for_point(idx, &resident.location);
        }
        self.node_mut(idx).residents.push(resident);
        self.len += 1;
    }

    /// Splits leaf `idx` into four quadrants and pushes its residents down. Every
    /// resident has exactly one owning quadrant, so none is lost.
    fn subdivide(&mut self, idx: u32) {
        let first = self.alloc_children(idx);
        let mut residents = std::mem::take(&mut self.node_mut(idx).residents);
        let extent = self.node(idx).extent;
        trace!(
            "subdivide node {} at depth {} ({} residents) into block {}",
            idx,
            self.node(idx).depth,
            residents.len(),
            first
        );
        for resident in residents.drain(..) {
            let child = first + extent.quadrant_index(&resident.location) as u32;
            self.node_mut(child).residents.push(resident);
        }
        // Keep the emptied buffer; it is refilled if the node is combined again.
        self.node_mut(idx).residents = residents;
    }
}
