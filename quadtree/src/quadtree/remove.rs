use super::*;
use log::{debug, trace};

impl<T: Identity> QuadTree<T> {
    /// Finds `payload` and unlinks it, combining emptied branches on the way out.
    ///
    /// The narrow phase follows the leaf chain owning `location`. When that misses and
    /// `search_out_of_location` is set, the search widens one ancestor at a time,
    /// scanning every sibling branch not yet explored, until the root has been covered.
    pub(crate) fn take_resident(
        &mut self,
        payload: &T,
        location: &Point3<f32>,
        search_out_of_location: bool,
    ) -> Option<Resident<T>> {
        if !self.root_extent().contains_point(location) {
            return None;
        }

        let leaf = self.leaf_for_point(location);
        if let Some(slot) = position_in(&self.node(leaf).residents, payload) {
            return Some(self.detach(leaf, slot));
        }
        if !search_out_of_location {
            return None;
        }

        let mut explored = leaf;
        let mut ancestor = self.node(leaf).parent;
        while ancestor != NO_NODE {
            for child in self.node(ancestor).children() {
                if child == explored {
                    continue;
                }
                if let Some((idx, slot)) = self.find_in_subtree(child, payload) {
                    debug!(
                        "recovered stale entry in node {} (recorded location owned by leaf {})",
                        idx, leaf
                    );
                    return Some(self.detach(idx, slot));
                }
            }
            explored = ancestor;
            ancestor = self.node(ancestor).parent;
        }
        None
    }

    /// Identity-only scan of the subtree rooted at `start`.
    fn find_in_subtree(&self, start: u32, payload: &T) -> Option<(u32, usize)> {
        let mut stack = NodeStack::new();
        stack.push(start);
        while let Some(idx) = stack.pop() {
            let node = self.node(idx);
            if let Some(slot) = position_in(&node.residents, payload) {
                return Some((idx, slot));
            }
            if !node.is_leaf() {
                stack.extend(node.children().rev());
            }
        }
        None
    }
}

impl<T> QuadTree<T> {
    fn detach(&mut self, idx: u32, slot: usize) -> Resident<T> {
        let resident = self.node_mut(idx).residents.swap_remove(slot);
        self.len -= 1;
        self.combine_upwards(idx);
        resident
    }

    /// Combines ancestors of `idx`, lowest first, for as long as they qualify. An
    /// ancestor that does not qualify has a grandchild or too many residents below it,
    /// and so does everything above it.
    fn combine_upwards(&mut self, idx: u32) {
        let mut ancestor = self.node(idx).parent;
        while ancestor != NO_NODE && self.is_ready_for_combine(ancestor) {
            self.combine(ancestor);
            ancestor = self.node(ancestor).parent;
        }
    }

    pub(crate) fn is_ready_for_combine(&self, idx: u32) -> bool {
        let node = self.node(idx);
        if node.is_leaf() {
            return false;
        }
        let mut total = 0;
        for child in node.children() {
            let child = self.node(child);
            if !child.is_leaf() {
                return false;
            }
            total += child.residents.len();
        }
        total <= self.node_capacity
    }

    fn combine(&mut self, idx: u32) {
        let mut residents = std::mem::take(&mut self.node_mut(idx).residents);
        for child in self.node(idx).children() {
            residents.append(&mut self.nodes[child as usize].residents);
        }
        trace!(
            "combine node {} at depth {} ({} residents)",
            idx,
            self.node(idx).depth,
            residents.len()
        );
        self.node_mut(idx).residents = residents;
        self.free_children(idx);
    }
}

#[inline(always)]
fn position_in<T: Identity>(residents: &[Resident<T>], payload: &T) -> Option<usize> {
    residents
        .iter()
        .position(|resident| resident.payload.is_same(payload))
}
