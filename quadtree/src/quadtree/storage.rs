use super::*;

pub(crate) struct Node<T> {
    pub(crate) extent: Extent,
    pub(crate) parent: u32,
    // First slot of the child block; 0 marks a leaf since the root is never a child.
    pub(crate) first_child: u32,
    pub(crate) depth: u32,
    pub(crate) residents: Vec<Resident<T>>,
}

impl<T> Node<T> {
    #[inline(always)]
    fn new_leaf(extent: Extent, parent: u32, depth: u32) -> Self {
        Self {
            extent,
            parent,
            first_child: 0,
            depth,
            residents: Vec::new(),
        }
    }

    #[inline(always)]
    pub(crate) fn is_leaf(&self) -> bool {
        self.first_child == 0
    }

    #[inline(always)]
    pub(crate) fn children(&self) -> std::ops::Range<u32> {
        self.first_child..self.first_child + QUADRANTS
    }

    #[inline(always)]
    pub(crate) fn state(&self) -> NodeState {
        if self.is_leaf() {
            NodeState::Leaf
        } else {
            NodeState::Internal
        }
    }
}

/// Spatial index over a fixed volume.
///
/// Payloads are compared by identity only (see [`Identity`]). Slot 0 of the arena is
/// the root; every other live slot belongs to a block of four siblings. Released
/// blocks are kept on a free list and handed out again by the next split.
pub struct QuadTree<T> {
    pub(crate) region: Region,
    pub(crate) nodes: Vec<Node<T>>,
    pub(crate) free_blocks: Vec<u32>,
    pub(crate) node_capacity: usize,
    pub(crate) max_depth: u32,
    pub(crate) len: usize,
}

impl<T> QuadTree<T> {
    pub(crate) fn with_root(region: Region, config: &Config) -> Self {
        let mut nodes = Vec::with_capacity(config.arena_slots());
        nodes.push(Node::new_leaf(Extent::from_region(&region), NO_NODE, 0));
        Self {
            region,
            nodes,
            free_blocks: Vec::new(),
            node_capacity: config.node_capacity,
            max_depth: u32::try_from(config.max_depth).unwrap_or(u32::MAX),
            len: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn node(&self, idx: u32) -> &Node<T> {
        &self.nodes[idx as usize]
    }

    #[inline(always)]
    pub(crate) fn node_mut(&mut self, idx: u32) -> &mut Node<T> {
        &mut self.nodes[idx as usize]
    }

    #[inline(always)]
    pub(crate) fn root_extent(&self) -> Extent {
        self.node(ROOT).extent
    }

    /// Turns leaf `parent` into an internal node with four empty leaves and returns the
    /// first child slot.
    pub(crate) fn alloc_children(&mut self, parent: u32) -> u32 {
        let (extent, depth) = {
            let node = self.node(parent);
            debug_assert!(node.is_leaf(), "node {} is already split", parent);
            (node.extent, node.depth + 1)
        };
        let first = match self.free_blocks.pop() {
            Some(first) => {
                for quadrant in 0..QUADRANTS {
                    let child = self.node_mut(first + quadrant);
                    debug_assert!(child.residents.is_empty());
                    child.extent = extent.quadrant(quadrant as usize);
                    child.parent = parent;
                    child.first_child = 0;
                    child.depth = depth;
                }
                first
            }
            None => {
                let first = self.nodes.len() as u32;
                for quadrant in 0..QUADRANTS {
                    self.nodes.push(Node::new_leaf(
                        extent.quadrant(quadrant as usize),
                        parent,
                        depth,
                    ));
                }
                first
            }
        };
        self.node_mut(parent).first_child = first;
        first
    }

    /// Detaches the child block of `parent`, which becomes a leaf again. The caller has
    /// already moved the children's residents out.
    pub(crate) fn free_children(&mut self, parent: u32) {
        let first = self.node(parent).first_child;
        debug_assert!(first != 0, "node {} has no children", parent);
        self.node_mut(parent).first_child = 0;
        self.free_blocks.push(first);
    }

    #[inline(always)]
    pub(crate) fn child_for_point(&self, parent: u32, point: &Point3<f32>) -> u32 {
        let node = self.node(parent);
        node.first_child + node.extent.quadrant_index(point) as u32
    }

    /// Leaf owning `point`. The point must lie inside the root extent.
    pub(crate) fn leaf_for_point(&self, point: &Point3<f32>) -> u32 {
        let mut idx = ROOT;
        while !self.node(idx).is_leaf() {
            idx = self.child_for_point(idx, point);
        }
        idx
    }

    /// Live nodes in pre-order, children walked NW, NE, SW, SE.
    pub(crate) fn for_each_node<F>(&self, mut f: F)
    where
        F: FnMut(u32, &Node<T>),
    {
        let mut stack = NodeStack::new();
        stack.push(ROOT);
        while let Some(idx) = stack.pop() {
            let node = self.node(idx);
            f(idx, node);
            if !node.is_leaf() {
                stack.extend(node.children().rev());
            }
        }
    }
}
