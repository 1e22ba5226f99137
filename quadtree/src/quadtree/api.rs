use super::*;
use crate::error::{QuadtreeError, QuadtreeResult};
use log::debug;
use std::fmt;

impl<T> QuadTree<T> {
    /// Tree over `region` with the default leaf capacity of 4.
    pub fn new(region: Region) -> QuadtreeResult<Self> {
        Self::new_with_config(region, Config::default())
    }

    pub fn with_capacity(region: Region, node_capacity: usize) -> QuadtreeResult<Self> {
        Self::new_with_config(region, Config::with_capacity(node_capacity))
    }

    pub fn new_with_config(region: Region, config: Config) -> QuadtreeResult<Self> {
        if !region.is_valid() {
            return Err(QuadtreeError::InvalidRegion {
                center: region.center.into(),
                half_extents: region.half_extents.into(),
            });
        }
        if config.node_capacity == 0 {
            return Err(QuadtreeError::InvalidCapacity {
                capacity: config.node_capacity,
            });
        }
        Ok(Self::with_root(region, &config))
    }

    /// Adds `payload` at `location`.
    ///
    /// Returns `false` and drops the payload when the location lies outside the tree on
    /// any axis, vertical included.
    pub fn add(&mut self, payload: T, location: Point3<f32>) -> bool {
        if !self.root_extent().contains_point(&location) {
            debug!("rejected add at {:?}: outside {:?}", location, self.region);
            return false;
        }
        self.insert_resident(Resident::new(payload, location));
        true
    }

    /// Payloads whose recorded location lies inside `region`, produced lazily.
    pub fn query(&self, region: Region) -> RegionQuery<'_, T> {
        RegionQuery::new(self, &region)
    }

    /// Every payload in the tree.
    pub fn iter(&self) -> RegionQuery<'_, T> {
        RegionQuery::new(self, &self.region)
    }

    /// Drops all payloads and collapses the tree to a single root leaf.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        let root = self.node_mut(ROOT);
        root.residents.clear();
        root.first_child = 0;
        self.free_blocks.clear();
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn capacity(&self) -> usize {
        self.node_capacity
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth as usize
    }

    pub fn root_state(&self) -> NodeState {
        self.node(ROOT).state()
    }

    /// Live nodes, free blocks excluded.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free_blocks.len() * QUADRANTS as usize
    }

    pub fn leaf_count(&self) -> usize {
        let mut leaves = 0;
        self.for_each_node(|_, node| {
            if node.is_leaf() {
                leaves += 1;
            }
        });
        leaves
    }

    /// Depth of the deepest live node; a lone root is depth 0.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        self.for_each_node(|_, node| depth = depth.max(node.depth));
        depth as usize
    }

    /// Regions of all live nodes in walk order.
    pub fn all_node_regions(&self, regions: &mut Vec<Region>) {
        self.for_each_node(|_, node| regions.push(node.extent.to_region()));
    }
}

impl<T: Identity> QuadTree<T> {
    /// Removes `payload`, looking for it first where `location` says it is.
    ///
    /// With `search_out_of_location` the search widens to the rest of the tree when the
    /// recorded location has gone stale. A `location` outside the tree always fails.
    pub fn remove(
        &mut self,
        payload: &T,
        location: Point3<f32>,
        search_out_of_location: bool,
    ) -> bool {
        self.take_resident(payload, &location, search_out_of_location)
            .is_some()
    }

    /// Like [`QuadTree::remove`], handing back the stored payload.
    pub fn take(
        &mut self,
        payload: &T,
        location: Point3<f32>,
        search_out_of_location: bool,
    ) -> Option<T> {
        self.take_resident(payload, &location, search_out_of_location)
            .map(|resident| resident.payload)
    }

    /// Moves `payload` from `from` (which may be stale) to `to`.
    ///
    /// Fails without inserting anything when the payload cannot be found. When `to`
    /// lies outside the tree the payload has already been removed and is dropped.
    pub fn relocate(&mut self, payload: &T, from: Point3<f32>, to: Point3<f32>) -> bool {
        match self.take_resident(payload, &from, true) {
            Some(resident) => self.add(resident.payload, to),
            None => {
                debug!("relocate from {:?} found nothing to move", from);
                false
            }
        }
    }

    /// True when `payload` is recorded somewhere inside `region`.
    pub fn contains(&self, payload: &T, region: Region) -> bool {
        self.query(region).any(|candidate| candidate.is_same(payload))
    }
}

impl<'a, T> IntoIterator for &'a QuadTree<T> {
    type Item = &'a T;
    type IntoIter = RegionQuery<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Debug for QuadTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuadTree")
            .field("region", &self.region())
            .field("len", &self.len)
            .field("node_capacity", &self.node_capacity)
            .field("max_depth", &self.max_depth)
            .field("nodes", &self.node_count())
            .finish()
    }
}
