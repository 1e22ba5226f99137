use common::Region;
use nalgebra::Point3;
use smallvec::SmallVec;

pub(crate) const ROOT: u32 = 0;
pub(crate) const NO_NODE: u32 = u32::MAX;
pub(crate) const QUADRANTS: u32 = 4;

// Quadrant slots inside a child block, in walk order.
pub(crate) const NW: usize = 0;
pub(crate) const NE: usize = 1;
pub(crate) const SW: usize = 2;
pub(crate) const SE: usize = 3;

const QUERY_STACK_INLINE: usize = 64;

pub(crate) type NodeStack = SmallVec<[u32; QUERY_STACK_INLINE]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeState {
    Leaf,
    Internal,
}

/// Exact corners of a node. Siblings are cut from the parent's `min`, center and `max`
/// so neighbouring quadrants share bit-identical seams.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Extent {
    pub(crate) min: Point3<f32>,
    pub(crate) max: Point3<f32>,
}

impl Extent {
    #[inline(always)]
    pub(crate) fn from_region(region: &Region) -> Self {
        Self {
            min: region.min(),
            max: region.max(),
        }
    }

    #[inline(always)]
    pub(crate) fn to_region(self) -> Region {
        Region::from_min_max(self.min, self.max)
    }

    #[inline(always)]
    pub(crate) fn center(&self) -> Point3<f32> {
        nalgebra::center(&self.min, &self.max)
    }

    #[inline(always)]
    pub(crate) fn contains_point(&self, point: &Point3<f32>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    #[inline(always)]
    pub(crate) fn intersects(&self, other: &Extent) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Quadrant owning `point`: east when `x >= center.x`, north when `z >= center.z`.
    #[inline(always)]
    pub(crate) fn quadrant_index(&self, point: &Point3<f32>) -> usize {
        let center = self.center();
        let east = point.x >= center.x;
        let north = point.z >= center.z;
        match (north, east) {
            (true, false) => NW,
            (true, true) => NE,
            (false, false) => SW,
            (false, true) => SE,
        }
    }

    /// False once neither horizontal axis can be halved in `f32`: the center collapses onto
    /// a corner and a split would only repeat this extent.
    #[inline(always)]
    pub(crate) fn can_split(&self) -> bool {
        let center = self.center();
        (center.x > self.min.x && center.x < self.max.x)
            || (center.z > self.min.z && center.z < self.max.z)
    }

    /// Extent of one quadrant. The vertical span is kept whole.
    pub(crate) fn quadrant(&self, index: usize) -> Extent {
        let center = self.center();
        let (min_x, max_x) = match index {
            NW | SW => (self.min.x, center.x),
            _ => (center.x, self.max.x),
        };
        let (min_z, max_z) = match index {
            NW | NE => (center.z, self.max.z),
            _ => (self.min.z, center.z),
        };
        Extent {
            min: Point3::new(min_x, self.min.y, min_z),
            max: Point3::new(max_x, self.max.y, max_z),
        }
    }
}

pub(crate) struct Resident<T> {
    pub(crate) payload: T,
    pub(crate) location: Point3<f32>,
}

impl<T> Resident<T> {
    #[inline(always)]
    pub(crate) fn new(payload: T, location: Point3<f32>) -> Self {
        Self { payload, location }
    }
}
