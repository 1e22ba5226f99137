use nalgebra::{Point3, Vector3};
use rand::Rng;

/// Axis-aligned box described by its center and per-axis half-extents.
///
/// `y` is the vertical axis. Every test on a region is closed: points lying exactly on a
/// face are inside.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Region {
    pub center: Point3<f32>,
    pub half_extents: Vector3<f32>,
}

impl Region {
    pub fn new(center: Point3<f32>, half_extents: Vector3<f32>) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Builds a region from its full size, like a `Bounds(center, size)` pair.
    pub fn from_center_size(center: Point3<f32>, size: Vector3<f32>) -> Self {
        Self::new(center, size * 0.5)
    }

    pub fn from_min_max(min: Point3<f32>, max: Point3<f32>) -> Self {
        Self {
            center: nalgebra::center(&min, &max),
            half_extents: (max - min) * 0.5,
        }
    }

    pub fn min(&self) -> Point3<f32> {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Point3<f32> {
        self.center + self.half_extents
    }

    pub fn size(&self) -> Vector3<f32> {
        self.half_extents * 2.0
    }

    /// True when every component is finite and no half-extent is negative.
    pub fn is_valid(&self) -> bool {
        self.center.iter().all(|c| c.is_finite())
            && self
                .half_extents
                .iter()
                .all(|h| h.is_finite() && *h >= 0.0)
    }

    pub fn contains_point(&self, point: &Point3<f32>) -> bool {
        let min = self.min();
        let max = self.max();
        (0..3).all(|axis| point[axis] >= min[axis] && point[axis] <= max[axis])
    }

    pub fn contains_region(&self, other: &Region) -> bool {
        self.contains_point(&other.min()) && self.contains_point(&other.max())
    }

    pub fn intersects(&self, other: &Region) -> bool {
        let min = self.min();
        let max = self.max();
        let other_min = other.min();
        let other_max = other.max();
        (0..3).all(|axis| min[axis] <= other_max[axis] && max[axis] >= other_min[axis])
    }

    /// Smallest region holding both `self` and `other`.
    pub fn union(&self, other: &Region) -> Region {
        Region::from_min_max(self.min().inf(&other.min()), self.max().sup(&other.max()))
    }

    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point3<f32> {
        let min = self.min();
        let max = self.max();
        Point3::new(
            rng.gen_range(min.x..=max.x),
            rng.gen_range(min.y..=max.y),
            rng.gen_range(min.z..=max.z),
        )
    }
}

impl Default for Region {
    fn default() -> Self {
        Self {
            center: Point3::origin(),
            half_extents: Vector3::zeros(),
        }
    }
}
