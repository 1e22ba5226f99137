use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadtreeError {
    #[error(
        "region must be finite with non-negative half-extents (center: {center:?}, half_extents: {half_extents:?})"
    )]
    InvalidRegion {
        center: [f32; 3],
        half_extents: [f32; 3],
    },
    #[error("node capacity must be at least 1 (capacity: {capacity})")]
    InvalidCapacity { capacity: usize },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;
