pub mod error;
pub mod quadtree;

pub use common::Region;
pub use error::{QuadtreeError, QuadtreeResult};
pub use quadtree::{Config, Identity, NodeState, QuadTree, QueryStats, RegionQuery};
