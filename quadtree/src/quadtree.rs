//! Point quadtree over a fixed 3D volume.
//!
//! The tree splits the horizontal `x`/`z` plane into quadrants and never splits the
//! vertical `y` axis. Nodes live in a flat arena owned by [`QuadTree`]; children are
//! always allocated and released as a block of four consecutive slots.

mod api;
mod config;
mod identity;
mod insert;
mod query;
mod remove;
mod storage;
mod types;

pub use config::Config;
pub use identity::Identity;
pub use query::{QueryStats, RegionQuery};
pub use storage::QuadTree;
pub use types::NodeState;

use common::Region;
use nalgebra::Point3;
use storage::Node;
use types::*;
