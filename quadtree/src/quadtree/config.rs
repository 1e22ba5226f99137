use super::QUADRANTS;

#[derive(Debug, Clone)]
pub struct Config {
    /// Arena slots reserved up front, rounded up to the root plus whole child blocks.
    pub pool_size: usize,
    /// Residents a leaf holds before it splits.
    pub node_capacity: usize,
    /// Optional hard cap on depth. Leaves at this depth never split and accept residents
    /// past `node_capacity`.
    pub max_depth: usize,
}

impl Config {
    pub fn with_capacity(node_capacity: usize) -> Self {
        Config {
            node_capacity,
            ..Config::default()
        }
    }

    pub(crate) fn arena_slots(&self) -> usize {
        let block = QUADRANTS as usize;
        let blocks = self.pool_size.saturating_sub(1).div_ceil(block);
        1 + blocks * block
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            // One root plus 64 child blocks, enough for a few hundred points at the
            // default capacity before the arena grows.
            pool_size: 257,
            node_capacity: 4,
            // An f32 extent stops halving in under 280 levels, so the default never binds
            // and splitting only stops where cells cannot shrink any further.
            max_depth: 512,
        }
    }
}
