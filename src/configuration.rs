//! Configuration types for the channel and directory bridges

/// How many elements a channel bridge may buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    /// At most this many elements wait in the channel. A bound of 0 is
    /// raised to 1.
    Bounded(usize),
    /// No limit; the producer task never waits on the receiver.
    Unbounded,
}

/// Configuration for [`crate::to::chan`]
#[derive(Debug, Clone)]
pub struct ChanConfig {
    pub capacity: Capacity,
}

impl ChanConfig {
    pub fn bounded(capacity: usize) -> Self {
        Self {
            capacity: Capacity::Bounded(capacity),
        }
    }

    pub fn unbounded() -> Self {
        Self {
            capacity: Capacity::Unbounded,
        }
    }
}

impl Default for ChanConfig {
    fn default() -> Self {
        Self {
            capacity: Capacity::Bounded(1),
        }
    }
}

/// Configuration for [`crate::from::dir_walk`]
#[derive(Debug, Clone)]
pub struct WalkConfig {
    pub follow_links: bool,
    pub min_depth: usize,
    pub max_depth: Option<usize>,
    pub sort_by_file_name: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            follow_links: false,
            min_depth: 0,
            max_depth: None,
            sort_by_file_name: true,
        }
    }
}
