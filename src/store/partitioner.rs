use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Assigns owners to partitions by hashing.
///
/// The partition count is fixed; every backend implementation is expected to
/// follow the same placement so that records written through one backend are
/// found through another.
pub struct Partitioner {
    num_partitions: u32,
}

impl Partitioner {
    pub fn new() -> Self {
        Self { num_partitions: 256 }
    }

    pub fn num_partitions(&self) -> u32 {
        self.num_partitions
    }

    pub fn partition(&self, owner: &str) -> u32 {
        let mut hasher = DefaultHasher::new();
        owner.hash(&mut hasher);
        let hash = hasher.finish() as u32;
        hash % self.num_partitions
    }
}

impl Default for Partitioner {
    fn default() -> Self {
        Self::new()
    }
}
