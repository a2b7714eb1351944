//! Analysis engine: partitions commit history into releases and versions them

pub mod partitioner;
pub mod versioner;

pub use partitioner::{Partition, Partitioner};
pub use versioner::{Versioner, BUMP_PRECEDENCE};
