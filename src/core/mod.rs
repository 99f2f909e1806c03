//! Core functionality for the CDN filter.
//! Range aggregation, containment matching and output partitioning.

mod aggregator;
mod classifier;
mod reporter;

pub use aggregator::{aggregate, collect_ranges, parse_block, RangeSet};
pub use classifier::{block_contains, classify, classify_all, parse_ip, Classification};
pub use reporter::{OutputModes, Report};
