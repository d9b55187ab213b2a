// Pipeline processing: normalization, comparison, merging and validation

pub mod equality;
pub mod location;
pub mod merge;
pub mod normalize;
pub mod quality_gate;
pub mod sort;

// Re-export key types and functions
pub use equality::{is_same, is_same_incidence, is_same_person};
pub use merge::{apply, merge};
