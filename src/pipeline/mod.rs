// Reconciliation pipeline: per-fragment processing and the itinerary accumulator

pub mod postprocessor;
pub mod processing;

// Re-export key types and functions from each stage
pub use postprocessor::ExtractorPostprocessor;
pub use processing::normalize::bcbp::{BoardingPassParser, IataBcbpParser};
pub use processing::quality_gate::ExtractorValidator;
