pub mod common;
pub mod config;
pub mod error;
pub mod knowledgedb;
pub mod observability;
pub mod pipeline;

pub use config::Config;
pub use error::{ReconcilerError, Result};
pub use pipeline::processing::{apply, is_same, is_same_incidence, is_same_person, merge};
pub use pipeline::{ExtractorPostprocessor, ExtractorValidator};
