pub mod common;
pub mod domain;

pub use common::error::{CoreError, Result};
pub use domain::*;
