// tvp-common/src/lib.rs
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;

// Re-export key types
pub use config::Config;
pub use error::{Result, TvpError};
pub use model::{PatchOutcome, PatchSpec};
