// tvp-common/src/model/mod.rs
pub mod patch;

pub use patch::{PatchOutcome, PatchSpec};
