// tvp-aio/src/lib.rs
//! Filesystem primitives shared by the tvp crates.

pub mod fs;

pub use fs::*;
