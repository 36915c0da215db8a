//! Constants that define the current build and execution environment.

#[rustfmt::skip]
pub mod build;
pub use self::build::*;
