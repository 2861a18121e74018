//! Hooks that own view-scoped state
//!
//! State lives in signals created by the mounting component and is dropped
//! with it, so nothing here outlives the section that uses it.

pub mod gallery;

pub use gallery::*;
