//! Core operations. Each takes the store handle and plain values, and is
//! independent of the HTTP layer.

pub mod board;
pub mod catalog;
pub mod completion;
pub mod reflection;
pub mod stats;
