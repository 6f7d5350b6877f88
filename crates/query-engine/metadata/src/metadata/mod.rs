//! Metadata information regarding the semantic layer.

pub mod catalog;

// re-export without modules
pub use catalog::*;
