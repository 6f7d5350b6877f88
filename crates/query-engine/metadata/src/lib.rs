//! The semantic layer: metric, dimension and join definitions, and the
//! request shape that references them.

pub mod metadata;
pub mod request;
