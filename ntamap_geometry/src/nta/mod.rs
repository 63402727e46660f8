//! Neighborhood rows and the feature collection assembled from them.

mod assemble;
mod cache;
mod read;
mod row;

pub use assemble::*;
pub use cache::*;
pub use read::*;
pub use row::*;
