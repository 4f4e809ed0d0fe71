pub mod error;
pub mod geometry;
pub mod index;
pub mod math;
pub mod operations;
pub mod topology;

pub use error::{GeotopoError, Result};
