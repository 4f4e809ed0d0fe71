mod is_simple;
mod validation_error;

pub use is_simple::{IsSimple, SimplicityOptions};
pub use validation_error::GeometryValidationError;
