pub mod clip;
pub mod distance;
pub mod valid;
