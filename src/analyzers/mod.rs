pub mod batch;
pub mod quality;
pub mod tech;
