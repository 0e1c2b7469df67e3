pub mod generator;
pub mod grader;
pub mod stats;

pub use generator::*;
pub use grader::*;
pub use stats::*;
