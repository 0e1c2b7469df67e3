pub mod analysis;
pub mod error;
pub mod results;
pub mod suggestions;

pub use analysis::*;
pub use error::*;
pub use results::*;
pub use suggestions::*;
