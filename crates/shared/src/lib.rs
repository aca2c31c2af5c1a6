mod error;
mod id;

pub use error::*;
pub use id::*;
