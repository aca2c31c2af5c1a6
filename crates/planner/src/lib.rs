mod plan;
mod store;

pub use plan::*;
pub use store::*;
