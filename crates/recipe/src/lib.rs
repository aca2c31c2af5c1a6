mod favorites;
mod model;

pub use favorites::*;
pub use model::*;
