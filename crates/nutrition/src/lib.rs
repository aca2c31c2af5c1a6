mod store;
mod totals;

pub use store::*;
pub use totals::*;
