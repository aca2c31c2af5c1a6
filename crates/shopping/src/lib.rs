mod categorize;
mod item;
mod store;

pub use categorize::*;
pub use item::*;
pub use store::*;
