mod mealdb;
mod nutrition;

pub use mealdb::*;
pub use nutrition::*;
