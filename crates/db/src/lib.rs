use sqlx_migrator::{Info, Migrator};

mod m0_1;
mod storage;
pub mod table;

pub use storage::*;

pub fn migrator() -> Result<Migrator<sqlx::Sqlite>, sqlx_migrator::Error> {
    let mut migrator = Migrator::default();
    migrator.add_migrations(vec![Box::new(m0_1::Migration)])?;

    Ok(migrator)
}
