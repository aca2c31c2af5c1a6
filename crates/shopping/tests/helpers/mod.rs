use std::{path::PathBuf, str::FromStr};

use recipefinder_db::Storage;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_storage(path: PathBuf) -> anyhow::Result<Storage> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    recipefinder_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(Storage::new(pool.clone(), pool))
}
