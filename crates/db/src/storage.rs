use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Serialize, de::DeserializeOwned};
use sqlx::{SqlitePool, prelude::FromRow};

use crate::table;

#[derive(FromRow)]
struct ValueRow {
    value: String,
}

/// Key/value access to the `storage` table. Every persisted blob in the
/// application lives here as a JSON string under a fixed key.
#[derive(Clone)]
pub struct Storage {
    read_db: SqlitePool,
    write_db: SqlitePool,
}

impl Storage {
    pub fn new(read_db: SqlitePool, write_db: SqlitePool) -> Self {
        Self { read_db, write_db }
    }

    pub async fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        let statement = Query::select()
            .column(table::Storage::Value)
            .from(table::Storage::Table)
            .and_where(Expr::col(table::Storage::Key).eq(key))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, ValueRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(row.map(|r| r.value))
    }

    pub async fn write(&self, key: &str, value: impl Into<String>) -> anyhow::Result<()> {
        let mut statement = Query::insert()
            .into_table(table::Storage::Table)
            .columns([table::Storage::Key, table::Storage::Value])
            .to_owned();

        statement.values_panic([key.to_owned().into(), value.into().into()]);
        statement.on_conflict(
            OnConflict::column(table::Storage::Key)
                .update_columns([table::Storage::Value])
                .to_owned(),
        );

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(())
    }

    pub async fn remove(&self, key: &str) -> anyhow::Result<()> {
        let statement = Query::delete()
            .from_table(table::Storage::Table)
            .and_where(Expr::col(table::Storage::Key).eq(key))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(())
    }

    /// Drops every stored blob. Backs the profile page's "delete my data".
    pub async fn clear(&self) -> anyhow::Result<()> {
        let statement = Query::delete()
            .from_table(table::Storage::Table)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(())
    }

    /// Reads a blob and decodes it, treating a missing or corrupt value as
    /// the default empty structure. Storage decode failures are never fatal.
    pub async fn read_json<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let Some(raw) = self.read(key).await? else {
            return Ok(T::default());
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(err) => {
                tracing::warn!(key, err = %err, "Corrupt storage value, falling back to default");

                Ok(T::default())
            }
        }
    }

    pub async fn write_json<T: Serialize>(&self, key: &str, value: &T) -> anyhow::Result<()> {
        self.write(key, serde_json::to_string(value)?).await
    }
}
