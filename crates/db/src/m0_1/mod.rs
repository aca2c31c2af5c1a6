mod storage;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "recipefinder",
    "m0_1",
    vec_box![],
    vec_box![storage::CreateTable]
);
