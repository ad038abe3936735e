//! Brand queries.

use specdex_core::{Brand, PageRequest};
use sqlx::{Pool, Sqlite, SqliteConnection};

/// Count all brands, independent of any pagination.
///
/// # Errors
/// Returns `sqlx::Error` if the database query fails.
pub async fn count_brands(pool: &Pool<Sqlite>) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM brands")
        .fetch_one(pool)
        .await
}

/// Fetch one page of brands ordered by name, then id.
///
/// Pages past the end come back empty.
///
/// # Errors
/// Returns `sqlx::Error` if the database query fails.
pub async fn list_brands(pool: &Pool<Sqlite>, page: PageRequest) -> Result<Vec<Brand>, sqlx::Error> {
    let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);
    let rows = sqlx::query_as::<_, (String, String)>(
        "SELECT id, name FROM brands ORDER BY name, id LIMIT ? OFFSET ?",
    )
    .bind(i64::from(page.limit()))
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name)| Brand { id, name })
        .collect())
}

/// Insert a brand or rename an existing one.
///
/// # Errors
/// Returns `sqlx::Error` if the database write fails.
pub async fn upsert_brand(conn: &mut SqliteConnection, brand: &Brand) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO brands (id, name) VALUES (?, ?)
         ON CONFLICT(id) DO UPDATE SET name = excluded.name",
    )
    .bind(&brand.id)
    .bind(&brand.name)
    .execute(conn)
    .await?;

    Ok(())
}
