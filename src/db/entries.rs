use sqlx::PgPool;

use crate::models::{CityEntry, NewEntry};

pub async fn create(pool: &PgPool, entry: &NewEntry) -> Result<CityEntry, sqlx::Error> {
    sqlx::query_as::<_, CityEntry>(
        "INSERT INTO city_entries (city, specialty, user_email)
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(&entry.city)
    .bind(&entry.specialty)
    .bind(&entry.user_email)
    .fetch_one(pool)
    .await
}

pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<CityEntry>, sqlx::Error> {
    sqlx::query_as::<_, CityEntry>(
        "SELECT * FROM city_entries ORDER BY \"timestamp\" DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM city_entries")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}
