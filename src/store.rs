//! The booking sheet. A single flat table read wholesale and overwritten
//! wholesale on every mutation, mirroring a spreadsheet datastore.

use crate::error::AppError;
use crate::models::{Booking, join_facilities, parse_facilities};
use sqlx::SqlitePool;

pub async fn init_schema(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS bookings (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            department TEXT NOT NULL,
            date TEXT NOT NULL,
            time_slot TEXT NOT NULL,
            facilities TEXT NOT NULL
        );",
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Fetch the entire sheet in row order.
pub async fn load_all(pool: &SqlitePool) -> Result<Vec<Booking>, AppError> {
    let rows: Vec<(String, String, String, String, String, String)> = sqlx::query_as(
        "SELECT id, name, department, date, time_slot, facilities FROM bookings ORDER BY rowid",
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|(id, name, department, date, time_slot, facilities)| {
            Ok(Booking {
                id,
                name,
                department: department.parse().map_err(AppError::CorruptRow)?,
                date,
                time_slot: time_slot.parse().map_err(AppError::CorruptRow)?,
                facilities: parse_facilities(&facilities).map_err(AppError::CorruptRow)?,
            })
        })
        .collect()
}

/// Overwrite the entire sheet with the given rows, in one transaction.
pub async fn replace_all(pool: &SqlitePool, rows: &[Booking]) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM bookings").execute(&mut *tx).await?;
    for booking in rows {
        sqlx::query(
            "INSERT INTO bookings (id, name, department, date, time_slot, facilities)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&booking.id)
        .bind(&booking.name)
        .bind(booking.department.as_str())
        .bind(&booking.date)
        .bind(booking.time_slot.as_str())
        .bind(join_facilities(&booking.facilities))
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;
    Ok(())
}
