use crate::{
    error::AppError,
    models::{Booking, NewBooking},
    schedule, store,
    state::AppState,
    validation::{Verdict, validate},
};
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Html,
    Json,
};
use nanoid::nanoid;

pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

pub async fn index() -> Html<String> {
    tokio::fs::read_to_string("templates/index.html")
        .await
        .map(Html)
        .unwrap_or_else(|_| Html("<h1>Error: could not load index.html</h1>".to_string()))
}

pub async fn list_bookings(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Booking>>, AppError> {
    store::load_all(&app_state.pool).await.map(Json)
}

pub async fn get_schedule(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let table = store::load_all(&app_state.pool).await?;
    let today = chrono::Local::now().date_naive();
    Ok(Json(schedule::upcoming(table, today)))
}

pub async fn create_booking(
    State(app_state): State<AppState>,
    Json(payload): Json<NewBooking>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    // Hold the lock across the whole read-check-write sequence.
    let _guard = app_state.sheet_lock.lock().await;

    let mut table = store::load_all(&app_state.pool).await?;
    match validate(&table, &payload) {
        Verdict::RejectedWeekday => Err(AppError::Validation(
            "No bookings allowed on Fridays or Sundays.".to_string(),
        )),
        Verdict::RejectedClash { name, department } => Err(AppError::Clash(format!(
            "This slot is already taken by {name} ({department})."
        ))),
        Verdict::RejectedMissingName => {
            Err(AppError::Validation("Please enter your name.".to_string()))
        }
        Verdict::Accepted => {
            let date = payload.date_string();
            let booking = Booking {
                id: nanoid!(10),
                name: payload.name,
                department: payload.department,
                date,
                time_slot: payload.time_slot,
                facilities: payload.facilities,
            };
            table.push(booking.clone());
            store::replace_all(&app_state.pool, &table).await?;
            tracing::info!(
                id = %booking.id,
                date = %booking.date,
                slot = %booking.time_slot,
                "booking confirmed"
            );
            Ok((StatusCode::CREATED, Json(booking)))
        }
    }
}

fn require_admin(headers: &HeaderMap, admin_key: &str) -> Result<(), AppError> {
    let supplied = headers
        .get(ADMIN_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if supplied != admin_key {
        return Err(AppError::Forbidden("Invalid admin key.".to_string()));
    }
    Ok(())
}

pub async fn delete_booking(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    require_admin(&headers, &app_state.config.admin_key)?;

    let _guard = app_state.sheet_lock.lock().await;

    let mut table = store::load_all(&app_state.pool).await?;
    let pos = table
        .iter()
        .position(|b| b.id == id)
        .ok_or_else(|| AppError::NotFound("No booking with that id.".to_string()))?;
    let removed = table.remove(pos);
    store::replace_all(&app_state.pool, &table).await?;
    tracing::info!(id = %removed.id, date = %removed.date, "booking deleted");
    Ok(StatusCode::NO_CONTENT)
}
