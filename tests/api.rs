use axum::http::StatusCode;
use axum_test::TestServer;
use classroom_log::{app, config::Config, models::Booking, state::AppState, store};
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;

const TEST_ADMIN_KEY: &str = "test-admin-key";

async fn test_server() -> (TestServer, AppState) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory db");
    store::init_schema(&pool).await.expect("failed to init schema");

    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        admin_key: TEST_ADMIN_KEY.to_string(),
        port: 0,
    };
    let state = AppState::new(pool, config);
    let server = TestServer::new(app(state.clone())).expect("failed to start test server");
    (server, state)
}

// 2030-01-07 is a Monday; 2030-01-04 a Friday; 2030-01-06 a Sunday.
fn booking_json(name: &str, date: &str, slot: &str) -> Value {
    json!({
        "name": name,
        "department": "Physics",
        "date": date,
        "time_slot": slot,
        "facilities": ["Smartboard", "Internet Access"],
    })
}

#[tokio::test]
async fn accepted_booking_round_trips_through_the_sheet() {
    let (server, _) = test_server().await;

    let response = server
        .post("/api/bookings")
        .json(&booking_json("Ada Lovelace", "2030-01-07", "08:00 - 09:45"))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let created = response.json::<Booking>();
    assert_eq!(created.name, "Ada Lovelace");
    assert_eq!(created.date, "07/01/2030");

    let table = server.get("/api/bookings").await.json::<Vec<Booking>>();
    assert_eq!(table, vec![created]);
}

#[tokio::test]
async fn rejects_bookings_on_friday_and_sunday() {
    let (server, _) = test_server().await;

    for date in ["2030-01-04", "2030-01-06"] {
        let response = server
            .post("/api/bookings")
            .json(&booking_json("Ada", date, "08:00 - 09:45"))
            .await;
        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = response.json::<Value>();
        assert_eq!(body["error"], "No bookings allowed on Fridays or Sundays.");
    }

    let table = server.get("/api/bookings").await.json::<Vec<Booking>>();
    assert!(table.is_empty());
}

#[tokio::test]
async fn second_booking_for_same_slot_is_a_clash_naming_the_first() {
    let (server, _) = test_server().await;

    let first = server
        .post("/api/bookings")
        .json(&json!({
            "name": "Grace Hopper",
            "department": "Computing",
            "date": "2025-02-12",
            "time_slot": "08:00 - 09:45",
        }))
        .await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    let second = server
        .post("/api/bookings")
        .json(&booking_json("Ada", "2025-02-12", "08:00 - 09:45"))
        .await;
    assert_eq!(second.status_code(), StatusCode::CONFLICT);
    let body = second.json::<Value>();
    assert_eq!(
        body["error"],
        "This slot is already taken by Grace Hopper (Computing)."
    );
}

#[tokio::test]
async fn rejects_whitespace_only_name() {
    let (server, _) = test_server().await;

    let response = server
        .post("/api/bookings")
        .json(&booking_json("   ", "2030-01-07", "10:15 - 12:15"))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "Please enter your name.");
}

#[tokio::test]
async fn rejects_unknown_enum_values_at_the_boundary() {
    let (server, _) = test_server().await;

    let response = server
        .post("/api/bookings")
        .json(&json!({
            "name": "Ada",
            "department": "Alchemy",
            "date": "2030-01-07",
            "time_slot": "08:00 - 09:45",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn schedule_drops_past_rows_and_sorts_upcoming_ones() {
    let (server, state) = test_server().await;

    // Seed the sheet directly, including a past row and a corrupt date.
    let row = |id: &str, date: &str, slot: &str| Booking {
        id: id.to_string(),
        name: "Ada".to_string(),
        department: "Physics".parse().unwrap(),
        date: date.to_string(),
        time_slot: slot.parse().unwrap(),
        facilities: vec![],
    };
    store::replace_all(
        &state.pool,
        &[
            row("old", "01/01/2020", "08:00 - 09:45"),
            row("later", "08/03/2030", "13:15 - 15:15"),
            row("bad", "never", "08:00 - 09:45"),
            row("soonest", "08/03/2030", "08:00 - 09:45"),
            row("sooner", "07/03/2030", "10:15 - 12:15"),
        ],
    )
    .await
    .unwrap();

    let upcoming = server.get("/api/schedule").await.json::<Vec<Booking>>();
    let ids: Vec<&str> = upcoming.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, ["sooner", "soonest", "later"]);
}

#[tokio::test]
async fn delete_requires_the_admin_key() {
    let (server, _) = test_server().await;

    let created = server
        .post("/api/bookings")
        .json(&booking_json("Ada", "2030-01-07", "08:00 - 09:45"))
        .await
        .json::<Booking>();

    let no_key = server.delete(&format!("/api/bookings/{}", created.id)).await;
    assert_eq!(no_key.status_code(), StatusCode::FORBIDDEN);

    let wrong_key = server
        .delete(&format!("/api/bookings/{}", created.id))
        .add_header("x-admin-key", "guess")
        .await;
    assert_eq!(wrong_key.status_code(), StatusCode::FORBIDDEN);

    // The row survived both attempts.
    let table = server.get("/api/bookings").await.json::<Vec<Booking>>();
    assert_eq!(table.len(), 1);

    let ok = server
        .delete(&format!("/api/bookings/{}", created.id))
        .add_header("x-admin-key", TEST_ADMIN_KEY)
        .await;
    assert_eq!(ok.status_code(), StatusCode::NO_CONTENT);

    let table = server.get("/api/bookings").await.json::<Vec<Booking>>();
    assert!(table.is_empty());
}

#[tokio::test]
async fn delete_unknown_id_is_not_found() {
    let (server, _) = test_server().await;

    let response = server
        .delete("/api/bookings/does-not-exist")
        .add_header("x-admin-key", TEST_ADMIN_KEY)
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn freed_slot_can_be_rebooked() {
    let (server, _) = test_server().await;

    let created = server
        .post("/api/bookings")
        .json(&booking_json("Ada", "2030-01-07", "13:15 - 15:15"))
        .await
        .json::<Booking>();

    server
        .delete(&format!("/api/bookings/{}", created.id))
        .add_header("x-admin-key", TEST_ADMIN_KEY)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let rebooked = server
        .post("/api/bookings")
        .json(&booking_json("Grace", "2030-01-07", "13:15 - 15:15"))
        .await;
    assert_eq!(rebooked.status_code(), StatusCode::CREATED);
}
