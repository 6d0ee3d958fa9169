use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use parish_booking::config::Config;
use parish_booking::infra::factory::bootstrap_state;
use parish_booking::state::AppState;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// How the mock availability endpoint behaves for the next requests.
#[derive(Clone, Copy, Debug, Default)]
pub enum CalendarMode {
    #[default]
    Ok,
    /// 200 with `success: false` in the envelope.
    Declined,
    ServerError,
    /// 200 with a non-JSON body.
    Garbage,
    /// Respond after the given delay.
    Slow(u64),
}

#[derive(Default)]
#[allow(dead_code)]
pub struct MockParish {
    pub closed_dates: Mutex<Vec<Value>>,
    pub special_hours: Mutex<Vec<Value>>,
    pub services: Mutex<HashMap<String, Value>>,
    pub recorded_bookings: Mutex<Vec<Value>>,
    pub booking_reply: Mutex<Option<Value>>,
    pub messages: Mutex<Vec<Value>>,
    pub typing: AtomicBool,
    pub calendar_mode: Mutex<CalendarMode>,
    pub message_delay_ms: Mutex<u64>,
    pub message_hits: AtomicUsize,
    pub typing_delay_ms: Mutex<u64>,
    pub typing_hits: AtomicUsize,
}

#[allow(dead_code)]
impl MockParish {
    pub fn add_closed_date(&self, date: &str, reason: Option<&str>) {
        self.closed_dates
            .lock()
            .unwrap()
            .push(json!({ "date": date, "reason": reason }));
    }

    pub fn add_special_hours(&self, date: &str, start: Option<&str>, end: Option<&str>) {
        self.special_hours
            .lock()
            .unwrap()
            .push(json!({ "date": date, "start_time": start, "end_time": end }));
    }

    pub fn add_service(&self, id: &str, name: &str, advance_booking_days: u32) {
        self.services.lock().unwrap().insert(
            id.to_string(),
            json!({
                "id": id,
                "name": name,
                "price_cents": 2500,
                "advance_booking_days": advance_booking_days
            }),
        );
    }

    pub fn add_message(&self, id: &str, sender: &str, body: &str, sent_at: DateTime<Utc>) {
        self.messages.lock().unwrap().push(json!({
            "id": id,
            "sender": sender,
            "body": body,
            "sent_at": sent_at.to_rfc3339()
        }));
    }

    pub fn set_calendar_mode(&self, mode: CalendarMode) {
        *self.calendar_mode.lock().unwrap() = mode;
    }

    pub fn set_booking_reply(&self, reply: Option<Value>) {
        *self.booking_reply.lock().unwrap() = reply;
    }
}

#[allow(dead_code)]
pub struct TestServer {
    pub base_url: String,
    pub parish: Arc<MockParish>,
}

#[allow(dead_code)]
impl TestServer {
    pub async fn spawn() -> Self {
        let parish = Arc::new(MockParish::default());

        let app = Router::new()
            .route(
                "/api/v1/churches/{church_id}/availability",
                get(availability),
            )
            .route("/api/v1/services/{service_id}", get(service))
            .route("/api/v1/churches/{church_id}/bookings", post(book))
            .route("/api/v1/conversations/{id}/messages", get(messages))
            .route("/api/v1/conversations/{id}/typing", get(typing))
            .with_state(parish.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock parish server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            parish,
        }
    }

    pub fn app_state(&self) -> AppState {
        self.app_state_with_timeout(1000)
    }

    pub fn app_state_with_timeout(&self, timeout_ms: u64) -> AppState {
        let config = Config {
            api_base_url: self.base_url.clone(),
            request_timeout_ms: timeout_ms,
            message_poll_interval_ms: 50,
            typing_poll_interval_ms: 50,
        };
        bootstrap_state(&config)
    }
}

async fn availability(State(parish): State<Arc<MockParish>>) -> Response {
    let mode = *parish.calendar_mode.lock().unwrap();
    match mode {
        CalendarMode::Slow(ms) => {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
        CalendarMode::ServerError => {
            return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
        }
        CalendarMode::Garbage => {
            return (StatusCode::OK, "<html>maintenance</html>").into_response();
        }
        CalendarMode::Declined => {
            return Json(json!({ "success": false })).into_response();
        }
        CalendarMode::Ok => {}
    }

    Json(json!({
        "success": true,
        "closed_dates": parish.closed_dates.lock().unwrap().clone(),
        "special_hours": parish.special_hours.lock().unwrap().clone(),
    }))
    .into_response()
}

async fn service(
    State(parish): State<Arc<MockParish>>,
    Path(service_id): Path<String>,
) -> Response {
    match parish.services.lock().unwrap().get(&service_id) {
        Some(svc) => Json(json!({ "success": true, "service": svc })).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "error": "Service not found" })),
        )
            .into_response(),
    }
}

async fn book(State(parish): State<Arc<MockParish>>, Json(body): Json<Value>) -> Response {
    parish.recorded_bookings.lock().unwrap().push(body);

    if let Some(reply) = parish.booking_reply.lock().unwrap().clone() {
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(reply)).into_response();
    }

    let count = parish.recorded_bookings.lock().unwrap().len();
    Json(json!({
        "success": true,
        "booking_code": format!("BK-{:04}", count)
    }))
    .into_response()
}

async fn messages(
    State(parish): State<Arc<MockParish>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    parish.message_hits.fetch_add(1, Ordering::SeqCst);

    let delay = *parish.message_delay_ms.lock().unwrap();
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    let after: Option<DateTime<Utc>> = params
        .get("after")
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|dt| dt.with_timezone(&Utc));

    let selected: Vec<Value> = parish
        .messages
        .lock()
        .unwrap()
        .iter()
        .filter(|m| {
            let sent_at = DateTime::parse_from_rfc3339(m["sent_at"].as_str().unwrap())
                .unwrap()
                .with_timezone(&Utc);
            after.is_none_or(|a| sent_at > a)
        })
        .cloned()
        .collect();

    Json(json!({ "success": true, "messages": selected })).into_response()
}

async fn typing(State(parish): State<Arc<MockParish>>) -> Response {
    parish.typing_hits.fetch_add(1, Ordering::SeqCst);

    let delay = *parish.typing_delay_ms.lock().unwrap();
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    Json(json!({
        "success": true,
        "typing": parish.typing.load(Ordering::SeqCst)
    }))
    .into_response()
}
