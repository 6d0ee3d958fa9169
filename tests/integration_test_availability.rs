mod common;

use chrono::NaiveDate;
use common::TestServer;
use parish_booking::domain::services::availability::{DateStatus, classify_date};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[tokio::test]
async fn test_classification_over_fetched_snapshot() {
    let server = TestServer::spawn().await;
    server.parish.add_closed_date("2025-12-25", Some("Christmas"));
    server
        .parish
        .add_special_hours("2025-12-24", Some("10:00"), Some("14:00"));
    let state = server.app_state();

    let snapshot = state.calendar.fetch_snapshot("st-marys").await.unwrap();

    assert_eq!(
        classify_date(date("2025-12-25"), Some(&snapshot)),
        DateStatus::Blocked {
            reason: Some("Christmas".to_string())
        }
    );
    match classify_date(date("2025-12-24"), Some(&snapshot)) {
        DateStatus::SpecialHours {
            start_time,
            end_time,
        } => {
            assert_eq!(start_time.unwrap().format("%H:%M").to_string(), "10:00");
            assert_eq!(end_time.unwrap().format("%H:%M").to_string(), "14:00");
        }
        other => panic!("expected SpecialHours, got {:?}", other),
    }
    assert_eq!(
        classify_date(date("2025-12-26"), Some(&snapshot)),
        DateStatus::Normal
    );
}

#[tokio::test]
async fn test_date_in_both_lists_is_blocked() {
    let server = TestServer::spawn().await;
    server.parish.add_closed_date("2025-12-25", Some("Christmas"));
    server
        .parish
        .add_special_hours("2025-12-25", Some("08:00"), Some("12:00"));
    let state = server.app_state();

    let snapshot = state.calendar.fetch_snapshot("st-marys").await.unwrap();
    let status = classify_date(date("2025-12-25"), Some(&snapshot));
    assert_eq!(
        status,
        DateStatus::Blocked {
            reason: Some("Christmas".to_string())
        }
    );
    assert_eq!(status.message().unwrap(), "Christmas");
}
