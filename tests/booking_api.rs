mod common;

use axum::http::StatusCode;
use common::{body_json, book, post_json, post_raw, seats};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::json;

// ---------------------------------------------------------------------------
// POST /book: success
// ---------------------------------------------------------------------------

#[tokio::test]
async fn booking_decrements_seats_and_returns_ticket() {
    let (app, state) = common::build_test_app();
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();

    let (status, json) = book(app, 1.into(), &name, &email).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Booking successful!");
    assert_eq!(json["booking"]["eventId"], 1);
    assert_eq!(json["booking"]["name"], name.as_str());
    assert_eq!(json["booking"]["email"], email.as_str());
    assert_eq!(json["booking"]["ticketId"].as_str().unwrap().len(), 9);
    assert_eq!(json["updatedEvent"]["id"], 1);
    assert_eq!(json["updatedEvent"]["availableSeats"], 49);
    assert_eq!(seats(&state, 1).await, 49);
}

#[tokio::test]
async fn string_event_id_is_accepted() {
    let (app, state) = common::build_test_app();
    let (status, json) = book(app, "2".into(), "Ann", "ann@example.com").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["booking"]["eventId"], 2);
    assert_eq!(seats(&state, 2).await, 119);
}

#[tokio::test]
async fn float_and_prefixed_event_ids_book_by_leading_integer() {
    let (app, state) = common::build_test_app();

    let (status, json) = book(app.clone(), json!(1.0), "Ann", "ann@example.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["booking"]["eventId"], 1);

    let (status, _) = book(app.clone(), json!("1abc"), "Bob", "bob@example.com").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = book(app, json!("1.5"), "Cid", "cid@example.com").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(seats(&state, 1).await, 47);
}

// ---------------------------------------------------------------------------
// POST /book: rejections
// ---------------------------------------------------------------------------

#[tokio::test]
async fn second_booking_with_same_email_is_duplicate() {
    let (app, state) = common::build_test_app();
    let (first, _) = book(app.clone(), 1.into(), "Ann", "ann@example.com").await;
    let (second, json) = book(app, 1.into(), "Ann Again", "ann@example.com").await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "This email has already booked a seat for this event.");
    assert_eq!(seats(&state, 1).await, 49);
}

#[tokio::test]
async fn sold_out_event_rejects_without_decrement() {
    let (app, state) = common::build_test_app();
    for i in 0..5 {
        let (status, _) = book(app.clone(), 3.into(), "Guest", &format!("guest{i}@example.com")).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, json) = book(app, 3.into(), "Late", "late@example.com").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Sold out");
    assert_eq!(seats(&state, 3).await, 0);
}

#[tokio::test]
async fn unknown_event_is_404() {
    let (app, state) = common::build_test_app();
    let (status, json) = book(app.clone(), 99.into(), "Ann", "ann@example.com").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Event not found");

    let (status, _) = book(app.clone(), "abc".into(), "Ann", "ann@example.com").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, json) = book(app, json!(true), "Ann", "ann@example.com").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Event not found");

    let counts = [seats(&state, 1).await, seats(&state, 2).await, seats(&state, 3).await];
    assert_eq!(counts, [50, 120, 5]);
}

#[tokio::test]
async fn missing_fields_are_rejected_without_mutation() {
    let (app, state) = common::build_test_app();
    let bodies = [
        json!({ "name": "Ann", "email": "ann@example.com" }),
        json!({ "eventId": 0, "name": "Ann", "email": "ann@example.com" }),
        json!({ "eventId": 1, "email": "ann@example.com" }),
        json!({ "eventId": 1, "name": "", "email": "ann@example.com" }),
        json!({ "eventId": 1, "name": "Ann" }),
        json!({}),
    ];

    for body in bodies {
        let response = post_json(app.clone(), "/book", body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body}");
        let json = body_json(response).await;
        assert_eq!(json["message"], "Missing required fields", "body {body}");
    }

    assert_eq!(seats(&state, 1).await, 50);
}

#[tokio::test]
async fn malformed_body_is_400_with_message() {
    let (app, _) = common::build_test_app();

    let response = post_raw(app.clone(), "/book", Some("application/json"), "{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().starts_with("Invalid request body"));

    let response = post_raw(app, "/book", None, "").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// POST /reset
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reset_restores_seats_and_forgets_bookings() {
    let (app, state) = common::build_test_app();
    for i in 0..5 {
        book(app.clone(), 3.into(), "Guest", &format!("guest{i}@example.com")).await;
    }
    book(app.clone(), 1.into(), "Ann", "ann@example.com").await;
    book(app.clone(), 2.into(), "Ann", "ann@example.com").await;

    let response = post_json(app.clone(), "/reset", json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Data reset");

    let counts = [seats(&state, 1).await, seats(&state, 2).await, seats(&state, 3).await];
    assert_eq!(counts, [50, 120, 5]);

    // тот же email снова проходит
    let (status, _) = book(app, 1.into(), "Ann", "ann@example.com").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_bookings_never_oversell() {
    let (app, state) = common::build_test_app();

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                book(app, 3.into(), "Guest", &format!("guest{i}@example.com")).await.0
            })
        })
        .collect();

    let mut ok = 0;
    for handle in handles {
        if handle.await.unwrap() == StatusCode::OK {
            ok += 1;
        }
    }

    assert_eq!(ok, 5);
    assert_eq!(seats(&state, 3).await, 0);
}
