mod common;

use axum::http::StatusCode;
use common::{assert_error_envelope, post_json, send};
use serde_json::json;
use trivia_api::config::Config;

#[tokio::test]
async fn test_quiz_returns_last_unseen_question() {
    let app = common::create_test_app().await;

    let (status, json) = send(
        &app,
        post_json(
            "/api/quizzes",
            json!({
                "previous_questions": [20, 21],
                "quiz_category": { "type": "Science", "id": "1" }
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["question"]["id"], 22);
    assert_eq!(json["question"]["answer"], "Blood");
}

#[tokio::test]
async fn test_quiz_legacy_offset_shifts_category() {
    let config = Config {
        legacy_category_offset: true,
        ..common::test_config()
    };
    let (app, _store) = common::create_test_app_with(config).await;

    let (status, json) = send(
        &app,
        post_json(
            "/api/quizzes",
            json!({
                "previous_questions": [20, 21],
                "quiz_category": { "type": "Science", "id": "0" }
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["question"]["id"], 22);
}

#[tokio::test]
async fn test_quiz_legacy_offset_rejects_largest_id() {
    let config = Config {
        legacy_category_offset: true,
        ..common::test_config()
    };
    let (app, _store) = common::create_test_app_with(config).await;

    let (status, json) = send(
        &app,
        post_json(
            "/api/quizzes",
            json!({
                "previous_questions": [],
                "quiz_category": { "type": "Science", "id": "9223372036854775807" }
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&json, StatusCode::BAD_REQUEST, "Bad request");
}

#[tokio::test]
async fn test_quiz_stays_within_category() {
    let app = common::create_test_app().await;

    for _ in 0..20 {
        let (status, json) = send(
            &app,
            post_json(
                "/api/quizzes",
                json!({
                    "previous_questions": [],
                    "quiz_category": { "type": "Art", "id": 2 }
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["question"]["category"], 2);
    }
}

#[tokio::test]
async fn test_quiz_all_categories_plays_full_round() {
    let app = common::create_test_app().await;
    let mut previous: Vec<i64> = Vec::new();

    loop {
        let (status, json) = send(
            &app,
            post_json(
                "/api/quizzes",
                json!({
                    "previous_questions": previous,
                    "quiz_category": { "type": "click", "id": 0 }
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);

        match json.get("question") {
            Some(question) => {
                let id = question["id"].as_i64().unwrap();
                assert!(!previous.contains(&id), "question {} served twice", id);
                previous.push(id);
            }
            None => break,
        }
        assert!(previous.len() <= 19);
    }

    assert_eq!(previous.len(), 19);
}

#[tokio::test]
async fn test_quiz_completed_round_has_no_question() {
    let app = common::create_test_app().await;

    let (status, json) = send(
        &app,
        post_json(
            "/api/quizzes",
            json!({
                "previous_questions": [20, 21, 22],
                "quiz_category": { "type": "Science", "id": "1" }
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "success": true }));
}

#[tokio::test]
async fn test_quiz_400_without_previous_questions() {
    let app = common::create_test_app().await;

    let (status, json) = send(
        &app,
        post_json(
            "/api/quizzes",
            json!({ "quiz_category": { "type": "Science", "id": "1" } }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&json, StatusCode::BAD_REQUEST, "Bad request");
}

#[tokio::test]
async fn test_quiz_400_without_category() {
    let app = common::create_test_app().await;

    let (status, json) = send(
        &app,
        post_json("/api/quizzes", json!({ "previous_questions": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&json, StatusCode::BAD_REQUEST, "Bad request");
}

#[tokio::test]
async fn test_quiz_400_for_unparseable_category_id() {
    let app = common::create_test_app().await;

    let (status, json) = send(
        &app,
        post_json(
            "/api/quizzes",
            json!({
                "previous_questions": [],
                "quiz_category": { "type": "Science", "id": "science" }
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&json, StatusCode::BAD_REQUEST, "Bad request");
}

#[tokio::test]
async fn test_quiz_unknown_category_completes_immediately() {
    let app = common::create_test_app().await;

    let (status, json) = send(
        &app,
        post_json(
            "/api/quizzes",
            json!({
                "previous_questions": [],
                "quiz_category": { "type": "Unknown", "id": "42" }
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "success": true }));
}
