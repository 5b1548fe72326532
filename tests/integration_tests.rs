// Integration tests for Internship Match

use actix_web::{http::StatusCode, test, web, App};
use internship_match::core::{Assistant, Catalog, Matcher};
use internship_match::models::MatchResult;
use internship_match::routes::{configure_routes, handle_json_payload_error, AppState};
use serde_json::{json, Value};
use std::sync::Arc;

fn bundled_catalog() -> Catalog {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/internships.json");
    Catalog::load(path).expect("bundled catalog should load")
}

fn create_state() -> AppState {
    AppState {
        matcher: Matcher::with_default_policy(Arc::new(bundled_catalog())),
        assistant: Assistant::default(),
    }
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(create_state()))
                .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_index_banner() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;

    assert_eq!(body, web::Bytes::from_static(b"Internship Matching API is running"));
}

#[actix_web::test]
async fn test_health_reports_catalog_size() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["postings"], 8);
}

#[actix_web::test]
async fn test_match_end_to_end() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/match")
        .set_json(json!({ "skills": ["sql", "excel"], "interest": "Data Science" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let results: Vec<MatchResult> = test::read_body_json(resp).await;
    assert_eq!(results.len(), 5);

    // Excel + SQL cover all required skills of the BI posting: 0.6 + 0.1
    assert_eq!(results[0].role, "Business Intelligence Intern");
    assert_eq!(results[0].score, 70);
    assert_eq!(results[1].role, "Data Analyst");
    assert_eq!(results[1].score, 45);
    assert_eq!(results[1].reason, "Matched required skill: SQL, Domain matched");

    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score, "Matches not sorted by score");
    }
}

#[actix_web::test]
async fn test_match_response_shape() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/match")
        .set_json(json!({ "skills": [], "interest": "AI" }))
        .to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;
    let first = body[0].as_object().expect("result should be an object");

    let mut keys: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    keys.sort();
    assert_eq!(keys, vec!["reason", "role", "score"]);
}

#[actix_web::test]
async fn test_missing_inputs_rejected() {
    let app = init_app!();

    for payload in [
        json!({ "interest": "AI" }),
        json!({ "skills": ["Python"] }),
        json!({ "skills": ["Python"], "interest": "" }),
    ] {
        let req = test::TestRequest::post().uri("/match").set_json(payload).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Please provide skills and interest");
        assert_eq!(body["status_code"], 400);
    }
}

#[actix_web::test]
async fn test_malformed_json_rejected() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/match")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"skills\": \"not-a-list\", \"interest\": \"AI\"}")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}

#[actix_web::test]
async fn test_find_matches_enriched() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/find")
        .set_json(json!({ "skills": ["Python", "Machine Learning", "TensorFlow"], "interest": "ai" }))
        .to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalPostings"], 8);
    assert_eq!(body["matches"][0]["role"], "Machine Learning Intern");
    assert_eq!(body["matches"][0]["score"], 95);
    assert_eq!(body["matches"][0]["confidence"], "High Confidence");
    assert_eq!(body["suggestedSkills"], json!(["Pandas", "NLP", "PyTorch"]));
}

#[actix_web::test]
async fn test_domains_listing() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/domains").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body["domains"],
        json!(["Web Development", "AI", "Data Science", "Electronics"])
    );
}

#[actix_web::test]
async fn test_assistant_replies() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/assistant")
        .set_json(json!({ "message": "Where do I APPLY?" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["reply"], "Click 'Apply Now' on an internship card to proceed.");

    let req = test::TestRequest::post()
        .uri("/api/v1/assistant")
        .set_json(json!({ "message": "   " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
