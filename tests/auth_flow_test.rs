mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};

#[actix_web::test]
async fn a_fresh_token_validates_and_garbage_does_not() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_alice_id, alice_token) = client.create_test_user("Alice", "alice@test.com").await;

    let req = test::TestRequest::post()
        .uri("/auth/validate")
        .insert_header(("Authorization", format!("Bearer {}", alice_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/auth/validate")
        .insert_header(("Authorization", "Bearer not-a-real-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // No header at all.
    let req = test::TestRequest::post().uri("/auth/validate").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn regenerating_rotates_the_token() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_alice_id, old_token) = client.create_test_user("Alice", "alice@test.com").await;

    let req = test::TestRequest::post()
        .uri("/auth/regenerate")
        .insert_header(("Authorization", format!("Bearer {}", old_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let new_token = body["token"].as_str().expect("token in response").to_string();
    assert_ne!(new_token, old_token);

    // Old token is dead, the new one works.
    let req = test::TestRequest::post()
        .uri("/auth/validate")
        .insert_header(("Authorization", format!("Bearer {}", old_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/auth/validate")
        .insert_header(("Authorization", format!("Bearer {}", new_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn protected_routes_reject_missing_tokens() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/raffle").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get().uri("/invite").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn health_endpoint_is_open() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
